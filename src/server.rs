use std::net::SocketAddr;
use std::sync::Arc;

use warp::Filter;

use crate::infra::provider::CoinProvider;

pub mod response;
pub mod routes;

const APPLICATION_NAME: &str = "COINLIST_DATA";

#[derive(Clone)]
pub struct AppState {
    pub provider: Arc<dyn CoinProvider>,
}

pub async fn start(state: AppState, bind_address: SocketAddr) {
    let routes = routes::routes(state).with(warp::log(APPLICATION_NAME));

    tracing::info!("You can access the server at {}", bind_address);
    warp::serve(routes).run(bind_address).await;
}
