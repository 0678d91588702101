use super::AppState;
use crate::server::routes::handlers::coin_handlers::{list_coins, RawListQuery};
use warp::{self, Filter};

pub mod handlers;

pub fn routes(
    state: AppState,
) -> impl Filter<Extract = impl warp::Reply, Error = warp::Rejection> + Clone {
    let api = warp::path("api");

    let ping = api.and(warp::path("ping")).map(handlers::ping);
    let version = api.and(warp::path("version")).map(handlers::version);
    let health = api.and(warp::path("health")).map(handlers::health);
    let coins = api
        .and(warp::path("coins"))
        .and(warp::path::end())
        .and(warp::get())
        .and(warp::query::<RawListQuery>())
        .and(with_state(state))
        .and_then(list_coins);

    warp::path::end()
        .map(handlers::index)
        .or(coins)
        .or(ping)
        .or(version)
        .or(health)
}

fn with_state(
    state: AppState,
) -> impl Filter<Extract = (AppState,), Error = std::convert::Infallible> + Clone {
    warp::any().map(move || state.clone())
}
