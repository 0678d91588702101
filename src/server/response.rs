use serde::Serialize;
use warp::http::StatusCode;

pub type JsonReply = warp::reply::WithStatus<warp::reply::Json>;

#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
}

pub fn error_json(message: &str, status: StatusCode) -> JsonReply {
    warp::reply::with_status(
        warp::reply::json(&ErrorBody { error: message.to_string() }),
        status,
    )
}
