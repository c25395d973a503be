use actix_web::error::{InternalError, JsonPayloadError};
use actix_web::{http::StatusCode, HttpRequest, HttpResponse};
use serde_json::json;

pub mod conveyancer;
pub mod owner;
pub mod title;

pub fn error_response(status: StatusCode, error: &impl std::fmt::Display) -> HttpResponse {
    HttpResponse::build(status).json(json!({ "error": error.to_string() }))
}

pub fn json_error_handler(error: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    let response = error_response(StatusCode::BAD_REQUEST, &error);

    InternalError::from_response(error, response).into()
}

pub async fn not_found() -> HttpResponse {
    error_response(StatusCode::NOT_FOUND, &"Not found")
}
