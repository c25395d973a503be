use crate::apis::error_response;
use crate::db::fetch_owner_by_identity;
use crate::types::id::Id;
use crate::State;
use actix_web::{
    get,
    http::StatusCode,
    web::{Data, Path},
    HttpResponse, ResponseError,
};
use log::error;
use thiserror::Error;

#[derive(Debug, Error, Copy, Clone)]
pub enum Error {
    #[error("Owner not found")]
    NotFound,
    #[error("Server error")]
    Server,
}

#[get("/owners/{identity}")]
pub async fn service(state: Data<State>, path: Path<Id>) -> Result<HttpResponse, Error> {
    let owner = fetch_owner_by_identity(&state.db_pool, path.into_inner())
        .await?
        .ok_or(Error::NotFound)?;

    Ok(HttpResponse::Ok().json(owner))
}

impl From<sqlx::Error> for Error {
    fn from(err: sqlx::Error) -> Self {
        error!("event=db_error route=get_owner error={err}");

        Self::Server
    }
}

impl ResponseError for Error {
    fn status_code(&self) -> StatusCode {
        match self {
            Self::NotFound => StatusCode::NOT_FOUND,
            Self::Server => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse<actix_web::body::BoxBody> {
        error_response(self.status_code(), self)
    }
}
