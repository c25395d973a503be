use crate::apis::error_response;
use crate::db::fetch_raw_conveyancer_by_id;
use crate::types::conveyancer::Conveyancer;
use crate::types::id::Id;
use crate::types::x500;
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
    #[error("Conveyancer not found")]
    NotFound,
    #[error("Server error")]
    Server,
}

#[get("/conveyancers/{conveyancer_id}")]
pub async fn service(state: Data<State>, path: Path<Id>) -> Result<HttpResponse, Error> {
    let raw_conveyancer = fetch_raw_conveyancer_by_id(&state.db_pool, path.into_inner())
        .await?
        .ok_or(Error::NotFound)?;

    let conveyancer = Conveyancer::from_raw(raw_conveyancer)?;

    Ok(HttpResponse::Ok().json(conveyancer))
}

impl From<sqlx::Error> for Error {
    fn from(err: sqlx::Error) -> Self {
        error!("event=db_error route=get_conveyancer error={err}");

        Self::Server
    }
}

impl From<x500::Error> for Error {
    fn from(err: x500::Error) -> Self {
        error!("event=invalid_stored_x500_name route=get_conveyancer error={err}");

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
