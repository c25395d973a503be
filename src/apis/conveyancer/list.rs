use crate::apis::error_response;
use crate::db::fetch_raw_conveyancers;
use crate::types::conveyancer::Conveyancer;
use crate::types::x500;
use crate::State;
use actix_web::{get, http::StatusCode, web::Data, HttpResponse, ResponseError};
use log::error;
use thiserror::Error;

#[derive(Debug, Error, Copy, Clone)]
pub enum Error {
    #[error("Server error")]
    Server,
}

#[get("/conveyancers")]
pub async fn service(state: Data<State>) -> Result<HttpResponse, Error> {
    let conveyancers = fetch_raw_conveyancers(&state.db_pool)
        .await?
        .into_iter()
        .map(Conveyancer::from_raw)
        .collect::<Result<Vec<_>, _>>()?;

    Ok(HttpResponse::Ok().json(conveyancers))
}

impl From<sqlx::Error> for Error {
    fn from(err: sqlx::Error) -> Self {
        error!("event=db_error route=list_conveyancers error={err}");

        Self::Server
    }
}

impl From<x500::Error> for Error {
    fn from(err: x500::Error) -> Self {
        error!("event=invalid_stored_x500_name route=list_conveyancers error={err}");

        Self::Server
    }
}

impl ResponseError for Error {
    fn status_code(&self) -> StatusCode {
        StatusCode::INTERNAL_SERVER_ERROR
    }

    fn error_response(&self) -> HttpResponse<actix_web::body::BoxBody> {
        error_response(self.status_code(), self)
    }
}
