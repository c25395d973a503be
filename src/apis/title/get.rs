use crate::apis::error_response;
use crate::db::fetch_title_by_number;
use crate::types::title::TitleNumber;
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
    #[error("Invalid title number")]
    InvalidTitleNumber,
    #[error("Title not found")]
    NotFound,
    #[error("Server error")]
    Server,
}

#[get("/titles/{title_number}")]
pub async fn service(state: Data<State>, path: Path<String>) -> Result<HttpResponse, Error> {
    let title_number =
        TitleNumber::parse(path.into_inner()).map_err(|_| Error::InvalidTitleNumber)?;

    let title = fetch_title_by_number(&state.db_pool, &title_number)
        .await?
        .ok_or(Error::NotFound)?;

    Ok(HttpResponse::Ok().json(title))
}

impl From<sqlx::Error> for Error {
    fn from(err: sqlx::Error) -> Self {
        error!("event=db_error route=get_title error={err}");

        Self::Server
    }
}

impl ResponseError for Error {
    fn status_code(&self) -> StatusCode {
        match self {
            Self::InvalidTitleNumber => StatusCode::BAD_REQUEST,
            Self::NotFound => StatusCode::NOT_FOUND,
            Self::Server => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse<actix_web::body::BoxBody> {
        error_response(self.status_code(), self)
    }
}
