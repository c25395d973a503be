use crate::apis::error_response;
use crate::db::{insert_conveyancer, is_x500_name_taken};
use crate::types::conveyancer::{CompanyName, Conveyancer};
use crate::types::x500::{self, X500Fields, X500Name};
use crate::State;
use actix_web::{
    http::StatusCode,
    post,
    web::{Data, Json},
    HttpResponse, ResponseError,
};
use log::{error, info};
use serde::Deserialize;
use thiserror::Error;

/// MySQL reports unique key violations with this SQLSTATE.
const DUPLICATE_ENTRY_SQLSTATE: &str = "23000";

#[derive(Debug, Error, Clone)]
pub enum Error {
    #[error("Invalid X.500 name: {0}")]
    InvalidX500Name(#[from] x500::Error),
    #[error("Invalid company name")]
    InvalidCompanyName,
    #[error("X.500 name already registered")]
    X500NameTaken,
    #[error("Server error")]
    Server,
}

/// Either the canonical string or the structured attributes.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum X500Input {
    Canonical(String),
    Structured(X500Fields),
}

impl X500Input {
    pub fn into_name(self) -> Result<X500Name, x500::Error> {
        match self {
            Self::Canonical(canonical) => canonical.parse(),
            Self::Structured(fields) => X500Name::try_from(fields),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct Request {
    pub x500: X500Input,
    pub company_name: String,
}

#[post("/conveyancers")]
pub async fn service(
    state: Data<State>,
    Json(request): Json<Request>,
) -> Result<HttpResponse, Error> {
    let x500_name = request.x500.into_name()?;
    let company_name =
        CompanyName::parse(request.company_name).map_err(|_| Error::InvalidCompanyName)?;

    let canonical = x500_name.to_canonical()?;

    if is_x500_name_taken(&state.db_pool, &canonical).await? {
        return Err(Error::X500NameTaken);
    }

    let conveyancer_id = insert_conveyancer(&state.db_pool, &canonical, &company_name).await?;

    info!("event=conveyancer_created conveyancer_id={conveyancer_id}");

    let conveyancer = Conveyancer::new(conveyancer_id, &x500_name, company_name.as_ref())?;

    Ok(HttpResponse::Created().json(conveyancer))
}

impl From<sqlx::Error> for Error {
    fn from(err: sqlx::Error) -> Self {
        if let sqlx::Error::Database(db_err) = &err {
            if db_err.code().as_deref() == Some(DUPLICATE_ENTRY_SQLSTATE) {
                return Self::X500NameTaken;
            }
        }

        error!("event=db_error route=create_conveyancer error={err}");

        Self::Server
    }
}

impl ResponseError for Error {
    fn status_code(&self) -> StatusCode {
        match self {
            Self::InvalidX500Name(_) | Self::InvalidCompanyName => StatusCode::BAD_REQUEST,
            Self::X500NameTaken => StatusCode::CONFLICT,
            Self::Server => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse<actix_web::body::BoxBody> {
        error_response(self.status_code(), self)
    }
}
