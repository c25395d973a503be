use super::address::Address;
use super::format_timestamp;
use super::id::Id;
use super::owner::Owner;
use chrono::NaiveDateTime;
use serde::Serialize;

pub const TITLE_NUMBER_MAX_CHAR_COUNT: usize = 64;

/// Title numbers are kept upper-case.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TitleNumber(String);

impl AsRef<str> for TitleNumber {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl TitleNumber {
    pub fn parse(title_number: impl Into<String>) -> Result<Self, ()> {
        let title_number = title_number.into();

        if title_number.is_empty() {
            return Err(());
        }

        if title_number.chars().count() > TITLE_NUMBER_MAX_CHAR_COUNT {
            return Err(());
        }

        Ok(Self(title_number.to_uppercase()))
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct Title {
    pub title_number: String,
    pub owner: Owner,
    pub address: Address,
    pub created_at: String,
    pub updated_at: Option<String>,
    pub locked_at: Option<String>,
}

impl Title {
    pub fn from_raw(raw: RawTitle, owner: Owner, address: Address) -> Self {
        Self {
            title_number: raw.title_number,
            owner,
            address,
            created_at: format_timestamp(raw.created_at),
            updated_at: raw.updated_at.map(format_timestamp),
            locked_at: raw.lock.map(format_timestamp),
        }
    }
}

#[derive(Debug, sqlx::FromRow)]
pub struct RawTitle {
    pub title_number: String,
    pub created_at: NaiveDateTime,
    pub updated_at: Option<NaiveDateTime>,
    pub lock: Option<NaiveDateTime>,
    pub owner_identity: Id,
    pub address_id: Id,
}
