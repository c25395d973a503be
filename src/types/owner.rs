use super::address::Address;
use super::id::Id;
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct Owner {
    pub identity: Id,
    #[serde(rename = "first_name")]
    pub forename: String,
    #[serde(rename = "last_name")]
    pub surname: String,
    #[serde(rename = "email_address")]
    pub email: String,
    #[serde(rename = "phone_number")]
    pub phone: String,
    #[serde(rename = "type")]
    pub owner_type: String,
    pub address: Address,
}

impl Owner {
    pub fn from_raw(raw: RawOwner, address: Address) -> Self {
        Self {
            identity: raw.identity,
            forename: raw.forename,
            surname: raw.surname,
            email: raw.email,
            phone: raw.phone,
            owner_type: raw.owner_type,
            address,
        }
    }
}

#[derive(Debug, sqlx::FromRow)]
pub struct RawOwner {
    pub identity: Id,
    pub forename: String,
    pub surname: String,
    pub email: String,
    pub phone: String,
    pub owner_type: String,
    pub address_id: Id,
}
