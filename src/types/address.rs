use super::id::Id;
use super::segment::Segment;
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct Address {
    #[serde(rename = "house_name_number")]
    pub house_name_or_number: String,
    #[serde(rename = "street")]
    pub street_name: String,
    #[serde(rename = "town_city")]
    pub city: String,
    pub county: String,
    pub country: String,
    pub postcode: String,
    pub segment: Segment,
}

impl Address {
    pub fn from_raw(raw: RawAddress, segment: Segment) -> Self {
        Self {
            house_name_or_number: raw.house_name_or_number,
            street_name: raw.street_name,
            city: raw.city,
            county: raw.county,
            country: raw.country,
            postcode: raw.postcode,
            segment,
        }
    }
}

#[derive(Debug, sqlx::FromRow)]
pub struct RawAddress {
    pub house_name_or_number: String,
    pub street_name: String,
    pub city: String,
    pub county: String,
    pub country: String,
    pub postcode: String,
    pub segment_id: Id,
}
