use super::{format_timestamp, id::Id};
use chrono::NaiveDateTime;
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct Segment {
    pub segment_id: Id,
    pub coordinate_origin: Option<f64>,
    pub coordinate_end: Option<f64>,
    pub created_at: String,
}

impl Segment {
    pub fn from_raw(raw: RawSegment) -> Self {
        Self {
            segment_id: raw.segment_id,
            coordinate_origin: raw.coordinate_origin,
            coordinate_end: raw.coordinate_end,
            created_at: format_timestamp(raw.created_at),
        }
    }
}

#[derive(Debug, sqlx::FromRow)]
pub struct RawSegment {
    pub segment_id: Id,
    pub created_at: NaiveDateTime,
    pub coordinate_origin: Option<f64>,
    pub coordinate_end: Option<f64>,
}
