use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::HallId;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Hall {
    #[serde(alias = "_id")]
    pub id: HallId,
    pub name: String,
    pub location: String,
    pub capacity: u32,
    pub price_per_day: Decimal,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub images: Vec<String>,
    #[serde(default, alias = "createdAt", skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

impl Hall {
    #[must_use]
    pub fn fits(&self, guests: u32) -> bool {
        (1..=self.capacity).contains(&guests)
    }
}
