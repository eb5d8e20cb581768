use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_with::serde_as;
use venue_pricing::{BookingSlot, PricingRequest};
use venue_utils::serial::AsCalendarDate;

use crate::{BookingId, HallId, UserId};

#[derive(
    Debug,
    Default,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Deserialize,
    Serialize,
    strum_macros::Display,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum BookingStatus {
    #[default]
    #[serde(alias = "Pending")]
    Pending,
    #[serde(alias = "Approved")]
    Approved,
    #[serde(alias = "Rejected")]
    Rejected,
    #[serde(alias = "Cancelled", alias = "canceled")]
    Cancelled,
}

impl BookingStatus {
    /// Whether the booking can still be cancelled by its owner or
    /// decided on by an admin.
    #[must_use]
    pub const fn is_open(&self) -> bool {
        matches!(self, Self::Pending)
    }
}

/// A booking as stored by the backend.
///
/// `total_price` is the pre-GST amount and `gst` the tax on top of it,
/// both as they were submitted when the booking was requested.
#[serde_as]
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Booking {
    #[serde(alias = "_id")]
    pub id: BookingId,
    pub hall_id: HallId,
    pub user_id: UserId,
    #[serde_as(as = "AsCalendarDate")]
    pub function_start_date: NaiveDate,
    #[serde_as(as = "AsCalendarDate")]
    pub function_end_date: NaiveDate,
    #[serde(flatten)]
    pub slot: BookingSlot,
    pub guests: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub purpose: Option<String>,
    pub total_price: Decimal,
    pub gst: Decimal,
    #[serde(default)]
    pub status: BookingStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rejection_reason: Option<String>,
    #[serde(default, alias = "createdAt", skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

impl Booking {
    #[must_use]
    pub fn grand_total(&self) -> Decimal {
        self.total_price + self.gst
    }

    /// Rebuilds the pricing input this booking was quoted from.
    #[must_use]
    pub fn pricing_request(&self, hall_price_per_day: Decimal) -> PricingRequest {
        PricingRequest::builder()
            .function_start_date(self.function_start_date)
            .function_end_date(self.function_end_date)
            .slot(self.slot)
            .hall_price_per_day(hall_price_per_day)
            .build()
    }
}
