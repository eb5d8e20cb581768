use chrono::{NaiveDate, NaiveTime};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_with::serde_as;
use std::fmt::Display;
use std::str::FromStr;
use thiserror::Error;
use typed_builder::TypedBuilder;
use venue_utils::serial::AsCalendarDate;

use crate::money::round_currency;
use crate::slot::BookingSlot;

/// Hours the daily rate is spread over when deriving the hourly rate.
pub const HOURS_PER_RATE_DAY: i64 = 24;

const SECONDS_PER_HOUR: i64 = 60 * 60;

/// Everything needed to price one hall booking.
///
/// Requests are built fresh for every calculation and thrown away
/// afterwards. Nothing in here is validated: the date range, time window
/// and rate are taken as they are.
#[serde_as]
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize, TypedBuilder)]
pub struct PricingRequest {
    #[serde_as(as = "AsCalendarDate")]
    pub function_start_date: NaiveDate,
    #[serde_as(as = "AsCalendarDate")]
    pub function_end_date: NaiveDate,
    #[serde(flatten)]
    pub slot: BookingSlot,
    pub hall_price_per_day: Decimal,
}

impl PricingRequest {
    #[must_use]
    pub fn days(&self) -> i64 {
        inclusive_days(self.function_start_date, self.function_end_date)
    }
}

/// How a partial-day time window is billed when a booking spans
/// more than one day.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PartialDayPolicy {
    /// Every day in the range is billed for the time window.
    #[default]
    Uniform,
    /// The first and last day are billed for the time window and every
    /// day in between is billed the full daily rate.
    EdgeDays,
}

impl PartialDayPolicy {
    pub const ALL: [Self; 2] = [Self::Uniform, Self::EdgeDays];

    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Uniform => "uniform",
            Self::EdgeDays => "edge_days",
        }
    }
}

impl Display for PartialDayPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Error)]
#[error("unknown partial-day policy {0:?} (expected `uniform` or `edge_days`)")]
pub struct UnknownPolicy(String);

impl FromStr for PartialDayPolicy {
    type Err = UnknownPolicy;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().replace('-', "_");
        Self::ALL
            .into_iter()
            .find(|v| v.as_str().eq_ignore_ascii_case(&normalized))
            .ok_or_else(|| UnknownPolicy(s.to_string()))
    }
}

/// Number of days between `start` and `end`, both included.
///
/// A booking that starts and ends on the same date lasts one day. An end
/// before the start yields zero or a negative count.
#[must_use]
pub fn inclusive_days(start: NaiveDate, end: NaiveDate) -> i64 {
    (end - start).num_days() + 1
}

/// Hours between two times of the same reference day, fractional.
///
/// Negative when `end` is before `start`.
#[must_use]
pub fn window_hours(start: NaiveTime, end: NaiveTime) -> Decimal {
    Decimal::from(window_seconds(start, end)) / Decimal::from(SECONDS_PER_HOUR)
}

/// Hourly rate derived from a daily rate.
#[must_use]
pub fn hourly_rate(price_per_day: Decimal) -> Decimal {
    price_per_day / Decimal::from(HOURS_PER_RATE_DAY)
}

fn window_seconds(start: NaiveTime, end: NaiveTime) -> i64 {
    (end - start).num_seconds()
}

// Multiplying before dividing keeps whole-hour windows exact,
// 6h at 10000/day is 2500 rather than 6 * 416.666...
// Rates too large for that product are divided first.
fn window_charge(price_per_day: Decimal, start: NaiveTime, end: NaiveTime) -> Decimal {
    match price_per_day.checked_mul(Decimal::from(window_seconds(start, end))) {
        Some(product) => product / Decimal::from(HOURS_PER_RATE_DAY * SECONDS_PER_HOUR),
        None => hourly_rate(price_per_day).saturating_mul(window_hours(start, end)),
    }
}

/// Pre-GST price of a booking, rounded to two decimal places.
///
/// Deterministic and free of side effects. Malformed input such as an
/// end date before the start date produces a zero or negative amount
/// instead of an error. Totals beyond [`Decimal::MAX`] saturate.
#[must_use]
pub fn calculate_price(request: &PricingRequest, policy: PartialDayPolicy) -> Decimal {
    let days = request.days();
    let rate = request.hall_price_per_day;

    let total = match request.slot {
        BookingSlot::FullDay => Decimal::from(days).saturating_mul(rate),
        BookingSlot::Partial {
            start_time,
            end_time,
        } => {
            let window = window_charge(rate, start_time, end_time);
            match policy {
                PartialDayPolicy::Uniform => Decimal::from(days).saturating_mul(window),
                PartialDayPolicy::EdgeDays if days <= 2 => {
                    Decimal::from(days).saturating_mul(window)
                }
                PartialDayPolicy::EdgeDays => Decimal::TWO
                    .saturating_mul(window)
                    .saturating_add(Decimal::from(days - 2).saturating_mul(rate)),
            }
        }
    };

    round_currency(total)
}
