use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Serialize;
use serde_with::serde_as;
use thiserror::Error;
use typed_builder::TypedBuilder;
use venue_pricing::{BookingSlot, PricingRequest, Quote};
use venue_utils::serial::AsCalendarDate;

use crate::types::{BookingStatus, Hall};
use crate::HallId;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum BookHallFormError {
    #[error("booking is for hall {form} but the hall given is {hall}")]
    HallMismatch { form: HallId, hall: HallId },
    #[error("function end date {end} is before its start date {start}")]
    EndBeforeStart { start: NaiveDate, end: NaiveDate },
    #[error("function start date {start} has already passed (today is {today})")]
    InThePast { start: NaiveDate, today: NaiveDate },
    #[error("start time {start} must be before end time {end}")]
    EmptyTimeWindow { start: String, end: String },
    #[error("at least one guest is required")]
    NoGuests,
    #[error("{guests} guests exceed the hall capacity of {capacity}")]
    OverCapacity { guests: u32, capacity: u32 },
}

/// A booking request as entered by the user, before it is priced.
#[derive(Debug, Clone, TypedBuilder)]
pub struct BookHallForm<'a> {
    pub hall_id: &'a HallId,
    pub function_start_date: NaiveDate,
    pub function_end_date: NaiveDate,
    pub slot: BookingSlot,
    pub guests: u32,
    #[builder(default)]
    pub purpose: Option<&'a str>,
}

impl<'a> BookHallForm<'a> {
    /// Checks the form against the hall being booked and yields the
    /// input for the pricing calculator.
    pub fn validate(&self, hall: &Hall, today: NaiveDate) -> Result<PricingRequest, BookHallFormError> {
        if *self.hall_id != hall.id {
            return Err(BookHallFormError::HallMismatch {
                form: self.hall_id.clone(),
                hall: hall.id.clone(),
            });
        }

        let (start, end) = (self.function_start_date, self.function_end_date);
        if end < start {
            return Err(BookHallFormError::EndBeforeStart { start, end });
        }
        if start < today {
            return Err(BookHallFormError::InThePast { start, today });
        }

        if let BookingSlot::Partial {
            start_time,
            end_time,
        } = self.slot
        {
            if start_time >= end_time {
                return Err(BookHallFormError::EmptyTimeWindow {
                    start: start_time.format("%H:%M").to_string(),
                    end: end_time.format("%H:%M").to_string(),
                });
            }
        }

        if self.guests == 0 {
            return Err(BookHallFormError::NoGuests);
        }
        if !hall.fits(self.guests) {
            return Err(BookHallFormError::OverCapacity {
                guests: self.guests,
                capacity: hall.capacity,
            });
        }

        Ok(PricingRequest::builder()
            .function_start_date(start)
            .function_end_date(end)
            .slot(self.slot)
            .hall_price_per_day(hall.price_per_day)
            .build())
    }

    /// Attaches the quoted price, producing the body sent to the backend.
    #[must_use]
    pub fn into_request(self, quote: &Quote) -> BookHallRequest<'a> {
        BookHallRequest {
            hall_id: self.hall_id,
            function_start_date: self.function_start_date,
            function_end_date: self.function_end_date,
            slot: self.slot,
            guests: self.guests,
            purpose: self.purpose,
            total_price: quote.subtotal,
            gst: quote.gst,
        }
    }
}

/// `total_price` is the pre-GST amount, `gst` the tax on top of it.
/// The backend stores both as given.
#[serde_as]
#[derive(Debug, Clone, Serialize)]
pub struct BookHallRequest<'a> {
    pub hall_id: &'a HallId,
    #[serde_as(as = "AsCalendarDate")]
    pub function_start_date: NaiveDate,
    #[serde_as(as = "AsCalendarDate")]
    pub function_end_date: NaiveDate,
    #[serde(flatten)]
    pub slot: BookingSlot,
    pub guests: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub purpose: Option<&'a str>,
    #[serde(with = "rust_decimal::serde::float")]
    pub total_price: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub gst: Decimal,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum DecisionFormError {
    #[error("a rejection needs a reason")]
    EmptyReason,
    #[error("booking is already {0}")]
    AlreadyDecided(BookingStatus),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BookingDecisionForm<'a> {
    Approve,
    Reject { reason: &'a str },
}

impl BookingDecisionForm<'_> {
    pub fn validate(&self, current: BookingStatus) -> Result<(), DecisionFormError> {
        if !current.is_open() {
            return Err(DecisionFormError::AlreadyDecided(current));
        }
        match self {
            Self::Reject { reason } if reason.trim().is_empty() => {
                Err(DecisionFormError::EmptyReason)
            }
            _ => Ok(()),
        }
    }

    #[must_use]
    pub fn rejection_reason(&self) -> Option<&str> {
        match self {
            Self::Approve => None,
            Self::Reject { reason } => Some(reason),
        }
    }
}
