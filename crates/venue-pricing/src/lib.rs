//! Pricing for hall bookings.
//!
//! A booking is billed from its inclusive date span and the hall's daily
//! rate. Full-day slots pay the daily rate per day. Partial-day slots pay
//! an hourly rate derived from the daily rate over [`HOURS_PER_RATE_DAY`]
//! hours, for the hours between their start and end time. How that time
//! window is repeated over multi-day bookings is decided by
//! [`PartialDayPolicy`].
//!
//! GST is never part of [`calculate_price`]; callers apply [`Gst`] at
//! confirmation or invoice time.
mod calculator;
mod gst;
mod money;
mod quote;
mod slot;

pub use self::calculator::*;
pub use self::gst::Gst;
pub use self::money::round_currency;
pub use self::quote::{Pricer, Quote};
pub use self::slot::{BookingSlot, MissingSlotTime};
