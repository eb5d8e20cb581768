use chrono::NaiveTime;
use serde::{Deserialize, Serialize};
use serde_with::serde_as;
use std::fmt::Display;
use thiserror::Error;
use venue_utils::serial::AsWallClockTime;

/// Which part of each booked day the hall is reserved for.
///
/// On the wire this is spread over three fields: `full_day_slot`,
/// `start_time` and `end_time`. The times are only present for
/// partial-day bookings and both of them are required in that case.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(try_from = "RawSlot", into = "RawSlot")]
pub enum BookingSlot {
    FullDay,
    Partial {
        start_time: NaiveTime,
        end_time: NaiveTime,
    },
}

impl BookingSlot {
    /// Builds a slot out of the loose form fields.
    pub fn from_parts(
        full_day_slot: bool,
        start_time: Option<NaiveTime>,
        end_time: Option<NaiveTime>,
    ) -> Result<Self, MissingSlotTime> {
        if full_day_slot {
            return Ok(Self::FullDay);
        }
        match (start_time, end_time) {
            (Some(start_time), Some(end_time)) => Ok(Self::Partial {
                start_time,
                end_time,
            }),
            (None, _) => Err(MissingSlotTime("start_time")),
            (_, None) => Err(MissingSlotTime("end_time")),
        }
    }
}

impl Display for BookingSlot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::FullDay => f.write_str("full day"),
            Self::Partial {
                start_time,
                end_time,
            } => write!(
                f,
                "{} - {}",
                start_time.format("%H:%M"),
                end_time.format("%H:%M")
            ),
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("partial-day slot requires `{0}`")]
pub struct MissingSlotTime(&'static str);

impl MissingSlotTime {
    #[must_use]
    pub const fn field(&self) -> &'static str {
        self.0
    }
}

#[serde_as]
#[derive(Deserialize, Serialize)]
struct RawSlot {
    full_day_slot: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[serde_as(as = "Option<AsWallClockTime>")]
    start_time: Option<NaiveTime>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[serde_as(as = "Option<AsWallClockTime>")]
    end_time: Option<NaiveTime>,
}

impl TryFrom<RawSlot> for BookingSlot {
    type Error = MissingSlotTime;

    fn try_from(raw: RawSlot) -> Result<Self, Self::Error> {
        Self::from_parts(raw.full_day_slot, raw.start_time, raw.end_time)
    }
}

impl From<BookingSlot> for RawSlot {
    fn from(slot: BookingSlot) -> Self {
        match slot {
            BookingSlot::FullDay => Self {
                full_day_slot: true,
                start_time: None,
                end_time: None,
            },
            BookingSlot::Partial {
                start_time,
                end_time,
            } => Self {
                full_day_slot: false,
                start_time: Some(start_time),
                end_time: Some(end_time),
            },
        }
    }
}
