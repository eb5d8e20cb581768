mod calendar;
mod human_duration;

pub use self::calendar::{AsCalendarDate, AsWallClockTime};
pub use self::human_duration::AsHumanDuration;
