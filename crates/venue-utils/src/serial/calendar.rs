use chrono::{DateTime, NaiveDate, NaiveTime};
use serde_with::{DeserializeAs, SerializeAs};

/// Time of day written as `HH:MM`, with optional seconds when read.
pub struct AsWallClockTime;

/// Calendar date written as `YYYY-MM-DD`. RFC 3339 timestamps are
/// accepted when read and only their date part is kept.
pub struct AsCalendarDate;

const TIME_FORMATS: &[&str] = &["%H:%M", "%H:%M:%S", "%H:%M:%S%.f"];
const DATE_FORMAT: &str = "%Y-%m-%d";

struct TimeVisitor;

impl<'de> serde::de::Visitor<'de> for TimeVisitor {
    type Value = NaiveTime;

    fn expecting(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("time of day (HH:MM)")
    }

    fn visit_str<E>(self, v: &str) -> Result<Self::Value, E>
    where
        E: serde::de::Error,
    {
        TIME_FORMATS
            .iter()
            .find_map(|fmt| NaiveTime::parse_from_str(v.trim(), fmt).ok())
            .ok_or_else(|| E::custom(format!("invalid time of day: {v:?}")))
    }
}

struct DateVisitor;

impl<'de> serde::de::Visitor<'de> for DateVisitor {
    type Value = NaiveDate;

    fn expecting(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("calendar date (YYYY-MM-DD)")
    }

    fn visit_str<E>(self, v: &str) -> Result<Self::Value, E>
    where
        E: serde::de::Error,
    {
        let v = v.trim();
        if let Ok(date) = NaiveDate::parse_from_str(v, DATE_FORMAT) {
            return Ok(date);
        }
        DateTime::parse_from_rfc3339(v)
            .map(|dt| dt.date_naive())
            .map_err(|_| E::custom(format!("invalid calendar date: {v:?}")))
    }
}

impl<'de> DeserializeAs<'de, NaiveTime> for AsWallClockTime {
    fn deserialize_as<D>(deserializer: D) -> Result<NaiveTime, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        deserializer.deserialize_str(TimeVisitor)
    }
}

impl SerializeAs<NaiveTime> for AsWallClockTime {
    fn serialize_as<S>(source: &NaiveTime, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(&source.format("%H:%M"))
    }
}

impl<'de> DeserializeAs<'de, NaiveDate> for AsCalendarDate {
    fn deserialize_as<D>(deserializer: D) -> Result<NaiveDate, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        deserializer.deserialize_str(DateVisitor)
    }
}

impl SerializeAs<NaiveDate> for AsCalendarDate {
    fn serialize_as<S>(source: &NaiveDate, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(&source.format(DATE_FORMAT))
    }
}
