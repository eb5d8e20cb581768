use chrono::NaiveDate;

use crate::types::{Booking, Hall};

pub const HALL_JSON: &str = r#"{
    "_id": "hall-1",
    "name": "Lotus Banquet",
    "location": "Pune",
    "capacity": 300,
    "price_per_day": 10000,
    "description": "Air conditioned, with a stage",
    "images": ["https://cdn.example.com/1.jpg", "https://cdn.example.com/2.jpg"],
    "createdAt": "2025-01-10T08:30:00.000Z"
}"#;

pub const BOOKING_JSON: &str = r#"{
    "_id": "booking-1",
    "hall_id": "hall-1",
    "user_id": "user-1",
    "function_start_date": "2025-03-01T00:00:00.000Z",
    "function_end_date": "2025-03-01",
    "full_day_slot": false,
    "start_time": "12:00",
    "end_time": "18:00",
    "guests": 120,
    "purpose": "Engagement",
    "total_price": 2500,
    "gst": 450,
    "status": "pending"
}"#;

#[must_use]
pub fn hall() -> Hall {
    serde_json::from_str(HALL_JSON).unwrap()
}

#[must_use]
pub fn booking() -> Booking {
    serde_json::from_str(BOOKING_JSON).unwrap()
}

#[must_use]
pub fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}
