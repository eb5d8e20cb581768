use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::{BookingId, HallId, InvoiceId, UserId};

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
pub enum InvoiceStatus {
    #[default]
    #[serde(alias = "Unpaid")]
    Unpaid,
    #[serde(alias = "Paid")]
    Paid,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Invoice {
    #[serde(alias = "_id")]
    pub id: InvoiceId,
    pub booking_id: BookingId,
    pub user_id: UserId,
    pub hall_id: HallId,
    pub subtotal: Decimal,
    pub gst: Decimal,
    pub total: Decimal,
    #[serde(default)]
    pub status: InvoiceStatus,
    #[serde(alias = "createdAt", alias = "created_at")]
    pub issued_at: DateTime<Utc>,
}

#[allow(clippy::unwrap_used)]
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_backend_record() {
        let invoice: Invoice = serde_json::from_str(
            r#"{
                "_id": "inv-1",
                "booking_id": "booking-1",
                "user_id": "user-1",
                "hall_id": "hall-1",
                "subtotal": 2500,
                "gst": 450,
                "total": 2950,
                "status": "Paid",
                "createdAt": "2025-02-20T10:00:00Z"
            }"#,
        )
        .unwrap();

        assert_eq!(invoice.id.as_str(), "inv-1");
        assert_eq!(invoice.status, InvoiceStatus::Paid);
        assert_eq!(invoice.subtotal + invoice.gst, invoice.total);
    }
}
