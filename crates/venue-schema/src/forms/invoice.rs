use rust_decimal::Decimal;
use serde::Serialize;
use thiserror::Error;
use venue_pricing::{round_currency, Gst};

use crate::types::{Booking, BookingStatus};
use crate::{BookingId, HallId, UserId};

#[derive(Debug, Error, PartialEq, Eq)]
#[error("invoices can only be issued for approved bookings (booking {id} is {status})")]
pub struct InvoiceFormError {
    pub id: BookingId,
    pub status: BookingStatus,
}

#[derive(Debug, Clone, Serialize)]
pub struct InsertInvoiceForm<'a> {
    pub booking_id: &'a BookingId,
    pub user_id: &'a UserId,
    pub hall_id: &'a HallId,
    #[serde(with = "rust_decimal::serde::float")]
    pub subtotal: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub gst: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub total: Decimal,
}

impl<'a> InsertInvoiceForm<'a> {
    /// Derives the invoice amounts from the booking's stored pre-GST total.
    pub fn from_booking(booking: &'a Booking, gst: &Gst) -> Result<Self, InvoiceFormError> {
        if booking.status != BookingStatus::Approved {
            return Err(InvoiceFormError {
                id: booking.id.clone(),
                status: booking.status,
            });
        }

        let subtotal = round_currency(booking.total_price);
        let total = gst.apply(subtotal);
        Ok(Self {
            booking_id: &booking.id,
            user_id: &booking.user_id,
            hall_id: &booking.hall_id,
            subtotal,
            gst: total - subtotal,
            total,
        })
    }
}
