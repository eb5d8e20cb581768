use chrono::NaiveDate;
use serde::de::IgnoredAny;
use serde::Serialize;
use tracing::{debug, info};
use venue_pricing::Quote;
use venue_schema::forms::{BookHallForm, BookingDecisionForm};
use venue_schema::types::Booking;
use venue_schema::BookingId;
use venue_utils::error::exts::{IntoTypedError, ResultExt};
use venue_utils::{Error, ErrorCategory, Result};

use crate::errors::{
    BookHallError, BookingClosed, BookingNotFound, CancelBookingError, DecideBookingError,
    RequestHttpError,
};
use crate::routes::Route;
use crate::{Client, Session};

/// A booking the backend accepted, with the quote it was priced at.
#[derive(Debug, Clone)]
pub struct Reservation {
    pub booking: Booking,
    pub quote: Quote,
}

#[derive(Serialize)]
struct RejectBody<'a> {
    rejection_reason: &'a str,
}

impl Client {
    /// Fetches the hall, validates the form against it and prices
    /// the booking without submitting anything.
    #[tracing::instrument(skip_all, fields(hall.id = %form.hall_id))]
    pub async fn quote_booking(
        &self,
        form: &BookHallForm<'_>,
        today: NaiveDate,
    ) -> Result<Quote, BookHallError> {
        let hall = self.hall(form.hall_id).await.change_context(BookHallError)?;
        let request = form
            .validate(&hall, today)
            .into_typed_error()
            .category(ErrorCategory::User)
            .change_context(BookHallError)?;

        Ok(self.pricer().quote(&request))
    }

    /// Prices the booking and submits it.
    ///
    /// The backend stores `total_price` (before GST) and `gst` exactly as
    /// they are computed here.
    #[tracing::instrument(skip_all, fields(hall.id = %form.hall_id))]
    pub async fn book_hall(
        &self,
        session: &Session,
        form: BookHallForm<'_>,
        today: NaiveDate,
    ) -> Result<Reservation, BookHallError> {
        let route = Route::BookHall;
        let request = self
            .request(&route, Some(session))
            .change_context(BookHallError)?;

        let quote = self.quote_booking(&form, today).await?;
        let body = form.into_request(&quote);
        let booking: Booking = self
            .send(&route, request.json(&body))
            .await
            .change_context(BookHallError)?;

        info!(booking.id = %booking.id, total = %quote.total, "booked hall");
        Ok(Reservation { booking, quote })
    }

    #[tracing::instrument(skip_all)]
    pub async fn my_bookings(&self, session: &Session) -> Result<Vec<Booking>, RequestHttpError> {
        let route = Route::UserBookings;
        let request = self.request(&route, Some(session))?;
        self.send(&route, request).await
    }

    /// Cancels one of the session's own bookings while it is still pending.
    #[tracing::instrument(skip_all, fields(booking.id = %id))]
    pub async fn cancel_booking(
        &self,
        session: &Session,
        id: &BookingId,
    ) -> Result<(), CancelBookingError> {
        let route = Route::CancelBooking { id };
        let request = self
            .request(&route, Some(session))
            .change_context(CancelBookingError)?;

        let booking = self
            .my_bookings(session)
            .await
            .change_context(CancelBookingError)?
            .into_iter()
            .find(|booking| booking.id == *id)
            .ok_or_else(|| {
                Error::context(ErrorCategory::User, BookingNotFound(id.clone()))
                    .change_context(CancelBookingError)
            })?;

        if !booking.status.is_open() {
            return Err(Error::context(ErrorCategory::User, BookingClosed(booking.status))
                .change_context(CancelBookingError));
        }

        let _: IgnoredAny = self
            .send(&route, request)
            .await
            .change_context(CancelBookingError)?;

        debug!("cancelled booking");
        Ok(())
    }

    #[tracing::instrument(skip_all)]
    pub async fn all_bookings(&self, session: &Session) -> Result<Vec<Booking>, RequestHttpError> {
        let route = Route::AdminBookings;
        let request = self.request(&route, Some(session))?;
        self.send(&route, request).await
    }

    pub(crate) async fn find_booking(
        &self,
        session: &Session,
        id: &BookingId,
    ) -> Result<Booking, RequestHttpError> {
        self.all_bookings(session)
            .await?
            .into_iter()
            .find(|booking| booking.id == *id)
            .ok_or_else(|| {
                Error::context(ErrorCategory::User, BookingNotFound(id.clone()))
                    .change_context(RequestHttpError)
            })
    }

    /// Approves or rejects a pending booking.
    #[tracing::instrument(skip_all, fields(booking.id = %id))]
    pub async fn decide_booking(
        &self,
        session: &Session,
        id: &BookingId,
        decision: BookingDecisionForm<'_>,
    ) -> Result<Booking, DecideBookingError> {
        let route = match decision {
            BookingDecisionForm::Approve => Route::ApproveBooking { id },
            BookingDecisionForm::Reject { .. } => Route::RejectBooking { id },
        };
        let request = self
            .request(&route, Some(session))
            .change_context(DecideBookingError)?;

        let booking = self
            .find_booking(session, id)
            .await
            .change_context(DecideBookingError)?;

        decision
            .validate(booking.status)
            .into_typed_error()
            .category(ErrorCategory::User)
            .change_context(DecideBookingError)?;

        let request = match decision.rejection_reason() {
            Some(rejection_reason) => request.json(&RejectBody { rejection_reason }),
            None => request,
        };

        let booking: Booking = self
            .send(&route, request)
            .await
            .change_context(DecideBookingError)?;

        info!(status = %booking.status, "updated booking status");
        Ok(booking)
    }
}
