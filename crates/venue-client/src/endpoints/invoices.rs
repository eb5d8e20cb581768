use tracing::info;
use venue_schema::forms::InsertInvoiceForm;
use venue_schema::types::Invoice;
use venue_schema::{BookingId, InvoiceId};
use venue_utils::error::exts::{IntoTypedError, ResultExt};
use venue_utils::{ErrorCategory, Result};

use crate::errors::{IssueInvoiceError, RequestHttpError};
use crate::routes::Route;
use crate::{Client, Session};

impl Client {
    /// Issues an invoice for an approved booking, deriving the amounts
    /// from the booking's stored pre-GST total.
    #[tracing::instrument(skip_all, fields(booking.id = %booking_id))]
    pub async fn issue_invoice(
        &self,
        session: &Session,
        booking_id: &BookingId,
    ) -> Result<Invoice, IssueInvoiceError> {
        let route = Route::CreateInvoice;
        let request = self
            .request(&route, Some(session))
            .change_context(IssueInvoiceError)?;

        let booking = self
            .find_booking(session, booking_id)
            .await
            .change_context(IssueInvoiceError)?;

        let form = InsertInvoiceForm::from_booking(&booking, &self.pricer().gst)
            .into_typed_error()
            .category(ErrorCategory::User)
            .change_context(IssueInvoiceError)?;

        let invoice: Invoice = self
            .send(&route, request.json(&form))
            .await
            .change_context(IssueInvoiceError)?;

        info!(invoice.id = %invoice.id, total = %invoice.total, "issued invoice");
        Ok(invoice)
    }

    #[tracing::instrument(skip_all)]
    pub async fn my_invoices(&self, session: &Session) -> Result<Vec<Invoice>, RequestHttpError> {
        let route = Route::UserInvoices;
        let request = self.request(&route, Some(session))?;
        self.send(&route, request).await
    }

    #[tracing::instrument(skip_all, fields(invoice.id = %id))]
    pub async fn invoice(
        &self,
        session: &Session,
        id: &InvoiceId,
    ) -> Result<Invoice, RequestHttpError> {
        let route = Route::Invoice { id };
        let request = self.request(&route, Some(session))?;
        self.send(&route, request).await
    }
}
