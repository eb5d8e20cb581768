//! Every backend endpoint the client talks to.
use reqwest::Method;
use venue_schema::{BookingId, HallId, InvoiceId};

/// Who may call a route.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Access {
    Public,
    /// Any logged in account.
    Session,
    User,
    Admin,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route<'a> {
    RegisterUser,
    LoginUser,
    LoginAdmin,

    Halls,
    Hall { id: &'a HallId },
    CreateHall,
    UpdateHall { id: &'a HallId },
    DeleteHall { id: &'a HallId },

    BookHall,
    UserBookings,
    CancelBooking { id: &'a BookingId },
    AdminBookings,
    ApproveBooking { id: &'a BookingId },
    RejectBooking { id: &'a BookingId },

    CreateInvoice,
    UserInvoices,
    Invoice { id: &'a InvoiceId },

    SubscriptionPlans,
    Subscribe,
    CurrentSubscription,
}

impl<'a> Route<'a> {
    #[must_use]
    pub fn method(&self) -> Method {
        match self {
            Self::RegisterUser
            | Self::LoginUser
            | Self::LoginAdmin
            | Self::CreateHall
            | Self::BookHall
            | Self::CreateInvoice
            | Self::Subscribe => Method::POST,
            Self::UpdateHall { .. } | Self::ApproveBooking { .. } | Self::RejectBooking { .. } => {
                Method::PUT
            }
            Self::DeleteHall { .. } | Self::CancelBooking { .. } => Method::DELETE,
            Self::Halls
            | Self::Hall { .. }
            | Self::UserBookings
            | Self::AdminBookings
            | Self::UserInvoices
            | Self::Invoice { .. }
            | Self::SubscriptionPlans
            | Self::CurrentSubscription => Method::GET,
        }
    }

    /// Path segments relative to the API base URL. Ids are kept as they
    /// are and get percent-encoded when joined into a URL.
    #[must_use]
    pub fn segments(&self) -> Vec<&'a str> {
        match *self {
            Self::RegisterUser => vec!["user", "register"],
            Self::LoginUser => vec!["user", "login"],
            Self::LoginAdmin => vec!["admin", "login"],
            Self::Halls => vec!["hall"],
            Self::Hall { id } => vec!["hall", id.as_str()],
            Self::CreateHall => vec!["hall", "admin", "create"],
            Self::UpdateHall { id } | Self::DeleteHall { id } => {
                vec!["hall", "admin", id.as_str()]
            }
            Self::BookHall => vec!["hall", "user", "book_hall"],
            Self::UserBookings => vec!["hall", "user", "bookings"],
            Self::CancelBooking { id } => vec!["hall", "user", "bookings", id.as_str()],
            Self::AdminBookings => vec!["hall", "admin", "bookings"],
            Self::ApproveBooking { id } => vec!["hall", "admin", "bookings", id.as_str(), "approve"],
            Self::RejectBooking { id } => vec!["hall", "admin", "bookings", id.as_str(), "reject"],
            Self::CreateInvoice => vec!["invoice", "admin", "create"],
            Self::UserInvoices => vec!["invoice", "user"],
            Self::Invoice { id } => vec!["invoice", id.as_str()],
            Self::SubscriptionPlans => vec!["subscription", "plans"],
            Self::Subscribe => vec!["subscription", "user", "subscribe"],
            Self::CurrentSubscription => vec!["subscription", "user", "current"],
        }
    }

    /// Unencoded path, used for logs and error reports.
    #[must_use]
    pub fn path(&self) -> String {
        let mut path = String::new();
        for segment in self.segments() {
            path.push('/');
            path.push_str(segment);
        }
        path
    }

    #[must_use]
    pub fn access(&self) -> Access {
        match self {
            Self::RegisterUser
            | Self::LoginUser
            | Self::LoginAdmin
            | Self::Halls
            | Self::Hall { .. }
            | Self::SubscriptionPlans => Access::Public,
            Self::Invoice { .. } => Access::Session,
            Self::BookHall
            | Self::UserBookings
            | Self::CancelBooking { .. }
            | Self::UserInvoices
            | Self::Subscribe
            | Self::CurrentSubscription => Access::User,
            Self::CreateHall
            | Self::UpdateHall { .. }
            | Self::DeleteHall { .. }
            | Self::AdminBookings
            | Self::ApproveBooking { .. }
            | Self::RejectBooking { .. }
            | Self::CreateInvoice => Access::Admin,
        }
    }

    /// Key the backend wraps the response payload in, if any.
    #[must_use]
    pub fn envelope(&self) -> Option<&'static str> {
        match self {
            Self::RegisterUser | Self::LoginUser | Self::LoginAdmin | Self::DeleteHall { .. } => {
                None
            }
            Self::Halls => Some("halls"),
            Self::Hall { .. } | Self::CreateHall | Self::UpdateHall { .. } => Some("hall"),
            Self::BookHall
            | Self::CancelBooking { .. }
            | Self::ApproveBooking { .. }
            | Self::RejectBooking { .. } => Some("booking"),
            Self::UserBookings | Self::AdminBookings => Some("bookings"),
            Self::CreateInvoice | Self::Invoice { .. } => Some("invoice"),
            Self::UserInvoices => Some("invoices"),
            Self::SubscriptionPlans => Some("plans"),
            Self::Subscribe | Self::CurrentSubscription => Some("subscription"),
        }
    }
}
