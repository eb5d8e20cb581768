mod account;
mod booking;
mod hall;
mod invoice;
mod subscription;

pub use self::account::{AccountFormError, LoginForm, RegisterForm, MIN_PASSWORD_LEN};
pub use self::booking::{
    BookHallForm, BookHallFormError, BookHallRequest, BookingDecisionForm, DecisionFormError,
};
pub use self::hall::{HallFormError, InsertHallForm, UpdateHallForm};
pub use self::invoice::{InsertInvoiceForm, InvoiceFormError};
pub use self::subscription::{SubscribeForm, SubscribeFormError};
