mod auth;
mod bookings;
mod halls;
mod invoices;
mod subscriptions;

pub use self::bookings::Reservation;
