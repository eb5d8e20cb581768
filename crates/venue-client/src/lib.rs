//! Client for the venue booking backend's REST API.
//!
//! Authenticated calls take a [`Session`] explicitly. Nothing about the
//! logged in account is kept inside [`Client`], so one client can serve
//! any number of sessions.
mod client;
mod endpoints;
mod errors;
mod session;

pub mod routes;

pub use self::client::Client;
pub use self::endpoints::Reservation;
pub use self::errors::*;
pub use self::session::{Profile, Session};

#[allow(clippy::unwrap_used, clippy::expect_used)]
#[cfg(test)]
pub(crate) mod test_utils;
