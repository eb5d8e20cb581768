mod error;
pub mod tags;

pub use self::error::{FetchHttpError, HttpErrorExt};
