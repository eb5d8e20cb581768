pub mod env;
pub mod error;
pub mod http;
pub mod serial;
pub mod types;

pub use self::error::tags::Suggestion;
pub use self::error::{Error, ErrorCategory, Result};
