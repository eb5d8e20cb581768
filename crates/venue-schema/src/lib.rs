mod id;

pub mod forms;
pub mod types;

pub use self::id::*;

#[allow(clippy::unwrap_used, clippy::unreadable_literal)]
#[cfg(test)]
pub(crate) mod test_utils;
