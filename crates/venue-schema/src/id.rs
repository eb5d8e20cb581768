use serde::{Deserialize, Serialize};
use std::fmt::Display;

macro_rules! define_id {
    ($( $(#[$meta:meta])* $name:ident, )*) => {$(
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Deserialize, Serialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            #[must_use]
            pub fn new(value: impl Into<String>) -> Self {
                Self(value.into())
            }

            #[must_use]
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }

        impl From<String> for $name {
            fn from(value: String) -> Self {
                Self(value)
            }
        }

        impl From<&str> for $name {
            fn from(value: &str) -> Self {
                Self(value.to_string())
            }
        }

        impl std::str::FromStr for $name {
            type Err = std::convert::Infallible;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Ok(Self(s.to_string()))
            }
        }
    )*};
}

define_id! {
    /// Backend-assigned identifier of a hall.
    HallId,
    BookingId,
    InvoiceId,
    PlanId,
    SubscriptionId,
    UserId,
    AdminId,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_test::Token;
    use static_assertions::assert_impl_all;

    assert_impl_all!(HallId: Send, Sync, Clone, std::hash::Hash, std::str::FromStr);

    #[test]
    fn ids_are_transparent_strings() {
        let id = BookingId::new("66b1f0c2a9");
        serde_test::assert_tokens(&id, &[Token::Str("66b1f0c2a9")]);
        assert_eq!(id.to_string(), "66b1f0c2a9");
        assert_eq!(id.as_str(), "66b1f0c2a9");
    }
}
