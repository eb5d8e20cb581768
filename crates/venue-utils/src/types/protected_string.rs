use serde::{Deserialize, Serialize};
use std::fmt::{Debug, Display};
use zeroize::Zeroize;

/// A string which gets wiped out of memory once dropped, used for
/// passwords before they are sent to the backend.
#[derive(Clone, PartialEq, Eq)]
pub struct ProtectedString {
    data: String,
}

impl ProtectedString {
    #[must_use]
    pub fn new<T: AsRef<str>>(value: T) -> Self {
        Self {
            data: value.as_ref().to_string(),
        }
    }

    /// Exposes the value of the string
    #[must_use]
    pub fn expose(&self) -> &str {
        &self.data
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.data.chars().count()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

impl From<String> for ProtectedString {
    fn from(value: String) -> Self {
        Self { data: value }
    }
}

impl<'a> From<&'a str> for ProtectedString {
    fn from(value: &'a str) -> Self {
        Self::new(value)
    }
}

impl Debug for ProtectedString {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("<redacted>")
    }
}

impl Display for ProtectedString {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("<redacted>")
    }
}

impl Drop for ProtectedString {
    fn drop(&mut self) {
        self.data.zeroize();
    }
}

impl<'de> Deserialize<'de> for ProtectedString {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let value = String::deserialize(deserializer)?;
        Ok(Self::from(value))
    }
}

impl Serialize for ProtectedString {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.expose())
    }
}
