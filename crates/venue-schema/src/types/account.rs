use serde::{Deserialize, Serialize};
use venue_utils::types::Sensitive;

use crate::{AdminId, UserId};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize, strum_macros::Display)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Role {
    User,
    Admin,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct User {
    #[serde(alias = "_id")]
    pub id: UserId,
    pub name: String,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Admin {
    #[serde(alias = "_id")]
    pub id: AdminId,
    pub name: String,
    pub email: String,
}

/// Returned by the login and register endpoints.
///
/// The backend names the profile after the account kind
/// (`user` or `admin`).
#[derive(Debug, Clone, Deserialize)]
pub struct AuthResponse<P> {
    pub token: Sensitive<String>,
    #[serde(alias = "user", alias = "admin")]
    pub profile: P,
}
