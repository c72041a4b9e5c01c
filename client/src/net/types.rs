//! Request/response DTOs for the external gym API and the persisted session.
//!
//! DESIGN
//! ======
//! Field names mirror the collaborator's JSON so serde round-trips stay
//! lossless. `Role` is a closed enum on the Rust side while remaining an open
//! string on the wire.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};

/// Login form payload for `POST /login`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

/// Registration form payload for `POST /users`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Registration {
    pub name: String,
    pub email: String,
    pub password: String,
}

/// Role attached to a user record.
///
/// Only `"Coach"` and `"Athlete"` are known. Anything else is kept verbatim in
/// `Other` so dispatch sites have to handle it explicitly.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Role {
    Coach,
    Athlete,
    Other(String),
}

impl Role {
    pub fn is_coach(&self) -> bool {
        matches!(self, Self::Coach)
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::Coach => "Coach",
            Self::Athlete => "Athlete",
            Self::Other(raw) => raw,
        }
    }
}

impl From<String> for Role {
    fn from(raw: String) -> Self {
        match raw.as_str() {
            "Coach" => Self::Coach,
            "Athlete" => Self::Athlete,
            _ => Self::Other(raw),
        }
    }
}

impl From<Role> for String {
    fn from(role: Role) -> Self {
        match role {
            Role::Other(raw) => raw,
            known => known.as_str().to_owned(),
        }
    }
}

/// A gym member as returned by the authentication endpoint.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Server-assigned identifier. Numeric ids are normalized to strings.
    #[serde(deserialize_with = "deserialize_id")]
    pub id: String,
    /// Display name.
    pub name: String,
    /// Login email.
    pub email: String,
    /// Role used to pick the dashboard variant.
    pub role: Role,
}

/// Success body of `POST /login`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginResponse {
    /// Opaque bearer token.
    pub jwt: String,
    pub user: User,
}

/// Success body of `POST /users`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegisterResponse {
    #[serde(default)]
    pub message: Option<String>,
}

/// Error body the collaborator sends with non-2xx responses.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub message: Option<String>,
}

/// The persisted `{token, user}` pair representing an authenticated browser.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Session {
    pub token: String,
    pub user: User,
}

impl From<LoginResponse> for Session {
    fn from(resp: LoginResponse) -> Self {
        Self { token: resp.jwt, user: resp.user }
    }
}

fn deserialize_id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match serde_json::Value::deserialize(deserializer)? {
        serde_json::Value::String(id) => Ok(id),
        serde_json::Value::Number(number) => Ok(number.to_string()),
        _ => Err(D::Error::custom("expected string or number id")),
    }
}
