use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;
use utoipa::ToSchema;
use validator::Validate;

use crate::error::{UserError, UserResult};

/// Loose email shape: something, `@`, something, `.`, something; no whitespace.
pub static EMAIL_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap());

pub const USER_DELETED: &str = "Usuario eliminado correctamente";

/// Returns true when `email` has the `local@domain.tld` shape.
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_PATTERN.is_match(email)
}

/// User entity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct User {
    /// Store-assigned identifier
    #[schema(example = 1)]
    pub id: i32,
    #[schema(example = "Ana Torres")]
    pub name: String,
    #[schema(example = "ana@mail.com")]
    pub email: String,
}

/// Body of `POST /users`
///
/// Both fields are optional at the wire level so a missing field and an
/// empty one are reported the same way.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct CreateUser {
    #[schema(example = "Ana Torres")]
    pub name: Option<String>,
    #[schema(example = "ana@mail.com")]
    pub email: Option<String>,
}

impl CreateUser {
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            email: Some(email.into()),
        }
    }

    /// Trim both fields and check them.
    ///
    /// Missing, `null` or blank fields fail with [`UserError::MissingFields`]
    /// before the email format is looked at.
    pub fn into_new_user(self) -> UserResult<NewUser> {
        let name = non_blank(self.name);
        let email = non_blank(self.email);

        let (Some(name), Some(email)) = (name, email) else {
            return Err(UserError::MissingFields);
        };

        let new_user = NewUser { name, email };
        new_user.validate().map_err(|e| {
            if e.field_errors().contains_key("email") {
                UserError::InvalidEmail
            } else {
                UserError::MissingFields
            }
        })?;

        Ok(new_user)
    }
}

// Stricter than a bare presence check: whitespace-only counts as missing and
// the stored value is trimmed.
fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// A checked user ready to be persisted
#[derive(Debug, Clone, PartialEq, Eq, Validate)]
pub struct NewUser {
    #[validate(length(min = 1))]
    pub name: String,
    #[validate(regex(path = *EMAIL_PATTERN))]
    pub email: String,
}

/// `{ "data": User }`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct UserEnvelope {
    pub data: User,
}

/// `{ "data": [User], "total": n }`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct UserListResponse {
    pub data: Vec<User>,
    pub total: usize,
}

impl From<Vec<User>> for UserListResponse {
    fn from(data: Vec<User>) -> Self {
        Self {
            total: data.len(),
            data,
        }
    }
}

/// `{ "message": "..." }`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct MessageResponse {
    #[schema(example = "Usuario eliminado correctamente")]
    pub message: String,
}
