//! User identity as seen by the reservation engine.

use serde::Serialize;
use std::fmt;

use crate::error::{internal::InternalError, AppError};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Role {
    Admin,
    Professor,
    Student,
}

impl Role {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Admin => "ADMIN",
            Self::Professor => "PROFESSOR",
            Self::Student => "STUDENT",
        }
    }

    /// Parses a stored role string.
    ///
    /// # Returns
    /// - `Ok(Role)` - Recognised role
    /// - `Err(InternalError::InvalidStoredValue)` - Unknown role
    pub fn parse(value: &str) -> Result<Self, InternalError> {
        match value {
            "ADMIN" => Ok(Self::Admin),
            "PROFESSOR" => Ok(Self::Professor),
            "STUDENT" => Ok(Self::Student),
            other => Err(InternalError::InvalidStoredValue {
                column: "role",
                value: other.to_string(),
                reason: "expected ADMIN, PROFESSOR or STUDENT".to_string(),
            }),
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Registered user. The engine only reads identity and role.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub role: Role,
    pub status: String,
}

impl User {
    /// Converts an entity model to a user domain model at the repository boundary.
    ///
    /// # Returns
    /// - `Ok(User)` - The converted user
    /// - `Err(AppError::InternalErr(InvalidStoredValue))` - Stored role is unknown
    pub fn from_entity(entity: entity::user::Model) -> Result<Self, AppError> {
        Ok(Self {
            role: Role::parse(&entity.role)?,
            id: entity.id,
            first_name: entity.first_name,
            last_name: entity.last_name,
            email: entity.email,
            status: entity.status,
        })
    }

    /// First and last name separated by a space.
    pub fn display_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }
}

/// Parameters for registering a user.
#[derive(Debug, Clone)]
pub struct CreateUserParam {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub role: Role,
}
