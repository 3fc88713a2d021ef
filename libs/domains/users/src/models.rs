use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

/// User entity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct User {
    /// Opaque unique identifier (UUID v4 rendered as a string)
    pub id: String,
    pub name: String,
    pub email: String,
}

impl User {
    /// Create a user with a freshly generated id
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self::with_id(Uuid::new_v4().to_string(), name, email)
    }

    /// Create a user with a caller-supplied id
    pub fn with_id(
        id: impl Into<String>,
        name: impl Into<String>,
        email: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            email: email.into(),
        }
    }

    /// A user is valid when both name and email are non-empty.
    /// The email is not checked for shape.
    pub fn is_valid(&self) -> bool {
        !self.name.is_empty() && !self.email.is_empty()
    }

    pub fn update_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn update_email(&mut self, email: impl Into<String>) {
        self.email = email.into();
    }
}

/// DTO for creating a new user
///
/// Missing fields deserialize as empty strings so they are reported as
/// validation failures rather than malformed bodies.
#[derive(Debug, Clone, Default, Deserialize, Serialize, Validate, ToSchema)]
pub struct CreateUser {
    #[serde(default)]
    #[validate(length(min = 1, message = "name is required"))]
    pub name: String,
    #[serde(default)]
    #[validate(length(min = 1, message = "email is required"))]
    pub email: String,
}

/// DTO for replacing a user's name and email
#[derive(Debug, Clone, Default, Deserialize, Serialize, Validate, ToSchema)]
pub struct UpdateUser {
    #[serde(default)]
    #[validate(length(min = 1, message = "name is required"))]
    pub name: String,
    #[serde(default)]
    #[validate(length(min = 1, message = "email is required"))]
    pub email: String,
}
