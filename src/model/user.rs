//! User account and role types.

use serde::{Deserialize, Serialize};

/// Account role.
///
/// The admin dashboard gates the Notes and Accounts tabs to `Admin`. This is
/// a client-side convenience only; the server re-enforces authorization on
/// every request.
///
/// The backend is inconsistent about casing (`/auth/me` returns `ADMIN`,
/// `/accounts` has been seen with `admin`), so deserialization accepts both
/// spellings and normalizes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Role {
    /// Full access, including notes and account management.
    #[serde(rename = "ADMIN", alias = "admin")]
    Admin,
    /// Q&A management only.
    #[serde(rename = "STAFF", alias = "staff")]
    Staff,
}

impl Role {
    /// Whether this role may see the admin-only tabs.
    pub fn is_admin(self) -> bool {
        matches!(self, Role::Admin)
    }

    /// Display label.
    pub fn as_str(self) -> &'static str {
        match self {
            Role::Admin => "Admin",
            Role::Staff => "Staff",
        }
    }
}

/// A user account as returned by `/auth/me` and `/accounts`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Backend-assigned numeric id.
    pub id: u64,
    /// Display name.
    pub name: String,
    /// Login email.
    pub email: String,
    /// Account role.
    pub role: Role,
    /// Creation timestamp, present on `/accounts` rows.
    #[serde(rename = "createdAt", default)]
    pub created_at: Option<String>,
}

/// Payload for `/auth/register` (admin-only account creation).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RegisterPayload {
    /// Display name.
    pub name: String,
    /// Login email.
    pub email: String,
    /// Initial password.
    pub password: String,
    /// Role for the new account.
    pub role: Role,
}
