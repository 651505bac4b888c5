//! User entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use super::section::Section;

/// A company user. The password hash is never loaded into this struct.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, FromRow)]
#[serde(default)]
pub struct User {
    /// Primary key.
    pub id: i64,
    /// Owning company (tenant).
    pub company_id: i64,
    /// Login name.
    pub username: String,
    /// Display name.
    pub name: String,
    /// Contact e-mail.
    pub email: String,
    /// Contact phone number.
    pub phone: String,
    /// When the account was created.
    pub created_at: Option<DateTime<Utc>>,
    /// When the account was last changed.
    pub updated_at: Option<DateTime<Utc>>,
    /// Most recent sign-in, if any.
    pub last_login: Option<DateTime<Utc>>,
    /// Whether the account may sign in.
    pub is_active: bool,
    /// Role name within the company.
    pub role: String,
    /// Preferred UI language code.
    pub language: String,
    /// Country of residence.
    pub country: String,
    /// Whether an administrator approved the account.
    pub is_approved: bool,
    /// Whether the user receives system notifications.
    pub is_send_system_notification: bool,
    /// Granted access sections, see [`Section`].
    pub sections: Vec<String>,
    /// Job title.
    pub position: String,
}

impl User {
    /// Whether the user holds any of the given sections.
    pub fn has_any_section(&self, wanted: &[&str]) -> bool {
        self.sections.iter().any(|s| wanted.contains(&s.as_str()))
    }

    /// Whether the user is responsible for purchase planning.
    pub fn is_purchase_responsible(&self) -> bool {
        self.has_any_section(&Section::PURCHASE_RESPONSIBLE)
    }
}
