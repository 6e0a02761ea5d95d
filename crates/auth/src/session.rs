//! Session context exposed to views.
//!
//! A `Session` is handed to the catalog controller at construction time and
//! never mutated by it.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use storefront_core::UserId;

use crate::Role;

/// The signed-in user, as recorded by the login flow.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionUser {
    #[serde(rename = "_id", alias = "id", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<UserId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<Role>,
}

/// Read-only session snapshot.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Session {
    user: Option<SessionUser>,
}

#[derive(Debug, Error)]
pub enum SessionError {
    #[error("malformed session record: {0}")]
    Malformed(#[from] serde_json::Error),
}

impl Session {
    /// No one is signed in.
    pub fn anonymous() -> Self {
        Self { user: None }
    }

    pub fn for_user(user: SessionUser) -> Self {
        Self { user: Some(user) }
    }

    /// A signed-in user known only by role (handy for tests and the CLI).
    pub fn with_role(role: impl Into<Role>) -> Self {
        Self::for_user(SessionUser {
            role: Some(role.into()),
            ..SessionUser::default()
        })
    }

    /// Parse the JSON user record persisted by the login flow.
    ///
    /// `null` and the empty string both mean "nobody signed in".
    pub fn from_json(raw: &str) -> Result<Self, SessionError> {
        let raw = raw.trim();
        if raw.is_empty() {
            return Ok(Self::anonymous());
        }
        let user: Option<SessionUser> = serde_json::from_str(raw)?;
        Ok(Self { user })
    }

    pub fn user(&self) -> Option<&SessionUser> {
        self.user.as_ref()
    }

    pub fn role(&self) -> Option<&Role> {
        self.user.as_ref().and_then(|u| u.role.as_ref())
    }

    pub fn has_role(&self, role: &Role) -> bool {
        self.role() == Some(role)
    }
}
