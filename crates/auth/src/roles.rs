use std::borrow::Cow;

use serde::{Deserialize, Serialize};

/// Role identifier carried by the session.
///
/// Roles are opaque strings at this layer; deciding what a role may do is the
/// caller's business (the catalog only compares against its admin role).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Role(Cow<'static, str>);

impl Role {
    /// Role that may delete catalog products.
    pub const ADMIN: &'static str = "meheraadmin";

    pub fn new(name: impl Into<Cow<'static, str>>) -> Self {
        Self(name.into())
    }

    pub const fn admin() -> Self {
        Self(Cow::Borrowed(Self::ADMIN))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl core::fmt::Display for Role {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Role {
    fn from(value: &str) -> Self {
        Self::new(value.to_string())
    }
}

impl From<String> for Role {
    fn from(value: String) -> Self {
        Self::new(value)
    }
}
