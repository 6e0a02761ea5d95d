//! Strongly-typed identifiers used across the domain.
//!
//! Identifiers are issued by the remote catalog API and are opaque to us:
//! they are carried around verbatim and only compared for equality.

use core::str::FromStr;
use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// Identifier of a catalog product.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(String);

/// Identifier of a signed-in user.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(String);

macro_rules! impl_opaque_id {
    ($t:ty, $name:literal) => {
        impl $t {
            /// Wrap an identifier issued by the API.
            ///
            /// No validation happens here; use `FromStr` for untrusted input.
            pub fn new(value: impl Into<String>) -> Self {
                Self(value.into())
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl core::fmt::Display for $t {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<&str> for $t {
            fn from(value: &str) -> Self {
                Self(value.to_string())
            }
        }

        impl From<String> for $t {
            fn from(value: String) -> Self {
                Self(value)
            }
        }

        impl From<$t> for String {
            fn from(value: $t) -> Self {
                value.0
            }
        }

        impl FromStr for $t {
            type Err = DomainError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let trimmed = s.trim();
                if trimmed.is_empty() {
                    return Err(DomainError::invalid_id(format!("{}: must not be blank", $name)));
                }
                Ok(Self(trimmed.to_string()))
            }
        }
    };
}

impl_opaque_id!(ProductId, "ProductId");
impl_opaque_id!(UserId, "UserId");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_rejects_blank_identifier() {
        let err = "   ".parse::<ProductId>().unwrap_err();
        match err {
            DomainError::InvalidId(msg) => assert!(msg.starts_with("ProductId")),
            _ => panic!("Expected InvalidId error"),
        }
    }

    #[test]
    fn parse_trims_surrounding_whitespace() {
        let id: ProductId = " 65f0c2 ".parse().unwrap();
        assert_eq!(id.as_str(), "65f0c2");
    }

    #[test]
    fn serializes_as_plain_string() {
        let id = UserId::new("u-42");
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"u-42\"");

        let back: UserId = serde_json::from_str("\"u-42\"").unwrap();
        assert_eq!(back, id);
    }
}
