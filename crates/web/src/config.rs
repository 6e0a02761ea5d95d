//! Storefront configuration.
//!
//! Values come from environment variables: read at startup for the native
//! binary, captured at compile time for the browser build.

use std::time::Duration;

use thiserror::Error;
use url::Url;

use storefront_auth::Role;
use storefront_core::ProductId;

use crate::navigation::DEFAULT_CHECKOUT_PATH;
use crate::retry::RetryPolicy;

pub const API_URL_VAR: &str = "STOREFRONT_API_URL";
pub const ADMIN_ROLE_VAR: &str = "STOREFRONT_ADMIN_ROLE";
pub const RETRY_MAX_VAR: &str = "STOREFRONT_RETRY_MAX";
pub const RETRY_DELAY_MS_VAR: &str = "STOREFRONT_RETRY_DELAY_MS";
pub const CHECKOUT_PATH_VAR: &str = "STOREFRONT_CHECKOUT_PATH";

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{key} is not a valid URL ({value}): {reason}")]
    InvalidUrl {
        key: &'static str,
        value: String,
        reason: String,
    },
    #[error("{key} must be a non-negative integer, got {value:?}")]
    InvalidNumber { key: &'static str, value: String },
}

/// Base URL of the catalog API. Always ends with `/`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiBase(Url);

impl ApiBase {
    /// Parse a configured base URL. Blank input means "not configured".
    pub fn parse(raw: &str) -> Result<Option<Self>, ConfigError> {
        let raw = raw.trim();
        if raw.is_empty() {
            return Ok(None);
        }

        let invalid = |reason: String| ConfigError::InvalidUrl {
            key: API_URL_VAR,
            value: raw.to_string(),
            reason,
        };

        let mut url = Url::parse(raw).map_err(|e| invalid(e.to_string()))?;
        if url.cannot_be_a_base() || !matches!(url.scheme(), "http" | "https") {
            return Err(invalid("expected an http(s) base URL".to_string()));
        }
        if !url.path().ends_with('/') {
            let path = format!("{}/", url.path());
            url.set_path(&path);
        }
        url.set_query(None);
        url.set_fragment(None);

        Ok(Some(Self(url)))
    }

    pub fn as_url(&self) -> &Url {
        &self.0
    }

    /// `{base}api/products`
    pub fn products_url(&self) -> Url {
        self.endpoint(&["api", "products"])
    }

    /// `{base}api/products/{id}`, with the id percent-encoded as one segment.
    pub fn product_url(&self, id: &ProductId) -> Url {
        self.endpoint(&["api", "products", id.as_str()])
    }

    fn endpoint(&self, tail: &[&str]) -> Url {
        let mut url = self.0.clone();
        // `parse` rejects cannot-be-a-base URLs, so segments are always available.
        if let Ok(mut segments) = url.path_segments_mut() {
            segments.pop_if_empty().extend(tail);
        }
        url
    }
}

impl core::fmt::Display for ApiBase {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.0.as_str())
    }
}

/// Everything the catalog view needs to know about its environment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorefrontConfig {
    /// `None` when the deployment did not configure an API.
    pub api_base: Option<ApiBase>,
    /// Sessions carrying this role may delete products.
    pub admin_role: Role,
    pub retry: RetryPolicy,
    /// Route the order button navigates to.
    pub checkout_path: String,
}

impl Default for StorefrontConfig {
    fn default() -> Self {
        Self {
            api_base: None,
            admin_role: Role::admin(),
            retry: RetryPolicy::default(),
            checkout_path: DEFAULT_CHECKOUT_PATH.to_string(),
        }
    }
}

impl StorefrontConfig {
    pub fn with_api_base(api_base: ApiBase) -> Self {
        Self {
            api_base: Some(api_base),
            ..Self::default()
        }
    }

    /// Load from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load from values baked in when the crate was compiled.
    ///
    /// Browser builds have no process environment, so the bundler's
    /// environment is captured instead.
    pub fn from_build_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| {
            let value = match key {
                API_URL_VAR => option_env!("STOREFRONT_API_URL"),
                ADMIN_ROLE_VAR => option_env!("STOREFRONT_ADMIN_ROLE"),
                RETRY_MAX_VAR => option_env!("STOREFRONT_RETRY_MAX"),
                RETRY_DELAY_MS_VAR => option_env!("STOREFRONT_RETRY_DELAY_MS"),
                CHECKOUT_PATH_VAR => option_env!("STOREFRONT_CHECKOUT_PATH"),
                _ => None,
            };
            value.map(str::to_string)
        })
    }

    /// Load from an arbitrary key lookup. Missing keys fall back to defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(raw) = lookup(API_URL_VAR) {
            config.api_base = ApiBase::parse(&raw)?;
        }

        if let Some(role) = lookup(ADMIN_ROLE_VAR).filter(|r| !r.trim().is_empty()) {
            config.admin_role = Role::from(role.trim().to_string());
        }

        if let Some(raw) = lookup(RETRY_MAX_VAR) {
            config.retry.max_retries = parse_number(RETRY_MAX_VAR, &raw)?;
        }

        if let Some(raw) = lookup(RETRY_DELAY_MS_VAR) {
            config.retry.delay = Duration::from_millis(parse_number(RETRY_DELAY_MS_VAR, &raw)?);
        }

        if let Some(path) = lookup(CHECKOUT_PATH_VAR).filter(|p| !p.trim().is_empty()) {
            config.checkout_path = path.trim().to_string();
        }

        Ok(config)
    }
}

fn parse_number<T: std::str::FromStr>(key: &'static str, raw: &str) -> Result<T, ConfigError> {
    raw.trim().parse().map_err(|_| ConfigError::InvalidNumber {
        key,
        value: raw.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_when_nothing_is_set() {
        let config = StorefrontConfig::from_lookup(lookup(&[])).unwrap();

        assert!(config.api_base.is_none());
        assert_eq!(config.admin_role, Role::admin());
        assert_eq!(config.retry, RetryPolicy::default());
        assert_eq!(config.checkout_path, "/checkOutPage");
    }

    #[test]
    fn blank_api_url_counts_as_missing() {
        let config = StorefrontConfig::from_lookup(lookup(&[(API_URL_VAR, "  ")])).unwrap();
        assert!(config.api_base.is_none());
    }

    #[test]
    fn api_base_gains_trailing_slash() {
        let base = ApiBase::parse("https://api.example.com/shop").unwrap().unwrap();
        assert_eq!(base.to_string(), "https://api.example.com/shop/");
        assert_eq!(
            base.products_url().as_str(),
            "https://api.example.com/shop/api/products"
        );
    }

    #[test]
    fn product_url_appends_encoded_id() {
        let base = ApiBase::parse("http://localhost:5000/").unwrap().unwrap();
        assert_eq!(
            base.product_url(&ProductId::new("65f0c2")).as_str(),
            "http://localhost:5000/api/products/65f0c2"
        );
        assert_eq!(
            base.product_url(&ProductId::new("a/b")).as_str(),
            "http://localhost:5000/api/products/a%2Fb"
        );
    }

    #[test]
    fn rejects_non_http_url() {
        let err = ApiBase::parse("mailto:shop@example.com").unwrap_err();
        assert!(matches!(err, ConfigError::InvalidUrl { .. }));

        let err = ApiBase::parse("not a url").unwrap_err();
        assert!(matches!(err, ConfigError::InvalidUrl { .. }));
    }

    #[test]
    fn reads_overrides() {
        let config = StorefrontConfig::from_lookup(lookup(&[
            (API_URL_VAR, "http://localhost:5000/"),
            (ADMIN_ROLE_VAR, "owner"),
            (RETRY_MAX_VAR, "5"),
            (RETRY_DELAY_MS_VAR, "250"),
            (CHECKOUT_PATH_VAR, "/checkout"),
        ]))
        .unwrap();

        assert!(config.api_base.is_some());
        assert_eq!(config.admin_role, Role::from("owner"));
        assert_eq!(config.retry, RetryPolicy::fixed(5, Duration::from_millis(250)));
        assert_eq!(config.checkout_path, "/checkout");
    }

    #[test]
    fn rejects_bad_numbers() {
        let err = StorefrontConfig::from_lookup(lookup(&[(RETRY_MAX_VAR, "three")])).unwrap_err();
        assert_eq!(
            err,
            ConfigError::InvalidNumber {
                key: RETRY_MAX_VAR,
                value: "three".to_string()
            }
        );
    }
}
