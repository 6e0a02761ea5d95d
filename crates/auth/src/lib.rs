//! `storefront-auth` — read-only view of who is browsing the storefront.
//!
//! The login flow lives elsewhere; this crate only models the session it
//! leaves behind and the roles that gate catalog actions.

pub mod roles;
pub mod session;

pub use roles::Role;
pub use session::{Session, SessionError, SessionUser};
