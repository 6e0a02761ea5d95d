//! Session lookup for the browser.

use storefront_auth::Session;

/// Local storage key the login flow writes the signed-in user to.
pub const SESSION_STORAGE_KEY: &str = "user";

/// Read the session left behind by the login flow.
///
/// Anything missing or unreadable means an anonymous session.
pub fn load_session() -> Session {
    let storage = match leptos::window().local_storage() {
        Ok(Some(storage)) => storage,
        _ => return Session::anonymous(),
    };

    match storage.get_item(SESSION_STORAGE_KEY) {
        Ok(Some(raw)) => Session::from_json(&raw).unwrap_or_else(|err| {
            tracing::warn!(error = %err, "ignoring unreadable session record");
            Session::anonymous()
        }),
        _ => Session::anonymous(),
    }
}
