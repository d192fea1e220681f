//! Blocking user notices.
//!
//! In the browser this is `window.alert`. Native builds (tests, tooling) have
//! no modal surface, so the message is logged instead.

#[cfg(test)]
#[path = "notify_test.rs"]
mod notify_test;

/// Show `message` and wait for the user to acknowledge it.
pub fn alert(message: &str) {
    #[cfg(feature = "csr")]
    {
        if let Some(window) = web_sys::window() {
            if let Err(err) = window.alert_with_message(message) {
                leptos::logging::warn!("alert failed: {err:?}");
            }
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        leptos::logging::log!("alert: {message}");
    }
}
