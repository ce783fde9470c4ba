//! Blocking user-facing alert dialog.

/// Single string shown by the native alert: title, blank line, body.
#[must_use]
pub fn alert_text(title: &str, body: &str) -> String {
    format!("{title}\n\n{body}")
}

/// Show a blocking alert dialog. No-op outside the browser.
pub fn show_alert(title: &str, body: &str) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window() {
            let _ = window.alert_with_message(&alert_text(title, body));
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (title, body);
    }
}
