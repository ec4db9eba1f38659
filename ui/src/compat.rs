// Re-export the public API from the appropriate module
#[cfg(target_arch = "wasm32")]
pub use wasm32::*;

#[cfg(not(target_arch = "wasm32"))]
pub use non_wasm32::*;

#[cfg(target_arch = "wasm32")]
pub mod wasm32 {
    /// Shows a blocking browser alert. Returns once the user dismisses it.
    pub fn alert(message: &str) {
        let shown = web_sys::window().map(|win| win.alert_with_message(message));
        match shown {
            Some(Ok(())) => {}
            Some(Err(e)) => {
                dioxus_logger::tracing::warn!("alert failed: {:?}", e);
            }
            None => {
                dioxus_logger::tracing::warn!("alert skipped: no window");
            }
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub mod non_wasm32 {
    use rfd::MessageButtons;
    use rfd::MessageDialog;
    use rfd::MessageLevel;

    /// Shows a blocking native message box. Returns once the user dismisses it.
    pub fn alert(message: &str) {
        let _ = MessageDialog::new()
            .set_level(MessageLevel::Warning)
            .set_title("User Details")
            .set_description(message)
            .set_buttons(MessageButtons::Ok)
            .show();
    }
}
