//=============================================================================
// File: src/components/detail_form.rs
//=============================================================================
use chrono::Utc;
use details::AlertSink;
use details::DetailForm as FormState;
use details::FieldError;
use details::FieldName;
use details::FormRootHandle;
use dioxus::prelude::*;
use strum::IntoEnumIterator;

use crate::app_state::AppState;
use crate::compat;
use crate::components::pico::Button;
use crate::components::pico::Input;

/// Element id of the form's root container.
pub const FORM_ROOT_ID: &str = "detail-form";

/// Shows each blocking validation message as a platform alert.
struct PlatformAlerts;

impl AlertSink for PlatformAlerts {
    fn alert(&mut self, error: &FieldError) {
        compat::alert(&error.to_string());
    }
}

/// The user details form.
///
/// Reports its root container through `on_root` when mounted (`Some`) and
/// again when unmounted (`None`).
#[component]
pub fn DetailForm(on_root: EventHandler<Option<FormRootHandle>>) -> Element {
    let app_state = use_context::<AppState>();
    let mut form = use_signal(FormState::new);

    use_drop(move || on_root.call(None));

    let handle_change = move |(name, value): (String, String)| {
        if let Err(e) = form.write().change_named(&name, value) {
            dioxus_logger::tracing::warn!("{}", e);
        }
    };

    let handle_submit = move |event: FormEvent| {
        event.prevent_default();
        form.write().submit(Utc::now(), &mut PlatformAlerts);
    };

    let show_errors = app_state.prefs.error_display().is_inline();
    let fields = form.read().fields().clone();
    let errors = form.read().errors().clone();

    rsx! {
        form {
            id: FORM_ROOT_ID,
            onmounted: move |_| on_root.call(Some(FormRootHandle::new(FORM_ROOT_ID))),
            onsubmit: handle_submit,
            h3 { style: "text-align: center;", "Fill Details" }
            for field in FieldName::iter() {
                Input {
                    key: "{field.as_ref()}",
                    label: field.label().to_string(),
                    name: field.as_ref().to_string(),
                    input_type: field.input_type().to_string(),
                    id: field.element_id().to_string(),
                    value: fields.get(field).to_string(),
                    required: true,
                    error: if show_errors { errors.get(field).to_string() } else { String::new() },
                    on_change: handle_change,
                }
            }
            Button {
                html_type: "submit".to_string(),
                class: "submit-button".to_string(),
                "Submit"
            }
        }
    }
}
