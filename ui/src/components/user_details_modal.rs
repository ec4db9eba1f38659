//=============================================================================
// File: src/components/user_details_modal.rs
//=============================================================================
use details::FormRootHandle;
use dioxus::prelude::*;

use crate::components::detail_form::DetailForm;
use crate::components::pico::Button;
use crate::components::pico::ModalOverlay;
use crate::hooks::use_modal_controller::use_modal_controller;

/// Heading, an "Open Form" trigger, and the details form in a modal.
///
/// The modal closes on a pointer-down anywhere outside the form. Submitting
/// the form does not close it.
#[component]
pub fn UserDetailsModal() -> Element {
    let mut modal = use_modal_controller();

    rsx! {
        div {
            h1 { class: "modal-heading", "User Details Modal" }
            Button {
                class: "btn".to_string(),
                on_click: move |_| modal.open(),
                "Open Form"
            }
            if modal.is_visible() {
                ModalOverlay {
                    DetailForm {
                        on_root: move |root: Option<FormRootHandle>| match root {
                            Some(handle) => modal.attach_form_root(handle),
                            None => modal.detach_form_root(),
                        },
                    }
                }
            }
        }
    }
}
