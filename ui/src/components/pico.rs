//! A set of reusable, lifetime-free Dioxus components for the Pico.css framework.
//! To use, ensure you have pico.min.css linked in your main application.

#![allow(non_snake_case)] // Allow PascalCase for component function names

use dioxus::prelude::*;

//=============================================================================
// Layout Components
//=============================================================================

/// A centered container for your content.
/// Wraps content in a `<main class="container">` element.
#[component]
pub fn Container(children: Element) -> Element {
    rsx! { main { class: "container", {children} } }
}

//=============================================================================
// Interactive Components
//=============================================================================

#[derive(Props, PartialEq, Clone)]
pub struct ButtonProps {
    children: Element,
    #[props(optional)]
    on_click: Option<EventHandler<MouseEvent>>,
    /// `"submit"` makes the button submit its enclosing form.
    #[props(default = "button".to_string())]
    html_type: String,
    #[props(optional)]
    class: Option<String>,
}

/// A versatile button component.
pub fn Button(props: ButtonProps) -> Element {
    rsx! {
        button {
            r#type: "{props.html_type}",
            class: "{props.class.as_deref().unwrap_or(\"\")}",
            onclick: move |evt| {
                if let Some(handler) = &props.on_click {
                    handler.call(evt);
                }
            },
            {props.children}
        }
    }
}

#[derive(Props, PartialEq, Clone)]
pub struct InputProps {
    label: String,
    /// Reported back with every change, like a DOM input's `name`.
    name: String,
    #[props(default = "text".to_string())]
    input_type: String,
    #[props(optional)]
    id: Option<String>,
    value: String,
    #[props(default = false)]
    required: bool,
    /// Message rendered under the input. Nothing is rendered when empty.
    #[props(default)]
    error: String,
    /// Called with `(name, value)` on every input event.
    on_change: EventHandler<(String, String)>,
}

/// A labeled, controlled form input field.
pub fn Input(props: InputProps) -> Element {
    let name = props.name.clone();
    rsx! {
        label {
            "{props.label}",
            input {
                id: props.id.clone(),
                r#type: "{props.input_type}",
                name: "{props.name}",
                value: "{props.value}",
                required: props.required,
                oninput: move |evt| props.on_change.call((name.clone(), evt.value())),
            }
            if !props.error.is_empty() {
                small { class: "field-error", "{props.error}" }
            }
        }
    }
}

#[derive(Props, PartialEq, Clone)]
pub struct ModalOverlayProps {
    children: Element,
}

/// A fixed backdrop with a centered content box.
///
/// Dismissal is not handled here; the owner decides what an outside click means.
pub fn ModalOverlay(props: ModalOverlayProps) -> Element {
    rsx! {
        div {
            id: "modal-backdrop",
            class: "modal",
            div {
                class: "modal-content",
                {props.children}
            }
        }
    }
}
