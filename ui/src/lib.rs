// The client-side Dioxus application logic.

use dioxus::prelude::*;

mod app_state;
pub mod compat;
mod components;
pub mod hooks;

use app_state::AppState;
use components::pico::Container;
use components::user_details_modal::UserDetailsModal;
use details::prefs::user_prefs::UserPrefs;

const PICO_CSS: &str = "https://cdn.jsdelivr.net/npm/@picocss/pico@2/css/pico.cyan.min.css";

//=============================================================================
// MAIN APPLICATION COMPONENT (Client-side)
//=============================================================================

#[allow(non_snake_case)]
pub fn App() -> Element {
    let modal_css = r#"
    /* --- HEADING & TRIGGER --- */
    .modal-heading { text-align: center; margin-top: 2rem; }
    .btn { display: block; margin: 0 auto; }

    /* --- OVERLAY --- */
    .modal {
        position: fixed;
        top: 0; left: 0; right: 0; bottom: 0;
        display: flex;
        justify-content: center;
        align-items: center;
        background-color: rgba(0, 0, 0, 0.4);
        z-index: 1000;
    }
    .modal-content {
        width: min(520px, 95vw);
        max-height: 95vh;
        overflow-y: auto;
        padding: 1.5rem 2rem;
        border-radius: var(--pico-border-radius);
        background-color: var(--pico-background-color);
        box-shadow: 0 10px 40px rgba(0,0,0,0.25);
    }

    /* --- FORM --- */
    .modal-content label { display: block; text-align: center; font-weight: bold; }
    .modal-content input { display: block; margin: 0.5rem auto 1rem; }
    .field-error { display: block; color: var(--pico-del-color); margin-top: -0.75rem; margin-bottom: 1rem; }
    .submit-button { display: block; margin: 2rem auto 0; }
"#;

    rsx! {
        document::Meta {
            name: "viewport",
            content: "width=device-width, initial-scale=1.0",
        }
        document::Stylesheet {
            href: PICO_CSS,
        }
        style {
            "{modal_css}"
        }
        AppBody {}
    }
}

#[component]
fn AppBody() -> Element {
    let prefs = use_hook(UserPrefs::default);
    use_hook(|| {
        dioxus_logger::tracing::info!("prefs: {:#?}", prefs);
    });

    use_context_provider(|| AppState::new(prefs));

    rsx! {
        Container {
            UserDetailsModal {}
        }
    }
}
