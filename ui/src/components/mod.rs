//! The components module contains all shared components for our app. Components are the building blocks of dioxus apps.
//! They define the pico-styled primitives, the details form, and the modal that hosts it.
pub mod detail_form;
pub mod pico;
pub mod user_details_modal;
