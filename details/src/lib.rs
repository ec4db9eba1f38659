//! Platform-free state for the user details modal.
//!
//! Nothing in this crate touches a renderer. The `ui` crate wires these types to
//! Dioxus components; everything that decides *what happens* lives here so it can
//! be exercised by plain unit tests.

pub mod dismiss;
pub mod fields;
pub mod form;
pub mod prefs;
pub mod validation;

pub use dismiss::FormRootHandle;
pub use dismiss::ListenerFactory;
pub use dismiss::ModalController;
pub use dismiss::PointerTarget;
pub use fields::ErrorSet;
pub use fields::FieldName;
pub use fields::FieldSet;
pub use fields::UnknownField;
pub use form::DetailForm;
pub use form::SubmitOutcome;
pub use validation::AlertSink;
pub use validation::FieldError;
pub use validation::Validation;
