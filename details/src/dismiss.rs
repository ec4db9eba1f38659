//! Modal visibility and outside-click dismissal.
//!
//! While the modal is visible a single document-wide pointer listener is
//! registered. The registration is a guard value owned by the controller, so
//! hiding the modal or dropping the controller always releases it.

use serde::Deserialize;
use serde::Serialize;

/// Registers document-wide pointer-down listeners.
pub trait ListenerFactory {
    /// Keeps the listener registered for as long as it is alive.
    type Guard;

    fn attach(&mut self) -> Self::Guard;
}

/// Opaque handle to the mounted form's root container (its element id).
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct FormRootHandle(String);

impl FormRootHandle {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// True when `target` is the root itself or one of its descendants.
    pub fn contains(&self, target: &PointerTarget) -> bool {
        target.path.iter().any(|id| *id == self.0)
    }
}

/// Where a pointer-down landed: ids of the target and its ancestors, innermost
/// first. Elements without an id are skipped.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PointerTarget {
    path: Vec<String>,
}

impl PointerTarget {
    pub fn new(path: Vec<String>) -> Self {
        Self { path }
    }
}

impl<S: Into<String>> FromIterator<S> for PointerTarget {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self::new(iter.into_iter().map(Into::into).collect())
    }
}

pub struct ModalController<F: ListenerFactory> {
    visible: bool,
    form_root: Option<FormRootHandle>,
    listener: Option<F::Guard>,
    factory: F,
}

impl<F: ListenerFactory> ModalController<F> {
    pub fn new(factory: F) -> Self {
        Self {
            visible: false,
            form_root: None,
            listener: None,
            factory,
        }
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn is_listening(&self) -> bool {
        self.listener.is_some()
    }

    pub fn form_root(&self) -> Option<&FormRootHandle> {
        self.form_root.as_ref()
    }

    pub fn factory_mut(&mut self) -> &mut F {
        &mut self.factory
    }

    /// Shows the modal and starts listening for pointer-downs.
    /// Opening an open modal does nothing.
    pub fn open(&mut self) {
        if self.visible {
            return;
        }
        self.visible = true;
        self.listener = Some(self.factory.attach());
        dioxus_logger::tracing::debug!("modal opened; pointer listener attached");
    }

    /// Hides the modal and releases the pointer listener.
    pub fn dismiss(&mut self) {
        if !self.visible {
            return;
        }
        self.visible = false;
        self.listener = None;
        dioxus_logger::tracing::debug!("modal dismissed; pointer listener released");
    }

    pub fn attach_form_root(&mut self, handle: FormRootHandle) {
        self.form_root = Some(handle);
    }

    pub fn detach_form_root(&mut self) {
        self.form_root = None;
    }

    /// Reacts to a pointer-down anywhere in the document.
    ///
    /// Dismisses and returns `true` when the modal is visible, a form root is
    /// attached, and `target` lies outside it. Otherwise nothing changes.
    pub fn pointer_down(&mut self, target: &PointerTarget) -> bool {
        if !self.visible {
            return false;
        }
        let Some(root) = &self.form_root else {
            return false;
        };
        if root.contains(target) {
            return false;
        }
        self.dismiss();
        true
    }
}
