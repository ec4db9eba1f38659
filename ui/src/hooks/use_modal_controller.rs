//=============================================================================
// File: src/hooks/use_modal_controller.rs
//=============================================================================

//! Binds a [`ModalController`] to the rendered document.
//!
//! The document-wide `mousedown` listener is installed with a small script
//! evaluated through `document::eval`, which works the same in the browser and
//! in the desktop webview. The script reports the id chain of every pointer-down
//! target back to Rust and parks a remover for its handler on `window`, keyed
//! per listener. Dropping the Rust guard calls that remover directly, so the
//! handler goes away even when the task driving the script is already gone.

use std::rc::Rc;
use std::sync::atomic::AtomicU64;
use std::sync::atomic::Ordering;

use details::FormRootHandle;
use details::ListenerFactory;
use details::ModalController;
use details::PointerTarget;
use dioxus::document::Document;
use dioxus::document::Eval;
use dioxus::prelude::*;
use futures::future;
use futures::future::Either;
use futures::StreamExt;
use futures_channel::oneshot;

/// Expects `key` to be defined ahead of it.
const POINTER_LISTENER_JS: &str = r#"
    const listeners = (window.__detailsListeners ??= {});
    const handler = (event) => {
        const path = [];
        for (let node = event.target; node; node = node.parentElement) {
            if (node.id) path.push(node.id);
        }
        dioxus.send(path);
    };
    document.addEventListener("mousedown", handler);
    listeners[key] = () => {
        document.removeEventListener("mousedown", handler);
        delete listeners[key];
    };
    await dioxus.recv();
    listeners[key]?.();
"#;

static NEXT_LISTENER_KEY: AtomicU64 = AtomicU64::new(0);

fn listener_script(key: u64) -> String {
    format!("const key = {key};\n{POINTER_LISTENER_JS}")
}

fn remover_script(key: u64) -> String {
    format!("window.__detailsListeners?.[{key}]?.();")
}

/// Installs document listeners that forward pointer-down targets to a coroutine.
#[derive(Clone, Copy, Default)]
pub struct DocumentListeners {
    events: Option<Coroutine<PointerTarget>>,
}

impl DocumentListeners {
    fn bind(&mut self, events: Coroutine<PointerTarget>) {
        self.events = Some(events);
    }
}

/// Keeps the document listener registered. Dropping it unregisters.
pub struct DocumentListener {
    key: u64,
    document: Rc<dyn Document>,
    _stop: oneshot::Sender<()>,
}

impl Drop for DocumentListener {
    fn drop(&mut self) {
        // Runs the remover in place; the returned eval is not awaited.
        let _ = self.document.eval(remover_script(self.key));
        dioxus_logger::tracing::debug!("document pointer listener {} removed", self.key);
    }
}

impl ListenerFactory for DocumentListeners {
    type Guard = DocumentListener;

    fn attach(&mut self) -> DocumentListener {
        let key = NEXT_LISTENER_KEY.fetch_add(1, Ordering::Relaxed);
        let document = document::document();
        let (stop_tx, stop_rx) = oneshot::channel();
        match self.events {
            Some(events) => {
                let eval = document.eval(listener_script(key));
                spawn(listen(key, eval, stop_rx, events));
            }
            None => {
                dioxus_logger::tracing::warn!("pointer listener attached before binding; clicks are ignored");
            }
        }
        DocumentListener {
            key,
            document,
            _stop: stop_tx,
        }
    }
}

/// Forwards pointer targets until `stop` resolves (its sender was dropped).
async fn listen(
    key: u64,
    mut eval: Eval,
    mut stop: oneshot::Receiver<()>,
    events: Coroutine<PointerTarget>,
) {
    dioxus_logger::tracing::debug!("document pointer listener {} registered", key);

    loop {
        let next = Box::pin(eval.recv::<PointerTarget>());
        match future::select(&mut stop, next).await {
            Either::Left(_) => break,
            Either::Right((Ok(target), _)) => events.send(target),
            Either::Right((Err(e), _)) => {
                dioxus_logger::tracing::warn!("document pointer listener failed: {:?}", e);
                return;
            }
        }
    }

    // Lets the script finish; the handler itself is already gone.
    if let Err(e) = eval.send(true) {
        dioxus_logger::tracing::debug!("pointer listener script {} already ended: {:?}", key, e);
    }
}

/// Copyable handle to the modal's controller for use in event handlers.
#[derive(Clone, Copy)]
pub struct ModalHandle {
    controller: Signal<ModalController<DocumentListeners>>,
    events: Coroutine<PointerTarget>,
}

impl ModalHandle {
    /// Reading subscribes the calling component to visibility changes.
    pub fn is_visible(&self) -> bool {
        self.controller.read().is_visible()
    }

    pub fn open(&mut self) {
        let mut controller = self.controller.write();
        controller.factory_mut().bind(self.events);
        controller.open();
    }

    pub fn attach_form_root(&mut self, handle: FormRootHandle) {
        self.controller.write().attach_form_root(handle);
    }

    pub fn detach_form_root(&mut self) {
        if let Ok(mut controller) = self.controller.try_write() {
            controller.detach_form_root();
        }
    }
}

pub fn use_modal_controller() -> ModalHandle {
    let mut controller = use_signal(|| ModalController::new(DocumentListeners::default()));

    let events = use_coroutine(move |mut rx: UnboundedReceiver<PointerTarget>| async move {
        while let Some(target) = rx.next().await {
            controller.write().pointer_down(&target);
        }
    });

    // Release the listener if the modal is torn down while open.
    use_drop(move || {
        if let Ok(mut controller) = controller.try_write() {
            controller.dismiss();
        }
    });

    ModalHandle { controller, events }
}
