//! Drives the controller and the form together the way the view does.

use std::cell::Cell;
use std::rc::Rc;

use chrono::Duration;
use chrono::Utc;
use details::DetailForm;
use details::FieldError;
use details::FieldName;
use details::FormRootHandle;
use details::ListenerFactory;
use details::ModalController;
use details::PointerTarget;
use details::SubmitOutcome;

#[derive(Clone, Default)]
struct Listeners {
    live: Rc<Cell<usize>>,
}

struct Registration(Rc<Cell<usize>>);

impl Drop for Registration {
    fn drop(&mut self) {
        self.0.set(self.0.get() - 1);
    }
}

impl ListenerFactory for Listeners {
    type Guard = Registration;

    fn attach(&mut self) -> Registration {
        self.live.set(self.live.get() + 1);
        Registration(self.live.clone())
    }
}

const FORM_ID: &str = "detail-form";

fn target(ids: &[&str]) -> PointerTarget {
    ids.iter().copied().collect()
}

#[test]
fn open_edit_submit_then_click_away() {
    let listeners = Listeners::default();
    let mut modal = ModalController::new(listeners.clone());
    modal.open();

    // form mounts with the modal
    let mut form = DetailForm::new();
    modal.attach_form_root(FormRootHandle::new(FORM_ID));

    modal.pointer_down(&target(&["username", FORM_ID]));
    form.change_named("name", "Ada").unwrap();
    form.change_named("email", "ada@example.com").unwrap();
    form.change_named("phoneNum", "1234567890").unwrap();
    modal.pointer_down(&target(&["dob", FORM_ID]));
    form.change_named("dob", "1815-12-10").unwrap();

    let mut alerts: Vec<FieldError> = Vec::new();
    assert_eq!(form.submit(Utc::now(), &mut alerts), SubmitOutcome::Cleared);
    assert!(alerts.is_empty());
    assert!(form.fields().is_blank());

    // submitting never closes the modal
    assert!(modal.is_visible());
    assert_eq!(listeners.live.get(), 1);

    assert!(modal.pointer_down(&target(&["modal-backdrop"])));
    modal.detach_form_root();
    assert!(!modal.is_visible());
    assert_eq!(listeners.live.get(), 0);
}

#[test]
fn invalid_submit_reports_through_both_channels() {
    let mut form = DetailForm::new();
    let tomorrow = (Utc::now() + Duration::days(1)).date_naive();

    form.change_field(FieldName::Email, "foo.example.com");
    form.change_field(FieldName::PhoneNum, "12345");
    form.change_field(FieldName::Dob, tomorrow.format("%Y-%m-%d").to_string());

    let mut alerts: Vec<FieldError> = Vec::new();
    assert_eq!(form.submit(Utc::now(), &mut alerts), SubmitOutcome::Rejected);

    assert_eq!(
        alerts,
        vec![FieldError::InvalidPhone, FieldError::FutureBirthDate]
    );
    let failing: Vec<_> = form.errors().failing().map(|(field, _)| field).collect();
    assert_eq!(failing, vec![FieldName::Name, FieldName::Email]);
    assert!(form.errors().email.contains("foo.example.com"));
    assert_eq!(form.fields().phone_num, "12345");
}

#[test]
fn reopening_after_teardown_starts_clean() {
    let listeners = Listeners::default();
    {
        let mut modal = ModalController::new(listeners.clone());
        modal.open();
        assert_eq!(listeners.live.get(), 1);
    }
    assert_eq!(listeners.live.get(), 0);

    let mut modal = ModalController::new(listeners.clone());
    modal.open();
    modal.open();
    assert_eq!(listeners.live.get(), 1);
}
