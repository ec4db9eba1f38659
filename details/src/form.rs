//! State behind the details form: the entered values and their messages.

use chrono::DateTime;
use chrono::Utc;

use crate::fields::ErrorSet;
use crate::fields::FieldName;
use crate::fields::FieldSet;
use crate::fields::UnknownField;
use crate::validation;
use crate::validation::AlertSink;

/// What a submit attempt did to the form.
#[derive(Clone, Copy, Debug, PartialEq, Eq, strum::EnumIs)]
pub enum SubmitOutcome {
    /// Every rule passed; values and messages were reset.
    Cleared,
    /// At least one rule failed; values were kept and messages replaced.
    Rejected,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DetailForm {
    fields: FieldSet,
    errors: ErrorSet,
}

impl DetailForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn fields(&self) -> &FieldSet {
        &self.fields
    }

    pub fn errors(&self) -> &ErrorSet {
        &self.errors
    }

    /// Replaces one field's value. Nothing is validated here.
    pub fn change_field(&mut self, field: FieldName, value: impl Into<String>) {
        self.fields.set(field, value);
    }

    /// Same as [`change_field`](Self::change_field), addressed by DOM input name.
    pub fn change_named(&mut self, name: &str, value: impl Into<String>) -> Result<(), UnknownField> {
        let field = name.parse::<FieldName>()?;
        self.change_field(field, value);
        Ok(())
    }

    /// Validates the current values against `now`.
    ///
    /// Alerts go to `alerts` before any state changes. On success both records
    /// are reset; otherwise the message record is replaced wholesale and the
    /// values are left as entered.
    pub fn submit(&mut self, now: DateTime<Utc>, alerts: &mut impl AlertSink) -> SubmitOutcome {
        let report = validation::validate(&self.fields, now);
        report.raise_alerts(alerts);

        if report.is_valid() {
            self.fields = FieldSet::default();
            self.errors = ErrorSet::default();
            dioxus_logger::tracing::info!("details submitted; form cleared");
            SubmitOutcome::Cleared
        } else {
            self.errors = report.errors;
            dioxus_logger::tracing::info!("details rejected");
            SubmitOutcome::Rejected
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::FieldError;
    use chrono::TimeZone;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 1, 10, 9, 0, 0).unwrap()
    }

    fn filled() -> DetailForm {
        let mut form = DetailForm::new();
        form.change_field(FieldName::Name, "Grace");
        form.change_field(FieldName::Email, "grace@navy.mil");
        form.change_field(FieldName::PhoneNum, "2025550123");
        form.change_field(FieldName::Dob, "1906-12-09");
        form
    }

    #[test]
    fn starts_blank() {
        let form = DetailForm::new();
        assert!(form.fields().is_blank());
        assert!(form.errors().is_clear());
    }

    #[test]
    fn change_named_routes_dom_names() {
        let mut form = DetailForm::new();
        form.change_named("phoneNum", "123").unwrap();
        assert_eq!(form.fields().phone_num, "123");

        let err = form.change_named("username", "x").unwrap_err();
        assert_eq!(err, UnknownField("username".to_string()));
        assert!(form.fields().name.is_empty());
    }

    #[test]
    fn valid_submit_clears_everything() {
        let mut form = filled();
        let mut alerts: Vec<FieldError> = Vec::new();

        assert_eq!(form.submit(now(), &mut alerts), SubmitOutcome::Cleared);
        assert!(form.fields().is_blank());
        assert!(form.errors().is_clear());
        assert!(alerts.is_empty());
    }

    #[test]
    fn resubmitting_a_cleared_form_behaves_like_a_fresh_one() {
        let mut form = filled();
        let mut alerts: Vec<FieldError> = Vec::new();
        form.submit(now(), &mut alerts);

        let mut fresh = DetailForm::new();
        assert_eq!(form, fresh);
        assert_eq!(form.submit(now(), &mut alerts), SubmitOutcome::Rejected);
        assert_eq!(fresh.submit(now(), &mut alerts), SubmitOutcome::Rejected);
        assert_eq!(form, fresh);
        assert_eq!(form.errors().failing().count(), 4);
    }

    #[test]
    fn rejected_submit_keeps_values_and_replaces_errors() {
        let mut form = filled();
        form.change_field(FieldName::Name, "");
        let mut alerts: Vec<FieldError> = Vec::new();

        assert!(form.submit(now(), &mut alerts).is_rejected());
        assert_eq!(form.errors().name, "Please fill out this field");
        assert_eq!(form.fields().email, "grace@navy.mil");

        // fixing the field and breaking another replaces the whole record
        form.change_field(FieldName::Name, "Grace");
        form.change_field(FieldName::Email, "grace.navy.mil");
        assert!(form.submit(now(), &mut alerts).is_rejected());
        assert_eq!(form.errors().name, "");
        assert!(form.errors().email.contains("'grace.navy.mil'"));
    }

    #[test]
    fn alert_only_failures_reject_without_field_messages() {
        let mut form = filled();
        form.change_field(FieldName::PhoneNum, "12345");
        let mut alerts: Vec<FieldError> = Vec::new();

        assert!(form.submit(now(), &mut alerts).is_rejected());
        assert_eq!(alerts, vec![FieldError::InvalidPhone]);
        assert!(form.errors().is_clear());
        assert_eq!(form.fields().phone_num, "12345");
    }
}
