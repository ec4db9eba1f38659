//! Submit-time validation rules for the details form.
//!
//! Failures travel through two separate outputs: per-field messages collected
//! in an [`ErrorSet`], and blocking alerts handed to an [`AlertSink`]. Which
//! output a failure uses is fixed by its [`FieldError`] variant.

use chrono::DateTime;
use chrono::FixedOffset;
use chrono::Local;
use chrono::NaiveDate;
use chrono::NaiveTime;
use chrono::TimeZone;
use chrono::Utc;
use strum::IntoEnumIterator;

use crate::fields::ErrorSet;
use crate::fields::FieldName;
use crate::fields::FieldSet;

/// A reason a field failed validation. `Display` is the user-facing text.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FieldError {
    #[error("Please fill out this field")]
    Missing,

    #[error("Please include an '@' in the email address. '{0}' is missing an '@'")]
    EmailMissingAt(String),

    #[error("Invalid phone number. Please enter a 10-digit phone number.")]
    InvalidPhone,

    #[error("Invalid date of birth. Date of birth cannot be in the future.")]
    FutureBirthDate,
}

impl FieldError {
    /// Blocking errors are raised as alerts and never stored in the `ErrorSet`.
    pub fn is_blocking(&self) -> bool {
        matches!(self, FieldError::InvalidPhone | FieldError::FutureBirthDate)
    }
}

/// Receives blocking alerts raised during validation.
///
/// Implementations are expected to block until the user acknowledges the
/// message, the way a browser `alert()` does.
pub trait AlertSink {
    fn alert(&mut self, error: &FieldError);
}

/// Collects alerts instead of showing them.
impl AlertSink for Vec<FieldError> {
    fn alert(&mut self, error: &FieldError) {
        self.push(error.clone());
    }
}

/// The result of running every rule against a [`FieldSet`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Validation {
    /// Freshly computed messages; fields that passed hold an empty string.
    pub errors: ErrorSet,
    /// Blocking alerts, in the order the rules raised them.
    pub alerts: Vec<FieldError>,
}

impl Validation {
    pub fn is_valid(&self) -> bool {
        self.errors.is_clear() && self.alerts.is_empty()
    }

    /// Routes `error` to the alerts when it is blocking, else onto `field`.
    fn record(&mut self, field: FieldName, error: FieldError) {
        if error.is_blocking() {
            self.alerts.push(error);
        } else {
            self.errors.set(field, error.to_string());
        }
    }

    /// Hands every alert to `sink`, in order.
    pub fn raise_alerts(&self, sink: &mut impl AlertSink) {
        for alert in &self.alerts {
            sink.alert(alert);
        }
    }
}

/// Runs all rules against `fields`. Every rule runs; none short-circuits.
///
/// `now` is the instant a date of birth must not be after.
pub fn validate(fields: &FieldSet, now: DateTime<Utc>) -> Validation {
    let mut report = Validation::default();

    for field in FieldName::iter() {
        if fields.get(field).is_empty() {
            report.record(field, FieldError::Missing);
        }
    }

    if !fields.email.is_empty() && !fields.email.contains('@') {
        report.record(FieldName::Email, FieldError::EmailMissingAt(fields.email.clone()));
    }

    if !fields.phone_num.is_empty() && !is_ten_digit_phone(&fields.phone_num) {
        report.record(FieldName::PhoneNum, FieldError::InvalidPhone);
    }

    if !fields.dob.is_empty() && is_after(&fields.dob, now) {
        report.record(FieldName::Dob, FieldError::FutureBirthDate);
    }

    dioxus_logger::tracing::debug!(
        "validated details: {} field error(s), {} alert(s)",
        report.errors.failing().count(),
        report.alerts.len()
    );

    report
}

fn is_ten_digit_phone(value: &str) -> bool {
    value.len() == 10 && value.bytes().all(|b| b.is_ascii_digit())
}

/// True only when `value` parses as a date strictly later than `now`.
/// A value that does not parse is never "after".
fn is_after(value: &str, now: DateTime<Utc>) -> bool {
    match parse_birth_date(value) {
        Some(date) => date > now,
        None => false,
    }
}

/// Reads `value` the way a browser `Date` reads an ISO-style string.
///
/// Date-only forms (`YYYY`, `YYYY-MM`, `YYYY-MM-DD`, with an optional sign and
/// up to six year digits) denote midnight UTC, matching how a browser reads the
/// value of a date input. A date with a time but no offset is local time. A
/// time with `Z` or `±HH:MM` uses that offset.
fn parse_birth_date(value: &str) -> Option<DateTime<Utc>> {
    if let Ok(date) = DateTime::parse_from_rfc3339(value) {
        return Some(date.with_timezone(&Utc));
    }

    let (date, time) = match value.split_once('T') {
        Some((date, time)) => (parse_date_part(date)?, Some(time)),
        None => (parse_date_part(value)?, None),
    };
    let Some(time) = time else {
        return Some(date.and_time(NaiveTime::MIN).and_utc());
    };

    let (clock, offset) = split_offset(time)?;
    let naive = date.and_time(parse_clock(clock)?);
    match offset {
        Some(offset) => offset
            .from_local_datetime(&naive)
            .single()
            .map(|date| date.with_timezone(&Utc)),
        None => Local
            .from_local_datetime(&naive)
            .earliest()
            .map(|date| date.with_timezone(&Utc)),
    }
}

/// `[+-]YYYY[YY][-MM[-DD]]`; missing parts default to the first.
fn parse_date_part(value: &str) -> Option<NaiveDate> {
    let (negative, unsigned) = match value.as_bytes().first()? {
        b'+' => (false, &value[1..]),
        b'-' => (true, &value[1..]),
        _ => (false, value),
    };

    let mut parts = unsigned.split('-');
    let year = parts.next().filter(|y| (4..=6).contains(&y.len()))?;
    let year: i32 = digits(year)?;
    let month = match parts.next() {
        Some(month) => digits(month).filter(|_| month.len() == 2)?,
        None => 1,
    };
    let day = match parts.next() {
        Some(day) => digits(day).filter(|_| day.len() == 2)?,
        None => 1,
    };
    if parts.next().is_some() {
        return None;
    }

    NaiveDate::from_ymd_opt(if negative { -year } else { year }, month, day)
}

/// Splits a trailing `Z` or `±HH:MM` offset off a time of day.
fn split_offset(time: &str) -> Option<(&str, Option<FixedOffset>)> {
    if let Some(clock) = time.strip_suffix('Z') {
        return Some((clock, FixedOffset::east_opt(0)));
    }
    let Some(at) = time.rfind(['+', '-']) else {
        return Some((time, None));
    };
    let (clock, offset) = time.split_at(at);
    let (hours, minutes) = offset[1..].split_once(':')?;
    if hours.len() != 2 || minutes.len() != 2 {
        return None;
    }
    let seconds = digits::<i32>(hours)? * 3600 + digits::<i32>(minutes)? * 60;
    let offset = if offset.starts_with('-') {
        FixedOffset::west_opt(seconds)
    } else {
        FixedOffset::east_opt(seconds)
    };
    Some((clock, Some(offset?)))
}

/// `HH:MM`, `HH:MM:SS` or `HH:MM:SS.fff`.
fn parse_clock(clock: &str) -> Option<NaiveTime> {
    NaiveTime::parse_from_str(clock, "%H:%M:%S%.f")
        .or_else(|_| NaiveTime::parse_from_str(clock, "%H:%M"))
        .ok()
}

fn digits<T: std::str::FromStr>(value: &str) -> Option<T> {
    if value.is_empty() || !value.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    value.parse().ok()
}
