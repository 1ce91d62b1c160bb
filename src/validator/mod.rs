//! Required-field validation for form records.
use serde::Serialize;

use crate::lib::{errors::FormError, telemetry::ValidationSpan};

pub mod notify;
pub mod record;
pub mod rules;
pub mod schema;

pub use notify::{NotificationSink, RecordingSink, TracingSink, WriterSink};
pub use record::{FieldValue, FormRecord};
pub use rules::{MissingFieldPolicy, RequiredField};
pub use schema::{input_schema, input_schema_json, FormDocument};

/// Summary of a validation pass, suitable for JSON output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationReport {
    pub valid: bool,
    pub notifications: Vec<String>,
}

/// Checks that every required field of a form record is filled out.
///
/// The validator keeps no state between calls; one instance can be shared
/// freely across threads.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FormValidator {
    policy: MissingFieldPolicy,
}

impl FormValidator {
    pub fn new(policy: MissingFieldPolicy) -> Self {
        Self { policy }
    }

    pub fn policy(&self) -> MissingFieldPolicy {
        self.policy
    }

    /// Validate `form`, sending one message to `sink` per empty required
    /// field in `RequiredField::ALL` order.
    ///
    /// Returns `Ok(true)` only when every required value is non-empty. An
    /// empty value is a normal `Ok(false)` outcome. Structural problems are
    /// detected before any message is sent.
    pub fn validate<S>(&self, form: &FormRecord, sink: &mut S) -> Result<bool, FormError>
    where
        S: NotificationSink + ?Sized,
    {
        let span = ValidationSpan::start(form.len(), self.policy.as_str());
        let values = match self.resolve_required(form) {
            Ok(values) => values,
            Err(err) => {
                span.finish("malformed", 0);
                return Err(err);
            }
        };

        let mut is_valid = true;
        let mut emitted = 0;
        for (field, value) in RequiredField::ALL.into_iter().zip(values) {
            if value.is_empty() {
                sink.notify(field.missing_message());
                is_valid = false;
                emitted += 1;
            }
        }

        span.finish(if is_valid { "valid" } else { "invalid" }, emitted);
        Ok(is_valid)
    }

    /// Validate `form` and collect the messages into a report.
    pub fn report(&self, form: &FormRecord) -> Result<ValidationReport, FormError> {
        let mut sink = RecordingSink::new();
        let valid = self.validate(form, &mut sink)?;
        Ok(ValidationReport {
            valid,
            notifications: sink.into_messages(),
        })
    }

    fn resolve_required<'a>(&self, form: &'a FormRecord) -> Result<[&'a str; 2], FormError> {
        let mut resolved = [""; 2];
        for (slot, field) in resolved.iter_mut().zip(RequiredField::ALL) {
            *slot = match (form.get(field.key()), self.policy) {
                (Some(entry), _) => entry.value.as_str(),
                (None, MissingFieldPolicy::TreatAsEmpty) => "",
                (None, MissingFieldPolicy::Reject) => {
                    return Err(FormError::MissingField { field: field.key() })
                }
            };
        }
        Ok(resolved)
    }
}

/// Validate with the default policy.
pub fn validate<S>(form: &FormRecord, sink: &mut S) -> Result<bool, FormError>
where
    S: NotificationSink + ?Sized,
{
    FormValidator::default().validate(form, sink)
}
