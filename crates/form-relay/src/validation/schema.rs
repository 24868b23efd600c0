use chrono::NaiveDate;

use super::primitives::{
    check_date_not_past, check_integer, check_length, check_membership, is_valid_email,
    is_valid_phone, is_valid_website, is_valid_zip_code,
};
use super::{ValidationErrors, ValidationResult};
use crate::record::SubmissionRecord;

/// Rule family applied to a field, together with its kind-specific constraints.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text {
        max_length: usize,
    },
    Email,
    Phone,
    ZipCode,
    Website,
    Date {
        not_before_today: bool,
    },
    Integer {
        min: i64,
        max: Option<i64>,
    },
    Choice {
        allowed: &'static [&'static str],
        case_insensitive: bool,
    },
}

/// One rule over one named input field.
///
/// A field may be described more than once in a schema (for example a length rule
/// followed by a format rule). Descriptors run in declaration order and a later
/// failure replaces the message an earlier descriptor stored for the same field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldDescriptor {
    pub name: &'static str,
    pub display_name: &'static str,
    pub required: bool,
    pub kind: FieldKind,
}

impl FieldDescriptor {
    const fn new(name: &'static str, display_name: &'static str, kind: FieldKind) -> Self {
        Self {
            name,
            display_name,
            required: true,
            kind,
        }
    }

    pub const fn text(name: &'static str, display_name: &'static str, max_length: usize) -> Self {
        Self::new(name, display_name, FieldKind::Text { max_length })
    }

    pub const fn email(name: &'static str, display_name: &'static str) -> Self {
        Self::new(name, display_name, FieldKind::Email)
    }

    pub const fn phone(name: &'static str, display_name: &'static str) -> Self {
        Self::new(name, display_name, FieldKind::Phone)
    }

    pub const fn zip_code(name: &'static str, display_name: &'static str) -> Self {
        Self::new(name, display_name, FieldKind::ZipCode)
    }

    pub const fn website(name: &'static str, display_name: &'static str) -> Self {
        Self::new(name, display_name, FieldKind::Website)
    }

    pub const fn future_date(name: &'static str, display_name: &'static str) -> Self {
        Self::new(
            name,
            display_name,
            FieldKind::Date {
                not_before_today: true,
            },
        )
    }

    pub const fn integer(
        name: &'static str,
        display_name: &'static str,
        min: i64,
        max: Option<i64>,
    ) -> Self {
        Self::new(name, display_name, FieldKind::Integer { min, max })
    }

    pub const fn choice(
        name: &'static str,
        display_name: &'static str,
        allowed: &'static [&'static str],
    ) -> Self {
        Self::new(
            name,
            display_name,
            FieldKind::Choice {
                allowed,
                case_insensitive: false,
            },
        )
    }

    pub const fn case_insensitive(mut self) -> Self {
        if let FieldKind::Choice { allowed, .. } = self.kind {
            self.kind = FieldKind::Choice {
                allowed,
                case_insensitive: true,
            };
        }
        self
    }

    /// Blank values pass; non-blank values are still checked.
    pub const fn optional(mut self) -> Self {
        self.required = false;
        self
    }

    /// Message for a trimmed `value`, or `None` when the rule holds.
    pub fn check(&self, value: &str, today: NaiveDate) -> Option<String> {
        if value.is_empty() {
            return self
                .required
                .then(|| format!("{} is required", self.display_name));
        }

        let outcome = match self.kind {
            FieldKind::Text { max_length } => {
                check_length(value, self.display_name, self.required, max_length)
            }
            FieldKind::Email => {
                ok_or_message(is_valid_email(value), "Please enter a valid email address")
            }
            FieldKind::Phone => ok_or_message(
                is_valid_phone(value),
                format!("{} must be in format XXX-XXX-XXXX", self.display_name),
            ),
            FieldKind::ZipCode => ok_or_message(
                is_valid_zip_code(value),
                "Please enter a valid zip code (format: 12345 or 12345-6789)",
            ),
            FieldKind::Website => {
                ok_or_message(is_valid_website(value), "Please enter a valid website URL")
            }
            FieldKind::Date { not_before_today } => {
                let floor = if not_before_today {
                    today
                } else {
                    NaiveDate::MIN
                };
                check_date_not_past(value, floor, self.display_name).map(|_| ())
            }
            FieldKind::Integer { min, max } => {
                check_integer(value, self.display_name, min, max).map(|_| ())
            }
            FieldKind::Choice {
                allowed,
                case_insensitive,
            } => check_membership(value, self.display_name, allowed, case_insensitive),
        };

        outcome.err()
    }
}

fn ok_or_message(valid: bool, message: impl Into<String>) -> Result<(), String> {
    if valid {
        Ok(())
    } else {
        Err(message.into())
    }
}

/// Ordered rule table describing one form.
#[derive(Debug)]
pub struct FieldSchema {
    name: &'static str,
    fields: &'static [FieldDescriptor],
}

impl FieldSchema {
    pub const fn new(name: &'static str, fields: &'static [FieldDescriptor]) -> Self {
        Self { name, fields }
    }

    /// Run every descriptor against `record`, collecting one message per field.
    pub fn validate(&self, record: &SubmissionRecord, today: NaiveDate) -> ValidationResult {
        let mut errors = ValidationErrors::default();

        for descriptor in self.fields {
            if let Some(message) = descriptor.check(record.value(descriptor.name), today) {
                errors.insert(descriptor.name, message);
            }
        }

        tracing::debug!(schema = self.name, failures = errors.len(), "validated submission");
        ValidationResult::from(errors)
    }
}
