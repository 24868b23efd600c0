//! Plain-text rendering of accepted submissions.
//!
//! A [`ReportLayout`] fixes the title, section order and field labels for one form,
//! so the rendered text never depends on the order keys arrived in.

use std::fmt;

use chrono::NaiveDateTime;

use crate::record::SubmissionRecord;

const RULE: &str = "━";
const RULE_WIDTH: usize = 80;

pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";
pub const REQUIRED_PLACEHOLDER: &str = "N/A";
pub const OPTIONAL_PLACEHOLDER: &str = "Not provided";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportLine {
    /// `Label: value` on one line.
    Field {
        label: &'static str,
        field: &'static str,
        placeholder: &'static str,
        uppercase: bool,
    },
    /// `Label:` followed by the value on its own line.
    Paragraph {
        label: &'static str,
        field: &'static str,
        placeholder: &'static str,
    },
    /// The value alone.
    Body {
        field: &'static str,
        placeholder: &'static str,
    },
    /// `Label: first last`, skipping blank parts.
    FullName {
        label: &'static str,
        first: &'static str,
        last: &'static str,
    },
}

impl ReportLine {
    pub const fn field(label: &'static str, field: &'static str) -> Self {
        ReportLine::Field {
            label,
            field,
            placeholder: REQUIRED_PLACEHOLDER,
            uppercase: false,
        }
    }

    pub const fn optional(label: &'static str, field: &'static str) -> Self {
        ReportLine::Field {
            label,
            field,
            placeholder: OPTIONAL_PLACEHOLDER,
            uppercase: false,
        }
    }

    pub const fn uppercase(label: &'static str, field: &'static str) -> Self {
        ReportLine::Field {
            label,
            field,
            placeholder: REQUIRED_PLACEHOLDER,
            uppercase: true,
        }
    }

    pub const fn paragraph(label: &'static str, field: &'static str) -> Self {
        ReportLine::Paragraph {
            label,
            field,
            placeholder: REQUIRED_PLACEHOLDER,
        }
    }

    pub const fn body(field: &'static str) -> Self {
        ReportLine::Body {
            field,
            placeholder: REQUIRED_PLACEHOLDER,
        }
    }

    pub const fn full_name(label: &'static str, first: &'static str, last: &'static str) -> Self {
        ReportLine::FullName { label, first, last }
    }

    fn write(&self, record: &SubmissionRecord, out: &mut String) {
        match *self {
            ReportLine::Field {
                label,
                field,
                placeholder,
                uppercase,
            } => {
                let value = value_or(record, field, placeholder);
                out.push_str(label);
                out.push_str(": ");
                if uppercase {
                    out.push_str(&value.to_uppercase());
                } else {
                    out.push_str(value);
                }
                out.push('\n');
            }
            ReportLine::Paragraph {
                label,
                field,
                placeholder,
            } => {
                out.push_str(label);
                out.push_str(":\n");
                out.push_str(value_or(record, field, placeholder));
                out.push('\n');
            }
            ReportLine::Body { field, placeholder } => {
                out.push_str(value_or(record, field, placeholder));
                out.push('\n');
            }
            ReportLine::FullName { label, first, last } => {
                let parts: Vec<&str> = [record.value(first), record.value(last)]
                    .into_iter()
                    .filter(|part| !part.is_empty())
                    .collect();
                let name = if parts.is_empty() {
                    REQUIRED_PLACEHOLDER.to_string()
                } else {
                    parts.join(" ")
                };
                out.push_str(label);
                out.push_str(": ");
                out.push_str(&name);
                out.push('\n');
            }
        }
    }
}

fn value_or<'a>(record: &'a SubmissionRecord, field: &str, placeholder: &'static str) -> &'a str {
    let value = record.value(field);
    if value.is_empty() {
        placeholder
    } else {
        value
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReportSection {
    pub heading: &'static str,
    pub lines: &'static [ReportLine],
}

#[derive(Debug)]
pub struct ReportLayout {
    title: &'static str,
    sections: &'static [ReportSection],
}

impl ReportLayout {
    pub const fn new(title: &'static str, sections: &'static [ReportSection]) -> Self {
        Self { title, sections }
    }

    pub fn title(&self) -> &'static str {
        self.title
    }

    pub fn headings(&self) -> impl Iterator<Item = &'static str> {
        self.sections.iter().map(|section| section.heading)
    }

    /// Render `record` with the footer stamped from `submitted_at`.
    pub fn render(&self, record: &SubmissionRecord, submitted_at: NaiveDateTime) -> FormattedReport {
        let rule = RULE.repeat(RULE_WIDTH);
        let mut out = String::new();

        out.push('\n');
        out.push_str(self.title);
        out.push_str("\n\n");

        for section in self.sections {
            out.push_str(&rule);
            out.push_str("\n\n");
            out.push_str(section.heading);
            out.push_str(":\n");
            out.push_str(&rule);
            out.push('\n');

            for (index, line) in section.lines.iter().enumerate() {
                if index > 0 && matches!(line, ReportLine::Paragraph { .. }) {
                    out.push('\n');
                }
                line.write(record, &mut out);
            }

            out.push('\n');
        }

        out.push_str(&rule);
        out.push_str("\n\n");
        out.push_str("Submitted on: ");
        out.push_str(&submitted_at.format(TIMESTAMP_FORMAT).to_string());
        out.push('\n');

        FormattedReport(out)
    }
}

/// Rendered e-mail body for one accepted submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormattedReport(String);

impl FormattedReport {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for FormattedReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
