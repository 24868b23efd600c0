//! The three public forms and everything that differs between them: field rules,
//! report layout, subject line, and the confirmation message.

mod contractor;
mod inquiry;
mod proposal;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::clock::Clock;
use crate::record::SubmissionRecord;
use crate::report::{FormattedReport, ReportLayout};
use crate::validation::{FieldSchema, ValidationErrors};

pub use proposal::{COMMUNITY_TYPES, ON_SITE_STAFF, STATES};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FormKind {
    ContractorApplication,
    GeneralInquiry,
    #[serde(rename = "proposal")]
    ProposalRequest,
}

impl FormKind {
    pub const ALL: [FormKind; 3] = [
        FormKind::ContractorApplication,
        FormKind::GeneralInquiry,
        FormKind::ProposalRequest,
    ];

    /// Path segment used by the HTTP routes and the CLI.
    pub fn slug(self) -> &'static str {
        match self {
            FormKind::ContractorApplication => "contractor-application",
            FormKind::GeneralInquiry => "general-inquiry",
            FormKind::ProposalRequest => "proposal",
        }
    }

    pub fn schema(self) -> &'static FieldSchema {
        match self {
            FormKind::ContractorApplication => &contractor::SCHEMA,
            FormKind::GeneralInquiry => &inquiry::SCHEMA,
            FormKind::ProposalRequest => &proposal::SCHEMA,
        }
    }

    pub fn layout(self) -> &'static ReportLayout {
        match self {
            FormKind::ContractorApplication => &contractor::LAYOUT,
            FormKind::GeneralInquiry => &inquiry::LAYOUT,
            FormKind::ProposalRequest => &proposal::LAYOUT,
        }
    }

    pub fn success_message(self) -> &'static str {
        match self {
            FormKind::ContractorApplication => contractor::SUCCESS_MESSAGE,
            FormKind::GeneralInquiry => inquiry::SUCCESS_MESSAGE,
            FormKind::ProposalRequest => proposal::SUCCESS_MESSAGE,
        }
    }

    pub fn subject(self, record: &SubmissionRecord) -> String {
        match self {
            FormKind::ContractorApplication => contractor::subject(record),
            FormKind::GeneralInquiry => inquiry::subject(record),
            FormKind::ProposalRequest => proposal::subject(record),
        }
    }

    /// Validate `record` and, when it passes, render the e-mail body.
    ///
    /// Both the "today" used for date checks and the report timestamp come from
    /// `clock`, read once.
    pub fn review(
        self,
        record: &SubmissionRecord,
        clock: &dyn Clock,
    ) -> Result<FormattedReport, ValidationErrors> {
        let now = clock.now();
        self.schema().validate(record, now.date()).into_result()?;
        Ok(self.layout().render(record, now))
    }
}

impl fmt::Display for FormKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown form '{0}'")]
pub struct UnknownForm(pub String);

impl FromStr for FormKind {
    type Err = UnknownForm;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let normalized = value.trim().to_ascii_lowercase();
        FormKind::ALL
            .into_iter()
            .find(|kind| kind.slug() == normalized)
            .ok_or_else(|| UnknownForm(value.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::FixedClock;
    use chrono::NaiveDate;

    fn clock() -> FixedClock {
        NaiveDate::from_ymd_opt(2025, 10, 1)
            .and_then(|date| FixedClock::at(date, 14, 30, 0))
            .expect("valid clock")
    }

    #[test]
    fn slugs_round_trip_through_from_str() {
        for kind in FormKind::ALL {
            assert_eq!(kind.slug().parse::<FormKind>(), Ok(kind));
        }
        assert_eq!(
            "Proposal".parse::<FormKind>(),
            Ok(FormKind::ProposalRequest)
        );
        assert!(matches!(
            "vendor-signup".parse::<FormKind>(),
            Err(UnknownForm(name)) if name == "vendor-signup"
        ));
    }

    #[test]
    fn serde_names_match_slugs() {
        for kind in FormKind::ALL {
            let encoded = serde_json::to_value(kind).expect("serialize form kind");
            assert_eq!(encoded, serde_json::Value::String(kind.slug().to_string()));
        }
    }

    #[test]
    fn review_rejects_an_empty_inquiry() {
        let errors = FormKind::GeneralInquiry
            .review(&SubmissionRecord::default(), &clock())
            .expect_err("empty inquiry must fail");

        assert_eq!(errors.get("firstName"), Some("First name is required"));
        assert_eq!(errors.get("message"), Some("Message is required"));
        assert_eq!(errors.get("mobilePhone"), None);
    }

    #[test]
    fn review_stamps_the_report_with_the_clock() {
        let record = SubmissionRecord::from_pairs([
            ("firstName", "Ana"),
            ("lastName", "Ruiz"),
            ("email", "ana@example.com"),
            ("message", "Hello"),
        ]);

        let report = FormKind::GeneralInquiry
            .review(&record, &clock())
            .expect("valid inquiry");

        assert!(report
            .as_str()
            .ends_with("Submitted on: 2025-10-01 14:30:00\n"));
    }

    #[test]
    fn every_layout_renders_its_title() {
        for kind in FormKind::ALL {
            let rendered = kind
                .layout()
                .render(&SubmissionRecord::default(), clock().0)
                .into_string();
            assert!(rendered.starts_with('\n'));
            assert!(rendered.contains(kind.layout().title()));
        }
    }
}
