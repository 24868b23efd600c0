use crate::record::SubmissionRecord;
use crate::report::{ReportLayout, ReportLine, ReportSection};
use crate::validation::{FieldDescriptor as Field, FieldSchema};

const MAX_TEXT: usize = 200;
const MAX_MESSAGE: usize = 5000;

const FIELDS: &[Field] = &[
    Field::text("firstName", "First name", MAX_TEXT),
    Field::text("lastName", "Last name", MAX_TEXT),
    Field::text("email", "Email", MAX_TEXT),
    Field::text("message", "Message", MAX_MESSAGE),
    Field::email("email", "Email").optional(),
    Field::phone("mobilePhone", "Mobile phone").optional(),
];

pub(crate) static SCHEMA: FieldSchema = FieldSchema::new("general inquiry", FIELDS);

const CONTACT: &[ReportLine] = &[
    ReportLine::full_name("Name", "firstName", "lastName"),
    ReportLine::field("First Name", "firstName"),
    ReportLine::field("Last Name", "lastName"),
    ReportLine::field("Email", "email"),
    ReportLine::optional("Mobile Phone", "mobilePhone"),
];

const MESSAGE: &[ReportLine] = &[ReportLine::body("message")];

const SECTIONS: &[ReportSection] = &[
    ReportSection {
        heading: "CONTACT INFORMATION",
        lines: CONTACT,
    },
    ReportSection {
        heading: "MESSAGE",
        lines: MESSAGE,
    },
];

pub(crate) static LAYOUT: ReportLayout =
    ReportLayout::new("New General Inquiry Submission:", SECTIONS);

pub(crate) const SUCCESS_MESSAGE: &str =
    "General inquiry submitted successfully! We will contact you shortly.";

pub(crate) fn subject(record: &SubmissionRecord) -> String {
    let name = format!("{} {}", record.value("firstName"), record.value("lastName"));
    let name = name.trim();
    if name.is_empty() {
        "New General Inquiry from Unknown".to_string()
    } else {
        format!("New General Inquiry from {name}")
    }
}
