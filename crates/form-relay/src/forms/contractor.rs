use crate::record::SubmissionRecord;
use crate::report::{ReportLayout, ReportLine, ReportSection};
use crate::validation::{FieldDescriptor as Field, FieldSchema};

const MAX_TEXT: usize = 500;

const FIELDS: &[Field] = &[
    Field::text("companyName", "Company name", MAX_TEXT),
    Field::text("typeOfService", "Type of service", MAX_TEXT),
    Field::text("streetAddress", "Street address", MAX_TEXT),
    Field::text("city", "City", MAX_TEXT),
    Field::text("state", "State", MAX_TEXT),
    Field::text("zipCode", "Zip code", MAX_TEXT),
    Field::zip_code("zipCode", "Zip code").optional(),
    Field::website("website", "Website").optional(),
    Field::text("firstName", "First name", MAX_TEXT),
    Field::text("lastName", "Last name", MAX_TEXT),
    Field::text("title", "Title", MAX_TEXT),
    Field::text("email", "Email", MAX_TEXT),
    Field::text("officeNumber", "Office number", MAX_TEXT),
    Field::email("email", "Email").optional(),
    Field::phone("officeNumber", "Office number"),
    Field::phone("mobilePhone", "Mobile phone").optional(),
    Field::text("licenseName", "License name", MAX_TEXT).optional(),
    Field::text("licenseNumber", "License number", MAX_TEXT).optional(),
    Field::text("licenseType", "License type", MAX_TEXT).optional(),
    Field::text("reference1Name", "Reference 1 name", MAX_TEXT),
    Field::text("reference1Title", "Reference 1 title", MAX_TEXT),
    Field::phone("reference1Phone", "Reference 1 phone"),
    Field::text(
        "reference1BusinessType",
        "Reference 1 type of business",
        MAX_TEXT,
    ),
    Field::text("reference2Name", "Reference 2 name", MAX_TEXT),
    Field::text("reference2Title", "Reference 2 title", MAX_TEXT),
    Field::phone("reference2Phone", "Reference 2 phone"),
    Field::text(
        "reference2BusinessType",
        "Reference 2 type of business",
        MAX_TEXT,
    ),
];

pub(crate) static SCHEMA: FieldSchema = FieldSchema::new("contractor application", FIELDS);

const COMPANY: &[ReportLine] = &[
    ReportLine::field("Company Name", "companyName"),
    ReportLine::field("Type of Service", "typeOfService"),
    ReportLine::field("Street Address", "streetAddress"),
    ReportLine::field("City", "city"),
    ReportLine::field("State", "state"),
    ReportLine::field("Zip Code", "zipCode"),
    ReportLine::optional("Website", "website"),
];

const CONTACT: &[ReportLine] = &[
    ReportLine::field("First Name", "firstName"),
    ReportLine::field("Last Name", "lastName"),
    ReportLine::field("Title", "title"),
    ReportLine::field("Email", "email"),
    ReportLine::optional("Mobile Phone", "mobilePhone"),
    ReportLine::field("Office Number", "officeNumber"),
];

const LICENSE: &[ReportLine] = &[
    ReportLine::optional("Name (as it appears on license)", "licenseName"),
    ReportLine::optional("License Number", "licenseNumber"),
    ReportLine::optional("Type of License", "licenseType"),
];

const REFERENCE_1: &[ReportLine] = &[
    ReportLine::field("Name", "reference1Name"),
    ReportLine::field("Title", "reference1Title"),
    ReportLine::field("Phone Number", "reference1Phone"),
    ReportLine::field("Type of Business", "reference1BusinessType"),
];

const REFERENCE_2: &[ReportLine] = &[
    ReportLine::field("Name", "reference2Name"),
    ReportLine::field("Title", "reference2Title"),
    ReportLine::field("Phone Number", "reference2Phone"),
    ReportLine::field("Type of Business", "reference2BusinessType"),
];

const SECTIONS: &[ReportSection] = &[
    ReportSection {
        heading: "COMPANY INFORMATION",
        lines: COMPANY,
    },
    ReportSection {
        heading: "PRIMARY CONTACT",
        lines: CONTACT,
    },
    ReportSection {
        heading: "PRIMARY STATE LICENSE",
        lines: LICENSE,
    },
    ReportSection {
        heading: "REFERENCE #1",
        lines: REFERENCE_1,
    },
    ReportSection {
        heading: "REFERENCE #2",
        lines: REFERENCE_2,
    },
];

pub(crate) static LAYOUT: ReportLayout =
    ReportLayout::new("New Contractor Application Submission:", SECTIONS);

pub(crate) const SUCCESS_MESSAGE: &str =
    "Contractor application submitted successfully! We will contact you shortly.";

pub(crate) fn subject(record: &SubmissionRecord) -> String {
    let company = non_blank(record.value("companyName"), "Unknown Company");
    let contact = format!("{} {}", record.value("firstName"), record.value("lastName"));
    let contact = non_blank(contact.trim(), "Unknown");
    format!("New Contractor Application: {company} - {contact}")
}

fn non_blank<'a>(value: &'a str, fallback: &'a str) -> &'a str {
    if value.is_empty() {
        fallback
    } else {
        value
    }
}
