use crate::record::SubmissionRecord;
use crate::report::{ReportLayout, ReportLine, ReportSection};
use crate::validation::{FieldDescriptor as Field, FieldSchema};

const MAX_TEXT: usize = 1000;
const MAX_TEXTAREA: usize = 5000;

pub const STATES: &[&str] = &["Maryland", "Virginia", "DC", "District of Columbia"];
pub const COMMUNITY_TYPES: &[&str] = &["condo", "hoa", "coop", "apartment"];
pub const ON_SITE_STAFF: &[&str] = &["yes", "no"];

const FIELDS: &[Field] = &[
    Field::text("communityName", "Community name", MAX_TEXT),
    Field::text("address", "Address", MAX_TEXT),
    Field::text("city", "City", MAX_TEXT),
    Field::text("zipCode", "Zip code", MAX_TEXT),
    Field::text("specialRequirements", "Special requirements", MAX_TEXTAREA),
    Field::text("communityAmenities", "Community amenities", MAX_TEXTAREA),
    Field::text("annualBudget", "Annual budget", MAX_TEXT),
    Field::text("reserveBudget", "Reserve budget", MAX_TEXT),
    Field::text("contactName", "Contact name", MAX_TEXT),
    Field::text("contactEmail", "Contact email", MAX_TEXT),
    Field::email("contactEmail", "Contact email").optional(),
    Field::zip_code("zipCode", "Zip code").optional(),
    Field::choice("state", "State", STATES),
    Field::choice("communityType", "Community type", COMMUNITY_TYPES),
    Field::integer("numberOfUnits", "Number of units", 1, Some(100_000)),
    Field::integer("selfManagementYears", "Self-management years", 0, Some(100)),
    Field::integer(
        "professionalManagementYears",
        "Professional management years",
        0,
        Some(100),
    ),
    Field::choice("onSiteStaff", "On-site staff", ON_SITE_STAFF)
        .case_insensitive()
        .optional(),
    Field::future_date("deadlineDate", "Deadline date"),
    Field::text("boardMemberInfo", "Board member info", MAX_TEXT).optional(),
    Field::text("boardPresidentInfo", "Board president info", MAX_TEXTAREA).optional(),
];

pub(crate) static SCHEMA: FieldSchema = FieldSchema::new("proposal request", FIELDS);

const COMMUNITY: &[ReportLine] = &[
    ReportLine::field("Community Name", "communityName"),
    ReportLine::field("Address", "address"),
    ReportLine::field("City", "city"),
    ReportLine::field("State", "state"),
    ReportLine::field("Zip Code", "zipCode"),
    ReportLine::field("Number of Units", "numberOfUnits"),
    ReportLine::uppercase("Community Type", "communityType"),
];

const MANAGEMENT: &[ReportLine] = &[
    ReportLine::field("Self-Management Years", "selfManagementYears"),
    ReportLine::field("Professional Management Years", "professionalManagementYears"),
    ReportLine::uppercase("On-Site Staff", "onSiteStaff"),
];

const BOARD: &[ReportLine] = &[
    ReportLine::optional("Board Member Info", "boardMemberInfo"),
    ReportLine::optional("Board President Info", "boardPresidentInfo"),
];

const REQUIREMENTS: &[ReportLine] = &[
    ReportLine::paragraph("Special Requirements", "specialRequirements"),
    ReportLine::paragraph("Community Amenities", "communityAmenities"),
];

const BUDGET: &[ReportLine] = &[
    ReportLine::field("Annual Budget", "annualBudget"),
    ReportLine::field("Reserve Budget", "reserveBudget"),
    ReportLine::field("Deadline Date", "deadlineDate"),
];

const CONTACT: &[ReportLine] = &[
    ReportLine::field("Contact Name", "contactName"),
    ReportLine::field("Contact Email", "contactEmail"),
];

const SECTIONS: &[ReportSection] = &[
    ReportSection {
        heading: "COMMUNITY INFORMATION",
        lines: COMMUNITY,
    },
    ReportSection {
        heading: "MANAGEMENT HISTORY",
        lines: MANAGEMENT,
    },
    ReportSection {
        heading: "BOARD INFORMATION",
        lines: BOARD,
    },
    ReportSection {
        heading: "REQUIREMENTS & AMENITIES",
        lines: REQUIREMENTS,
    },
    ReportSection {
        heading: "BUDGET INFORMATION",
        lines: BUDGET,
    },
    ReportSection {
        heading: "CONTACT INFORMATION",
        lines: CONTACT,
    },
];

pub(crate) static LAYOUT: ReportLayout =
    ReportLayout::new("New Proposal Request Submission:", SECTIONS);

pub(crate) const SUCCESS_MESSAGE: &str =
    "Proposal request submitted successfully! We will be in touch with you shortly.";

pub(crate) fn subject(record: &SubmissionRecord) -> String {
    let community = match record.value("communityName") {
        "" => "Unknown Community",
        name => name,
    };
    let contact = match record.value("contactName") {
        "" => "Unknown",
        name => name,
    };
    format!("New Proposal Request: {community} - {contact}")
}
