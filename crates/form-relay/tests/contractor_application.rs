//! Contractor application scenarios driven through the public handler.

mod common;

use common::*;
use form_relay::{Clock, FormKind, SubmissionRecord, ValidationResult};
use serde_json::{json, Value};

const REQUIRED: &[(&str, &str)] = &[
    ("companyName", "Company name is required"),
    ("typeOfService", "Type of service is required"),
    ("streetAddress", "Street address is required"),
    ("city", "City is required"),
    ("state", "State is required"),
    ("zipCode", "Zip code is required"),
    ("firstName", "First name is required"),
    ("lastName", "Last name is required"),
    ("title", "Title is required"),
    ("email", "Email is required"),
    ("officeNumber", "Office number is required"),
    ("reference1Name", "Reference 1 name is required"),
    ("reference1Title", "Reference 1 title is required"),
    ("reference1Phone", "Reference 1 phone is required"),
    ("reference1BusinessType", "Reference 1 type of business is required"),
    ("reference2Name", "Reference 2 name is required"),
    ("reference2Title", "Reference 2 title is required"),
    ("reference2Phone", "Reference 2 phone is required"),
    ("reference2BusinessType", "Reference 2 type of business is required"),
];

fn record(payload: &Value) -> SubmissionRecord {
    SubmissionRecord::from_json(payload.clone()).expect("object payload")
}

fn errors_for(payload: &Value) -> Value {
    let (handler, outbox) = build_handler();
    let response = handler.handle(FormKind::ContractorApplication, request(payload));
    assert_eq!(response.status_code, 400, "body: {}", response.body);
    assert!(outbox.sent().is_empty());
    response.body_json()["errors"].clone()
}

#[test]
fn valid_application_is_relayed_with_all_sections() {
    let (handler, outbox) = build_handler();
    let payload = contractor_payload();

    assert_eq!(
        FormKind::ContractorApplication
            .schema()
            .validate(&record(&payload), clock().today()),
        ValidationResult::Valid
    );

    let response = handler.handle(FormKind::ContractorApplication, request(&payload));

    assert_eq!(response.status_code, 200);
    assert_eq!(
        response.body_json(),
        json!({ "message": "Contractor application submitted successfully! We will contact you shortly." })
    );

    let sent = outbox.sent();
    assert_eq!(sent.len(), 1);
    assert_eq!(
        sent[0].subject,
        "New Contractor Application: Tidewater Roofing LLC - Dana Whitfield"
    );

    let body = &sent[0].body;
    let headers = [
        "New Contractor Application Submission:",
        "COMPANY INFORMATION:",
        "PRIMARY CONTACT:",
        "PRIMARY STATE LICENSE:",
        "REFERENCE #1:",
        "REFERENCE #2:",
        "Submitted on: 2025-10-01 10:15:00",
    ];
    let positions: Vec<usize> = headers
        .iter()
        .map(|header| body.find(header).unwrap_or_else(|| panic!("missing {header}")))
        .collect();
    assert!(positions.windows(2).all(|pair| pair[0] < pair[1]));

    assert!(body.contains("Name (as it appears on license): Tidewater Roofing LLC\n"));
    assert!(body.contains("Website: tidewaterroofing.com\n"));
    assert!(body.contains("Phone Number: 410-555-0133\n"));
}

#[test]
fn each_blank_required_field_is_reported_alone() {
    let payload = contractor_payload();

    for (field, message) in REQUIRED {
        for blank in ["", "   "] {
            let errors = errors_for(&with(&payload, field, blank));
            assert_eq!(errors, json!({ *field: message }), "field {field} = {blank:?}");
        }
    }
}

#[test]
fn optional_blocks_may_be_omitted() {
    let mut payload = contractor_payload();
    for field in [
        "website",
        "mobilePhone",
        "licenseName",
        "licenseNumber",
        "licenseType",
    ] {
        payload = without(&payload, field);
    }

    let (handler, outbox) = build_handler();
    let response = handler.handle(FormKind::ContractorApplication, request(&payload));

    assert_eq!(response.status_code, 200);
    let body = &outbox.sent()[0].body;
    assert!(body.contains("Website: Not provided\n"));
    assert!(body.contains("Mobile Phone: Not provided\n"));
    assert!(body.contains("License Number: Not provided\n"));
}

#[test]
fn text_limit_is_five_hundred_characters() {
    let payload = contractor_payload();
    let at_limit = "x".repeat(500);
    let over_limit = "x".repeat(501);

    let (handler, _) = build_handler();
    let response = handler.handle(
        FormKind::ContractorApplication,
        request(&with(&payload, "licenseType", &at_limit)),
    );
    assert_eq!(response.status_code, 200);

    let errors = errors_for(&with(&payload, "licenseType", &over_limit));
    assert_eq!(
        errors,
        json!({ "licenseType": "License type must not exceed 500 characters" })
    );
}

#[test]
fn format_rules_cover_zip_website_email_and_phones() {
    let payload = contractor_payload();

    assert_eq!(
        errors_for(&with(&payload, "zipCode", "2065")),
        json!({ "zipCode": "Please enter a valid zip code (format: 12345 or 12345-6789)" })
    );
    assert_eq!(
        errors_for(&with(&payload, "website", "https://")),
        json!({ "website": "Please enter a valid website URL" })
    );
    assert_eq!(
        errors_for(&with(&payload, "email", "dana@tidewater")),
        json!({ "email": "Please enter a valid email address" })
    );
    assert_eq!(
        errors_for(&with(&payload, "officeNumber", "3015550100")),
        json!({ "officeNumber": "Office number must be in format XXX-XXX-XXXX" })
    );
    assert_eq!(
        errors_for(&with(&payload, "mobilePhone", "(301) 555-0142")),
        json!({ "mobilePhone": "Mobile phone must be in format XXX-XXX-XXXX" })
    );
    assert_eq!(
        errors_for(&with(&payload, "reference2Phone", "410-55-50133")),
        json!({ "reference2Phone": "Reference 2 phone must be in format XXX-XXX-XXXX" })
    );
}

#[test]
fn references_are_validated_independently() {
    let payload = with(
        &with(&contractor_payload(), "reference1Phone", "nope"),
        "reference2Name",
        "",
    );

    assert_eq!(
        errors_for(&payload),
        json!({
            "reference1Phone": "Reference 1 phone must be in format XXX-XXX-XXXX",
            "reference2Name": "Reference 2 name is required",
        })
    );
}

#[test]
fn state_is_free_text_for_contractors() {
    let (handler, _) = build_handler();
    let response = handler.handle(
        FormKind::ContractorApplication,
        request(&with(&contractor_payload(), "state", "Texas")),
    );
    assert_eq!(response.status_code, 200);
}

#[test]
fn empty_payload_lists_every_required_field() {
    let errors = errors_for(&json!({ "website": "" }));
    let reported = errors.as_object().expect("errors object");

    assert_eq!(reported.len(), REQUIRED.len());
    for (field, message) in REQUIRED {
        assert_eq!(reported.get(*field), Some(&json!(message)));
    }
}

#[test]
fn validation_and_rendering_are_repeatable() {
    let payload = contractor_payload();
    let invalid = with(&payload, "zipCode", "abc");
    let schema = FormKind::ContractorApplication.schema();
    let today = clock().today();

    assert_eq!(
        schema.validate(&record(&invalid), today),
        schema.validate(&record(&invalid), today)
    );

    let first = FormKind::ContractorApplication
        .review(&record(&payload), &clock())
        .expect("valid");
    let second = FormKind::ContractorApplication
        .review(&record(&payload), &clock())
        .expect("valid");
    assert_eq!(first.as_str().as_bytes(), second.as_str().as_bytes());
}
