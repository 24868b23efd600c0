#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use chrono::NaiveDate;
use serde_json::{json, Value};

use form_relay::config::MailConfig;
use form_relay::{
    FixedClock, InvocationRequest, MailTransport, OutboundMail, SubmissionHandler, TransportError,
};

/// 2025-10-01 10:15:00, the "today" every scenario runs against.
pub fn clock() -> FixedClock {
    NaiveDate::from_ymd_opt(2025, 10, 1)
        .and_then(|date| FixedClock::at(date, 10, 15, 0))
        .expect("valid clock")
}

#[derive(Default, Clone)]
pub struct MemoryOutbox {
    sent: Arc<Mutex<Vec<OutboundMail>>>,
}

impl MemoryOutbox {
    pub fn sent(&self) -> Vec<OutboundMail> {
        self.sent.lock().expect("lock").clone()
    }
}

impl MailTransport for MemoryOutbox {
    fn send(&self, mail: &OutboundMail) -> Result<(), TransportError> {
        self.sent.lock().expect("lock").push(mail.clone());
        Ok(())
    }
}

/// Relay that refuses every message, counting the attempts.
#[derive(Default, Clone)]
pub struct RefusingRelay {
    attempts: Arc<Mutex<usize>>,
}

impl RefusingRelay {
    pub fn attempts(&self) -> usize {
        *self.attempts.lock().expect("lock")
    }
}

impl MailTransport for RefusingRelay {
    fn send(&self, _mail: &OutboundMail) -> Result<(), TransportError> {
        *self.attempts.lock().expect("lock") += 1;
        Err(TransportError::Smtp(
            "554 relay access denied for 10.0.0.12".to_string(),
        ))
    }
}

pub fn build_handler() -> (SubmissionHandler<MemoryOutbox, FixedClock>, MemoryOutbox) {
    let outbox = MemoryOutbox::default();
    let handler = SubmissionHandler::new(
        MailConfig::with_credentials("relay-user", "relay-secret"),
        outbox.clone(),
        clock(),
    );
    (handler, outbox)
}

pub fn request(payload: &Value) -> InvocationRequest {
    InvocationRequest::from_json_body(payload.to_string())
}

pub fn with(payload: &Value, field: &str, value: &str) -> Value {
    let mut updated = payload.clone();
    if let Value::Object(map) = &mut updated {
        map.insert(field.to_string(), Value::String(value.to_string()));
    }
    updated
}

pub fn without(payload: &Value, field: &str) -> Value {
    let mut updated = payload.clone();
    if let Value::Object(map) = &mut updated {
        map.remove(field);
    }
    updated
}

pub fn contractor_payload() -> Value {
    json!({
        "companyName": "Tidewater Roofing LLC",
        "typeOfService": "Roofing",
        "streetAddress": "22145 Three Notch Rd",
        "city": "Lexington Park",
        "state": "MD",
        "zipCode": "20653",
        "website": "tidewaterroofing.com",
        "firstName": "Dana",
        "lastName": "Whitfield",
        "title": "Owner",
        "email": "dana@tidewaterroofing.com",
        "mobilePhone": "301-555-0142",
        "officeNumber": "301-555-0100",
        "licenseName": "Tidewater Roofing LLC",
        "licenseNumber": "MHIC-145522",
        "licenseType": "Home Improvement",
        "reference1Name": "Marcus Bell",
        "reference1Title": "Board President",
        "reference1Phone": "240-555-0177",
        "reference1BusinessType": "HOA",
        "reference2Name": "Lena Ortiz",
        "reference2Title": "Facilities Manager",
        "reference2Phone": "410-555-0133",
        "reference2BusinessType": "Property Management",
    })
}

pub fn inquiry_payload() -> Value {
    json!({
        "firstName": "Ana",
        "lastName": "Ruiz",
        "email": "ana.ruiz@example.com",
        "mobilePhone": "240-555-0190",
        "message": "Do you manage small townhome associations in St. Mary's County?",
    })
}

pub fn proposal_payload() -> Value {
    json!({
        "communityName": "Wildewood Village",
        "address": "100 Wildewood Blvd",
        "city": "California",
        "state": "Maryland",
        "zipCode": "20619",
        "numberOfUnits": "240",
        "communityType": "hoa",
        "selfManagementYears": "3",
        "professionalManagementYears": "12",
        "onSiteStaff": "Yes",
        "boardMemberInfo": "Five-member board, elected annually.",
        "boardPresidentInfo": "Priya Natarajan, serving second term.",
        "specialRequirements": "Monthly financial statements and quarterly site walks.",
        "communityAmenities": "Pool, clubhouse, two tot lots.",
        "annualBudget": "$480,000",
        "reserveBudget": "$1.2M",
        "deadlineDate": "2025-11-15",
        "contactName": "Priya Natarajan",
        "contactEmail": "priya@wildewoodhoa.org",
    })
}
