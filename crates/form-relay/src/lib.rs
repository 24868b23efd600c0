//! Validation and e-mail relay for the property management web forms.
//!
//! Each submission flows through the same pipeline: decode the request body into a
//! [`SubmissionRecord`], validate it against the form's declarative [`FieldSchema`],
//! render the accepted record into a plain-text [`FormattedReport`], and hand the
//! report to a [`MailTransport`].

pub mod clock;
pub mod config;
pub mod error;
pub mod forms;
pub mod handler;
pub mod mail;
pub mod record;
pub mod report;
pub mod telemetry;
pub mod validation;

pub use clock::{Clock, FixedClock, SystemClock};
pub use forms::FormKind;
pub use handler::{
    form_router, InvocationRequest, InvocationResponse, RelayError, SubmissionHandler,
};
pub use mail::{MailTransport, OutboundMail, SmtpMailer, TransportError};
pub use record::{RecordError, SubmissionRecord};
pub use report::FormattedReport;
pub use validation::{FieldSchema, ValidationErrors, ValidationResult};
