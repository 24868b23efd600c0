//! Outbound e-mail seam.
//!
//! The handler only talks to [`MailTransport`]; production wires in [`SmtpMailer`],
//! tests wire in in-memory recorders.

mod smtp;

pub use smtp::SmtpMailer;

/// One plain-text message ready for delivery.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutboundMail {
    pub from: String,
    pub to: String,
    pub subject: String,
    pub body: String,
}

/// Trait describing the outbound delivery hook.
pub trait MailTransport: Send + Sync {
    fn send(&self, mail: &OutboundMail) -> Result<(), TransportError>;
}

impl<T: MailTransport + ?Sized> MailTransport for std::sync::Arc<T> {
    fn send(&self, mail: &OutboundMail) -> Result<(), TransportError> {
        (**self).send(mail)
    }
}

/// Delivery failures.
///
/// Only [`TransportError::Smtp`] means the relay itself refused or was unreachable;
/// the other variants are faults in the message we tried to build.
#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    #[error("invalid address '{address}': {reason}")]
    InvalidAddress { address: String, reason: String },
    #[error("failed to build message: {0}")]
    Message(String),
    #[error("smtp error: {0}")]
    Smtp(String),
}

impl TransportError {
    pub fn is_delivery_failure(&self) -> bool {
        matches!(self, TransportError::Smtp(_))
    }
}
