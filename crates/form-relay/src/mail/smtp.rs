use lettre::message::header::ContentType;
use lettre::message::Mailbox;
use lettre::transport::smtp::authentication::Credentials;
use lettre::{Message, SmtpTransport, Transport};

use super::{MailTransport, OutboundMail, TransportError};
use crate::config::MailConfig;

/// STARTTLS relay over lettre's blocking SMTP transport.
///
/// A fresh connection is opened for every message; submissions are rare and the
/// relay drops idle sessions.
#[derive(Debug, Clone)]
pub struct SmtpMailer {
    config: MailConfig,
}

impl SmtpMailer {
    pub fn new(config: MailConfig) -> Self {
        Self { config }
    }

    fn transport(&self) -> Result<SmtpTransport, TransportError> {
        let credentials = self
            .config
            .credentials()
            .map_err(|err| TransportError::Smtp(err.to_string()))?;

        let transport = SmtpTransport::starttls_relay(&self.config.host)
            .map_err(|err| TransportError::Smtp(err.to_string()))?
            .port(self.config.port)
            .credentials(Credentials::new(credentials.username, credentials.password))
            .build();

        Ok(transport)
    }
}

impl MailTransport for SmtpMailer {
    fn send(&self, mail: &OutboundMail) -> Result<(), TransportError> {
        let message = build_message(mail)?;
        let transport = self.transport()?;

        transport
            .send(&message)
            .map_err(|err| TransportError::Smtp(err.to_string()))?;

        tracing::debug!(
            host = %self.config.host,
            port = self.config.port,
            "smtp relay accepted message"
        );
        Ok(())
    }
}

fn mailbox(address: &str) -> Result<Mailbox, TransportError> {
    address
        .parse::<Mailbox>()
        .map_err(|err| TransportError::InvalidAddress {
            address: address.to_string(),
            reason: err.to_string(),
        })
}

pub(crate) fn build_message(mail: &OutboundMail) -> Result<Message, TransportError> {
    Message::builder()
        .from(mailbox(&mail.from)?)
        .to(mailbox(&mail.to)?)
        .subject(mail.subject.as_str())
        .header(ContentType::TEXT_PLAIN)
        .body(mail.body.clone())
        .map_err(|err| TransportError::Message(err.to_string()))
}
