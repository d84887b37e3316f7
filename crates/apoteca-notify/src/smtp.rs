//! SMTP delivery backend (feature `smtp`).

use lettre::{
    message::{header::ContentType, Mailbox, Message},
    transport::smtp::authentication::Credentials,
    SmtpTransport, Transport,
};

use crate::announcement::NoteAnnouncement;
use crate::notifier::{Notifier, NotifyError};

/// Connection settings for the pharmacy's outbound relay.
#[derive(Debug, Clone)]
pub struct SmtpConfig {
    pub host: String,
    pub port: u16,
    pub starttls: bool,
    /// Sender address; also the login name.
    pub email: String,
    pub password: String,
}

/// Sends announcements through an SMTP relay.
pub struct SmtpNotifier {
    transport: SmtpTransport,
    from_email: String,
}

impl SmtpNotifier {
    pub fn new(config: &SmtpConfig) -> Result<Self, NotifyError> {
        let creds = Credentials::new(config.email.clone(), config.password.clone());

        let transport = if config.starttls {
            SmtpTransport::starttls_relay(&config.host)
                .map_err(|e| NotifyError::Smtp(e.to_string()))?
                .credentials(creds)
                .port(config.port)
                .build()
        } else {
            SmtpTransport::relay(&config.host)
                .map_err(|e| NotifyError::Smtp(e.to_string()))?
                .credentials(creds)
                .port(config.port)
                .build()
        };

        Ok(Self {
            transport,
            from_email: config.email.clone(),
        })
    }
}

impl Notifier for SmtpNotifier {
    fn deliver(&self, announcement: &NoteAnnouncement) -> Result<(), NotifyError> {
        let from: Mailbox = self
            .from_email
            .parse()
            .map_err(|e: lettre::address::AddressError| NotifyError::Address(e.to_string()))?;

        let mut builder = Message::builder().from(from).subject(&announcement.subject);
        for recipient in &announcement.recipients {
            let mailbox: Mailbox = recipient
                .parse()
                .map_err(|e: lettre::address::AddressError| NotifyError::Address(e.to_string()))?;
            builder = builder.to(mailbox);
        }

        let message = builder
            .header(ContentType::TEXT_HTML)
            .body(announcement.html_body.clone())
            .map_err(|e| NotifyError::Smtp(e.to_string()))?;

        self.transport
            .send(&message)
            .map_err(|e| NotifyError::Smtp(e.to_string()))?;

        Ok(())
    }
}
