//! Outbound mail. The dispatcher only sees [`MailTransport`]; [`SmtpMailer`] is the
//! production implementation on top of lettre's async SMTP client.

use std::fmt;

use async_trait::async_trait;
use lettre::message::header::ContentType;
use lettre::message::Mailbox;
use lettre::transport::smtp::authentication::Credentials;
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};
use thiserror::Error;

use crate::config::SmtpConfig;
use crate::envelope::NotificationEnvelope;

#[derive(Debug, Error)]
pub enum MailError {
    #[error("address rejected: {0}")]
    Address(String),
    #[error("message could not be built: {0}")]
    Build(String),
    #[error("transport error: {0}")]
    Transport(String),
}

impl MailError {
    fn from_address(err: impl fmt::Display) -> Self {
        Self::Address(err.to_string())
    }

    fn from_build(err: impl fmt::Display) -> Self {
        Self::Build(err.to_string())
    }

    fn from_transport(err: impl fmt::Display) -> Self {
        Self::Transport(err.to_string())
    }
}

#[async_trait]
pub trait MailTransport: Send + Sync {
    async fn send(&self, envelope: &NotificationEnvelope) -> Result<(), MailError>;
}

/// SMTP sender. Built once per run; the underlying transport is reused for every
/// report and released when the mailer is dropped.
pub struct SmtpMailer {
    transport: AsyncSmtpTransport<Tokio1Executor>,
    sender: Mailbox,
}

impl SmtpMailer {
    pub fn new(config: &SmtpConfig, sender: &str) -> Result<Self, MailError> {
        let sender = sender.parse::<Mailbox>().map_err(MailError::from_address)?;

        let builder = if config.starttls {
            AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&config.host)
                .map_err(MailError::from_transport)?
        } else {
            AsyncSmtpTransport::<Tokio1Executor>::builder_dangerous(config.host.as_str())
        };

        let transport = builder
            .port(config.port)
            .credentials(Credentials::new(
                config.username.clone(),
                config.password.clone(),
            ))
            .build();

        Ok(Self { transport, sender })
    }
}

#[async_trait]
impl MailTransport for SmtpMailer {
    async fn send(&self, envelope: &NotificationEnvelope) -> Result<(), MailError> {
        let recipient = envelope
            .recipient
            .parse::<Mailbox>()
            .map_err(MailError::from_address)?;

        let message = Message::builder()
            .from(self.sender.clone())
            .to(recipient)
            .subject(envelope.subject.as_str())
            .header(ContentType::TEXT_HTML)
            .body(envelope.html.clone())
            .map_err(MailError::from_build)?;

        self.transport
            .send(message)
            .await
            .map_err(MailError::from_transport)?;
        Ok(())
    }
}
