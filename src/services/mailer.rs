//! SMTP mailer
//!
//! Wraps the async SMTP transport used by the notification service.
//! Every dispatch uses the fixed subject and sender identity; the body
//! is the caller-supplied message as both plain text and a minimal HTML
//! alternative.

use lettre::{
    message::{Mailbox, MultiPart},
    transport::smtp::authentication::Credentials,
    AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor,
};
use log::info;

use crate::{config::SmtpConfig, errors::AppError};

/// Fixed subject line for every relayed notification.
pub const SUBJECT: &str = "Welcome to the App!";

pub struct Mailer {
    transport: AsyncSmtpTransport<Tokio1Executor>,
    sender: Mailbox,
}

/// Builds the outgoing message: plain-text body equal to `message`, HTML
/// body wrapping it in a paragraph tag.
pub fn build_notification(
    sender: &Mailbox,
    recipient: &str,
    message: &str,
) -> Result<Message, AppError> {
    let to: Mailbox = recipient
        .parse()
        .map_err(|_| AppError::ValidationError("Invalid email".to_string()))?;

    Message::builder()
        .from(sender.clone())
        .to(to)
        .subject(SUBJECT)
        .multipart(MultiPart::alternative_plain_html(
            message.to_string(),
            format!("<p>{}</p>", message),
        ))
        .map_err(|e| AppError::InternalError(format!("failed to build email: {}", e)))
}

impl Mailer {
    /// Connects the STARTTLS transport from `SMTP_*` configuration.
    pub fn from_env() -> Result<Self, AppError> {
        let user = SmtpConfig::user();

        let transport = AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&SmtpConfig::host())
            .map_err(|e| AppError::InternalError(format!("SMTP transport setup failed: {}", e)))?
            .port(SmtpConfig::port())
            .credentials(Credentials::new(user.clone(), SmtpConfig::password()))
            .build();

        let sender: Mailbox = format!("App Notification <{}>", user)
            .parse()
            .map_err(|e| AppError::InternalError(format!("invalid sender address: {}", e)))?;

        Ok(Self { transport, sender })
    }

    /// Sends one notification email; never retried.
    ///
    /// # Errors
    ///
    /// * `AppError::MailError` - the relay rejected the message or the
    ///   connection failed; the transport detail is carried for the
    ///   500 response's `details` field
    pub async fn send(&self, recipient: &str, message: &str) -> Result<(), AppError> {
        let email = build_notification(&self.sender, recipient, message)?;

        self.transport
            .send(email)
            .await
            .map_err(|e| AppError::MailError(e.to_string()))?;

        info!("email sent to {}", recipient);

        Ok(())
    }
}
