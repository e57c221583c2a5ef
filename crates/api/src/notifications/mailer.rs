//! SMTP notification for incoming contact messages.
//!
//! [`Mailer`] sends a plain-text email to the site owner whenever the public
//! form receives a submission. The whole feature is opt-in: without
//! `SMTP_HOST` in the environment, [`EmailConfig::from_env`] yields `None`
//! and the rest of the application carries no mailer at all.

use lettre::message::header::ContentType;
use lettre::transport::smtp::authentication::Credentials;
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};

use fenestra_db::models::contact::Contact;

// ---------------------------------------------------------------------------
// Error
// ---------------------------------------------------------------------------

#[derive(Debug, thiserror::Error)]
pub enum EmailError {
    /// The SMTP conversation failed (connection, auth, relay refusal).
    #[error("SMTP transport error: {0}")]
    Transport(#[from] lettre::transport::smtp::Error),

    /// A sender, recipient, or reply-to address did not parse.
    #[error("Email address parse error: {0}")]
    Address(#[from] lettre::address::AddressError),

    /// lettre rejected the assembled MIME message.
    #[error("Email build error: {0}")]
    Build(String),
}

// ---------------------------------------------------------------------------
// EmailConfig
// ---------------------------------------------------------------------------

const DEFAULT_SMTP_PORT: u16 = 587;
const DEFAULT_FROM_ADDRESS: &str = "noreply@fenestra.local";
const DEFAULT_ADMIN_ADDRESS: &str = "info@fenestra.local";

/// SMTP settings for the notification mailer.
///
/// Environment variables: `SMTP_HOST` (required -- its absence disables the
/// feature), `SMTP_PORT` (default 587, STARTTLS), `SMTP_FROM`, `ADMIN_EMAIL`
/// (notification recipient), and optionally `SMTP_USER`/`SMTP_PASSWORD` for
/// authenticated relays.
#[derive(Debug, Clone)]
pub struct EmailConfig {
    pub smtp_host: String,
    pub smtp_port: u16,
    pub from_address: String,
    /// Where contact notifications are delivered.
    pub admin_address: String,
    pub smtp_user: Option<String>,
    pub smtp_password: Option<String>,
}

impl EmailConfig {
    /// Read the SMTP settings, or `None` when `SMTP_HOST` is unset.
    pub fn from_env() -> Option<Self> {
        let smtp_host = std::env::var("SMTP_HOST").ok()?;

        let smtp_port = std::env::var("SMTP_PORT")
            .ok()
            .and_then(|p| p.parse().ok())
            .unwrap_or(DEFAULT_SMTP_PORT);
        let from_address =
            std::env::var("SMTP_FROM").unwrap_or_else(|_| DEFAULT_FROM_ADDRESS.to_string());
        let admin_address =
            std::env::var("ADMIN_EMAIL").unwrap_or_else(|_| DEFAULT_ADMIN_ADDRESS.to_string());

        Some(Self {
            smtp_host,
            smtp_port,
            from_address,
            admin_address,
            smtp_user: std::env::var("SMTP_USER").ok(),
            smtp_password: std::env::var("SMTP_PASSWORD").ok(),
        })
    }
}

// ---------------------------------------------------------------------------
// Mailer
// ---------------------------------------------------------------------------

/// Owner of the SMTP transport settings; one per process, shared via state.
pub struct Mailer {
    config: EmailConfig,
}

impl Mailer {
    pub fn new(config: EmailConfig) -> Self {
        Self { config }
    }

    /// Email the configured admin address about a newly received contact
    /// message. Reply-to is set to the sender so the owner can answer
    /// directly from their mail client.
    pub async fn send_contact_notification(&self, contact: &Contact) -> Result<(), EmailError> {
        let email = Message::builder()
            .from(self.config.from_address.parse()?)
            .reply_to(contact.email.parse()?)
            .to(self.config.admin_address.parse()?)
            .subject(notification_subject(contact))
            .header(ContentType::TEXT_PLAIN)
            .body(notification_body(contact))
            .map_err(|e| EmailError::Build(e.to_string()))?;

        let mut builder =
            AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&self.config.smtp_host)?
                .port(self.config.smtp_port);
        if let (Some(user), Some(pass)) = (&self.config.smtp_user, &self.config.smtp_password) {
            builder = builder.credentials(Credentials::new(user.clone(), pass.clone()));
        }

        builder.build().send(email).await?;

        tracing::info!(contact_id = contact.id, to = %self.config.admin_address, "Contact notification email sent");
        Ok(())
    }
}

fn notification_subject(contact: &Contact) -> String {
    format!("New contact message: {}", contact.subject)
}

fn notification_body(contact: &Contact) -> String {
    format!(
        "A new message arrived through the contact form.\n\n\
         Name: {}\n\
         Email: {}\n\
         Phone: {}\n\
         Subject: {}\n\n\
         {}\n\n\
         IP: {} | Received: {}",
        contact.name,
        contact.email,
        contact.phone.as_deref().unwrap_or("Not provided"),
        contact.subject,
        contact.message,
        contact.ip_address,
        contact.created_at.to_rfc3339(),
    )
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
