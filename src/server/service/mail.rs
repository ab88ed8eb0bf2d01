//! Outgoing mail.
//!
//! Messages are delivered through an HTTP mail relay when one is configured.
//! Without a relay they are written to the log, which is also what tests use.

use async_trait::async_trait;
use serde::Serialize;

use crate::server::{config::Config, error::mail::MailError};

/// One outgoing message with an HTML body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mail {
    pub to: String,
    pub subject: String,
    pub body: String,
}

impl Mail {
    /// One-time password mail sent by `POST /api/users/auth/send-email/{email}`.
    pub fn otp(to: &str, otp: &str, company_name: &str) -> Self {
        Self {
            to: to.to_string(),
            subject: "OTP for Authentication".to_string(),
            body: format!(
                "<div style=\"background-color: #f4f4f4; padding: 20px;\">\
                 <div style=\"max-width: 600px; margin: 0 auto; background-color: #ffffff; padding: 20px;\">\
                 <h2 style=\"text-align: center; color: #007bff;\">OTP Verification</h2>\
                 <p>Dear user,</p>\
                 <p>Your OTP (One-Time Password) for verification is: <strong>{otp}</strong></p>\
                 <p>Please use this OTP to verify your email address.</p>\
                 <p>If you didn't request this, you can safely ignore this email.</p>\
                 <p>Thank you,</p><p>{company_name}</p>\
                 </div></div>"
            ),
        }
    }

    /// Login details mailed to a newly created account.
    pub fn account_info(to: &str, password: &str, company_name: &str) -> Self {
        Self {
            to: to.to_string(),
            subject: "User Information".to_string(),
            body: format!(
                "<div style=\"max-width: 600px; margin: 0 auto; padding: 20px; font-family: Arial, sans-serif;\">\
                 <h2>User login information</h2>\
                 <p>Hello,</p>\
                 <p>Below is your application login information:</p>\
                 <ul>\
                 <li><strong>Email:</strong> {to}</li>\
                 <li><strong>Password:</strong> {password}</li>\
                 </ul>\
                 <p>Best regards,</p><p>{company_name} Team</p>\
                 </div>"
            ),
        }
    }
}

#[async_trait]
pub trait Mailer: Send + Sync {
    async fn send(&self, mail: Mail) -> Result<(), MailError>;
}

#[derive(Serialize)]
struct Sender<'a> {
    name: &'a str,
    address: &'a str,
}

#[derive(Serialize)]
struct RelayMessage<'a> {
    from: Sender<'a>,
    to: &'a str,
    subject: &'a str,
    html: &'a str,
}

/// Posts messages as JSON to an HTTP mail relay.
pub struct HttpMailer {
    client: reqwest::Client,
    api_url: String,
    api_key: Option<String>,
    sender_name: String,
    sender_address: String,
}

impl HttpMailer {
    /// Creates a relay mailer.
    ///
    /// # Arguments
    /// - `client` - Shared HTTP client
    /// - `api_url` - Relay endpoint receiving the message JSON
    /// - `api_key` - Bearer credential for the relay, if it needs one
    /// - `sender_name` - Display name of the sender
    /// - `sender_address` - Sender address
    pub fn new(
        client: reqwest::Client,
        api_url: String,
        api_key: Option<String>,
        sender_name: String,
        sender_address: String,
    ) -> Self {
        Self {
            client,
            api_url,
            api_key,
            sender_name,
            sender_address,
        }
    }
}

#[async_trait]
impl Mailer for HttpMailer {
    async fn send(&self, mail: Mail) -> Result<(), MailError> {
        let message = RelayMessage {
            from: Sender {
                name: &self.sender_name,
                address: &self.sender_address,
            },
            to: &mail.to,
            subject: &mail.subject,
            html: &mail.body,
        };

        let mut request = self.client.post(&self.api_url).json(&message);
        if let Some(key) = &self.api_key {
            request = request.bearer_auth(key);
        }

        let response = request.send().await?;
        if !response.status().is_success() {
            return Err(MailError::Rejected(response.status().as_u16()));
        }

        tracing::info!("Sent \"{}\" mail to {}", mail.subject, mail.to);

        Ok(())
    }
}

/// Writes messages to the log instead of sending them.
#[derive(Default)]
pub struct LogMailer;

#[async_trait]
impl Mailer for LogMailer {
    async fn send(&self, mail: Mail) -> Result<(), MailError> {
        tracing::info!(
            to = %mail.to,
            subject = %mail.subject,
            "No mail relay configured, mail not sent"
        );
        tracing::debug!("{}", mail.body);

        Ok(())
    }
}

/// Picks the relay mailer when `MAIL_API_URL` is set, the log mailer otherwise.
pub fn build_mailer(config: &Config, client: reqwest::Client) -> std::sync::Arc<dyn Mailer> {
    match &config.mail_api_url {
        Some(api_url) => std::sync::Arc::new(HttpMailer::new(
            client,
            api_url.clone(),
            config.mail_password.clone(),
            config.company_name.clone(),
            config
                .mail_admin
                .clone()
                .unwrap_or_else(|| format!("no-reply@{}", config.app_name)),
        )),
        None => {
            tracing::warn!("MAIL_API_URL is not set, outgoing mail will only be logged");
            std::sync::Arc::new(LogMailer)
        }
    }
}

#[cfg(test)]
pub mod test {
    use std::sync::Mutex;

    use super::*;

    /// Keeps every message so tests can read what would have been sent.
    #[derive(Default)]
    pub struct RecordingMailer {
        pub sent: Mutex<Vec<Mail>>,
    }

    impl RecordingMailer {
        pub fn sent(&self) -> Vec<Mail> {
            self.sent.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl Mailer for RecordingMailer {
        async fn send(&self, mail: Mail) -> Result<(), MailError> {
            self.sent.lock().unwrap().push(mail);
            Ok(())
        }
    }

    #[test]
    fn otp_mail_carries_code() {
        let mail = Mail::otp("cutter@example.com", "042917", "Garment Co");

        assert_eq!(mail.to, "cutter@example.com");
        assert_eq!(mail.subject, "OTP for Authentication");
        assert!(mail.body.contains("042917"));
        assert!(mail.body.contains("Garment Co"));
    }

    #[test]
    fn account_mail_carries_credentials() {
        let mail = Mail::account_info("new@example.com", "Ab3dE6gH9j", "Garment Co");

        assert_eq!(mail.subject, "User Information");
        assert!(mail.body.contains("new@example.com"));
        assert!(mail.body.contains("Ab3dE6gH9j"));
    }

    #[tokio::test]
    async fn log_mailer_always_succeeds() {
        let result = LogMailer.send(Mail::otp("a@example.com", "123456", "Co")).await;

        assert!(result.is_ok());
    }
}
