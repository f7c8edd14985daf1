//! Outbound Mail Delivery
//!
//! [`Mailer`] is the seam between the application and whatever actually
//! delivers mail. The production implementation posts JSON to an HTTP
//! mail API; tests substitute a recording fake.

use serde::Serialize;
use thiserror::Error;

/// A single outbound message
#[derive(Debug, Clone)]
pub struct MailMessage {
    pub to: String,
    pub subject: String,
    pub html_body: String,
}

/// Mail delivery errors
#[derive(Debug, Error)]
pub enum MailerError {
    /// Transport-level failure reaching the relay
    #[error("Mail transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The relay accepted the connection but rejected the message
    #[error("Mail API rejected message with status {status}")]
    Rejected { status: u16 },
}

/// Mail delivery trait
#[trait_variant::make(Mailer: Send)]
pub trait LocalMailer {
    /// Deliver a single message
    async fn send(&self, mail: &MailMessage) -> Result<(), MailerError>;
}

// ============================================================================
// HTTP mail API implementation
// ============================================================================

#[derive(Serialize)]
struct MailApiPayload<'a> {
    from: &'a str,
    to: &'a str,
    subject: &'a str,
    html: &'a str,
}

/// Mailer that posts messages to a JSON mail API
#[derive(Clone)]
pub struct HttpMailer {
    client: reqwest::Client,
    endpoint: String,
    api_key: String,
    from: String,
}

impl HttpMailer {
    /// Create a mailer for the given API endpoint.
    ///
    /// `from` is the sender line on every message, e.g.
    /// `"Riddleworks" <no-reply@riddleworks.example>`.
    pub fn new(endpoint: String, api_key: String, from: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoint,
            api_key,
            from,
        }
    }
}

impl Mailer for HttpMailer {
    async fn send(&self, mail: &MailMessage) -> Result<(), MailerError> {
        let payload = MailApiPayload {
            from: &self.from,
            to: &mail.to,
            subject: &mail.subject,
            html: &mail.html_body,
        };

        let response = self
            .client
            .post(&self.endpoint)
            .bearer_auth(&self.api_key)
            .json(&payload)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(MailerError::Rejected {
                status: response.status().as_u16(),
            });
        }

        tracing::debug!(to = %mail.to, "Mail dispatched");

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_payload_shape() {
        let payload = MailApiPayload {
            from: "app@example.com",
            to: "user@example.com",
            subject: "Hello",
            html: "<p>Hi</p>",
        };

        let json = serde_json::to_value(&payload).unwrap();
        assert_eq!(json["from"], "app@example.com");
        assert_eq!(json["to"], "user@example.com");
        assert_eq!(json["subject"], "Hello");
        assert_eq!(json["html"], "<p>Hi</p>");
    }
}
