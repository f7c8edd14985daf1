//! Request Password Reset Use Case
//!
//! Anti-enumeration policy: the outcome is identical whether the email
//! exists, the token was stored, or the mail relay failed. Failures are
//! only visible in the logs.

use std::sync::Arc;

use platform::mailer::{MailMessage, Mailer};

use crate::application::config::AuthConfig;
use crate::domain::repository::UserRepository;
use crate::domain::value_object::email::Email;
use crate::error::AuthResult;

/// Request reset input
pub struct RequestResetInput {
    pub email: String,
}

/// Request reset use case
pub struct RequestResetUseCase<R, M>
where
    R: UserRepository,
    M: Mailer,
{
    repo: Arc<R>,
    mailer: Arc<M>,
    config: Arc<AuthConfig>,
}

impl<R, M> RequestResetUseCase<R, M>
where
    R: UserRepository,
    M: Mailer,
{
    pub fn new(repo: Arc<R>, mailer: Arc<M>, config: Arc<AuthConfig>) -> Self {
        Self {
            repo,
            mailer,
            config,
        }
    }

    pub async fn execute(&self, input: RequestResetInput) -> AuthResult<()> {
        // A malformed address can't be registered; report success anyway
        let Ok(email) = Email::new(input.email) else {
            return Ok(());
        };

        let Some(mut user) = self.repo.find_by_email(&email).await? else {
            tracing::debug!("Password reset requested for unknown email");
            return Ok(());
        };

        // Overwrites any pending token - single active token per user
        let reset = user.begin_password_reset(self.config.reset_token_ttl);
        self.repo.store_reset(&user.user_id, &reset).await?;

        let mail = MailMessage {
            to: user.email.as_str().to_string(),
            subject: "Your Password Reset Request".to_string(),
            html_body: reset_mail_body(&self.config.reset_url(&reset.token)),
        };

        // Delivery failure must not change the response the caller sees
        if let Err(e) = self.mailer.send(&mail).await {
            tracing::warn!(user_id = %user.user_id, error = %e, "Reset mail delivery failed");
        } else {
            tracing::info!(user_id = %user.user_id, "Password reset mail dispatched");
        }

        Ok(())
    }
}

fn reset_mail_body(reset_url: &str) -> String {
    format!(
        "<p>Hello,</p>\
         <p>You requested a password reset for your account. \
         Click the link below to set a new password:</p>\
         <a href=\"{}\">Reset Password</a>\
         <p>This link will expire in one hour.</p>\
         <p>If you did not request this, please ignore this email.</p>",
        reset_url
    )
}
