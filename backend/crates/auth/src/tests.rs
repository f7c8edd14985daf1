//! Use-case tests against in-memory fakes
//!
//! Covers the account lifecycle end to end: registration (admin
//! assignment, duplicate rejection), login (uniform failures), and the
//! reset-token state machine (single-use, expiry, overwrite).

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use chrono::{DateTime, Duration, Utc};
use uuid::Uuid;

use platform::mailer::{MailMessage, Mailer, MailerError};
use platform::password::HashedPassword;

use crate::application::config::AuthConfig;
use crate::application::token::TokenService;
use crate::application::{
    LoginInput, LoginUseCase, PerformResetInput, PerformResetUseCase, RegisterInput,
    RegisterUseCase, RequestResetInput, RequestResetUseCase,
};
use crate::domain::entity::user::{PuzzleId, User, UserId};
use crate::domain::repository::UserRepository;
use crate::domain::value_object::email::Email;
use crate::domain::value_object::password_reset::PasswordReset;
use crate::error::{AuthError, AuthResult};

// ============================================================================
// Fakes
// ============================================================================

#[derive(Clone, Default)]
struct MemoryUserRepository {
    users: Arc<Mutex<HashMap<Uuid, User>>>,
    solved: Arc<Mutex<HashMap<Uuid, Vec<PuzzleId>>>>,
}

impl MemoryUserRepository {
    fn get(&self, user_id: &UserId) -> Option<User> {
        self.users.lock().unwrap().get(user_id.as_uuid()).cloned()
    }

    fn stored_reset(&self, user_id: &UserId) -> Option<PasswordReset> {
        self.get(user_id).and_then(|u| u.pending_reset)
    }

    fn force_reset(&self, user_id: &UserId, reset: PasswordReset) {
        let mut users = self.users.lock().unwrap();
        users.get_mut(user_id.as_uuid()).unwrap().pending_reset = Some(reset);
    }
}

impl UserRepository for MemoryUserRepository {
    async fn create(&self, user: &User) -> AuthResult<()> {
        self.users
            .lock()
            .unwrap()
            .insert(*user.user_id.as_uuid(), user.clone());
        Ok(())
    }

    async fn find_by_id(&self, user_id: &UserId) -> AuthResult<Option<User>> {
        Ok(self.get(user_id))
    }

    async fn find_by_email(&self, email: &Email) -> AuthResult<Option<User>> {
        Ok(self
            .users
            .lock()
            .unwrap()
            .values()
            .find(|u| u.email == *email)
            .cloned())
    }

    async fn exists_by_email(&self, email: &Email) -> AuthResult<bool> {
        Ok(self
            .users
            .lock()
            .unwrap()
            .values()
            .any(|u| u.email == *email))
    }

    async fn solved_puzzle_ids(&self, user_id: &UserId) -> AuthResult<Vec<PuzzleId>> {
        Ok(self
            .solved
            .lock()
            .unwrap()
            .get(user_id.as_uuid())
            .cloned()
            .unwrap_or_default())
    }

    async fn store_reset(&self, user_id: &UserId, reset: &PasswordReset) -> AuthResult<()> {
        let mut users = self.users.lock().unwrap();
        let user = users
            .get_mut(user_id.as_uuid())
            .ok_or(AuthError::UserNotFound)?;
        user.pending_reset = Some(reset.clone());
        Ok(())
    }

    async fn redeem_reset(
        &self,
        token: &str,
        new_hash: &HashedPassword,
        now: DateTime<Utc>,
    ) -> AuthResult<Option<UserId>> {
        let mut users = self.users.lock().unwrap();
        for user in users.values_mut() {
            if user
                .pending_reset
                .as_ref()
                .is_some_and(|r| r.matches(token, now))
            {
                user.complete_password_reset(new_hash.clone());
                return Ok(Some(user.user_id));
            }
        }
        Ok(None)
    }
}

#[derive(Clone, Default)]
struct MemoryMailer {
    sent: Arc<Mutex<Vec<MailMessage>>>,
}

impl Mailer for MemoryMailer {
    async fn send(&self, mail: &MailMessage) -> Result<(), MailerError> {
        self.sent.lock().unwrap().push(mail.clone());
        Ok(())
    }
}

#[derive(Clone)]
struct FailingMailer;

impl Mailer for FailingMailer {
    async fn send(&self, _mail: &MailMessage) -> Result<(), MailerError> {
        Err(MailerError::Rejected { status: 502 })
    }
}

// ============================================================================
// Helpers
// ============================================================================

fn config_with_admin(admin: &str) -> Arc<AuthConfig> {
    Arc::new(AuthConfig {
        admin_email: Some(Email::new(admin).unwrap()),
        ..AuthConfig::with_random_secret()
    })
}

fn register_use_case(
    repo: &MemoryUserRepository,
    config: &Arc<AuthConfig>,
) -> RegisterUseCase<MemoryUserRepository> {
    RegisterUseCase::new(
        Arc::new(repo.clone()),
        config.clone(),
        TokenService::new(config),
    )
}

async fn register(
    repo: &MemoryUserRepository,
    config: &Arc<AuthConfig>,
    email: &str,
    password: &str,
) -> AuthResult<String> {
    register_use_case(repo, config)
        .execute(RegisterInput {
            email: email.to_string(),
            password: password.to_string(),
        })
        .await
        .map(|out| out.token)
}

async fn login(
    repo: &MemoryUserRepository,
    config: &Arc<AuthConfig>,
    email: &str,
    password: &str,
) -> AuthResult<String> {
    LoginUseCase::new(Arc::new(repo.clone()), TokenService::new(config))
        .execute(LoginInput {
            email: email.to_string(),
            password: password.to_string(),
        })
        .await
        .map(|out| out.token)
}

// ============================================================================
// Registration
// ============================================================================

#[tokio::test]
async fn test_register_assigns_admin_only_for_configured_email() {
    let repo = MemoryUserRepository::default();
    let config = config_with_admin("admin@example.com");

    let token = register(&repo, &config, "Admin@Example.COM", "secret1")
        .await
        .unwrap();
    let verified = TokenService::new(&config).verify(&token).unwrap();
    assert!(verified.is_admin);

    let token = register(&repo, &config, "player@example.com", "secret1")
        .await
        .unwrap();
    let verified = TokenService::new(&config).verify(&token).unwrap();
    assert!(!verified.is_admin);
}

#[tokio::test]
async fn test_register_rejects_duplicate_email_case_insensitive() {
    let repo = MemoryUserRepository::default();
    let config = Arc::new(AuthConfig::with_random_secret());

    register(&repo, &config, "a@x.com", "secret1").await.unwrap();

    let result = register(&repo, &config, "A@x.com", "othersecret").await;
    assert!(matches!(result, Err(AuthError::EmailTaken)));
}

#[tokio::test]
async fn test_register_validates_input() {
    let repo = MemoryUserRepository::default();
    let config = Arc::new(AuthConfig::with_random_secret());

    // Password below minimum length
    let result = register(&repo, &config, "user@example.com", "12345").await;
    assert!(matches!(result, Err(AuthError::Validation(_))));

    // Malformed email
    let result = register(&repo, &config, "not-an-email", "secret1").await;
    assert!(matches!(result, Err(AuthError::Validation(_))));

    // Nothing was persisted
    assert!(repo.users.lock().unwrap().is_empty());
}

// ============================================================================
// Login
// ============================================================================

#[tokio::test]
async fn test_login_roundtrip() {
    let repo = MemoryUserRepository::default();
    let config = Arc::new(AuthConfig::with_random_secret());

    register(&repo, &config, "user@example.com", "secret1")
        .await
        .unwrap();

    let token = login(&repo, &config, "user@example.com", "secret1")
        .await
        .unwrap();

    let email = Email::new("user@example.com").unwrap();
    let user = repo.find_by_email(&email).await.unwrap().unwrap();
    let verified = TokenService::new(&config).verify(&token).unwrap();
    assert_eq!(verified.user_id, user.user_id);
}

#[tokio::test]
async fn test_login_failures_are_uniform() {
    let repo = MemoryUserRepository::default();
    let config = Arc::new(AuthConfig::with_random_secret());

    register(&repo, &config, "user@example.com", "secret1")
        .await
        .unwrap();

    // Unknown email and wrong password produce the identical error
    let unknown = login(&repo, &config, "ghost@example.com", "secret1").await;
    let wrong = login(&repo, &config, "user@example.com", "wrong-pass").await;

    assert!(matches!(unknown, Err(AuthError::InvalidCredentials)));
    assert!(matches!(wrong, Err(AuthError::InvalidCredentials)));
}

// ============================================================================
// Password reset lifecycle
// ============================================================================

#[tokio::test]
async fn test_reset_flow_end_to_end() {
    let repo = MemoryUserRepository::default();
    let config = Arc::new(AuthConfig::with_random_secret());
    let mailer = MemoryMailer::default();

    register(&repo, &config, "user@example.com", "original1")
        .await
        .unwrap();
    let email = Email::new("user@example.com").unwrap();
    let user_id = repo.find_by_email(&email).await.unwrap().unwrap().user_id;

    // Request: token stored and mailed
    RequestResetUseCase::new(
        Arc::new(repo.clone()),
        Arc::new(mailer.clone()),
        config.clone(),
    )
    .execute(RequestResetInput {
        email: "user@example.com".to_string(),
    })
    .await
    .unwrap();

    let reset = repo.stored_reset(&user_id).expect("reset token stored");
    let sent = mailer.sent.lock().unwrap().clone();
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].to, "user@example.com");
    assert!(sent[0].html_body.contains(&reset.token));

    // Perform: password replaced, token consumed
    PerformResetUseCase::new(Arc::new(repo.clone()))
        .execute(PerformResetInput {
            token: reset.token.clone(),
            password: "changed1".to_string(),
        })
        .await
        .unwrap();

    assert!(repo.stored_reset(&user_id).is_none());
    assert!(login(&repo, &config, "user@example.com", "changed1")
        .await
        .is_ok());
    assert!(matches!(
        login(&repo, &config, "user@example.com", "original1").await,
        Err(AuthError::InvalidCredentials)
    ));

    // Reuse: the same token must not work twice
    let reuse = PerformResetUseCase::new(Arc::new(repo.clone()))
        .execute(PerformResetInput {
            token: reset.token,
            password: "again123".to_string(),
        })
        .await;
    assert!(matches!(reuse, Err(AuthError::InvalidResetToken)));
}

#[tokio::test]
async fn test_reset_expired_token_rejected() {
    let repo = MemoryUserRepository::default();
    let config = Arc::new(AuthConfig::with_random_secret());

    register(&repo, &config, "user@example.com", "original1")
        .await
        .unwrap();
    let email = Email::new("user@example.com").unwrap();
    let user_id = repo.find_by_email(&email).await.unwrap().unwrap().user_id;

    // A token whose expiry is already in the past
    let expired = PasswordReset::from_db(
        "aaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaa".to_string(),
        Utc::now() - Duration::seconds(1),
    );
    repo.force_reset(&user_id, expired.clone());

    let result = PerformResetUseCase::new(Arc::new(repo.clone()))
        .execute(PerformResetInput {
            token: expired.token,
            password: "changed1".to_string(),
        })
        .await;

    assert!(matches!(result, Err(AuthError::InvalidResetToken)));
    // Old password still valid
    assert!(login(&repo, &config, "user@example.com", "original1")
        .await
        .is_ok());
}

#[tokio::test]
async fn test_reset_weak_password_does_not_burn_token() {
    let repo = MemoryUserRepository::default();
    let config = Arc::new(AuthConfig::with_random_secret());
    let mailer = MemoryMailer::default();

    register(&repo, &config, "user@example.com", "original1")
        .await
        .unwrap();
    let email = Email::new("user@example.com").unwrap();
    let user_id = repo.find_by_email(&email).await.unwrap().unwrap().user_id;

    RequestResetUseCase::new(
        Arc::new(repo.clone()),
        Arc::new(mailer),
        config.clone(),
    )
    .execute(RequestResetInput {
        email: "user@example.com".to_string(),
    })
    .await
    .unwrap();

    let reset = repo.stored_reset(&user_id).unwrap();

    // Weak password is rejected before the token is looked at
    let weak = PerformResetUseCase::new(Arc::new(repo.clone()))
        .execute(PerformResetInput {
            token: reset.token.clone(),
            password: "123".to_string(),
        })
        .await;
    assert!(matches!(weak, Err(AuthError::Validation(_))));

    // The token survives and can still be redeemed
    PerformResetUseCase::new(Arc::new(repo.clone()))
        .execute(PerformResetInput {
            token: reset.token,
            password: "changed1".to_string(),
        })
        .await
        .unwrap();
}

#[tokio::test]
async fn test_repeated_requests_keep_single_active_token() {
    let repo = MemoryUserRepository::default();
    let config = Arc::new(AuthConfig::with_random_secret());
    let mailer = MemoryMailer::default();

    register(&repo, &config, "user@example.com", "original1")
        .await
        .unwrap();
    let email = Email::new("user@example.com").unwrap();
    let user_id = repo.find_by_email(&email).await.unwrap().unwrap().user_id;

    let use_case = RequestResetUseCase::new(
        Arc::new(repo.clone()),
        Arc::new(mailer),
        config.clone(),
    );

    use_case
        .execute(RequestResetInput {
            email: "user@example.com".to_string(),
        })
        .await
        .unwrap();
    let first = repo.stored_reset(&user_id).unwrap();

    use_case
        .execute(RequestResetInput {
            email: "user@example.com".to_string(),
        })
        .await
        .unwrap();
    let second = repo.stored_reset(&user_id).unwrap();

    assert_ne!(first.token, second.token);

    // The superseded token is dead
    let stale = PerformResetUseCase::new(Arc::new(repo.clone()))
        .execute(PerformResetInput {
            token: first.token,
            password: "changed1".to_string(),
        })
        .await;
    assert!(matches!(stale, Err(AuthError::InvalidResetToken)));

    PerformResetUseCase::new(Arc::new(repo.clone()))
        .execute(PerformResetInput {
            token: second.token,
            password: "changed1".to_string(),
        })
        .await
        .unwrap();
}

#[tokio::test]
async fn test_request_reset_never_reveals_account_existence() {
    let repo = MemoryUserRepository::default();
    let config = Arc::new(AuthConfig::with_random_secret());
    let mailer = MemoryMailer::default();

    // Unknown email: success, nothing sent
    RequestResetUseCase::new(
        Arc::new(repo.clone()),
        Arc::new(mailer.clone()),
        config.clone(),
    )
    .execute(RequestResetInput {
        email: "ghost@example.com".to_string(),
    })
    .await
    .unwrap();
    assert!(mailer.sent.lock().unwrap().is_empty());

    // Known email but broken relay: still success
    register(&repo, &config, "user@example.com", "original1")
        .await
        .unwrap();

    RequestResetUseCase::new(
        Arc::new(repo.clone()),
        Arc::new(FailingMailer),
        config.clone(),
    )
    .execute(RequestResetInput {
        email: "user@example.com".to_string(),
    })
    .await
    .unwrap();
}
