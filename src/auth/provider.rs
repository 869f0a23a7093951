use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Provider error codes, mapped to fixed user-facing strings. Anything a
/// concrete provider reports outside this set collapses to `Unavailable`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthError {
    InvalidEmail,
    WrongPassword,
    EmailInUse,
    WeakPassword,
    UserNotFound,
    Unavailable,
}

impl AuthError {
    pub fn message(&self) -> &'static str {
        match self {
            Self::InvalidEmail => "That e-mail address does not look valid.",
            Self::WrongPassword => "Wrong e-mail or password.",
            Self::EmailInUse => "This e-mail is already registered.",
            Self::WeakPassword => "Password must have at least 6 characters.",
            Self::UserNotFound => "No account found for this e-mail.",
            Self::Unavailable => "Sign-in is unavailable right now. Try again later.",
        }
    }
}

impl std::fmt::Display for AuthError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.message())
    }
}

impl std::error::Error for AuthError {}

#[derive(Debug, Clone)]
pub struct NewUser {
    pub name: String,
    pub nickname: String,
    pub email: String,
    pub password: String,
}

/// The authenticated identity, as the provider reports it. Persisted under
/// the `currentUser` key while a session is active.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuthUser {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub nickname: String,
    pub email: String,
    pub created_at: NaiveDateTime,
}

impl AuthUser {
    /// Name shown in the UI: nickname when set, full name otherwise.
    pub fn display_name(&self) -> &str {
        if self.nickname.is_empty() {
            &self.name
        } else {
            &self.nickname
        }
    }
}

/// Seam to the identity provider. Only the local mock ships; the trait is
/// what the rest of the application is written against.
pub trait IdentityProvider {
    fn sign_up(&mut self, profile: NewUser) -> Result<AuthUser, AuthError>;
    fn sign_in(&mut self, email: &str, password: &str) -> Result<AuthUser, AuthError>;
    fn sign_out(&mut self);
    fn reset_password(&mut self, email: &str) -> Result<(), AuthError>;
}
