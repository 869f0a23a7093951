use chrono::Utc;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{AuthError, AuthUser, IdentityProvider, NewUser};
use crate::store::{LocalStore, KEY_USERS};

/// Stored shape of a registered user. The password sits next to the profile
/// as-is: this provider is the offline stand-in for an external identity
/// service, not a credential system.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct StoredUser {
    #[serde(flatten)]
    user: AuthUser,
    password: String,
}

/// Mock identity provider keeping its user list under the local `users` key.
pub struct LocalProvider {
    store: LocalStore,
}

impl LocalProvider {
    pub fn new(store: LocalStore) -> Self {
        Self { store }
    }

    fn users(&self) -> Vec<StoredUser> {
        self.store.get(KEY_USERS).unwrap_or_default()
    }

    fn save_users(&self, users: &[StoredUser]) -> Result<(), AuthError> {
        self.store.set(KEY_USERS, &users).map_err(|err| {
            log::error!("cannot persist user list: {err}");
            AuthError::Unavailable
        })
    }
}

fn validate(profile: &NewUser) -> Result<(), AuthError> {
    if !profile.email.contains('@') || profile.email.trim().len() < 3 {
        return Err(AuthError::InvalidEmail);
    }
    if profile.password.chars().count() < 6 {
        return Err(AuthError::WeakPassword);
    }
    Ok(())
}

impl IdentityProvider for LocalProvider {
    fn sign_up(&mut self, profile: NewUser) -> Result<AuthUser, AuthError> {
        validate(&profile)?;

        let mut users = self.users();
        if users
            .iter()
            .any(|u| u.user.email.eq_ignore_ascii_case(&profile.email))
        {
            return Err(AuthError::EmailInUse);
        }

        let user = AuthUser {
            id: Uuid::new_v4().to_string(),
            name: profile.name,
            nickname: profile.nickname,
            email: profile.email.trim().to_string(),
            created_at: Utc::now().naive_utc(),
        };
        users.push(StoredUser {
            user: user.clone(),
            password: profile.password,
        });
        self.save_users(&users)?;

        Ok(user)
    }

    fn sign_in(&mut self, email: &str, password: &str) -> Result<AuthUser, AuthError> {
        let users = self.users();
        let found = users
            .iter()
            .find(|u| u.user.email.eq_ignore_ascii_case(email.trim()))
            .ok_or(AuthError::UserNotFound)?;

        if found.password != password {
            return Err(AuthError::WrongPassword);
        }
        Ok(found.user.clone())
    }

    fn sign_out(&mut self) {}

    fn reset_password(&mut self, email: &str) -> Result<(), AuthError> {
        let users = self.users();
        if !users
            .iter()
            .any(|u| u.user.email.eq_ignore_ascii_case(email.trim()))
        {
            return Err(AuthError::UserNotFound);
        }
        // a real provider would send a reset e-mail here
        log::info!("password reset requested for {email}");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn provider() -> (tempfile::TempDir, LocalProvider) {
        let dir = tempfile::tempdir().unwrap();
        let store = LocalStore::open(dir.path()).unwrap();
        (dir, LocalProvider::new(store))
    }

    fn ana() -> NewUser {
        NewUser {
            name: "Ana Souza".into(),
            nickname: "Ana".into(),
            email: "ana@example.com".into(),
            password: "hunter22".into(),
        }
    }

    #[test]
    fn sign_up_then_sign_in() {
        let (_dir, mut provider) = provider();
        let created = provider.sign_up(ana()).unwrap();
        let signed_in = provider.sign_in("ana@example.com", "hunter22").unwrap();
        assert_eq!(created, signed_in);
    }

    #[test]
    fn duplicate_email_is_rejected() {
        let (_dir, mut provider) = provider();
        provider.sign_up(ana()).unwrap();
        assert_eq!(provider.sign_up(ana()), Err(AuthError::EmailInUse));
    }

    #[test]
    fn wrong_password_and_unknown_user_are_distinct() {
        let (_dir, mut provider) = provider();
        provider.sign_up(ana()).unwrap();
        assert_eq!(
            provider.sign_in("ana@example.com", "nope"),
            Err(AuthError::WrongPassword)
        );
        assert_eq!(
            provider.sign_in("bob@example.com", "hunter22"),
            Err(AuthError::UserNotFound)
        );
    }

    #[test]
    fn weak_password_and_invalid_email_are_rejected() {
        let (_dir, mut provider) = provider();
        let mut weak = ana();
        weak.password = "12345".into();
        assert_eq!(provider.sign_up(weak), Err(AuthError::WeakPassword));

        let mut invalid = ana();
        invalid.email = "not-an-email".into();
        assert_eq!(provider.sign_up(invalid), Err(AuthError::InvalidEmail));
    }

    #[test]
    fn reset_password_requires_a_known_account() {
        let (_dir, mut provider) = provider();
        provider.sign_up(ana()).unwrap();
        assert!(provider.reset_password("ana@example.com").is_ok());
        assert_eq!(
            provider.reset_password("ghost@example.com"),
            Err(AuthError::UserNotFound)
        );
    }
}
