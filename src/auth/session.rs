use super::{AuthError, AuthUser, IdentityProvider, NewUser};
use crate::store::{LocalStore, KEY_CURRENT_USER};

type ChangeObserver = Box<dyn Fn(Option<&AuthUser>)>;

/// Owns the signed-in user. Mirrors it under the local `currentUser` key so
/// the next start restores the session, and notifies registered observers on
/// every change.
pub struct Session {
    provider: Box<dyn IdentityProvider>,
    local: LocalStore,
    current: Option<AuthUser>,
    observers: Vec<ChangeObserver>,
}

impl Session {
    /// Restores any saved session from the local store on construction.
    pub fn new(provider: Box<dyn IdentityProvider>, local: LocalStore) -> Self {
        let current = local.get(KEY_CURRENT_USER);
        Self {
            provider,
            local,
            current,
            observers: Vec::new(),
        }
    }

    pub fn current(&self) -> Option<&AuthUser> {
        self.current.as_ref()
    }

    pub fn on_change(&mut self, observer: impl Fn(Option<&AuthUser>) + 'static) {
        self.observers.push(Box::new(observer));
    }

    fn notify(&self) {
        for observer in &self.observers {
            observer(self.current.as_ref());
        }
    }

    fn establish(&mut self, user: AuthUser) {
        if let Err(err) = self.local.set(KEY_CURRENT_USER, &user) {
            log::warn!("cannot persist session: {err}");
        }
        self.current = Some(user);
        self.notify();
    }

    pub fn sign_in(&mut self, email: &str, password: &str) -> Result<AuthUser, AuthError> {
        let user = self.provider.sign_in(email, password)?;
        self.establish(user.clone());
        Ok(user)
    }

    /// Registers and signs the new user straight in.
    pub fn sign_up(&mut self, profile: NewUser) -> Result<AuthUser, AuthError> {
        let user = self.provider.sign_up(profile)?;
        self.establish(user.clone());
        Ok(user)
    }

    pub fn sign_out(&mut self) {
        self.provider.sign_out();
        self.current = None;
        self.local.remove(KEY_CURRENT_USER);
        self.notify();
    }

    pub fn reset_password(&mut self, email: &str) -> Result<(), AuthError> {
        self.provider.reset_password(email)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::LocalProvider;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn session_in(dir: &std::path::Path) -> Session {
        let store = LocalStore::open(dir).unwrap();
        Session::new(Box::new(LocalProvider::new(store.clone())), store)
    }

    #[test]
    fn sign_in_persists_and_sign_out_clears_current_user() {
        let dir = tempfile::tempdir().unwrap();
        let mut session = session_in(dir.path());
        session
            .sign_up(NewUser {
                name: "Ana".into(),
                nickname: String::new(),
                email: "ana@example.com".into(),
                password: "hunter22".into(),
            })
            .unwrap();

        // a second session over the same directory restores the user
        let restored = session_in(dir.path());
        assert_eq!(
            restored.current().map(|u| u.email.as_str()),
            Some("ana@example.com")
        );

        session.sign_out();
        assert!(session.current().is_none());
        let after_logout = session_in(dir.path());
        assert!(after_logout.current().is_none());
    }

    #[test]
    fn observers_see_every_session_change() {
        let dir = tempfile::tempdir().unwrap();
        let mut session = session_in(dir.path());

        let seen: Rc<RefCell<Vec<Option<String>>>> = Rc::default();
        let sink = Rc::clone(&seen);
        session.on_change(move |user| {
            sink.borrow_mut().push(user.map(|u| u.email.clone()));
        });

        session
            .sign_up(NewUser {
                name: "Ana".into(),
                nickname: String::new(),
                email: "ana@example.com".into(),
                password: "hunter22".into(),
            })
            .unwrap();
        session.sign_out();

        assert_eq!(
            *seen.borrow(),
            vec![Some("ana@example.com".to_string()), None]
        );
    }
}
