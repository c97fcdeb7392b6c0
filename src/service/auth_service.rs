//! Session and account use-cases.
//!
//! # Responsibility
//! - Hold the logged-in user for the page session.
//! - Wrap the store's credential/profile/password operations with
//!   session-level checks (logged-in state, confirmation match).
//!
//! # Invariants
//! - A failed login leaves any existing session untouched.
//! - Profile and password changes refresh the cached session user so the
//!   caller never sees stale fields.

use crate::model::user::{ProfileUpdate, User};
use crate::store::{EntityStore, StoreError};
use log::info;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type AuthResult<T> = Result<T, AuthError>;

#[derive(Debug)]
pub enum AuthError {
    /// Operation requires a logged-in session.
    NotLoggedIn,
    /// New password and its confirmation differ.
    ConfirmationMismatch,
    /// Credential, lookup or persistence failure from the store.
    Store(StoreError),
}

impl Display for AuthError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotLoggedIn => write!(f, "no user is logged in"),
            Self::ConfirmationMismatch => write!(f, "password confirmation does not match"),
            Self::Store(err) => write!(f, "{err}"),
        }
    }
}

impl Error for AuthError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Store(err) => Some(err),
            _ => None,
        }
    }
}

impl From<StoreError> for AuthError {
    fn from(value: StoreError) -> Self {
        Self::Store(value)
    }
}

/// Per-session authentication state.
#[derive(Debug, Default)]
pub struct AuthService {
    current: Option<User>,
}

impl AuthService {
    pub fn new() -> Self {
        Self::default()
    }

    /// Exact-match login; on success the user becomes the session user.
    pub fn login(
        &mut self,
        store: &EntityStore,
        username: &str,
        password: &str,
    ) -> AuthResult<User> {
        let user = store.login(username, password)?;
        info!(
            "event=login module=auth status=ok username={}",
            user.username
        );
        self.current = Some(user.clone());
        Ok(user)
    }

    pub fn logout(&mut self) {
        if let Some(user) = self.current.take() {
            info!(
                "event=logout module=auth status=ok username={}",
                user.username
            );
        }
    }

    pub fn current_user(&self) -> Option<&User> {
        self.current.as_ref()
    }

    /// Partial-field merge onto the session user's record.
    pub fn update_profile(
        &mut self,
        store: &mut EntityStore,
        update: &ProfileUpdate,
    ) -> AuthResult<User> {
        let id = self
            .current
            .as_ref()
            .map(|user| user.id.clone())
            .ok_or(AuthError::NotLoggedIn)?;

        let updated = store.update_user_profile(&id, update)?;
        self.current = Some(updated.clone());
        Ok(updated)
    }

    /// Changes the session user's password.
    ///
    /// The confirmation is checked here (it is a form concern); the current
    /// password is verified by the store before the overwrite.
    pub fn change_password(
        &mut self,
        store: &mut EntityStore,
        current_password: &str,
        new_password: &str,
        confirm_password: &str,
    ) -> AuthResult<()> {
        let id = self
            .current
            .as_ref()
            .map(|user| user.id.clone())
            .ok_or(AuthError::NotLoggedIn)?;

        if new_password != confirm_password {
            return Err(AuthError::ConfirmationMismatch);
        }

        store.change_password(&id, current_password, new_password)?;
        if let Some(user) = self.current.as_mut() {
            user.password = new_password.to_string();
        }
        info!("event=change_password module=auth status=ok user_id={id}");
        Ok(())
    }
}
