//! Mock sign-in. The "account" is an `{email}` record in session storage; no
//! credentials are checked or kept.

use crate::storage::{SharedStore, StorageError};
use serde::{Deserialize, Serialize};

pub const SESSION_USER_KEY: &str = "user";
pub const MIN_PASSWORD_LEN: usize = 6;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionUser {
    pub email: String,
}

#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    #[error("Please enter a valid email address")]
    InvalidEmail,

    #[error("Password must be at least {0} characters")]
    PasswordTooShort(usize),

    #[error("Passwords do not match")]
    PasswordMismatch,

    #[error("Could not save session: {0}")]
    Storage(#[from] StorageError),

    #[error("Could not encode session: {0}")]
    Encode(#[from] serde_json::Error),
}

#[derive(Clone)]
pub struct SessionAuth {
    storage: SharedStore,
}

impl SessionAuth {
    pub fn new(storage: SharedStore) -> Self {
        Self { storage }
    }

    /// The signed-in user, if any. A missing or malformed record reads as
    /// signed out.
    pub fn current_user(&self) -> Option<SessionUser> {
        let raw = match self.storage.get(SESSION_USER_KEY) {
            Ok(raw) => raw?,
            Err(err) => {
                tracing::debug!(error = %err, "session record unreadable");
                return None;
            }
        };
        match serde_json::from_str(&raw) {
            Ok(user) => Some(user),
            Err(err) => {
                tracing::debug!(error = %err, "ignoring malformed session record");
                None
            }
        }
    }

    pub fn sign_in(&self, email: &str, password: &str) -> Result<SessionUser, AuthError> {
        let email = validate_email(email)?;
        if password.chars().count() < MIN_PASSWORD_LEN {
            return Err(AuthError::PasswordTooShort(MIN_PASSWORD_LEN));
        }
        self.store(SessionUser { email })
    }

    pub fn sign_up(
        &self,
        email: &str,
        password: &str,
        confirm: &str,
    ) -> Result<SessionUser, AuthError> {
        if password != confirm {
            return Err(AuthError::PasswordMismatch);
        }
        self.sign_in(email, password)
    }

    pub fn sign_out(&self) -> Result<(), AuthError> {
        self.storage.remove(SESSION_USER_KEY)?;
        tracing::info!("signed out");
        Ok(())
    }

    fn store(&self, user: SessionUser) -> Result<SessionUser, AuthError> {
        let encoded = serde_json::to_string(&user)?;
        self.storage.set(SESSION_USER_KEY, &encoded)?;
        tracing::info!(email = %user.email, "signed in");
        Ok(user)
    }
}

fn validate_email(raw: &str) -> Result<String, AuthError> {
    let email = raw.trim();
    let Some((local, domain)) = email.split_once('@') else {
        return Err(AuthError::InvalidEmail);
    };
    let plausible = !local.is_empty()
        && domain.contains('.')
        && !domain.starts_with('.')
        && !domain.ends_with('.')
        && !email.chars().any(char::is_whitespace);
    if plausible {
        Ok(email.to_string())
    } else {
        Err(AuthError::InvalidEmail)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;

    #[test]
    fn test_sign_in_stores_email_record() {
        let storage = MemoryStore::shared();
        let auth = SessionAuth::new(storage.clone());

        let user = auth.sign_in("  ada@example.com ", "secret1").unwrap();
        assert_eq!(user.email, "ada@example.com");
        assert_eq!(
            storage.get(SESSION_USER_KEY).unwrap().as_deref(),
            Some(r#"{"email":"ada@example.com"}"#)
        );
        assert_eq!(auth.current_user(), Some(user));
    }

    #[test]
    fn test_sign_out_clears_record() {
        let auth = SessionAuth::new(MemoryStore::shared());
        auth.sign_in("ada@example.com", "secret1").unwrap();
        auth.sign_out().unwrap();
        assert_eq!(auth.current_user(), None);
        // signing out twice is harmless
        auth.sign_out().unwrap();
    }

    #[test]
    fn test_malformed_record_reads_as_signed_out() {
        let storage = MemoryStore::shared();
        storage.set(SESSION_USER_KEY, "{not json").unwrap();
        assert_eq!(SessionAuth::new(storage).current_user(), None);
    }

    #[test]
    fn test_validation() {
        let auth = SessionAuth::new(MemoryStore::shared());
        for bad in ["", "ada", "@example.com", "ada@example", "ada@.com", "a da@example.com"] {
            assert!(
                matches!(auth.sign_in(bad, "secret1"), Err(AuthError::InvalidEmail)),
                "{bad:?}"
            );
        }
        assert!(matches!(
            auth.sign_in("ada@example.com", "123"),
            Err(AuthError::PasswordTooShort(MIN_PASSWORD_LEN))
        ));
        assert!(matches!(
            auth.sign_up("ada@example.com", "secret1", "secret2"),
            Err(AuthError::PasswordMismatch)
        ));
        assert_eq!(auth.current_user(), None);
    }

    #[test]
    fn test_sign_up_signs_in() {
        let auth = SessionAuth::new(MemoryStore::shared());
        let user = auth
            .sign_up("grace@example.org", "hunter22", "hunter22")
            .unwrap();
        assert_eq!(auth.current_user(), Some(user));
    }
}
