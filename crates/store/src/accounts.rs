//! Registered accounts

use std::collections::HashMap;
use std::sync::RwLock;

use common::{Error, Result};
use tracing::{info, warn};
use uuid::Uuid;

#[derive(Debug, Clone)]
pub struct Account {
    pub user_id: String,
    pub name: String,
    pub email: String,
    password_hash: String,
}

/// Accounts keyed by normalized email
#[derive(Debug, Default)]
pub struct Accounts {
    by_email: RwLock<HashMap<String, Account>>,
}

fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

impl Accounts {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&self, name: &str, email: &str, password: &str) -> Result<Account> {
        let email = normalize_email(email);
        let password_hash = auth::hash_password(password)?;
        let mut accounts = self
            .by_email
            .write()
            .map_err(|_| Error::Internal("account store lock poisoned".to_string()))?;

        if accounts.contains_key(&email) {
            warn!("Registration rejected, {} already registered", email);
            return Err(Error::EmailAlreadyRegistered);
        }

        let account = Account {
            user_id: Uuid::new_v4().to_string(),
            name: name.to_string(),
            email: email.clone(),
            password_hash,
        };
        accounts.insert(email, account.clone());

        info!("👤 Registered {} as {}", account.email, account.user_id);
        Ok(account)
    }

    pub fn authenticate(&self, email: &str, password: &str) -> Result<Account> {
        let accounts = self
            .by_email
            .read()
            .map_err(|_| Error::Internal("account store lock poisoned".to_string()))?;

        let account = accounts
            .get(&normalize_email(email))
            .filter(|account| auth::verify_password(password, &account.password_hash));

        match account {
            Some(account) => Ok(account.clone()),
            None => {
                warn!("Failed login for {}", email);
                Err(Error::InvalidCredentials)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_register_and_authenticate() {
        let accounts = Accounts::new();
        let registered = accounts
            .register("Test User", "test@example.com", "password123")
            .unwrap();

        let account = accounts
            .authenticate("test@example.com", "password123")
            .unwrap();
        assert_eq!(account.user_id, registered.user_id);
        assert_eq!(account.name, "Test User");
    }

    #[test]
    fn test_duplicate_email() {
        let accounts = Accounts::new();
        accounts
            .register("Test User", "duplicate@example.com", "password123")
            .unwrap();

        let err = accounts
            .register("Test User 2", " Duplicate@Example.com", "password456")
            .unwrap_err();
        assert!(matches!(err, Error::EmailAlreadyRegistered));
        assert_eq!(err.to_string(), "Email already registered");
    }

    #[test]
    fn test_wrong_password() {
        let accounts = Accounts::new();
        accounts
            .register("Login User", "login@example.com", "password123")
            .unwrap();

        assert!(matches!(
            accounts.authenticate("login@example.com", "wrongpassword"),
            Err(Error::InvalidCredentials)
        ));
    }

    #[test]
    fn test_unknown_email() {
        let accounts = Accounts::new();
        assert!(matches!(
            accounts.authenticate("nonexistent@example.com", "wrongpassword"),
            Err(Error::InvalidCredentials)
        ));
    }

    #[test]
    fn test_user_ids_are_unique() {
        let accounts = Accounts::new();
        let a = accounts.register("A", "a@example.com", "pw").unwrap();
        let b = accounts.register("B", "b@example.com", "pw").unwrap();
        assert_ne!(a.user_id, b.user_id);
    }

    #[test]
    fn test_password_is_stored_hashed() {
        let accounts = Accounts::new();
        let account = accounts
            .register("Hash User", "hash@example.com", "password123")
            .unwrap();

        assert!(account.password_hash.starts_with("$argon2id$"));
        assert!(!account.password_hash.contains("password123"));
    }
}
