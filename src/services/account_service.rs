use std::sync::Arc;

use crate::errors::InternalError;
use crate::errors::internal::CredentialError;
use crate::stores::UserStore;
use crate::types::db::{DEMO_EMAIL, NewUser, UserRecord};
use crate::types::dto::auth::{LoginRequest, RegisterRequest};

/// Shortest password accepted at registration
pub const MIN_PASSWORD_LENGTH: usize = 6;

/// Snapshot of the account store
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreStatus {
    pub backend: &'static str,
    pub demo_user_exists: bool,
    pub total_users: usize,
}

/// Registration and login rules on top of a `UserStore`
///
/// Passwords are compared verbatim; there is no hashing and no session state.
pub struct AccountService {
    user_store: Arc<dyn UserStore>,
}

impl AccountService {
    pub fn new(user_store: Arc<dyn UserStore>) -> Self {
        Self { user_store }
    }

    /// Validate a signup request and store the new account
    ///
    /// # Errors
    ///
    /// * `CredentialError::MissingFields` - name, email, password, phone or city blank
    /// * `CredentialError::InvalidEmail` - email lacks `@` or `.`
    /// * `CredentialError::PasswordTooShort` - password under 6 characters
    /// * `CredentialError::DuplicateEmail` - email already registered
    pub async fn register(&self, request: RegisterRequest) -> Result<UserRecord, InternalError> {
        let missing: Vec<String> = [
            ("name", request.name.trim().is_empty()),
            ("email", request.email.trim().is_empty()),
            ("password", request.password.is_empty()),
            ("phone", request.phone.trim().is_empty()),
            ("city", request.city.trim().is_empty()),
        ]
        .into_iter()
        .filter(|(_, blank)| *blank)
        .map(|(field, _)| field.to_string())
        .collect();

        if !missing.is_empty() {
            return Err(CredentialError::MissingFields(missing).into());
        }

        let email = normalize_email(&request.email);
        if !is_plausible_email(&email) {
            return Err(CredentialError::InvalidEmail(email).into());
        }

        if request.password.chars().count() < MIN_PASSWORD_LENGTH {
            return Err(CredentialError::PasswordTooShort {
                min_length: MIN_PASSWORD_LENGTH,
            }
            .into());
        }

        let record = self
            .user_store
            .create_user(NewUser {
                name: request.name.trim().to_string(),
                email,
                password: request.password,
                phone: request.phone.trim().to_string(),
                city: request.city.trim().to_string(),
                address: request.address.trim().to_string(),
            })
            .await?;

        tracing::info!(
            user_id = record.id,
            backend = self.user_store.backend(),
            "New user registered: {}",
            record.email
        );

        Ok(record)
    }

    /// Check an email/password pair against the store
    ///
    /// Unknown email and wrong password are indistinguishable to the caller.
    pub async fn login(&self, request: LoginRequest) -> Result<UserRecord, InternalError> {
        if request.email.trim().is_empty() || request.password.is_empty() {
            return Err(CredentialError::MissingCredentials.into());
        }

        let email = normalize_email(&request.email);
        match self.user_store.find_by_email(&email).await? {
            Some(user) if user.password == request.password => {
                tracing::info!(user_id = user.id, "User logged in: {}", user.email);
                Ok(user)
            }
            _ => {
                tracing::warn!("Failed login attempt for {}", email);
                Err(CredentialError::InvalidCredentials.into())
            }
        }
    }

    /// Whether the demo account is present and how many accounts exist
    pub async fn store_status(&self) -> Result<StoreStatus, InternalError> {
        let demo_user_exists = self.user_store.find_by_email(DEMO_EMAIL).await?.is_some();
        let total_users = self.user_store.count().await?;

        Ok(StoreStatus {
            backend: self.user_store.backend(),
            demo_user_exists,
            total_users,
        })
    }
}

/// Trim and lowercase an email address
pub fn normalize_email(raw: &str) -> String {
    raw.trim().to_lowercase()
}

fn is_plausible_email(email: &str) -> bool {
    email.contains('@') && email.contains('.')
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stores::MemoryUserStore;
    use crate::test::utils::setup_test_account_service;

    fn register_request(email: &str, password: &str) -> RegisterRequest {
        RegisterRequest {
            name: "  Meera Iyer ".to_string(),
            email: email.to_string(),
            password: password.to_string(),
            phone: "98765 43210".to_string(),
            city: "Bangalore".to_string(),
            address: String::new(),
        }
    }

    fn login_request(email: &str, password: &str) -> LoginRequest {
        LoginRequest {
            email: email.to_string(),
            password: password.to_string(),
        }
    }

    #[tokio::test]
    async fn test_register_then_login() {
        let (_store, service) = setup_test_account_service();

        let created = service
            .register(register_request(" Meera@Example.COM ", "saree123"))
            .await
            .unwrap();
        assert_eq!(created.email, "meera@example.com");
        assert_eq!(created.name, "Meera Iyer");

        let logged_in = service
            .login(login_request("MEERA@example.com", "saree123"))
            .await
            .unwrap();
        assert_eq!(logged_in.id, created.id);
    }

    #[tokio::test]
    async fn test_register_reports_every_missing_field() {
        let (_store, service) = setup_test_account_service();
        let request = RegisterRequest {
            email: "x@example.com".to_string(),
            password: "abcdef".to_string(),
            name: "   ".to_string(),
            ..Default::default()
        };

        let result = service.register(request).await;
        match result {
            Err(InternalError::Credential(CredentialError::MissingFields(fields))) => {
                assert_eq!(fields, vec!["name", "phone", "city"]);
            }
            other => panic!("Expected MissingFields, got: {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_register_rejects_malformed_email() {
        let (_store, service) = setup_test_account_service();

        let result = service.register(register_request("meera-at-example", "saree123")).await;
        assert!(matches!(
            result,
            Err(InternalError::Credential(CredentialError::InvalidEmail(_)))
        ));
    }

    #[tokio::test]
    async fn test_register_rejects_short_password() {
        let (store, service) = setup_test_account_service();

        let result = service.register(register_request("m@example.com", "12345")).await;
        assert!(matches!(
            result,
            Err(InternalError::Credential(CredentialError::PasswordTooShort { min_length: 6 }))
        ));
        assert_eq!(store.count().await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_register_rejects_existing_email_in_any_case() {
        let (_store, service) = setup_test_account_service();

        let result = service.register(register_request("Demo@WearHouse.com", "password123")).await;
        assert!(matches!(
            result,
            Err(InternalError::Credential(CredentialError::DuplicateEmail(_)))
        ));
    }

    #[tokio::test]
    async fn test_login_demo_account() {
        let (_store, service) = setup_test_account_service();

        let user = service
            .login(login_request("demo@wearhouse.com", "password123"))
            .await
            .unwrap();
        assert_eq!(user.name, "Demo User");
    }

    #[tokio::test]
    async fn test_login_wrong_password_and_unknown_email_look_the_same() {
        let (_store, service) = setup_test_account_service();

        let wrong_password = service.login(login_request("demo@wearhouse.com", "nope")).await;
        let unknown = service.login(login_request("ghost@wearhouse.com", "password123")).await;

        assert!(matches!(
            wrong_password,
            Err(InternalError::Credential(CredentialError::InvalidCredentials))
        ));
        assert!(matches!(
            unknown,
            Err(InternalError::Credential(CredentialError::InvalidCredentials))
        ));
    }

    #[tokio::test]
    async fn test_login_requires_both_fields() {
        let (_store, service) = setup_test_account_service();

        let result = service.login(login_request("demo@wearhouse.com", "")).await;
        assert!(matches!(
            result,
            Err(InternalError::Credential(CredentialError::MissingCredentials))
        ));
    }

    #[tokio::test]
    async fn test_store_status_counts_registrations() {
        let (_store, service) = setup_test_account_service();

        let before = service.store_status().await.unwrap();
        assert_eq!(
            before,
            StoreStatus {
                backend: "memory",
                demo_user_exists: true,
                total_users: 1,
            }
        );

        service
            .register(register_request("meera@example.com", "saree123"))
            .await
            .unwrap();

        assert_eq!(service.store_status().await.unwrap().total_users, 2);
    }

    #[tokio::test]
    async fn test_store_status_without_demo_account() {
        let service = AccountService::new(Arc::new(MemoryUserStore::with_users(Vec::new())));

        let status = service.store_status().await.unwrap();
        assert!(!status.demo_user_exists);
        assert_eq!(status.total_users, 0);
    }

    #[test]
    fn test_normalize_email() {
        assert_eq!(normalize_email("  Someone@Mail.COM\n"), "someone@mail.com");
    }
}
