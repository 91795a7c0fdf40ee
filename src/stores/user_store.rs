use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::errors::InternalError;
use crate::errors::internal::CredentialError;
use crate::types::db::{NewUser, UserRecord};

/// Account storage shared by the in-memory and file-backed variants
///
/// Emails are expected to be normalized by the caller; lookups still ignore
/// ASCII case so hand-edited user files behave.
#[async_trait]
pub trait UserStore: Send + Sync {
    /// Short name of the backend, for logs
    fn backend(&self) -> &'static str;

    async fn find_by_email(&self, email: &str) -> Result<Option<UserRecord>, InternalError>;

    /// Insert a new account, assigning the next id
    ///
    /// # Errors
    ///
    /// `CredentialError::DuplicateEmail` when the email is already registered.
    async fn create_user(&self, new_user: NewUser) -> Result<UserRecord, InternalError>;

    async fn count(&self) -> Result<usize, InternalError>;
}

/// Ordered account list with the insert rules both variants share
#[derive(Debug, Clone, Default)]
pub(crate) struct UserDirectory {
    users: Vec<UserRecord>,
}

impl UserDirectory {
    pub(crate) fn new(users: Vec<UserRecord>) -> Self {
        Self { users }
    }

    pub(crate) fn users(&self) -> &[UserRecord] {
        &self.users
    }

    pub(crate) fn find(&self, email: &str) -> Option<&UserRecord> {
        self.users.iter().find(|u| u.email.eq_ignore_ascii_case(email))
    }

    pub(crate) fn insert(&mut self, new_user: NewUser) -> Result<UserRecord, CredentialError> {
        if self.find(&new_user.email).is_some() {
            return Err(CredentialError::DuplicateEmail(new_user.email));
        }

        let id = self.users.iter().map(|u| u.id).max().unwrap_or(0) + 1;
        let record = UserRecord::from_new(id, new_user);
        self.users.push(record.clone());
        Ok(record)
    }

    /// Undo the most recent insert
    pub(crate) fn remove_last(&mut self) {
        self.users.pop();
    }
}

/// Process-lifetime store; accounts vanish on restart
pub struct MemoryUserStore {
    directory: RwLock<UserDirectory>,
}

impl MemoryUserStore {
    /// Store seeded with the demo account
    pub fn new() -> Self {
        Self::with_users(vec![UserRecord::demo()])
    }

    pub fn with_users(users: Vec<UserRecord>) -> Self {
        Self {
            directory: RwLock::new(UserDirectory::new(users)),
        }
    }
}

impl Default for MemoryUserStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl UserStore for MemoryUserStore {
    fn backend(&self) -> &'static str {
        "memory"
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<UserRecord>, InternalError> {
        Ok(self.directory.read().await.find(email).cloned())
    }

    async fn create_user(&self, new_user: NewUser) -> Result<UserRecord, InternalError> {
        let record = self.directory.write().await.insert(new_user)?;
        tracing::debug!("Stored user {} in memory", record.id);
        Ok(record)
    }

    async fn count(&self) -> Result<usize, InternalError> {
        Ok(self.directory.read().await.users().len())
    }
}
