use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::errors::InternalError;
use crate::stores::user_store::{UserDirectory, UserStore};
use crate::types::db::{NewUser, UserRecord};

/// Accounts persisted as a JSON array in a single file
///
/// The whole file is rewritten after every insert (temp file + rename) while
/// the write lock is held, so concurrent registrations are serialized.
pub struct FileUserStore {
    path: PathBuf,
    directory: RwLock<UserDirectory>,
}

impl FileUserStore {
    /// Open the store at `path`, creating it with the demo account if absent
    pub async fn open(path: impl Into<PathBuf>) -> Result<Self, InternalError> {
        let path = path.into();

        let users = match tokio::fs::read_to_string(&path).await {
            Ok(raw) => serde_json::from_str::<Vec<UserRecord>>(&raw)
                .map_err(|e| InternalError::serialization("parse_users_file", e))?,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::info!("Users file {} not found, creating it", path.display());
                let seed = vec![UserRecord::demo()];
                write_users(&path, &seed).await?;
                seed
            }
            Err(e) => return Err(InternalError::io("read_users_file", e)),
        };

        tracing::info!("Loaded {} users from {}", users.len(), path.display());

        Ok(Self {
            path,
            directory: RwLock::new(UserDirectory::new(users)),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

async fn write_users(path: &Path, users: &[UserRecord]) -> Result<(), InternalError> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            tokio::fs::create_dir_all(parent)
                .await
                .map_err(|e| InternalError::io("create_users_dir", e))?;
        }
    }

    let body = serde_json::to_vec_pretty(users)
        .map_err(|e| InternalError::serialization("serialize_users", e))?;

    let mut tmp = path.as_os_str().to_owned();
    tmp.push(".tmp");
    let tmp = PathBuf::from(tmp);

    tokio::fs::write(&tmp, body)
        .await
        .map_err(|e| InternalError::io("write_users_file", e))?;
    tokio::fs::rename(&tmp, path)
        .await
        .map_err(|e| InternalError::io("replace_users_file", e))?;

    Ok(())
}

#[async_trait]
impl UserStore for FileUserStore {
    fn backend(&self) -> &'static str {
        "file"
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<UserRecord>, InternalError> {
        Ok(self.directory.read().await.find(email).cloned())
    }

    async fn create_user(&self, new_user: NewUser) -> Result<UserRecord, InternalError> {
        let mut directory = self.directory.write().await;
        let record = directory.insert(new_user)?;

        if let Err(e) = write_users(&self.path, directory.users()).await {
            directory.remove_last();
            return Err(e);
        }

        tracing::debug!("Stored user {} in {}", record.id, self.path.display());
        Ok(record)
    }

    async fn count(&self) -> Result<usize, InternalError> {
        Ok(self.directory.read().await.users().len())
    }
}
