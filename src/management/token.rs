use std::{io::Error, io::ErrorKind, path::PathBuf};

use crate::types::AuthToken;

#[derive(Debug)]
pub enum StoreError {
    IoError(Error),
    SerdeError(serde_json::Error),
}

impl From<Error> for StoreError {
    fn from(err: Error) -> Self {
        StoreError::IoError(err)
    }
}

/// Persisted bearer-token storage.
///
/// The token lives as pretty-printed JSON in the local data directory and is
/// re-read on demand; the store itself holds no token in memory. Constructed
/// explicitly and handed to whoever needs credential access, so tests can
/// point it at a scratch directory.
#[derive(Clone)]
pub struct TokenStore {
    base: PathBuf,
}

impl TokenStore {
    pub fn new() -> Self {
        let mut base = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
        base.push("mikocli");
        Self { base }
    }

    pub fn at(base: PathBuf) -> Self {
        Self { base }
    }

    pub async fn load(&self) -> Result<AuthToken, StoreError> {
        let path = self.token_path();
        let content = async_fs::read_to_string(&path)
            .await
            .map_err(StoreError::IoError)?;
        let token: AuthToken =
            serde_json::from_str(&content).map_err(StoreError::SerdeError)?;
        Ok(token)
    }

    pub async fn persist(&self, token: &AuthToken) -> Result<(), StoreError> {
        let path = self.token_path();
        if let Some(parent) = path.parent() {
            async_fs::create_dir_all(parent)
                .await
                .map_err(StoreError::IoError)?;
        }

        let json = serde_json::to_string_pretty(token).map_err(StoreError::SerdeError)?;
        async_fs::write(path, json)
            .await
            .map_err(StoreError::IoError)
    }

    /// Removes the stored token. A token that was never stored is not an
    /// error, so repeated logouts stay idempotent.
    pub async fn clear(&self) -> Result<(), StoreError> {
        match async_fs::remove_file(self.token_path()).await {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(()),
            Err(err) => Err(StoreError::IoError(err)),
        }
    }

    fn token_path(&self) -> PathBuf {
        self.base.join("cache/token.json")
    }
}

impl Default for TokenStore {
    fn default() -> Self {
        Self::new()
    }
}
