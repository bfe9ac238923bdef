//! Access/refresh token pair and the stores that hold it
//!
//! The store is an explicit capability handed to whoever needs the tokens:
//! the bearer middleware reads it, the refresh middleware and the auth
//! service write it. Nothing reads tokens from ambient global state.

use std::fmt;
use std::path::{Path, PathBuf};

use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::Result;

/// Persisted tokens. The refresh token only ever goes to the refresh endpoint.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Credentials {
    pub access_token: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub refresh_token: Option<String>,
}

impl Credentials {
    pub fn new(access_token: impl Into<String>, refresh_token: impl Into<String>) -> Self {
        Self {
            access_token: access_token.into(),
            refresh_token: Some(refresh_token.into()),
        }
    }

    pub fn access_only(access_token: impl Into<String>) -> Self {
        Self {
            access_token: access_token.into(),
            refresh_token: None,
        }
    }
}

// Tokens stay out of logs
impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("access_token", &"<redacted>")
            .field(
                "refresh_token",
                &self.refresh_token.as_ref().map(|_| "<redacted>"),
            )
            .finish()
    }
}

/// Storage capability for the token pair
pub trait CredentialStore: Send + Sync {
    fn get(&self) -> Result<Option<Credentials>>;

    fn set(&self, credentials: Credentials) -> Result<()>;

    fn clear(&self) -> Result<()>;

    fn access_token(&self) -> Result<Option<String>> {
        Ok(self.get()?.map(|c| c.access_token))
    }

    fn refresh_token(&self) -> Result<Option<String>> {
        Ok(self.get()?.and_then(|c| c.refresh_token))
    }

    /// Replace the access token, keeping the stored refresh token
    fn update_access_token(&self, access_token: String) -> Result<()> {
        let refresh_token = self.refresh_token()?;
        self.set(Credentials {
            access_token,
            refresh_token,
        })
    }
}

/// Process-local store
#[derive(Default)]
pub struct MemoryCredentialStore {
    inner: RwLock<Option<Credentials>>,
}

impl MemoryCredentialStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_credentials(credentials: Credentials) -> Self {
        Self {
            inner: RwLock::new(Some(credentials)),
        }
    }
}

impl CredentialStore for MemoryCredentialStore {
    fn get(&self) -> Result<Option<Credentials>> {
        Ok(self.inner.read().clone())
    }

    fn set(&self, credentials: Credentials) -> Result<()> {
        *self.inner.write() = Some(credentials);
        Ok(())
    }

    fn clear(&self) -> Result<()> {
        *self.inner.write() = None;
        Ok(())
    }
}

/// JSON file store; a missing file means no credentials
pub struct FileCredentialStore {
    path: PathBuf,
    lock: RwLock<()>,
}

impl FileCredentialStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            lock: RwLock::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl CredentialStore for FileCredentialStore {
    fn get(&self) -> Result<Option<Credentials>> {
        let _guard = self.lock.read();
        if !self.path.exists() {
            return Ok(None);
        }
        let content = std::fs::read_to_string(&self.path)?;
        if content.trim().is_empty() {
            return Ok(None);
        }
        Ok(Some(serde_json::from_str(&content)?))
    }

    fn set(&self, credentials: Credentials) -> Result<()> {
        let _guard = self.lock.write();
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(&credentials)?;

        // Write to temp file first, then rename over the target
        let temp_path = self.path.with_extension("tmp");
        write_private(&temp_path, content.as_bytes())?;
        std::fs::rename(&temp_path, &self.path)?;
        debug!(path = %self.path.display(), "credentials saved");
        Ok(())
    }

    fn clear(&self) -> Result<()> {
        let _guard = self.lock.write();
        match std::fs::remove_file(&self.path) {
            Ok(()) => {
                debug!(path = %self.path.display(), "credentials removed");
                Ok(())
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

/// Write `content` readable by the owner only
#[cfg(unix)]
fn write_private(path: &Path, content: &[u8]) -> std::io::Result<()> {
    use std::io::Write;
    use std::os::unix::fs::{OpenOptionsExt, PermissionsExt};

    let mut file = std::fs::OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .mode(0o600)
        .open(path)?;
    // mode() only applies on creation; a leftover temp file keeps its own
    file.set_permissions(std::fs::Permissions::from_mode(0o600))?;
    file.write_all(content)?;
    file.sync_all()
}

#[cfg(not(unix))]
fn write_private(path: &Path, content: &[u8]) -> std::io::Result<()> {
    std::fs::write(path, content)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_memory_store_lifecycle() {
        let store = MemoryCredentialStore::new();
        assert!(store.get().unwrap().is_none());

        store.set(Credentials::new("a1", "r1")).unwrap();
        assert_eq!(store.access_token().unwrap().as_deref(), Some("a1"));
        assert_eq!(store.refresh_token().unwrap().as_deref(), Some("r1"));

        store.update_access_token("a2".to_string()).unwrap();
        assert_eq!(store.get().unwrap(), Some(Credentials::new("a2", "r1")));

        store.clear().unwrap();
        assert!(store.get().unwrap().is_none());
    }

    #[test]
    fn test_file_store_persists_across_instances() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("credentials.json");

        FileCredentialStore::new(&path)
            .set(Credentials::new("access", "refresh"))
            .unwrap();

        let reopened = FileCredentialStore::new(&path);
        assert_eq!(
            reopened.get().unwrap(),
            Some(Credentials::new("access", "refresh"))
        );
        assert!(!path.with_extension("tmp").exists());
    }

    #[cfg(unix)]
    #[test]
    fn test_file_store_is_private_to_owner() {
        use std::os::unix::fs::PermissionsExt;

        let dir = tempdir().unwrap();
        let path = dir.path().join("credentials.json");
        std::fs::write(path.with_extension("tmp"), "stale").unwrap();
        std::fs::set_permissions(
            path.with_extension("tmp"),
            std::fs::Permissions::from_mode(0o644),
        )
        .unwrap();

        FileCredentialStore::new(&path)
            .set(Credentials::new("access", "refresh"))
            .unwrap();

        let mode = std::fs::metadata(&path).unwrap().permissions().mode();
        assert_eq!(mode & 0o077, 0, "credentials file mode {:o}", mode & 0o777);
    }

    #[test]
    fn test_file_store_missing_file_is_empty() {
        let dir = tempdir().unwrap();
        let store = FileCredentialStore::new(dir.path().join("none.json"));
        assert!(store.get().unwrap().is_none());
        store.clear().unwrap();
    }

    #[test]
    fn test_file_store_clear_removes_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("credentials.json");
        let store = FileCredentialStore::new(&path);

        store.set(Credentials::access_only("only")).unwrap();
        assert!(path.exists());
        store.clear().unwrap();
        assert!(!path.exists());
        assert!(store.refresh_token().unwrap().is_none());
    }

    #[test]
    fn test_file_store_corrupt_file_is_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("credentials.json");
        std::fs::write(&path, "{not json").unwrap();
        assert!(FileCredentialStore::new(&path).get().is_err());
    }

    #[test]
    fn test_debug_redacts_tokens() {
        let rendered = format!("{:?}", Credentials::new("secret-a", "secret-r"));
        assert!(!rendered.contains("secret"));
    }

    #[test]
    fn test_serialized_field_names() {
        let json = serde_json::to_value(Credentials::new("a", "r")).unwrap();
        assert_eq!(json, serde_json::json!({"accessToken": "a", "refreshToken": "r"}));
    }
}
