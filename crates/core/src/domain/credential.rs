use std::fs::{self, OpenOptions};
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use tracing::warn;

use super::{ApiKey, CredentialError};

/// Encoded form written when no credential is held.
const CLEARED: &str = "null";

/// Persistence for the JSON-encoded credential.
pub trait CredentialStore {
    fn load(&self) -> Result<Option<String>, CredentialError>;

    fn save(&mut self, raw: &str) -> Result<(), CredentialError>;
}

/// Reads the stored credential.
///
/// An absent or `null` value yields `None`. A value that does not decode is
/// overwritten with `null` and also yields `None`.
pub fn restore_api_key(store: &mut impl CredentialStore) -> Option<ApiKey> {
    let raw = match store.load() {
        Ok(Some(raw)) => raw,
        Ok(None) => return None,
        Err(err) => {
            warn!(error = %err, "failed to read stored credential");
            return None;
        }
    };

    match serde_json::from_str::<Option<ApiKey>>(&raw) {
        Ok(api_key) => api_key,
        Err(err) => {
            warn!(error = %err, "stored credential is malformed, resetting it");
            if let Err(err) = store.save(CLEARED) {
                warn!(error = %err, "failed to reset malformed credential");
            }
            None
        }
    }
}

pub fn persist_api_key(
    store: &mut impl CredentialStore,
    api_key: Option<&ApiKey>,
) -> Result<(), CredentialError> {
    let raw = serde_json::to_string(&api_key)?;
    store.save(&raw)
}

#[derive(Debug, Clone, Default)]
pub struct MemoryCredentialStore {
    value: Option<String>,
}

impl MemoryCredentialStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_value(value: impl Into<String>) -> Self {
        Self {
            value: Some(value.into()),
        }
    }

    pub fn value(&self) -> Option<&str> {
        self.value.as_deref()
    }
}

impl CredentialStore for MemoryCredentialStore {
    fn load(&self) -> Result<Option<String>, CredentialError> {
        Ok(self.value.clone())
    }

    fn save(&mut self, raw: &str) -> Result<(), CredentialError> {
        self.value = Some(raw.to_string());
        Ok(())
    }
}

/// Credential kept in a single file on disk.
#[derive(Debug, Clone)]
pub struct FileCredentialStore {
    path: PathBuf,
}

impl FileCredentialStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl CredentialStore for FileCredentialStore {
    // Invalid UTF-8 is passed through lossily so it fails to decode and gets reset.
    fn load(&self) -> Result<Option<String>, CredentialError> {
        match fs::read(&self.path) {
            Ok(bytes) => Ok(Some(String::from_utf8_lossy(&bytes).into_owned())),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
            Err(err) => Err(err.into()),
        }
    }

    /// Writes the credential readable by the owner only on unix.
    fn save(&mut self, raw: &str) -> Result<(), CredentialError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }

        let mut options = OpenOptions::new();
        options.write(true).create(true).truncate(true);
        #[cfg(unix)]
        {
            use std::os::unix::fs::OpenOptionsExt;
            options.mode(0o600);
        }

        let mut file = options.open(&self.path)?;
        // `mode` only applies on creation.
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            file.set_permissions(fs::Permissions::from_mode(0o600))?;
        }
        file.write_all(raw.as_bytes())?;
        Ok(())
    }
}
