//! File-backed credential store.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tokio::sync::RwLock;
use tracing::info;

use super::error::CredentialError;

/// Storage key for the generative-text API key.
pub const GEMINI_KEY: &str = "gemini_api_key";

/// Storage key for the web-search API key.
pub const SERPER_KEY: &str = "serper_api_key";

/// The stored API keys. Either may be absent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credentials {
    #[serde(default)]
    pub gemini_api_key: Option<String>,
    #[serde(default)]
    pub serper_api_key: Option<String>,
}

impl Credentials {
    /// Create credentials, treating blank keys as absent.
    pub fn new(gemini_api_key: Option<String>, serper_api_key: Option<String>) -> Self {
        Self {
            gemini_api_key: non_blank(gemini_api_key),
            serper_api_key: non_blank(serper_api_key),
        }
    }

    /// Whether both keys are present.
    pub fn is_complete(&self) -> bool {
        self.gemini_api_key.is_some() && self.serper_api_key.is_some()
    }
}

fn non_blank(key: Option<String>) -> Option<String> {
    key.map(|k| k.trim().to_string()).filter(|k| !k.is_empty())
}

/// Mask a key for display, keeping only its last four characters.
///
/// # Examples
///
/// ```
/// use trip_server::credentials::mask_key;
///
/// assert_eq!(mask_key("sk-123456789"), "••••6789");
/// assert_eq!(mask_key("abc"), "••••");
/// ```
pub fn mask_key(key: &str) -> String {
    let chars: Vec<char> = key.chars().collect();
    if chars.len() <= 4 {
        return "••••".to_string();
    }
    let tail: String = chars[chars.len() - 4..].iter().collect();
    format!("••••{tail}")
}

/// Thread-safe credential store persisted to a JSON file.
///
/// The file holds a single object keyed by [`GEMINI_KEY`] and [`SERPER_KEY`].
/// There is no expiry or rotation.
#[derive(Debug, Clone)]
pub struct CredentialStore {
    path: PathBuf,
    inner: Arc<RwLock<Credentials>>,
}

impl CredentialStore {
    /// Open the store at `path`, loading any saved credentials.
    ///
    /// A missing file means no credentials have been saved yet.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, CredentialError> {
        let path = path.into();

        let credentials = match std::fs::read_to_string(&path) {
            Ok(contents) => {
                serde_json::from_str(&contents).map_err(|source| CredentialError::Parse {
                    path: path.clone(),
                    source,
                })?
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Credentials::default(),
            Err(source) => {
                return Err(CredentialError::Read {
                    path: path.clone(),
                    source,
                });
            }
        };

        Ok(Self {
            path,
            inner: Arc::new(RwLock::new(credentials)),
        })
    }

    /// The current credentials.
    pub async fn get(&self) -> Credentials {
        self.inner.read().await.clone()
    }

    /// Replace the stored credentials and write them to disk.
    ///
    /// Creates parent directories if they don't exist. The in-memory copy is
    /// only replaced once the write succeeds.
    pub async fn save(&self, credentials: Credentials) -> Result<(), CredentialError> {
        let mut guard = self.inner.write().await;

        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            tokio::fs::create_dir_all(parent)
                .await
                .map_err(|source| CredentialError::Write {
                    path: parent.to_path_buf(),
                    source,
                })?;
        }

        let json = serde_json::to_string_pretty(&credentials)?;
        tokio::fs::write(&self.path, json)
            .await
            .map_err(|source| CredentialError::Write {
                path: self.path.clone(),
                source,
            })?;

        info!(
            path = %self.path.display(),
            gemini = credentials.gemini_api_key.is_some(),
            serper = credentials.serper_api_key.is_some(),
            "saved API credentials"
        );

        *guard = credentials;
        Ok(())
    }

    /// Get the credential file path.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn blank_keys_are_absent() {
        let creds = Credentials::new(Some("  ".into()), Some(" key ".into()));
        assert_eq!(creds.gemini_api_key, None);
        assert_eq!(creds.serper_api_key.as_deref(), Some("key"));
        assert!(!creds.is_complete());
    }

    #[test]
    fn mask_keeps_last_four() {
        assert_eq!(mask_key("AIzaSyExample1234"), "••••1234");
        assert_eq!(mask_key("1234"), "••••");
        assert_eq!(mask_key(""), "••••");
    }

    #[tokio::test]
    async fn missing_file_is_empty() {
        let dir = tempdir().unwrap();
        let store = CredentialStore::open(dir.path().join("credentials.json")).unwrap();

        assert_eq!(store.get().await, Credentials::default());
    }

    #[test]
    fn invalid_file_is_an_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("credentials.json");
        std::fs::write(&path, "not json").unwrap();

        let err = CredentialStore::open(&path).unwrap_err();
        assert!(matches!(err, CredentialError::Parse { .. }));
    }

    #[tokio::test]
    async fn save_and_reopen() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("credentials.json");
        let store = CredentialStore::open(&path).unwrap();

        let creds = Credentials::new(Some("gemini-secret".into()), Some("serper-secret".into()));
        store.save(creds.clone()).await.unwrap();
        assert_eq!(store.get().await, creds);

        let reopened = CredentialStore::open(&path).unwrap();
        assert_eq!(reopened.get().await, creds);
    }

    #[tokio::test]
    async fn file_uses_fixed_keys() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("credentials.json");
        let store = CredentialStore::open(&path).unwrap();

        store
            .save(Credentials::new(Some("g".into()), Some("s".into())))
            .await
            .unwrap();

        let json: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(json[GEMINI_KEY], "g");
        assert_eq!(json[SERPER_KEY], "s");
    }

    #[tokio::test]
    async fn creates_parent_directories() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("dir").join("credentials.json");
        let store = CredentialStore::open(&path).unwrap();

        store.save(Credentials::default()).await.unwrap();
        assert!(path.exists());
    }
}
