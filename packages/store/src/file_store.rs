//! # Filesystem-backed key-value store
//!
//! [`FileStore`] is a [`KeyValueStore`] implementation that persists each key to
//! its own file. It is used on device to retain the profile across app restarts.
//!
//! ## Layout
//!
//! ```text
//! <base_dir>/
//! └── kv/
//!     ├── profileData     # JSON profile record
//!     └── settings        # TOML app settings
//! ```
//!
//! Writes go to `<key>.tmp` first and are renamed over the target, so a reader
//! never observes a half-written value.
//!
//! ## Platform data directories
//!
//! Use [`FileStore::platform_default`] to obtain a platform-appropriate base:
//!
//! | Platform | Path |
//! |----------|------|
//! | macOS / iOS | `~/Library/Application Support/profile/` |
//! | Linux | `~/.local/share/profile/` |
//! | Windows | `C:\Users\<user>\AppData\Roaming\profile\` |
//! | Android | App-internal storage |

use std::io::ErrorKind;
use std::path::PathBuf;

use crate::error::StoreError;
use crate::repo::KeyValueStore;

/// Directory name under the platform data dir.
pub const APP_DIR: &str = "profile";

/// Filesystem-backed KeyValueStore for device persistence.
#[derive(Clone, Debug)]
pub struct FileStore {
    base: PathBuf,
}

impl FileStore {
    pub fn new(base: PathBuf) -> Self {
        Self { base }
    }

    /// Store rooted at `<data_dir>/profile`, or `None` when the platform
    /// exposes no data directory.
    pub fn platform_default(data_dir: Option<PathBuf>) -> Option<Self> {
        data_dir.map(|dir| Self::new(dir.join(APP_DIR)))
    }

    fn kv_dir(&self) -> PathBuf {
        self.base.join("kv")
    }

    fn key_path(&self, key: &str) -> PathBuf {
        self.kv_dir().join(key)
    }
}

impl KeyValueStore for FileStore {
    async fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        match std::fs::read_to_string(self.key_path(key)) {
            Ok(value) => Ok(Some(value)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(StoreError::io(key, e)),
        }
    }

    async fn set(&self, key: &str, value: String) -> Result<(), StoreError> {
        std::fs::create_dir_all(self.kv_dir()).map_err(|e| StoreError::io(key, e))?;
        let path = self.key_path(key);
        let tmp = path.with_extension("tmp");
        std::fs::write(&tmp, value).map_err(|e| StoreError::io(key, e))?;
        std::fs::rename(&tmp, &path).map_err(|e| StoreError::io(key, e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ProfileRecord;
    use crate::repo::ProfileRepository;

    fn temp_base(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!(
            "profile_store_{name}_{}",
            std::process::id()
        ));
        let _ = std::fs::remove_dir_all(&dir);
        dir
    }

    #[tokio::test]
    async fn test_file_store_roundtrip() {
        let dir = temp_base("roundtrip");

        let repo = ProfileRepository::new(FileStore::new(dir.clone()));
        let record = ProfileRecord::new("Jane Doe", "jane@example.com", "5551234567")
            .with_avatar("file:///avatars/jane.png");
        repo.save(&record).await.unwrap();

        // Re-open from same directory
        let repo2 = ProfileRepository::new(FileStore::new(dir.clone()));
        assert_eq!(repo2.load().await, record);
        assert!(!dir.join("kv").join("profileData.tmp").exists());

        // Cleanup
        let _ = std::fs::remove_dir_all(&dir);
    }

    #[tokio::test]
    async fn test_missing_key_is_none() {
        let dir = temp_base("missing");
        let store = FileStore::new(dir.clone());

        assert!(store.get("profileData").await.unwrap().is_none());
        assert_eq!(ProfileRepository::new(store).load().await, ProfileRecord::default());
    }

    #[tokio::test]
    async fn test_unwritable_base_reports_error() {
        let dir = temp_base("blocked");
        std::fs::create_dir_all(&dir).unwrap();
        // A regular file where the kv directory should be
        std::fs::write(dir.join("kv"), b"").unwrap();

        let repo = ProfileRepository::new(FileStore::new(dir.clone()));
        let result = repo.save(&ProfileRecord::default()).await;
        assert!(matches!(result, Err(StoreError::Io { .. })));

        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_platform_default() {
        let store = FileStore::platform_default(Some(PathBuf::from("/data"))).unwrap();
        assert_eq!(store.kv_dir(), PathBuf::from("/data/profile/kv"));
        assert!(FileStore::platform_default(None).is_none());
    }
}
