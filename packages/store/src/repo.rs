//! # Repository — profile persistence on an abstract key-value store
//!
//! [`ProfileRepository`] owns the mapping between the profile screen's data and
//! the device's local key-value storage. All reads and writes go through the
//! [`KeyValueStore`] trait, so the same logic works against an in-memory store
//! (tests) or the filesystem store used on device.
//!
//! ## Keys
//!
//! | Key | Encoding | Value |
//! |-----|----------|-------|
//! | [`PROFILE_KEY`] (`"profileData"`) | JSON | [`ProfileRecord`] |
//! | [`AppSettings::key`] (`"settings"`) | TOML | [`AppSettings`] |
//!
//! ## Read path
//!
//! Reads never fail from the caller's point of view. A missing key yields the
//! defaults; a read or parse failure is logged with `tracing` and also yields
//! the defaults. [`load_checked`](ProfileRepository::load_checked) exposes the
//! underlying error for callers that want to report it.
//!
//! ## Write path
//!
//! A profile write is one full overwrite of [`PROFILE_KEY`]. There is no
//! per-field key. Write errors are returned to the caller.

use crate::config::AppSettings;
use crate::error::{LoadError, StoreError};
use crate::models::ProfileRecord;

/// Storage key holding the JSON-encoded profile record.
pub const PROFILE_KEY: &str = "profileData";

/// Async trait for a string-keyed, string-valued local store.
pub trait KeyValueStore {
    fn get(
        &self,
        key: &str,
    ) -> impl std::future::Future<Output = Result<Option<String>, StoreError>>;
    fn set(
        &self,
        key: &str,
        value: String,
    ) -> impl std::future::Future<Output = Result<(), StoreError>>;
}

/// Profile persistence backed by a [`KeyValueStore`].
#[derive(Clone, Debug)]
pub struct ProfileRepository<S: KeyValueStore> {
    store: S,
}

impl<S: KeyValueStore> ProfileRepository<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Read the stored record. `Ok(None)` when nothing has been saved yet.
    pub async fn load_checked(&self) -> Result<Option<ProfileRecord>, LoadError> {
        let Some(raw) = self.store.get(PROFILE_KEY).await? else {
            return Ok(None);
        };
        ProfileRecord::from_json(&raw)
            .map(Some)
            .map_err(LoadError::from)
    }

    /// Read the stored record, substituting defaults for anything missing or unreadable.
    pub async fn load(&self) -> ProfileRecord {
        match self.load_checked().await {
            Ok(Some(record)) => record,
            Ok(None) => ProfileRecord::default(),
            Err(e) => {
                tracing::warn!("failed to load profile, using defaults: {e}");
                ProfileRecord::default()
            }
        }
    }

    /// Overwrite the stored record.
    pub async fn save(&self, record: &ProfileRecord) -> Result<(), StoreError> {
        let raw = record
            .to_json()
            .map_err(|e| StoreError::serialize(PROFILE_KEY, e))?;
        self.store.set(PROFILE_KEY, raw).await?;
        tracing::debug!("profile saved");
        Ok(())
    }

    /// Read app settings, falling back to [`AppSettings::default`].
    pub async fn load_settings(&self) -> AppSettings {
        match self.store.get(AppSettings::key()).await {
            Ok(Some(raw)) => AppSettings::from_toml(&raw).unwrap_or_else(|e| {
                tracing::warn!("invalid settings, using defaults: {e}");
                AppSettings::default()
            }),
            Ok(None) => AppSettings::default(),
            Err(e) => {
                tracing::warn!("failed to load settings, using defaults: {e}");
                AppSettings::default()
            }
        }
    }

    pub async fn save_settings(&self, settings: &AppSettings) -> Result<(), StoreError> {
        let raw = settings
            .to_toml()
            .map_err(|e| StoreError::serialize(AppSettings::key(), e))?;
        self.store.set(AppSettings::key(), raw).await
    }
}
