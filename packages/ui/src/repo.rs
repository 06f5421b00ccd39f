//! Shared repository constructor for the app.
//!
//! Returns a [`store::ProfileRepository`] backed by the filesystem store under
//! the platform data directory, or under the working directory when the
//! platform reports none.

pub fn make_repo() -> store::ProfileRepository<store::FileStore> {
    let store = store::FileStore::platform_default(dirs::data_dir()).unwrap_or_else(|| {
        tracing::warn!("no platform data directory, storing profile in working directory");
        store::FileStore::new(std::path::PathBuf::from(".").join(store::file_store::APP_DIR))
    });
    store::ProfileRepository::new(store)
}
