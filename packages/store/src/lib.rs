pub mod config;
pub mod error;
pub mod models;
pub mod repo;
pub mod validation;

pub mod file_store;
pub use file_store::FileStore;

mod memory;
pub use memory::MemoryStore;

pub use config::{AppSettings, Language};
pub use error::{LoadError, StoreError};
pub use models::{Field, ProfileRecord};
pub use repo::{KeyValueStore, ProfileRepository, PROFILE_KEY};
pub use validation::{FieldError, FieldErrors};
