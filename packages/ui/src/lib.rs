//! This crate contains all shared UI for the workspace.

pub mod components;

// Re-export icon library
pub use dioxus_free_icons::Icon;
pub mod icons {
    pub use dioxus_free_icons::icons::fa_solid_icons::*;
}

mod repo;
pub use repo::make_repo;

pub mod views;

pub mod editor;
pub use editor::{AvatarPick, Mode, ProfileEditor, ProfileEvent, SaveOutcome};

pub mod media;
pub use media::{MediaLibrary, Permission, PickOptions, PickResult, WebviewMediaLibrary};

pub mod i18n;
pub use i18n::{translate, use_locale, LocaleSignal};

pub mod activity_log;
pub use activity_log::{log_activity, use_activity_log, ActivityLog, LogLevel};
