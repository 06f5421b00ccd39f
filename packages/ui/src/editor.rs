//! # Profile editor state
//!
//! [`ProfileEditor`] is the in-memory owner of the profile screen's data. It
//! holds the live record, the snapshot taken when editing began, the current
//! [`Mode`] and the per-field error flags. Views keep one editor in a signal
//! and call into it from event handlers.
//!
//! ```text
//!            begin_edit()
//!   Viewing ─────────────▶ Editing
//!      ▲                     │
//!      └─────────────────────┘
//!   save() (valid and written) | cancel()
//! ```
//!
//! Storage and the media picker are the only suspending collaborators. The
//! async methods take them by reference so the editor itself stays plain data.

use store::validation::{filter_input, validate};
use store::{Field, FieldErrors, KeyValueStore, Language, LoadError, ProfileRecord, ProfileRepository};

use crate::media::{MediaLibrary, Permission, PickOptions, PickResult};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Mode {
    #[default]
    Viewing,
    Editing,
}

/// Lifecycle signals the profile screen reacts to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ProfileEvent {
    Mounted,
    LocaleChanged(Language),
}

/// Result of a save attempt, used to pick the alert shown to the user.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SaveOutcome {
    Saved,
    /// At least one field failed validation; see [`ProfileEditor::errors`].
    Invalid,
    /// Validation passed but the write did not go through.
    StorageFailed(String),
}

impl SaveOutcome {
    /// Translation keys for the alert `(title, message)`.
    pub fn alert_keys(&self) -> (&'static str, &'static str) {
        match self {
            SaveOutcome::Saved => ("alerts.success_title", "alerts.saved"),
            SaveOutcome::Invalid => ("alerts.error_title", "alerts.fix_fields"),
            SaveOutcome::StorageFailed(_) => ("alerts.error_title", "alerts.save_failed"),
        }
    }
}

/// Result of an avatar pick.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AvatarPick {
    /// Picking is only available while editing.
    Inactive,
    PermissionDenied,
    Canceled,
    Selected(String),
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ProfileEditor {
    record: ProfileRecord,
    original: ProfileRecord,
    mode: Mode,
    errors: FieldErrors,
}

impl ProfileEditor {
    pub fn new(record: ProfileRecord) -> Self {
        Self {
            original: record.clone(),
            record,
            mode: Mode::Viewing,
            errors: FieldErrors::default(),
        }
    }

    pub fn record(&self) -> &ProfileRecord {
        &self.record
    }

    /// The record captured at the last `begin_edit`, save or load.
    pub fn snapshot(&self) -> &ProfileRecord {
        &self.original
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn is_editing(&self) -> bool {
        self.mode == Mode::Editing
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    pub fn begin_edit(&mut self) {
        self.original = self.record.clone();
        self.mode = Mode::Editing;
    }

    /// Apply the field's input filter and clear its error flag.
    ///
    /// Returns `false` when the filter rejected part of `raw`, in which case
    /// the input showing `raw` is out of step with the record.
    pub fn update_field(&mut self, field: Field, raw: &str) -> bool {
        let filtered = filter_input(field, raw);
        let accepted = filtered == raw;
        self.record.set_field(field, filtered);
        self.errors.clear(field);
        accepted
    }

    /// First half of an avatar pick: decide whether the picker may open.
    pub fn prepare_avatar_pick(&self, permission: Permission) -> Result<PickOptions, AvatarPick> {
        if !self.is_editing() {
            return Err(AvatarPick::Inactive);
        }
        match permission {
            Permission::Granted => Ok(PickOptions::square()),
            Permission::Denied => Err(AvatarPick::PermissionDenied),
        }
    }

    /// Second half of an avatar pick: take the picker's answer.
    pub fn apply_pick(&mut self, result: PickResult) -> AvatarPick {
        if !self.is_editing() {
            return AvatarPick::Inactive;
        }
        match result.selected_uri {
            Some(uri) if !result.canceled => {
                self.record.avatar = Some(uri.clone());
                AvatarPick::Selected(uri)
            }
            _ => AvatarPick::Canceled,
        }
    }

    /// Ask for media access, open the picker and take the chosen image.
    pub async fn pick_avatar<M: MediaLibrary>(&mut self, media: &M) -> AvatarPick {
        if !self.is_editing() {
            return AvatarPick::Inactive;
        }
        let permission = media.request_permission().await;
        let options = match self.prepare_avatar_pick(permission) {
            Ok(options) => options,
            Err(outcome) => return outcome,
        };
        let result = media.pick_image(options).await;
        self.apply_pick(result)
    }

    /// Validate every field and, when all pass, persist the record.
    pub async fn save<S: KeyValueStore>(&mut self, repo: &ProfileRepository<S>) -> SaveOutcome {
        self.errors = validate(&self.record);
        if !self.errors.is_empty() {
            return SaveOutcome::Invalid;
        }

        if let Err(e) = repo.save(&self.record).await {
            tracing::error!("profile write failed: {e}");
            return SaveOutcome::StorageFailed(e.to_string());
        }

        self.original = self.record.clone();
        self.mode = Mode::Viewing;
        SaveOutcome::Saved
    }

    /// Drop unsaved edits and return to viewing.
    pub fn cancel(&mut self) {
        self.record = self.original.clone();
        self.errors = FieldErrors::default();
        self.mode = Mode::Viewing;
    }

    /// Replace the record with what storage holds.
    ///
    /// Nothing stored resets to the placeholder defaults. On a read failure
    /// the current state is kept and the error is returned for reporting.
    pub async fn load<S: KeyValueStore>(&mut self, repo: &ProfileRepository<S>) -> Result<(), LoadError> {
        let record = match repo.load_checked().await {
            Ok(record) => record.unwrap_or_default(),
            Err(e) => {
                tracing::warn!("keeping current profile, load failed: {e}");
                return Err(e);
            }
        };
        *self = Self::new(record);
        Ok(())
    }

    pub async fn handle<S: KeyValueStore>(
        &mut self,
        event: ProfileEvent,
        repo: &ProfileRepository<S>,
    ) -> Result<(), LoadError> {
        match event {
            ProfileEvent::Mounted => tracing::debug!("profile screen mounted"),
            ProfileEvent::LocaleChanged(lang) => {
                tracing::debug!("locale changed to {}, reloading profile", lang.code())
            }
        }
        self.load(repo).await
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use store::models::{DEFAULT_EMAIL, DEFAULT_NAME, DEFAULT_PHONE};
    use store::{FieldError, MemoryStore, PROFILE_KEY};

    use super::*;

    struct ScriptedMedia {
        permission: Permission,
        result: PickResult,
        picks: Cell<u32>,
    }

    impl ScriptedMedia {
        fn new(permission: Permission, result: PickResult) -> Self {
            Self {
                permission,
                result,
                picks: Cell::new(0),
            }
        }
    }

    impl MediaLibrary for ScriptedMedia {
        async fn request_permission(&self) -> Permission {
            self.permission
        }

        async fn pick_image(&self, options: PickOptions) -> PickResult {
            assert_eq!(options, PickOptions::square());
            self.picks.set(self.picks.get() + 1);
            self.result.clone()
        }
    }

    fn jane() -> ProfileRecord {
        ProfileRecord::new("Jane Doe", "jane@example.com", "5551234567")
    }

    async fn loaded_editor(store: &MemoryStore) -> ProfileEditor {
        let mut editor = ProfileEditor::default();
        editor.load(&ProfileRepository::new(store.clone())).await.unwrap();
        editor
    }

    #[tokio::test]
    async fn test_first_load_uses_placeholders() {
        let editor = loaded_editor(&MemoryStore::new()).await;

        assert_eq!(editor.record().name, DEFAULT_NAME);
        assert_eq!(editor.record().email, DEFAULT_EMAIL);
        assert_eq!(editor.record().phone, DEFAULT_PHONE);
        assert!(editor.record().avatar.is_none());
        assert_eq!(editor.mode(), Mode::Viewing);
    }

    #[test]
    fn test_begin_edit_snapshots_record() {
        let mut editor = ProfileEditor::new(jane());
        editor.begin_edit();

        assert!(editor.is_editing());
        assert_eq!(editor.snapshot(), &jane());
    }

    #[test]
    fn test_update_field_filters_and_clears_error() {
        let mut editor = ProfileEditor::new(ProfileRecord::new("", "", ""));
        editor.begin_edit();
        editor.errors = validate(editor.record());
        assert_eq!(editor.errors().name, Some(FieldError::Required));

        editor.update_field(Field::Name, "R2-D2 Droid");
        assert_eq!(editor.record().name, "RD Droid");
        assert!(editor.errors().name.is_none());
        assert_eq!(editor.errors().email, Some(FieldError::Required));

        editor.update_field(Field::Phone, "(555) 123-4567 ext 89");
        assert_eq!(editor.record().phone, "5551234567");

        editor.update_field(Field::Email, "Mixed Case@x");
        assert_eq!(editor.record().email, "Mixed Case@x");
    }

    #[test]
    fn test_update_field_reports_rejected_input() {
        let mut editor = ProfileEditor::new(jane());
        editor.begin_edit();

        assert!(!editor.update_field(Field::Name, "Jane1"));
        assert_eq!(editor.record().field(Field::Name), "Jane");

        assert!(editor.update_field(Field::Phone, "5551234567"));
        assert!(!editor.update_field(Field::Phone, "55512345678"));
        assert_eq!(editor.record().phone, "5551234567");

        assert!(editor.update_field(Field::Name, "Jane D"));
        assert!(editor.update_field(Field::Email, "any thing"));
    }

    #[tokio::test]
    async fn test_save_and_reload_roundtrip() {
        let store = MemoryStore::new();
        let repo = ProfileRepository::new(store.clone());
        let mut editor = loaded_editor(&store).await;

        editor.begin_edit();
        editor.update_field(Field::Name, "Jane Doe");
        editor.update_field(Field::Email, "jane@example.com");
        editor.update_field(Field::Phone, "5551234567");

        assert_eq!(editor.save(&repo).await, SaveOutcome::Saved);
        assert_eq!(editor.mode(), Mode::Viewing);
        assert_eq!(editor.snapshot(), &jane());

        let reloaded = loaded_editor(&store).await;
        assert_eq!(reloaded.record(), &jane());
    }

    #[tokio::test]
    async fn test_save_with_empty_name_stays_editing() {
        let store = MemoryStore::new();
        let repo = ProfileRepository::new(store.clone());
        let mut editor = ProfileEditor::new(jane());

        editor.begin_edit();
        editor.update_field(Field::Name, "   ");

        assert_eq!(editor.save(&repo).await, SaveOutcome::Invalid);
        assert!(editor.is_editing());
        assert_eq!(editor.errors().name, Some(FieldError::Required));
        assert!(editor.errors().email.is_none());
        assert!(editor.errors().phone.is_none());
        assert!(store.raw(PROFILE_KEY).is_none());
    }

    #[tokio::test]
    async fn test_save_with_malformed_email() {
        let store = MemoryStore::new();
        let repo = ProfileRepository::new(store.clone());
        let mut editor = ProfileEditor::new(jane());

        editor.begin_edit();
        editor.update_field(Field::Email, "not-an-email");

        assert_eq!(editor.save(&repo).await, SaveOutcome::Invalid);
        assert_eq!(editor.errors().email, Some(FieldError::InvalidFormat));
        assert!(editor.errors().name.is_none());
        assert!(editor.errors().phone.is_none());
        assert!(editor.is_editing());
    }

    #[tokio::test]
    async fn test_save_never_leaves_editing_on_invalid_field() {
        let repo = ProfileRepository::new(MemoryStore::new());
        let cases = [
            (Field::Name, ""),
            (Field::Email, ""),
            (Field::Email, "a@b"),
            (Field::Phone, ""),
        ];
        for (field, raw) in cases {
            let mut editor = ProfileEditor::new(jane());
            editor.begin_edit();
            editor.update_field(field, raw);
            assert_eq!(editor.save(&repo).await, SaveOutcome::Invalid, "{field:?} = {raw:?}");
            assert!(editor.is_editing());
            assert!(editor.errors().get(field).is_some());
        }
    }

    #[tokio::test]
    async fn test_storage_failure_is_reported_and_keeps_editing() {
        let store = MemoryStore::new();
        let repo = ProfileRepository::new(store.clone());
        let mut editor = ProfileEditor::new(ProfileRecord::default());

        editor.begin_edit();
        editor.update_field(Field::Name, "Jane Doe");
        editor.update_field(Field::Email, "jane@example.com");
        editor.update_field(Field::Phone, "5551234567");
        store.fail_writes(true);

        let outcome = editor.save(&repo).await;
        assert!(matches!(outcome, SaveOutcome::StorageFailed(_)));
        assert_eq!(outcome.alert_keys().1, "alerts.save_failed");
        assert!(editor.is_editing());
        assert_eq!(editor.snapshot(), &ProfileRecord::default());
        assert!(editor.errors().is_empty());
    }

    #[test]
    fn test_cancel_restores_snapshot() {
        let mut editor = ProfileEditor::new(jane().with_avatar("file:///old.png"));
        editor.begin_edit();
        editor.update_field(Field::Name, "Someone Else");
        editor.update_field(Field::Phone, "999");
        editor.update_field(Field::Email, "x");
        editor.apply_pick(PickResult::selected("file:///new.png"));

        editor.cancel();
        assert_eq!(editor.record(), &jane().with_avatar("file:///old.png"));
        assert!(editor.errors().is_empty());
        assert_eq!(editor.mode(), Mode::Viewing);
    }

    #[test]
    fn test_cancel_uses_most_recent_snapshot() {
        let mut editor = ProfileEditor::new(jane());
        editor.begin_edit();
        editor.update_field(Field::Name, "First Pass");
        editor.cancel();

        editor.update_field(Field::Name, "Set While Viewing");
        editor.begin_edit();
        editor.update_field(Field::Name, "Second Pass");
        editor.cancel();

        assert_eq!(editor.record().name, "Set While Viewing");
    }

    #[tokio::test]
    async fn test_pick_avatar_selected() {
        let media = ScriptedMedia::new(Permission::Granted, PickResult::selected("file:///me.png"));
        let mut editor = ProfileEditor::new(jane());
        editor.begin_edit();

        let outcome = editor.pick_avatar(&media).await;
        assert_eq!(outcome, AvatarPick::Selected("file:///me.png".to_string()));
        assert_eq!(editor.record().avatar.as_deref(), Some("file:///me.png"));
    }

    #[tokio::test]
    async fn test_pick_avatar_denied_does_not_open_picker() {
        let media = ScriptedMedia::new(Permission::Denied, PickResult::selected("file:///me.png"));
        let mut editor = ProfileEditor::new(jane());
        editor.begin_edit();

        assert_eq!(editor.pick_avatar(&media).await, AvatarPick::PermissionDenied);
        assert_eq!(media.picks.get(), 0);
        assert!(editor.record().avatar.is_none());
    }

    #[tokio::test]
    async fn test_pick_avatar_canceled_leaves_state() {
        let media = ScriptedMedia::new(Permission::Granted, PickResult::canceled());
        let mut editor = ProfileEditor::new(jane().with_avatar("file:///keep.png"));
        editor.begin_edit();
        let before = editor.clone();

        assert_eq!(editor.pick_avatar(&media).await, AvatarPick::Canceled);
        assert_eq!(editor, before);
    }

    #[tokio::test]
    async fn test_pick_avatar_inactive_while_viewing() {
        let media = ScriptedMedia::new(Permission::Granted, PickResult::selected("file:///me.png"));
        let mut editor = ProfileEditor::new(jane());

        assert_eq!(editor.pick_avatar(&media).await, AvatarPick::Inactive);
        assert_eq!(media.picks.get(), 0);
        assert!(editor.record().avatar.is_none());
    }

    #[tokio::test]
    async fn test_locale_change_reloads_stored_record() {
        let store = MemoryStore::new();
        let repo = ProfileRepository::new(store.clone());
        let mut editor = ProfileEditor::default();
        editor.handle(ProfileEvent::Mounted, &repo).await.unwrap();

        repo.save(&jane()).await.unwrap();
        editor
            .handle(ProfileEvent::LocaleChanged(Language::Fr), &repo)
            .await
            .unwrap();
        assert_eq!(editor.record(), &jane());
    }

    #[tokio::test]
    async fn test_load_failure_keeps_current_state() {
        let store = MemoryStore::new();
        let repo = ProfileRepository::new(store.clone());
        let mut editor = ProfileEditor::new(jane());

        store.set(PROFILE_KEY, "{\"name\": 42".to_string()).await.unwrap();
        assert!(editor.load(&repo).await.is_err());
        assert_eq!(editor.record(), &jane());
    }
}
