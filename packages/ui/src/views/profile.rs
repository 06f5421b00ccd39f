use dioxus::prelude::*;

use store::validation::PHONE_MAX_LEN;
use store::{Field, Language, ProfileRecord};

use crate::activity_log::{log_activity, use_activity_log, LogLevel};
use crate::components::{reset_input, Alert, AlertDialog, Button, ButtonVariant, Input, Label};
use crate::editor::{AvatarPick, ProfileEditor, ProfileEvent, SaveOutcome};
use crate::i18n::{translate, use_locale};
use crate::icons::{FaCamera, FaClockRotateLeft, FaFloppyDisk, FaGear, FaPen, FaXmark};
use crate::make_repo;
use crate::media::{MediaLibrary, WebviewMediaLibrary};
use crate::Icon;

const PROFILE_CSS: Asset = asset!("/assets/profile.css");
const DEFAULT_AVATAR: Asset = asset!("/assets/default-avatar.svg");

/// The profile screen: read-only card in viewing mode, form in editing mode.
///
/// Navigation targets are supplied by the platform package so this view stays
/// router-agnostic.
#[component]
pub fn ProfileView(on_history: EventHandler<()>, on_settings: EventHandler<()>) -> Element {
    let locale = use_locale();
    let mut activity_log = use_activity_log();
    let mut editor = use_signal(|| ProfileEditor::new(ProfileRecord::default()));
    let mut alert = use_signal(|| Option::<Alert>::None);
    let mut mounted = use_signal(|| false);
    let mut busy = use_signal(|| false);

    // First run is the mount; every later locale change re-runs the effect.
    use_effect(move || {
        let language = locale();
        let event = if *mounted.peek() {
            ProfileEvent::LocaleChanged(language)
        } else {
            ProfileEvent::Mounted
        };
        mounted.set(true);
        spawn(async move {
            let repo = make_repo();
            let mut next = editor.peek().clone();
            match next.handle(event, &repo).await {
                Ok(()) => {
                    editor.set(next);
                    log_activity(&mut activity_log, LogLevel::Info, "Profile loaded");
                }
                Err(e) => log_activity(
                    &mut activity_log,
                    LogLevel::Warning,
                    &format!("Could not read profile, keeping current values: {e}"),
                ),
            }
        });
    });

    let handle_save = move |_| {
        if busy() {
            return;
        }
        busy.set(true);
        spawn(async move {
            let repo = make_repo();
            let mut next = editor();
            let outcome = next.save(&repo).await;
            editor.set(next);

            match &outcome {
                SaveOutcome::Saved => {
                    log_activity(&mut activity_log, LogLevel::Success, "Profile saved")
                }
                SaveOutcome::Invalid => {
                    log_activity(&mut activity_log, LogLevel::Warning, "Profile has invalid fields")
                }
                SaveOutcome::StorageFailed(e) => log_activity(
                    &mut activity_log,
                    LogLevel::Error,
                    &format!("Could not save profile: {e}"),
                ),
            }
            let (title, message) = outcome.alert_keys();
            let language = locale();
            alert.set(Some(Alert::new(
                translate(language, title),
                translate(language, message),
            )));
            busy.set(false);
        });
    };

    let handle_pick_avatar = move |_| {
        if !editor.peek().is_editing() {
            return;
        }
        spawn(async move {
            let media = WebviewMediaLibrary;
            let permission = media.request_permission().await;
            let options = match editor.peek().prepare_avatar_pick(permission) {
                Ok(options) => options,
                Err(AvatarPick::PermissionDenied) => {
                    log_activity(&mut activity_log, LogLevel::Warning, "Photo library access denied");
                    let language = locale();
                    alert.set(Some(Alert::new(
                        translate(language, "alerts.permission_title"),
                        translate(language, "alerts.permission_denied"),
                    )));
                    return;
                }
                Err(_) => return,
            };
            let result = media.pick_image(options).await;
            if let AvatarPick::Selected(_) = editor.write().apply_pick(result) {
                log_activity(&mut activity_log, LogLevel::Info, "Picture selected");
            }
        });
    };

    let language = locale();
    let state = editor();
    let record = state.record().clone();
    let avatar_src = record
        .avatar
        .clone()
        .unwrap_or_else(|| DEFAULT_AVATAR.to_string());
    let error_for = |field: Field| {
        state
            .errors()
            .get(field)
            .map(|err| translate(language, err.message_key(field)).to_string())
    };

    rsx! {
        document::Stylesheet { href: PROFILE_CSS }
        div {
            class: "profile",

            h1 { class: "profile-title", {translate(language, "profile.title")} }

            div {
                class: if state.is_editing() { "profile-avatar profile-avatar--editable" } else { "profile-avatar" },
                onclick: handle_pick_avatar,
                img {
                    src: "{avatar_src}",
                    alt: translate(language, "profile.avatar"),
                }
                if state.is_editing() {
                    span {
                        class: "profile-avatar-badge",
                        title: translate(language, "profile.change_avatar"),
                        Icon { icon: FaCamera, width: 14, height: 14 }
                    }
                }
            }

            if state.is_editing() {
                FieldRow {
                    field: Field::Name,
                    language,
                    value: record.name.clone(),
                    input_type: "text",
                    error: error_for(Field::Name),
                    on_change: move |raw: String| apply_input(editor, Field::Name, raw),
                }
                FieldRow {
                    field: Field::Email,
                    language,
                    value: record.email.clone(),
                    input_type: "email",
                    error: error_for(Field::Email),
                    on_change: move |raw: String| apply_input(editor, Field::Email, raw),
                }
                FieldRow {
                    field: Field::Phone,
                    language,
                    value: record.phone.clone(),
                    input_type: "tel",
                    error: error_for(Field::Phone),
                    on_change: move |raw: String| apply_input(editor, Field::Phone, raw),
                }

                div {
                    class: "profile-actions",
                    Button {
                        variant: ButtonVariant::Primary,
                        disabled: busy(),
                        onclick: handle_save,
                        Icon { icon: FaFloppyDisk, width: 14, height: 14 }
                        {translate(language, "profile.save")}
                    }
                    Button {
                        variant: ButtonVariant::Outline,
                        disabled: busy(),
                        onclick: move |_| editor.write().cancel(),
                        Icon { icon: FaXmark, width: 14, height: 14 }
                        {translate(language, "profile.cancel")}
                    }
                }
            } else {
                dl {
                    class: "profile-card",
                    dt { {translate(language, "profile.name")} }
                    dd { "{record.name}" }
                    dt { {translate(language, "profile.email")} }
                    dd { "{record.email}" }
                    dt { {translate(language, "profile.phone")} }
                    dd { "{record.phone}" }
                }

                div {
                    class: "profile-actions",
                    Button {
                        variant: ButtonVariant::Primary,
                        onclick: move |_| editor.write().begin_edit(),
                        Icon { icon: FaPen, width: 14, height: 14 }
                        {translate(language, "profile.edit")}
                    }
                }

                nav {
                    class: "profile-nav",
                    Button {
                        variant: ButtonVariant::Ghost,
                        onclick: move |_| on_history.call(()),
                        Icon { icon: FaClockRotateLeft, width: 14, height: 14 }
                        {translate(language, "profile.history")}
                    }
                    Button {
                        variant: ButtonVariant::Ghost,
                        onclick: move |_| on_settings.call(()),
                        Icon { icon: FaGear, width: 14, height: 14 }
                        {translate(language, "profile.settings")}
                    }
                }
            }

            AlertDialog { alert, dismiss_label: translate(language, "alerts.ok").to_string() }
        }
    }
}

fn input_id(field: Field) -> String {
    format!("profile-{}", field.as_str())
}

/// Feed a keystroke to the editor and pull the input back in line when the
/// field filter dropped part of it.
fn apply_input(mut editor: Signal<ProfileEditor>, field: Field, raw: String) {
    let accepted = editor.write().update_field(field, &raw);
    if !accepted {
        reset_input(&input_id(field), editor.peek().record().field(field));
    }
}

#[component]
fn FieldRow(
    field: Field,
    language: Language,
    value: String,
    input_type: String,
    error: Option<String>,
    on_change: EventHandler<String>,
) -> Element {
    let (label_key, placeholder_key) = match field {
        Field::Name => ("profile.name", "profile.name_placeholder"),
        Field::Email => ("profile.email", "profile.email_placeholder"),
        Field::Phone => ("profile.phone", "profile.phone_placeholder"),
    };
    let id = input_id(field);
    let (maxlength, inputmode) = match field {
        Field::Phone => (Some(PHONE_MAX_LEN as i64), Some("numeric".to_string())),
        _ => (None, None),
    };

    rsx! {
        div {
            class: "field",
            Label { html_for: id.clone(), {translate(language, label_key)} }
            Input {
                id,
                value,
                input_type,
                placeholder: translate(language, placeholder_key).to_string(),
                invalid: error.is_some(),
                maxlength,
                inputmode,
                oninput: move |evt: FormEvent| on_change.call(evt.value()),
            }
            if let Some(message) = &error {
                p { class: "field-error", "{message}" }
            }
        }
    }
}
