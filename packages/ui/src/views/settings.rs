use dioxus::prelude::*;

use store::Language;

use crate::activity_log::{log_activity, use_activity_log, LogLevel};
use crate::components::{Button, ButtonVariant, Label};
use crate::i18n::{translate, use_locale};
use crate::make_repo;

const PROFILE_CSS: Asset = asset!("/assets/profile.css");

/// Language preference. Saving updates the locale context, which the
/// profile screen observes as a locale change.
#[component]
pub fn SettingsView() -> Element {
    let mut locale = use_locale();
    let mut activity_log = use_activity_log();
    let mut selected = use_signal(|| *locale.peek());
    let mut save_status = use_signal(|| Option::<bool>::None);

    let handle_save = move |_| {
        spawn(async move {
            let repo = make_repo();
            let mut settings = repo.load_settings().await;
            settings.locale.language = selected();
            match repo.save_settings(&settings).await {
                Ok(()) => {
                    locale.set(selected());
                    log_activity(
                        &mut activity_log,
                        LogLevel::Info,
                        &format!("Language set to {}", selected().code()),
                    );
                    save_status.set(Some(true));
                }
                Err(e) => {
                    log_activity(
                        &mut activity_log,
                        LogLevel::Error,
                        &format!("Could not save settings: {e}"),
                    );
                    save_status.set(Some(false));
                }
            }
        });
    };

    let language = locale();

    rsx! {
        document::Stylesheet { href: PROFILE_CSS }
        div {
            class: "settings",
            h1 { class: "profile-title", {translate(language, "settings.title")} }

            div {
                class: "field",
                Label { html_for: "settings-language", {translate(language, "settings.language")} }
                select {
                    id: "settings-language",
                    class: "input",
                    value: selected().code(),
                    onchange: move |evt: FormEvent| {
                        if let Some(lang) = Language::from_code(&evt.value()) {
                            selected.set(lang);
                            save_status.set(None);
                        }
                    },
                    for lang in Language::ALL {
                        option {
                            key: "{lang.code()}",
                            value: lang.code(),
                            selected: lang == selected(),
                            {translate(language, lang_key(lang))}
                        }
                    }
                }
            }

            div {
                class: "profile-actions",
                Button {
                    variant: ButtonVariant::Primary,
                    onclick: handle_save,
                    {translate(language, "settings.save")}
                }
                if let Some(ok) = save_status() {
                    span {
                        class: if ok { "status status--success" } else { "status status--error" },
                        if ok {
                            {translate(language, "settings.saved")}
                        } else {
                            {translate(language, "settings.save_failed")}
                        }
                    }
                }
            }
        }
    }
}

fn lang_key(lang: Language) -> &'static str {
    match lang {
        Language::En => "lang.en",
        Language::Fr => "lang.fr",
    }
}
