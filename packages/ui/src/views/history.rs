use dioxus::prelude::*;

use crate::activity_log::{use_activity_log, LogLevel};
use crate::components::{Button, ButtonVariant};
use crate::i18n::{translate, use_locale};

const PROFILE_CSS: Asset = asset!("/assets/profile.css");

/// Activity log of the profile screen, newest first.
#[component]
pub fn HistoryView() -> Element {
    let language = use_locale()();
    let mut log = use_activity_log();
    let entries = log().entries.clone();

    rsx! {
        document::Stylesheet { href: PROFILE_CSS }
        div {
            class: "history",
            div {
                class: "history-header",
                h1 { class: "profile-title", {translate(language, "history.title")} }
                Button {
                    variant: ButtonVariant::Ghost,
                    disabled: entries.is_empty(),
                    onclick: move |_| log.write().entries.clear(),
                    {translate(language, "history.clear")}
                }
            }
            if entries.is_empty() {
                p { class: "history-empty", {translate(language, "history.empty")} }
            }
            ul {
                class: "history-entries",
                for (i, entry) in entries.iter().enumerate().rev() {
                    li {
                        key: "{i}",
                        class: match entry.level {
                            LogLevel::Error => "history-entry error",
                            LogLevel::Warning => "history-entry warning",
                            LogLevel::Success => "history-entry success",
                            LogLevel::Info => "history-entry info",
                        },
                        span { class: "history-time", "{entry.timestamp}" }
                        span { " {entry.message}" }
                    }
                }
            }
        }
    }
}
