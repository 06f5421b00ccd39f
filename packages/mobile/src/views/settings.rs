use dioxus::prelude::*;

use ui::views::SettingsView;

use super::BackLink;

#[component]
pub fn Settings() -> Element {
    rsx! {
        BackLink {}
        SettingsView {}
    }
}
