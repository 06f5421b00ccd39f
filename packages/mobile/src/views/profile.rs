use dioxus::prelude::*;

use ui::views::ProfileView;

use crate::Route;

#[component]
pub fn Profile() -> Element {
    let nav = use_navigator();

    rsx! {
        ProfileView {
            on_history: move |_| {
                nav.push(Route::History {});
            },
            on_settings: move |_| {
                nav.push(Route::Settings {});
            },
        }
    }
}
