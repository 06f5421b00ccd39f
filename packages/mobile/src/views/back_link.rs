use dioxus::prelude::*;

use crate::Route;

/// Link back to the profile screen, labelled in the current language.
#[component]
pub fn BackLink() -> Element {
    let language = ui::use_locale()();

    rsx! {
        Link {
            class: "back-link",
            to: Route::Profile {},
            {ui::translate(language, "nav.back")}
        }
    }
}
