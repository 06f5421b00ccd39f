use dioxus::prelude::*;
use views::{History, Profile, Settings};

mod views;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[route("/")]
    Root {},
    #[route("/profile")]
    Profile {},
    #[route("/history")]
    History {},
    #[route("/settings")]
    Settings {},
}

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    use_context_provider(|| Signal::new(ui::ActivityLog::default()));

    // Display language, restored from stored settings once on start.
    let mut locale: ui::LocaleSignal = use_context_provider(|| Signal::new(store::Language::default()));
    use_effect(move || {
        spawn(async move {
            let settings = ui::make_repo().load_settings().await;
            if settings.locale.language != *locale.peek() {
                locale.set(settings.locale.language);
            }
        });
    });

    rsx! {
        Router::<Route> {}
    }
}

#[component]
fn Root() -> Element {
    let nav = use_navigator();
    nav.replace(Route::Profile {});
    rsx! {}
}
