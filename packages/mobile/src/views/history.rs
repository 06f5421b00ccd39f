use dioxus::prelude::*;

use ui::views::HistoryView;

use super::BackLink;

#[component]
pub fn History() -> Element {
    rsx! {
        BackLink {}
        HistoryView {}
    }
}
