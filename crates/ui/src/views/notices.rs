use dioxus::prelude::*;

use crate::views::use_board;

/// Toast and encouragement floater.
#[component]
pub fn NoticeLayer() -> Element {
    let board = use_board();
    let toast = board.toast.read().clone();
    let floater = board.floater.read().clone();

    let toast_class = if toast.is_some() { "toast show" } else { "toast" };
    let toast_text = toast.map(|notice| notice.message).unwrap_or_default();

    rsx! {
        div { id: "toast", class: toast_class, "{toast_text}" }
        if let Some(floater) = floater {
            div { key: "{floater.id}", class: "encourage-floater", "{floater.message}" }
        }
    }
}
