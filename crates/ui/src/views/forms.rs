use dioxus::prelude::*;

use crate::context::AppContext;
use crate::views::use_board;
use crate::vm::{FormCardVm, map_form_cards};

#[component]
pub fn FormsView() -> Element {
    let ctx = use_context::<AppContext>();
    let board = use_board();
    board.watch();

    let tracker = ctx.tracker();
    let cards = map_form_cards(&tracker.forms(), tracker.snapshot().level);

    rsx! {
        div { class: "page",
            h2 { "Forms" }
            ul { class: "form-cards",
                for card in cards {
                    FormCard { key: "{card.level}", card: card.clone() }
                }
            }
        }
    }
}

#[component]
fn FormCard(card: FormCardVm) -> Element {
    let class = card.class();

    rsx! {
        li { class: class, style: "border-color: {card.color};",
            span { class: "form-icon", "{card.icon}" }
            div { class: "form-level", "Realm {card.level}" }
            div { class: "form-name", "{card.name}" }
            p { class: "form-quote", "{card.quote}" }
        }
    }
}
