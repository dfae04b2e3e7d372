use dioxus::prelude::*;
use services::talk_message;

use crate::context::AppContext;
use crate::views::use_board;
use crate::vm::HeroVm;

/// Avatar, realm badge and overall progress bar.
#[component]
pub fn HeroPanel() -> Element {
    let ctx = use_context::<AppContext>();
    let mut board = use_board();
    board.watch();

    let tracker = ctx.tracker();
    let snapshot = tracker.snapshot();
    let hero = HeroVm::new(&snapshot, tracker.forms().form(snapshot.level));
    let avatar_class = hero.avatar_class();
    let badge_style = hero.badge_style();
    let bar_style = hero.bar_style();

    rsx! {
        section { class: "hero-section", "data-level": "{hero.level}",
            div {
                id: "freya-avatar",
                class: avatar_class,
                "data-level": "{hero.level}",
                title: "Talk to Freya",
                onclick: move |_| {
                    board.show_toast(talk_message(&tracker.current_form()));
                },
                span { class: "avatar-icon", "{hero.icon}" }
            }
            div { class: "realm",
                span {
                    id: "realm-level",
                    class: "realm-badge",
                    style: badge_style,
                    "{hero.realm_label}"
                }
                div { id: "realm-name", class: "realm-name", "{hero.form_name}" }
            }
            div { class: "progress",
                div { class: "progress-track",
                    div { id: "progress-bar", class: "progress-bar", style: bar_style }
                }
                span { id: "progress-percent", "{hero.percent}%" }
                span { class: "progress-count", "{hero.checked}/{hero.total}" }
            }
        }
    }
}
