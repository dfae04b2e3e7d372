use std::collections::HashSet;
use std::sync::Arc;

use dioxus::prelude::*;
use quest_core::model::PointId;
use services::{ProgressTracker, feedback_for};
use tracing::debug;

use crate::context::AppContext;
use crate::views::{Board, use_board};
use crate::vm::{PointVm, SectionVm, build_checklist};

#[component]
pub fn ChecklistView() -> Element {
    let ctx = use_context::<AppContext>();
    let board = use_board();
    board.watch();

    let tracker = ctx.tracker();
    let sections = build_checklist(&tracker.catalog(), &tracker.progress());

    // First section starts expanded.
    let first = sections.first().map(|section| section.id.clone());
    let mut open = use_signal(move || first.into_iter().collect::<HashSet<String>>());

    let toggle_open = use_callback(move |section_id: String| {
        let mut set = open.write();
        if !set.remove(&section_id) {
            set.insert(section_id);
        }
    });

    let toggle_point = use_callback(move |point_id: PointId| {
        spawn(toggle_and_notify(Arc::clone(&tracker), board, point_id));
    });

    let open_ids = open.read().clone();

    rsx! {
        div { id: "app-container", class: "scrolls",
            if sections.is_empty() {
                p { class: "empty", "Nothing to study yet." }
            }
            for section in sections {
                ScrollSection {
                    key: "{section.id}",
                    open: open_ids.contains(&section.id),
                    section: section.clone(),
                    on_toggle_open: toggle_open,
                    on_toggle_point: toggle_point,
                }
            }
        }
    }
}

/// Toggle `point_id` and surface the resulting floater and toast on `board`.
pub(super) async fn toggle_and_notify(
    tracker: Arc<ProgressTracker>,
    mut board: Board,
    point_id: PointId,
) {
    let outcome = tracker.toggle(&point_id).await;
    if !outcome.persisted {
        debug!(point = %point_id, "toggle kept in memory only");
    }
    board.bump();
    let feedback = feedback_for(&outcome, &tracker.forms(), &mut rand::rng());
    if let Some(message) = feedback.encouragement {
        board.show_floater(message.to_owned());
    }
    if let Some(message) = feedback.toast {
        board.show_toast(message);
    }
}

#[component]
fn ScrollSection(
    section: SectionVm,
    open: bool,
    on_toggle_open: Callback<String>,
    on_toggle_point: Callback<PointId>,
) -> Element {
    let mut class = String::from("magic-scroll");
    if open {
        class.push_str(" open");
    }
    if section.done {
        class.push_str(" completed");
    }
    let status_class = if section.done {
        "scroll-status done"
    } else {
        "scroll-status"
    };
    let heading = section.heading();
    let section_id = section.id.clone();

    rsx! {
        div { class: "{class}", "data-section": "{section.id}",
            div {
                class: "scroll-header",
                onclick: move |_| on_toggle_open.call(section_id.clone()),
                div { class: "scroll-title", "{heading}" }
                div { class: status_class, "{section.status_label}" }
            }
            div { class: "scroll-content",
                for topic in section.topics.iter() {
                    div { class: "topic-group",
                        div { class: "topic-name", "{topic.name}" }
                        for point in topic.points.iter() {
                            ChecklistItem {
                                key: "{point.id}",
                                point: point.clone(),
                                on_toggle: on_toggle_point,
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn ChecklistItem(point: PointVm, on_toggle: Callback<PointId>) -> Element {
    let class = if point.checked {
        "checklist-item checked"
    } else {
        "checklist-item"
    };
    let point_id = point.id.clone();

    rsx! {
        div {
            class: class,
            "data-point": "{point.id}",
            onclick: move |_| on_toggle.call(point_id.clone()),
            div { class: "rune-checkbox",
                div { class: "checkbox-ring" }
                div { class: "checkbox-core" }
            }
            div { class: "item-text",
                "{point.text}"
                if !point.detail.is_empty() {
                    small { "{point.detail}" }
                }
            }
        }
    }
}
