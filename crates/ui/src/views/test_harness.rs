use std::sync::Arc;
use std::time::Duration;

use dioxus::core::NoOpMutations;
use dioxus::prelude::*;
use quest_core::model::{Catalog, LevelForms, PointId};
use services::{AppServices, ProgressTracker};
use storage::repository::Storage;

use crate::context::{UiApp, build_app_context};
use crate::views::checklist::toggle_and_notify;
use crate::views::{ChecklistView, FormsView, HeroPanel, NoticeLayer, use_board_provider};

pub const TEST_CATALOG: &str = r#"[
    {"id":"a","icon":"❄️","title":"Alpha","topics":[
        {"name":"First","points":[{"t":"a0","d":"detail a0"},{"t":"a1"}]}
    ]},
    {"id":"b","icon":"⚖️","title":"Beta","topics":[
        {"name":"Second","points":[{"t":"b0"},{"t":"b1"},{"t":"b2"}]}
    ]}
]"#;

#[derive(Clone)]
struct TestApp {
    tracker: Arc<ProgressTracker>,
}

impl UiApp for TestApp {
    fn tracker(&self) -> Arc<ProgressTracker> {
        Arc::clone(&self.tracker)
    }
}

#[derive(Clone, Copy, PartialEq, Eq)]
pub enum ViewKind {
    Checklist,
    Hero,
    Forms,
    Notices,
    /// Checklist plus notices, with the given points toggled on mount the
    /// same way a click does.
    AfterToggles(&'static [&'static str]),
}

#[derive(Props, Clone)]
struct ViewHarnessProps {
    app: Arc<TestApp>,
    view: ViewKind,
}

impl PartialEq for ViewHarnessProps {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

impl Eq for ViewHarnessProps {}

#[component]
fn ViewHarnessRoot(props: ViewHarnessProps) -> Element {
    let app: Arc<dyn UiApp> = props.app.clone();
    use_context_provider(|| build_app_context(&app));
    let board = use_board_provider();

    let view = props.view;
    let tracker = props.app.tracker();
    use_hook(move || {
        if let ViewKind::AfterToggles(ids) = view {
            spawn(async move {
                for id in ids {
                    toggle_and_notify(Arc::clone(&tracker), board, PointId::new(*id)).await;
                }
            });
        }
    });

    match view {
        ViewKind::Checklist => rsx! { ChecklistView {} },
        ViewKind::Hero => rsx! { HeroPanel {} },
        ViewKind::Forms => rsx! { FormsView {} },
        ViewKind::Notices => rsx! { NoticeLayer {} },
        ViewKind::AfterToggles(_) => rsx! {
            ChecklistView {}
            NoticeLayer {}
        },
    }
}

pub struct ViewHarness {
    pub dom: VirtualDom,
    pub storage: Storage,
    pub tracker: Arc<ProgressTracker>,
}

impl ViewHarness {
    pub fn rebuild(&mut self) {
        self.dom.rebuild_in_place();
        drive_dom(&mut self.dom);
    }

    pub async fn run_for(&mut self, duration: Duration) {
        run_dom_for(&mut self.dom, duration).await;
    }

    pub fn render(&self) -> String {
        dioxus_ssr::render(&self.dom)
    }
}

/// Poll spawned tasks and re-render until `duration` of tokio time has passed.
///
/// Under a paused clock the runtime skips ahead to each pending timer.
pub async fn run_dom_for(dom: &mut VirtualDom, duration: Duration) {
    let deadline = tokio::time::Instant::now() + duration;
    for _ in 0..1_000 {
        if tokio::time::Instant::now() >= deadline {
            break;
        }
        let _ = tokio::time::timeout_at(deadline, dom.wait_for_work()).await;
        dom.render_immediate(&mut NoOpMutations);
        dom.process_events();
    }
}

pub fn drive_dom(dom: &mut VirtualDom) {
    dom.process_events();
    dom.render_immediate(&mut NoOpMutations);
    dom.process_events();
}

pub async fn setup_view_harness(view: ViewKind) -> ViewHarness {
    setup_view_harness_with_storage(view, Storage::in_memory(), TEST_CATALOG).await
}

/// Hydrate a tracker over `storage` and mount `view` on a fresh virtual DOM.
///
/// Mutate through `harness.tracker` before calling `rebuild`.
pub async fn setup_view_harness_with_storage(
    view: ViewKind,
    storage: Storage,
    catalog_json: &str,
) -> ViewHarness {
    let catalog = Catalog::from_json(catalog_json).expect("valid catalog");
    let services = AppServices::from_storage(&storage, catalog, LevelForms::default()).await;
    let tracker = services.tracker();

    let app = Arc::new(TestApp {
        tracker: Arc::clone(&tracker),
    });
    let dom = VirtualDom::new_with_props(ViewHarnessRoot, ViewHarnessProps { app, view });

    ViewHarness {
        dom,
        storage,
        tracker,
    }
}
