use dioxus::prelude::*;
use dioxus_router::{Link, Outlet, Routable};

use crate::views::{ChecklistView, FormsView, HeroPanel, NoticeLayer, use_board_provider};

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Layout)]
        #[route("/", ChecklistView)] Checklist {},
        #[route("/forms", FormsView)] Forms {},
}

#[component]
fn Layout() -> Element {
    use_board_provider();

    rsx! {
        div { class: "app",
            HeroPanel {}
            nav { class: "tabs",
                Link { to: Route::Checklist {}, "Scrolls" }
                Link { to: Route::Forms {}, "Forms" }
            }
            main { class: "content",
                Outlet::<Route> {}
            }
            NoticeLayer {}
        }
    }
}
