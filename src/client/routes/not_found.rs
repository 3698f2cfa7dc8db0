use dioxus::document::Title;
use dioxus::prelude::*;

use crate::client::{
    components::{Page, PageLayout},
    router::Route,
};

#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    let path = segments.join("/");

    rsx!(
        Title { "Not Found | Cafe Roster" }
        Page { layout: PageLayout::Centered,
            div { class: "flex flex-col items-center gap-4",
                p { class: "text-2xl", "Page not found" }
                p { class: "text-sm", "/{path}" }
                Link { to: Route::Home {}, class: "btn btn-primary", "Back to home" }
            }
        }
    )
}
