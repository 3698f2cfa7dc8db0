use dioxus::prelude::*;

use crate::client::util::pagination::page_count;

/// Previous/next controls for a table of `total` rows
#[component]
pub fn Pagination(total: usize, mut page: Signal<usize>) -> Element {
    let pages = page_count(total);
    let current = page().min(pages - 1);

    rsx!(
        div { class: "join mt-4 flex justify-center",
            button {
                class: "join-item btn",
                disabled: current == 0,
                onclick: move |_| page.set(current.saturating_sub(1)),
                "«"
            }
            button { class: "join-item btn btn-disabled",
                "Page {current + 1} of {pages}"
            }
            button {
                class: "join-item btn",
                disabled: current + 1 >= pages,
                onclick: move |_| page.set(current + 1),
                "»"
            }
        }
    )
}
