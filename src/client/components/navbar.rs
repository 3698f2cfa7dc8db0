use dioxus::prelude::*;

pub use crate::client::router::Route;
use crate::client::{
    components::ConfirmDialog,
    util::leave_guard::{leave, use_leave_guard},
};

#[component]
pub fn Navbar() -> Element {
    let nav = navigator();
    let mut guard = use_leave_guard();

    rsx! {
        div {
            class: "navbar bg-base-200 fixed top-0 z-10",
            div {
                class: "navbar-start",
                button {
                    class: "btn btn-ghost",
                    onclick: move |_| leave(guard, Route::Home {}),
                    div { class: "flex items-center gap-2",
                        p { class: "text-xl",
                            "Cafe Roster"
                        }
                        p { class: "text-xs",
                            "v0.1.0"
                        }
                    }
                }
            }
            div {
                class: "navbar-end",
                ul { class: "menu menu-horizontal px-1",
                    li {
                        button { onclick: move |_| leave(guard, Route::CafeList {}), "Cafes" }
                    }
                    li {
                        button {
                            onclick: move |_| leave(guard, Route::EmployeeList { cafe: String::new() }),
                            "Employees"
                        }
                    }
                    li {
                        a { href: "/api/docs", "API Docs" }
                    }
                }
            }
        }

        if guard.read().pending.is_some() {
            ConfirmDialog {
                title: "Discard changes?",
                message: "You have unsaved changes. Leave this page anyway?".to_string(),
                confirm_label: "Leave",
                on_confirm: move |_| {
                    if let Some(to) = guard.write().confirm() {
                        nav.push(to);
                    }
                },
                on_cancel: move |_| guard.write().cancel(),
            }
        }

        Outlet::<Route> {}
    }
}
