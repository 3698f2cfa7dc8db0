use dioxus::document::{Meta, Title};
use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::{FaMugHot, FaUsers};
use dioxus_free_icons::Icon;

use crate::client::components::{Page, PageLayout};
use crate::client::router::Route;

#[component]
pub fn Home() -> Element {
    rsx!(
        Title { "Cafe Roster" }
        Meta {
            name: "description",
            content: "Manage cafés and the employees assigned to them."
        }
        Page { layout: PageLayout::Centered,
            div { class: "flex flex-col items-center gap-4",
                p { class: "text-2xl",
                    "Cafe Roster"
                }
                p { class: "max-w-128 text-center",
                    "Keep track of your cafés, the staff working at each one, and how long they have been there."
                }
                ul { class: "flex flex-wrap justify-center gap-2",
                    li {
                        Link {
                            to: Route::CafeList {},
                            class: "btn btn-primary w-48 flex gap-2",
                            Icon {
                                width: 24,
                                height: 24,
                                icon: FaMugHot
                            }
                            p { "Cafes" }
                        }
                    }
                    li {
                        Link {
                            to: Route::EmployeeList { cafe: String::new() },
                            class: "btn btn-secondary w-48 flex gap-2",
                            Icon {
                                width: 24,
                                height: 24,
                                icon: FaUsers
                            }
                            p { "Employees" }
                        }
                    }
                }
            }
        }
    )
}
