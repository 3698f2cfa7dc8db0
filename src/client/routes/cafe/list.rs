use cafe_roster::model::cafe::CafeDto;
use dioxus::document::Title;
use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::{FaPenToSquare, FaPlus, FaTrash};
use dioxus_free_icons::Icon;
use dioxus_logger::tracing;

use crate::client::{
    components::{ConfirmDialog, ErrorAlert, Page, Pagination},
    router::Route,
    util::{api, format::logo_src, pagination::page_items},
};

#[component]
pub fn CafeList() -> Element {
    let mut location = use_signal(String::new);
    let mut cafes = use_signal(|| None::<Result<Vec<CafeDto>, api::ApiError>>);
    let mut reload = use_signal(|| 0u32);
    let mut page = use_signal(|| 0usize);
    let mut pending_delete = use_signal(|| None::<CafeDto>);
    let mut delete_error = use_signal(|| None::<String>);

    // Refetch whenever the filter changes or after a delete
    use_effect(move || {
        let location = location();
        let _ = reload();

        spawn(async move {
            cafes.set(Some(api::get_cafes(location.trim().to_string()).await));
        });
    });

    let confirm_delete = move |_| {
        let Some(cafe) = pending_delete.take() else {
            return;
        };

        spawn(async move {
            match api::delete_cafe(cafe.id.clone()).await {
                Ok(_) => {
                    delete_error.set(None);
                    reload.with_mut(|n| *n += 1);
                }
                Err(err) => {
                    tracing::error!("Failed to delete cafe {}: {}", cafe.id, err);
                    delete_error.set(Some(err.to_string()));
                }
            }
        });
    };

    rsx!(
        Title { "Cafes | Cafe Roster" }
        Page {
            div { class: "w-full max-w-[1440px] flex flex-col gap-4",
                div { class: "flex flex-wrap items-end justify-between gap-2",
                    h1 { class: "text-2xl", "Cafes" }
                    div { class: "flex gap-2",
                        input {
                            class: "input",
                            placeholder: "Filter by location",
                            value: "{location}",
                            oninput: move |evt| {
                                location.set(evt.value());
                                page.set(0);
                            },
                        }
                        Link { to: Route::CafeCreate {}, class: "btn btn-primary flex gap-2",
                            Icon { width: 16, height: 16, icon: FaPlus }
                            "Add New Cafe"
                        }
                    }
                }
                if let Some(message) = delete_error() {
                    ErrorAlert { message }
                }
                {
                    match &*cafes.read() {
                        None => rsx!(span { class: "loading loading-spinner" }),
                        Some(Err(err)) => rsx!(ErrorAlert { message: err.to_string() }),
                        Some(Ok(rows)) if rows.is_empty() => rsx!(p { "No cafes found." }),
                        Some(Ok(rows)) => rsx!(
                            div { class: "overflow-x-auto",
                                table { class: "table table-md",
                                    thead {
                                        tr {
                                            th { "Logo" }
                                            th { "Name" }
                                            th { "Description" }
                                            th { "Employees" }
                                            th { "Location" }
                                            th { "Actions" }
                                        }
                                    }
                                    tbody {
                                        for cafe in page_items(rows, page()).iter().cloned() {
                                            CafeRow {
                                                key: "{cafe.id}",
                                                cafe: cafe.clone(),
                                                on_delete: move |cafe| pending_delete.set(Some(cafe)),
                                            }
                                        }
                                    }
                                }
                            }
                            Pagination { total: rows.len(), page }
                        ),
                    }
                }
            }
        }
        if let Some(cafe) = pending_delete() {
            ConfirmDialog {
                title: "Delete cafe",
                message: format!(
                    "Delete {}? Its {} employee(s) will no longer be assigned to a cafe.",
                    cafe.name, cafe.employees
                ),
                on_confirm: confirm_delete,
                on_cancel: move |_| pending_delete.set(None),
            }
        }
    )
}

#[component]
fn CafeRow(cafe: CafeDto, on_delete: EventHandler<CafeDto>) -> Element {
    let logo = cafe.logo.clone().map(|logo| logo_src(&logo));
    let deleted = cafe.clone();

    rsx!(
        tr {
            td {
                if let Some(src) = logo {
                    div { class: "avatar",
                        div { class: "w-10 h-10 rounded",
                            img { src: "{src}", alt: "{cafe.name} logo" }
                        }
                    }
                }
            }
            td { "{cafe.name}" }
            td { class: "max-w-96", "{cafe.description}" }
            td {
                Link {
                    to: Route::EmployeeList { cafe: cafe.id.clone() },
                    class: "link",
                    "{cafe.employees}"
                }
            }
            td { "{cafe.location}" }
            td { class: "flex gap-2",
                Link {
                    to: Route::CafeEdit { id: cafe.id.clone() },
                    class: "btn btn-sm btn-outline",
                    Icon { width: 14, height: 14, icon: FaPenToSquare }
                    "Edit"
                }
                button {
                    class: "btn btn-sm btn-error btn-outline",
                    onclick: move |_| on_delete.call(deleted.clone()),
                    Icon { width: 14, height: 14, icon: FaTrash }
                    "Delete"
                }
            }
        }
    )
}
