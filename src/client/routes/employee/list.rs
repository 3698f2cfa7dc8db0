use cafe_roster::model::{cafe::CafeDto, employee::EmployeeDto};
use dioxus::document::Title;
use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::{FaPenToSquare, FaPlus, FaTrash};
use dioxus_free_icons::Icon;
use dioxus_logger::tracing;

use crate::client::{
    components::{ConfirmDialog, ErrorAlert, Page, Pagination},
    router::Route,
    util::{api, format::format_days_worked, pagination::page_items},
};

/// Employees table, filtered to a single café when `cafe` holds its id
#[component]
pub fn EmployeeList(cafe: String) -> Element {
    let nav = navigator();

    let mut employees = use_signal(|| None::<Result<Vec<EmployeeDto>, api::ApiError>>);
    let mut cafes = use_signal(Vec::<CafeDto>::new);
    let mut reload = use_signal(|| 0u32);
    let mut page = use_signal(|| 0usize);
    let mut pending_delete = use_signal(|| None::<EmployeeDto>);
    let mut delete_error = use_signal(|| None::<String>);

    use_effect(move || {
        spawn(async move {
            match api::get_cafes(String::new()).await {
                Ok(rows) => cafes.set(rows),
                Err(err) => tracing::warn!("Failed to load cafe filter options: {}", err),
            }
        });
    });

    // Route props are not signals, so the filter is tracked explicitly
    use_effect({
        let cafe = cafe.clone();
        use_reactive!(|(cafe,)| {
            let _ = reload();
            page.set(0);

            spawn(async move {
                employees.set(Some(api::get_employees(cafe).await));
            });
        })
    });

    let confirm_delete = move |_| {
        let Some(employee) = pending_delete.take() else {
            return;
        };

        spawn(async move {
            match api::delete_employee(employee.id.clone()).await {
                Ok(_) => {
                    delete_error.set(None);
                    reload.with_mut(|n| *n += 1);
                }
                Err(err) => {
                    tracing::error!("Failed to delete employee {}: {}", employee.id, err);
                    delete_error.set(Some(err.to_string()));
                }
            }
        });
    };

    rsx!(
        Title { "Employees | Cafe Roster" }
        Page {
            div { class: "w-full max-w-[1440px] flex flex-col gap-4",
                div { class: "flex flex-wrap items-end justify-between gap-2",
                    h1 { class: "text-2xl", "Employees" }
                    div { class: "flex gap-2",
                        select {
                            class: "select",
                            value: "{cafe}",
                            onchange: move |evt| {
                                nav.push(Route::EmployeeList { cafe: evt.value() });
                            },
                            option { value: "", selected: cafe.is_empty(), "All cafes" }
                            for option_cafe in cafes() {
                                option {
                                    key: "{option_cafe.id}",
                                    value: "{option_cafe.id}",
                                    selected: option_cafe.id == cafe,
                                    "{option_cafe.name}"
                                }
                            }
                        }
                        Link { to: Route::EmployeeCreate {}, class: "btn btn-primary flex gap-2",
                            Icon { width: 16, height: 16, icon: FaPlus }
                            "Add New Employee"
                        }
                    }
                }
                if let Some(message) = delete_error() {
                    ErrorAlert { message }
                }
                {
                    match &*employees.read() {
                        None => rsx!(span { class: "loading loading-spinner" }),
                        Some(Err(err)) => rsx!(ErrorAlert { message: err.to_string() }),
                        Some(Ok(rows)) if rows.is_empty() => rsx!(p { "No employees found." }),
                        Some(Ok(rows)) => rsx!(
                            div { class: "overflow-x-auto",
                                table { class: "table table-md",
                                    thead {
                                        tr {
                                            th { "Employee ID" }
                                            th { "Name" }
                                            th { "Email Address" }
                                            th { "Phone Number" }
                                            th { "Days Worked" }
                                            th { "Cafe" }
                                            th { "Actions" }
                                        }
                                    }
                                    tbody {
                                        for employee in page_items(rows, page()).iter().cloned() {
                                            EmployeeRow {
                                                key: "{employee.id}",
                                                employee: employee.clone(),
                                                on_delete: move |employee| pending_delete.set(Some(employee)),
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
        if let Some(employee) = pending_delete() {
            ConfirmDialog {
                title: "Delete employee",
                message: format!("Delete {} ({})?", employee.name, employee.id),
                on_confirm: confirm_delete,
                on_cancel: move |_| pending_delete.set(None),
            }
        }
    )
}

#[component]
fn EmployeeRow(employee: EmployeeDto, on_delete: EventHandler<EmployeeDto>) -> Element {
    let days_worked = format_days_worked(employee.days_worked);
    let deleted = employee.clone();

    rsx!(
        tr {
            td { class: "font-mono", "{employee.id}" }
            td { "{employee.name}" }
            td { "{employee.email_address}" }
            td { "{employee.phone_number}" }
            td { "{days_worked}" }
            td {
                if employee.cafe.is_empty() {
                    span { class: "opacity-50", "Unassigned" }
                } else {
                    "{employee.cafe}"
                }
            }
            td { class: "flex gap-2",
                Link {
                    to: Route::EmployeeEdit { id: employee.id.clone() },
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
