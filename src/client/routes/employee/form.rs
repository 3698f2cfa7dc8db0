use cafe_roster::model::{
    cafe::CafeDto,
    employee::{EmployeeDto, EmployeePayload, Gender},
};
use dioxus::document::Title;
use dioxus::prelude::*;
use dioxus_logger::tracing;

use crate::client::{
    components::{ErrorAlert, Page, TextField},
    router::Route,
    util::{
        api,
        leave_guard::{leave, use_dirty_form, use_leave_guard},
        validation::validate_employee_form,
    },
};

#[component]
pub fn EmployeeCreate() -> Element {
    rsx!(
        Title { "Add Employee | Cafe Roster" }
        EmployeeFormPage { id: None }
    )
}

#[component]
pub fn EmployeeEdit(id: String) -> Element {
    rsx!(
        Title { "Edit Employee | Cafe Roster" }
        EmployeeFormPage { id: Some(id) }
    )
}

/// Form values, compared against the last loaded values to spot unsaved edits
#[derive(Clone, Debug, Default, PartialEq)]
struct EmployeeFields {
    name: String,
    email_address: String,
    phone_number: String,
    gender: String,
    cafe_id: String,
}

impl From<&EmployeeDto> for EmployeeFields {
    fn from(employee: &EmployeeDto) -> Self {
        Self {
            name: employee.name.clone(),
            email_address: employee.email_address.clone(),
            phone_number: employee.phone_number.clone(),
            gender: employee.gender.clone(),
            cafe_id: employee.cafe_id.clone().unwrap_or_default(),
        }
    }
}

#[component]
fn EmployeeFormPage(#[props(!optional)] id: Option<String>) -> Element {
    let nav = navigator();
    let mut guard = use_leave_guard();

    let mut name = use_signal(String::new);
    let mut email_address = use_signal(String::new);
    let mut phone_number = use_signal(String::new);
    let mut gender = use_signal(String::new);
    let mut cafe_id = use_signal(String::new);
    let mut saved = use_signal(EmployeeFields::default);
    let mut cafes = use_signal(Vec::<CafeDto>::new);
    let mut error = use_signal(|| None::<String>);
    let mut submitting = use_signal(|| false);
    let mut loaded = use_signal(|| id.is_none());

    let dirty = use_memo(move || {
        let fields = EmployeeFields {
            name: name(),
            email_address: email_address(),
            phone_number: phone_number(),
            gender: gender(),
            cafe_id: cafe_id(),
        };
        fields != saved()
    });
    use_dirty_form(dirty);

    use_effect(move || {
        spawn(async move {
            match api::get_cafes(String::new()).await {
                Ok(rows) => cafes.set(rows),
                Err(err) => tracing::warn!("Failed to load cafe options: {}", err),
            }
        });
    });

    let editing = id.clone();
    use_effect(move || {
        let Some(id) = editing.clone() else {
            return;
        };

        spawn(async move {
            match api::get_employee(id).await {
                Ok(employee) => {
                    saved.set(EmployeeFields::from(&employee));
                    name.set(employee.name);
                    email_address.set(employee.email_address);
                    phone_number.set(employee.phone_number);
                    gender.set(employee.gender);
                    cafe_id.set(employee.cafe_id.unwrap_or_default());
                    loaded.set(true);
                }
                Err(err) => error.set(Some(err.to_string())),
            }
        });
    });

    let submit_id = id.clone();
    let on_submit = move |evt: FormEvent| {
        evt.prevent_default();

        if let Err(message) =
            validate_employee_form(&name(), &email_address(), &phone_number(), &gender())
        {
            error.set(Some(message.to_string()));
            return;
        }

        // An empty selection is sent as absent, which leaves an existing assignment alone
        let payload = EmployeePayload {
            name: Some(name()),
            email_address: Some(email_address()),
            phone_number: Some(phone_number()),
            gender: Some(gender()),
            cafe_id: Some(cafe_id()).filter(|id| !id.is_empty()),
        };
        let id = submit_id.clone();

        submitting.set(true);
        spawn(async move {
            let result = match id {
                Some(id) => api::update_employee(id, payload).await,
                None => api::create_employee(payload).await,
            };
            submitting.set(false);

            match result {
                Ok(employee) => {
                    guard.write().dirty = false;
                    nav.push(Route::EmployeeList {
                        cafe: employee.cafe_id.unwrap_or_default(),
                    });
                }
                Err(err) => {
                    tracing::error!("Failed to save employee: {}", err);
                    error.set(Some(err.to_string()));
                }
            }
        });
    };

    let heading = if id.is_some() { "Edit Employee" } else { "Add New Employee" };

    rsx!(
        Page {
            form {
                class: "w-full max-w-xl flex flex-col gap-2",
                onsubmit: on_submit,
                h1 { class: "text-2xl", "{heading}" }
                if let Some(message) = error() {
                    ErrorAlert { message }
                }
                if !loaded() {
                    span { class: "loading loading-spinner" }
                } else {
                    TextField { label: "Name", value: name, hint: "6 to 10 characters" }
                    TextField { label: "Email Address", value: email_address, input_type: "email" }
                    TextField {
                        label: "Phone Number",
                        value: phone_number,
                        input_type: "tel",
                        hint: "8 digits starting with 8 or 9",
                    }
                    fieldset { class: "fieldset",
                        legend { class: "fieldset-legend", "Gender" }
                        div { class: "flex gap-4",
                            for choice in Gender::ALL {
                                label { class: "label gap-2",
                                    input {
                                        r#type: "radio",
                                        class: "radio",
                                        name: "gender",
                                        value: choice.as_str(),
                                        checked: gender() == choice.as_str(),
                                        onchange: move |_| gender.set(choice.to_string()),
                                    }
                                    "{choice}"
                                }
                            }
                        }
                    }
                    fieldset { class: "fieldset",
                        legend { class: "fieldset-legend", "Assigned Cafe" }
                        select {
                            class: "select w-full",
                            value: "{cafe_id}",
                            onchange: move |evt| cafe_id.set(evt.value()),
                            option { value: "", selected: cafe_id().is_empty(), "None" }
                            for cafe in cafes() {
                                option {
                                    key: "{cafe.id}",
                                    value: "{cafe.id}",
                                    selected: cafe.id == cafe_id(),
                                    "{cafe.name} ({cafe.location})"
                                }
                            }
                        }
                    }
                    div { class: "flex gap-2 mt-4",
                        button {
                            class: "btn btn-primary",
                            r#type: "submit",
                            disabled: submitting(),
                            "Submit"
                        }
                        button {
                            class: "btn",
                            r#type: "button",
                            onclick: move |_| leave(guard, Route::EmployeeList { cafe: String::new() }),
                            "Cancel"
                        }
                    }
                }
            }
        }
    )
}
