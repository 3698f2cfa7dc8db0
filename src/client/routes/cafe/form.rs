use cafe_roster::model::cafe::{CafeDto, CafePayload};
use dioxus::document::Title;
use dioxus::prelude::*;
use dioxus_logger::tracing;

use crate::client::{
    components::{ErrorAlert, Page, TextField},
    router::Route,
    util::{
        api::{self, LogoFile, LOGO_INPUT_ID},
        format::logo_src,
        leave_guard::{leave, use_dirty_form, use_leave_guard},
        validation::validate_cafe_form,
    },
};

#[component]
pub fn CafeCreate() -> Element {
    rsx!(
        Title { "Add Cafe | Cafe Roster" }
        CafeFormPage { id: None }
    )
}

#[component]
pub fn CafeEdit(id: String) -> Element {
    rsx!(
        Title { "Edit Cafe | Cafe Roster" }
        CafeFormPage { id: Some(id) }
    )
}

/// Text fields of the form, compared against the last loaded values to spot unsaved edits
#[derive(Clone, Debug, Default, PartialEq)]
struct CafeFields {
    name: String,
    description: String,
    location: String,
}

impl From<&CafeDto> for CafeFields {
    fn from(cafe: &CafeDto) -> Self {
        Self {
            name: cafe.name.clone(),
            description: cafe.description.clone(),
            location: cafe.location.clone(),
        }
    }
}

/// Create form when `id` is `None`, otherwise edit form prefilled with the café's fields
#[component]
fn CafeFormPage(#[props(!optional)] id: Option<String>) -> Element {
    let nav = navigator();
    let mut guard = use_leave_guard();

    let mut name = use_signal(String::new);
    let mut description = use_signal(String::new);
    let mut location = use_signal(String::new);
    let mut saved = use_signal(CafeFields::default);
    let mut current_logo = use_signal(|| None::<String>);
    let mut picked_logo = use_signal(|| None::<LogoFile>);
    let mut error = use_signal(|| None::<String>);
    let mut submitting = use_signal(|| false);
    let mut loaded = use_signal(|| id.is_none());

    let dirty = use_memo(move || {
        let fields = CafeFields {
            name: name(),
            description: description(),
            location: location(),
        };
        fields != saved() || picked_logo.read().is_some()
    });
    use_dirty_form(dirty);

    let editing = id.clone();
    use_effect(move || {
        let Some(id) = editing.clone() else {
            return;
        };

        spawn(async move {
            match api::get_cafe(id).await {
                Ok(cafe) => {
                    saved.set(CafeFields::from(&cafe));
                    name.set(cafe.name);
                    description.set(cafe.description);
                    location.set(cafe.location);
                    current_logo.set(cafe.logo.as_deref().map(logo_src));
                    loaded.set(true);
                }
                Err(err) => error.set(Some(err.to_string())),
            }
        });
    });

    let on_logo_change = move |_: FormEvent| {
        let logo = LogoFile::from_input(LOGO_INPUT_ID);
        if logo.as_ref().is_some_and(LogoFile::too_large) {
            error.set(Some("Logo file must be smaller than 2MB".to_string()));
            picked_logo.set(None);
            return;
        }
        picked_logo.set(logo);
    };

    let submit_id = id.clone();
    let on_submit = move |evt: FormEvent| {
        evt.prevent_default();

        if let Err(message) = validate_cafe_form(&name(), &description(), &location()) {
            error.set(Some(message.to_string()));
            return;
        }

        // Without a new file the stored logo is left as is
        let payload = CafePayload {
            name: Some(name()),
            description: Some(description()),
            location: Some(location()),
            logo: None,
        };
        let logo = picked_logo();
        let id = submit_id.clone();

        submitting.set(true);
        spawn(async move {
            let result = match (id, logo) {
                (Some(id), Some(logo)) => api::update_cafe_with_logo(id, payload, logo).await,
                (Some(id), None) => api::update_cafe(id, payload).await,
                (None, Some(logo)) => api::create_cafe_with_logo(payload, logo).await,
                (None, None) => api::create_cafe(payload).await,
            };
            submitting.set(false);

            match result {
                Ok(_) => {
                    guard.write().dirty = false;
                    nav.push(Route::CafeList {});
                }
                Err(err) => {
                    tracing::error!("Failed to save cafe: {}", err);
                    error.set(Some(err.to_string()));
                }
            }
        });
    };

    let heading = if id.is_some() { "Edit Cafe" } else { "Add New Cafe" };

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
                    TextField {
                        label: "Description",
                        value: description,
                        multiline: true,
                        hint: "Up to 256 characters",
                    }
                    TextField { label: "Location", value: location }
                    fieldset { class: "fieldset",
                        legend { class: "fieldset-legend", "Logo" }
                        if let Some(src) = current_logo() {
                            img { class: "w-16 h-16 object-cover rounded", src: "{src}", alt: "Current logo" }
                        }
                        input {
                            r#type: "file",
                            id: LOGO_INPUT_ID,
                            class: "file-input w-full",
                            accept: "image/jpeg,image/png,image/gif",
                            onchange: on_logo_change,
                        }
                        p { class: "label", "JPEG, PNG or GIF up to 2MB" }
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
                            onclick: move |_| leave(guard, Route::CafeList {}),
                            "Cancel"
                        }
                    }
                }
            }
        }
    )
}
