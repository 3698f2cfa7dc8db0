use dioxus::prelude::*;

/// Labelled text input bound to a signal
#[component]
pub fn TextField(
    label: &'static str,
    mut value: Signal<String>,
    #[props(default = "text")] input_type: &'static str,
    #[props(default)] multiline: bool,
    #[props(default)] hint: Option<&'static str>,
) -> Element {
    rsx!(
        fieldset { class: "fieldset",
            legend { class: "fieldset-legend", "{label}" }
            if multiline {
                textarea {
                    class: "textarea w-full",
                    value: "{value}",
                    oninput: move |evt| value.set(evt.value()),
                }
            } else {
                input {
                    class: "input w-full",
                    r#type: input_type,
                    value: "{value}",
                    oninput: move |evt| value.set(evt.value()),
                }
            }
            if let Some(hint) = hint {
                p { class: "label", "{hint}" }
            }
        }
    )
}
