use dioxus::prelude::*;

/// Modal asking the user to confirm a destructive action
#[component]
pub fn ConfirmDialog(
    title: &'static str,
    message: String,
    #[props(default = "Delete")] confirm_label: &'static str,
    on_confirm: EventHandler<()>,
    on_cancel: EventHandler<()>,
) -> Element {
    rsx!(
        div { class: "modal modal-open",
            div { class: "modal-box",
                h3 { class: "text-lg font-bold", "{title}" }
                p { class: "py-4", "{message}" }
                div { class: "modal-action",
                    button {
                        class: "btn",
                        onclick: move |_| on_cancel.call(()),
                        "Cancel"
                    }
                    button {
                        class: "btn btn-error",
                        onclick: move |_| on_confirm.call(()),
                        "{confirm_label}"
                    }
                }
            }
        }
    )
}
