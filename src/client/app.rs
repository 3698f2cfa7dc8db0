use dioxus::prelude::*;

use crate::client::{router::Route, util::leave_guard::LeaveGuard};

const DAISYUI_CSS: &str = "https://cdn.jsdelivr.net/npm/daisyui@5";
const TAILWIND_BROWSER_JS: &str = "https://cdn.jsdelivr.net/npm/@tailwindcss/browser@4";

#[component]
pub fn App() -> Element {
    #[cfg_attr(not(feature = "web"), allow(unused_variables))]
    let guard = use_context_provider(|| Signal::new(LeaveGuard::default()));

    #[cfg(feature = "web")]
    use_hook(move || crate::client::util::leave_guard::listen_before_unload(guard));

    rsx! {
        document::Link { rel: "stylesheet", href: DAISYUI_CSS }
        document::Script { src: TAILWIND_BROWSER_JS }
        Router::<Route> {}
    }
}
