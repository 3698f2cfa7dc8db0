use dioxus::prelude::*;

/// How page content sits below the fixed navbar
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum PageLayout {
    /// Tables and forms, stacked from the top and centred horizontally
    #[default]
    Column,
    /// A single message in the middle of the screen
    Centered,
}

impl PageLayout {
    fn class(self) -> &'static str {
        match self {
            Self::Column => "flex flex-col items-center",
            Self::Centered => "flex items-center justify-center",
        }
    }
}

#[component]
pub fn Page(#[props(default)] layout: PageLayout, children: Element) -> Element {
    rsx!(
        main {
            class: "min-h-screen pt-[80px] p-4 {layout.class()}",
            {children}
        }
    )
}
