use dioxus::prelude::*;

#[component]
pub fn HomeView() -> Element {
    rsx! {
        div { class: "page",
            h2 { "Home" }
            p { "Internal admin tools for the course platform." }
            p { "Pick a panel from the sidebar." }
        }
    }
}
