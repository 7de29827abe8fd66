use dioxus::prelude::*;

use crate::components::Dashboard;
use crate::{FAVICON, MAIN_CSS};

#[allow(non_snake_case)]
#[component]
pub fn App() -> Element {
    rsx! {
        document::Link { rel: "icon", href: FAVICON }
        document::Stylesheet { href: MAIN_CSS }
        document::Meta { name: "theme-color", content: "#020618" } // slate-950
        document::Meta { name: "color-scheme", content: "dark" }
        // Page container
        div { class: "page",
            div { class: "page-inner",
                Dashboard {}
            }
            footer { class: "page-footer",
                p { "Refresh the page to see updated usage data" }
            }
        }
    }
}
