use dioxus::prelude::*;

use crate::components::AcmeLogo;
use crate::search::QueryParams;
use crate::Route;

const HOME_CSS: Asset = asset!("/assets/styling/home.css");

/// Landing page with the brand banner
#[component]
pub fn Home() -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: HOME_CSS }

        div { class: "home-container",
            div { class: "home-banner",
                AcmeLogo {}
            }
            div { class: "home-intro",
                p { class: "home-title", "Welcome to Acme." }
                Link {
                    to: Route::Invoices { query: QueryParams::new() },
                    class: "btn btn-primary",
                    "Open invoices"
                }
            }
        }
    }
}
