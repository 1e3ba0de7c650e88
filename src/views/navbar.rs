use crate::components::AcmeLogo;
use crate::search::QueryParams;
use crate::Route;
use dioxus::prelude::*;

const NAVBAR_CSS: Asset = asset!("/assets/styling/navbar.css");

#[component]
pub fn SideNav() -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: NAVBAR_CSS }

        div { class: "layout-container",
            div {
                id: "sidebar",
                class: "dashboard-sidebar",
                Link {
                    to: Route::Home {},
                    class: "sidebar-logo",
                    AcmeLogo {}
                }
                nav {
                    class: "sidebar-links",
                    Link {
                        to: Route::Home {},
                        class: "nav-home",
                        "Home"
                    }
                    Link {
                        to: Route::Invoices { query: QueryParams::new() },
                        class: "nav-invoices",
                        "Invoices"
                    }
                }
            }
            div {
                class: "main-content",
                Outlet::<Route> {}
            }
        }
    }
}
