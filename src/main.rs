use dioxus::logger::tracing::Level;
use dioxus::prelude::*;
#[cfg(feature = "desktop")]
use dioxus_desktop::{Config, WindowBuilder};
use views::{Home, Invoices, SideNav};

mod components;
mod contexts;
mod data;
mod hooks;
mod search;
mod utils;
mod views;

use search::QueryParams;
use utils::config;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(SideNav)]
        #[route("/")]
        Home {},
        #[route("/dashboard/invoices?:..query")]
        Invoices { query: QueryParams },
}

const FAVICON: Asset = asset!("/assets/favicon.ico");
const MAIN_CSS: Asset = asset!("/assets/styling/main.css");

fn main() {
    if let Err(err) = dioxus::logger::init(Level::INFO) {
        eprintln!("Logger already initialized: {err}");
    }

    #[cfg(feature = "desktop")]
    LaunchBuilder::desktop()
        .with_cfg(
            Config::new().with_window(
                WindowBuilder::new().with_title(config::APP_TITLE)
            ),
        )
        .launch(App);

    #[cfg(not(feature = "desktop"))]
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        document::Link { rel: "icon", href: FAVICON }
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        Router::<Route> {}
    }
}
