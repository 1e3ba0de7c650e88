use dioxus::prelude::*;

use crate::utils::config;

const STOREFRONT_ICON: Asset = asset!("/assets/storefront.svg");

/// Brand mark: storefront icon followed by the brand name
#[component]
pub fn AcmeLogo() -> Element {
    rsx! {
        div { class: "acme-logo",
            img { class: "acme-logo-icon", src: STOREFRONT_ICON, alt: "" }
            p { class: "acme-logo-name", {config::BRAND_NAME} }
        }
    }
}
