//! The components module contains all shared components for our app. Components are the building blocks of dioxus apps.
//! The search box keeps the `query` URL parameter in step with what the user types; the logo brands every page.

mod acme_logo;
pub use acme_logo::AcmeLogo;

mod search;
pub use search::Search;
