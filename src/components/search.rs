use std::time::Duration;

use dioxus::logger::tracing::{debug, warn};
use dioxus::prelude::*;

use crate::contexts::RouterHost;
use crate::hooks::use_debounce;
use crate::search::{commit_search, initial_term, NavigationHost};
use crate::utils::config;

const SEARCH_CSS: Asset = asset!("/assets/styling/search.css");

#[derive(Props, PartialEq, Clone)]
pub struct SearchProps {
    placeholder: String,
}

/// Text input that mirrors its value into the `query` URL parameter.
///
/// The URL is only rewritten once typing pauses for the debounce delay;
/// every other query parameter is left as it is.
#[component]
pub fn Search(props: SearchProps) -> Element {
    let initial = use_hook(|| {
        RouterHost::try_current()
            .map(|host| initial_term(&host.query_params()))
            .unwrap_or_default()
    });

    let search = use_debounce(
        Duration::from_millis(config::SEARCH_DEBOUNCE_MS),
        |term: String| match RouterHost::current().and_then(|host| commit_search(&host, &term)) {
            Ok(target) => debug!("Replaced location with {target}"),
            Err(err) => warn!("Search for {term:?} not applied: {err}"),
        },
    );
    let pending = search.is_pending();

    rsx! {
        document::Link { rel: "stylesheet", href: SEARCH_CSS }
        SearchField {
            placeholder: props.placeholder.clone(),
            initial: initial,
            pending: pending,
            on_input: move |raw: String| {
                debug!("Search input changed: {raw}");
                search.call(raw);
            }
        }
    }
}

#[derive(Props, PartialEq, Clone)]
pub struct SearchFieldProps {
    placeholder: String,
    initial: String,
    pending: bool,
    on_input: EventHandler<String>,
}

/// Labelled search input; the label is for screen readers only
#[component]
fn SearchField(props: SearchFieldProps) -> Element {
    rsx! {
        div { class: "search-container",
            label {
                r#for: config::SEARCH_INPUT_ID,
                class: "sr-only",
                {config::SEARCH_LABEL}
            }
            input {
                id: config::SEARCH_INPUT_ID,
                class: "search-input",
                r#type: "text",
                placeholder: "{props.placeholder}",
                initial_value: "{props.initial}",
                oninput: move |evt| props.on_input.call(evt.value())
            }
            if props.pending {
                span { class: "search-pending", "Searching..." }
            }
        }
    }
}
