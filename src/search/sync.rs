use dioxus::logger::tracing::info;

use super::query::QueryParams;
use crate::contexts::NavigationResult;
use crate::utils::config;

/// The slice of the hosting router the search box depends on.
pub trait NavigationHost {
    /// Path of the current location, without the query string
    fn current_path(&self) -> String;
    /// Query parameters of the current location
    fn query_params(&self) -> QueryParams;
    /// Replaces the current location with `path` and `params`
    fn navigate(&self, path: &str, params: &QueryParams) -> NavigationResult<()>;
}

/// Value the search box shows on first render.
pub fn initial_term(params: &QueryParams) -> String {
    params
        .get(config::QUERY_PARAM)
        .map(str::to_string)
        .unwrap_or_default()
}

/// Copy of `params` with the search key set to `term`, or removed when `term` is blank.
pub fn apply_search_term(params: &QueryParams, term: &str) -> QueryParams {
    let mut next = params.clone();
    if term.trim().is_empty() {
        next.delete(config::QUERY_PARAM);
    } else {
        next.set(config::QUERY_PARAM, term);
    }
    next
}

pub fn navigation_target(path: &str, params: &QueryParams) -> String {
    format!("{path}?{params}")
}

/// Writes `term` into the host's current query string and navigates there.
///
/// Path and parameters are read when this runs, not when the keystroke
/// happened, so anything else that changed the URL in between is kept.
/// Returns the serialized target.
pub fn commit_search(host: &impl NavigationHost, term: &str) -> NavigationResult<String> {
    info!("Searching... {term}");
    let path = host.current_path();
    let params = apply_search_term(&host.query_params(), term);
    host.navigate(&path, &params)?;
    Ok(navigation_target(&path, &params))
}
