use dioxus::prelude::*;

use super::error::{NavigationError, NavigationResult};
use crate::search::{navigation_target, NavigationHost, QueryParams};
use crate::utils::config;
use crate::Route;

/// [`NavigationHost`] backed by the Dioxus router of the calling scope.
///
/// Locations are exchanged as typed [`Route`] values. The router encodes the
/// rendered form of a query segment as a whole, so route strings never carry
/// the parameters through unchanged.
#[derive(Clone)]
pub struct RouterHost {
    router: RouterContext,
}

impl RouterHost {
    /// Router of the current scope, or `None` when nothing above provides one.
    pub fn try_current() -> Option<Self> {
        try_consume_context::<RouterContext>().map(|router| Self { router })
    }

    /// Like [`RouterHost::try_current`], as an error for callers that propagate it
    pub fn current() -> NavigationResult<Self> {
        Self::try_current().ok_or(NavigationError::Unavailable)
    }

    fn route(&self) -> Route {
        self.router.current::<Route>()
    }
}

impl NavigationHost for RouterHost {
    fn current_path(&self) -> String {
        route_location(&self.route()).0
    }

    fn query_params(&self) -> QueryParams {
        route_location(&self.route()).1
    }

    fn navigate(&self, path: &str, params: &QueryParams) -> NavigationResult<()> {
        let route = route_for(path, params)?;
        match self.router.replace(route) {
            Some(failure) => Err(NavigationError::Rejected(format!("{failure:?}"))),
            None => Ok(()),
        }
    }
}

/// Path and query parameters of a route.
pub fn route_location(route: &Route) -> (String, QueryParams) {
    match route {
        Route::Home {} => ("/".to_string(), QueryParams::new()),
        Route::Invoices { query } => (config::INVOICES_PATH.to_string(), query.clone()),
    }
}

/// Route for `path` carrying `params`.
///
/// Routes without a query segment only accept an empty parameter set.
pub fn route_for(path: &str, params: &QueryParams) -> NavigationResult<Route> {
    match path {
        config::INVOICES_PATH => Ok(Route::Invoices {
            query: params.clone(),
        }),
        "/" if params.is_empty() => Ok(Route::Home {}),
        _ => Err(NavigationError::UnknownRoute(navigation_target(path, params))),
    }
}
