//! Framework-free search state: the query string model, the debounce state
//! machine, and the logic that turns a committed term into a navigation.

mod debounce;
mod query;
mod sync;

pub use debounce::Debouncer;
pub use query::QueryParams;
pub use sync::{commit_search, initial_term, navigation_target, NavigationHost};
