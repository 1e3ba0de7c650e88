//! Custom hooks shared by components.

mod debounce;
pub use debounce::use_debounce;
