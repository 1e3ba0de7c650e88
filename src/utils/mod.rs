/// Configuration constants for the application
pub mod config {
    /// Window title for the desktop build
    pub const APP_TITLE: &str = "Acme Dashboard";

    /// Brand name shown next to the logo
    pub const BRAND_NAME: &str = "Sayed";

    /// Quiet period after the last keystroke before the URL is updated
    pub const SEARCH_DEBOUNCE_MS: u64 = 300;

    /// Path of the invoices page; must match its `#[route]`
    pub const INVOICES_PATH: &str = "/dashboard/invoices";

    /// Query parameter holding the search term
    pub const QUERY_PARAM: &str = "query";

    /// Query parameter holding the 1-based page number
    pub const PAGE_PARAM: &str = "page";

    /// Accessible label of the search input
    pub const SEARCH_LABEL: &str = "Search";

    /// Element id linking the label to the search input
    pub const SEARCH_INPUT_ID: &str = "search";

    /// Rows per page in the invoices table
    pub const INVOICES_PER_PAGE: usize = 6;
}

/// Timer helpers that work on both native and wasm targets
pub mod time_utils {
    use std::time::Duration;

    /// Sleep on the runtime the app was launched with
    #[cfg(not(target_arch = "wasm32"))]
    pub async fn sleep(duration: Duration) {
        tokio::time::sleep(duration).await;
    }

    /// Sleep on the browser event loop
    #[cfg(target_arch = "wasm32")]
    pub async fn sleep(duration: Duration) {
        gloo_timers::future::sleep(duration).await;
    }
}

pub use time_utils::sleep;

