//! Seed data shown by the dashboard pages.

mod invoices;
pub use invoices::{filter_invoices, page_number, paginate, total_pages, INVOICES};
