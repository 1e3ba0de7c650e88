use dioxus::prelude::*;

use crate::components::Search;
use crate::data::{filter_invoices, page_number, paginate, total_pages, INVOICES};
use crate::search::{initial_term, QueryParams};
use crate::utils::config;
use crate::Route;

const INVOICES_CSS: Asset = asset!("/assets/styling/invoices.css");

/// Same query with `page` pointing at `page`
fn page_route(query: &QueryParams, page: usize) -> Route {
    let mut params = query.clone();
    params.set(config::PAGE_PARAM, page.to_string());
    Route::Invoices { query: params }
}

#[component]
pub fn Invoices(query: QueryParams) -> Element {
    let term = initial_term(&query);
    let matches = filter_invoices(INVOICES, &term);
    let pages = total_pages(matches.len());
    let page = page_number(&query).min(pages);
    let rows = paginate(&matches, page);
    let count = matches.len();

    rsx! {
        document::Link { rel: "stylesheet", href: INVOICES_CSS }
        div { class: "invoices-container",
            div { class: "invoices-header",
                h1 { "Invoices" }
                div { class: "header-controls",
                    Search { placeholder: "Search invoices...".to_string() }
                    span { class: "invoice-count", "{count} invoices" }
                }
            }

            table { class: "invoices-table",
                thead {
                    tr {
                        th { "Customer" }
                        th { "Email" }
                        th { "Amount" }
                        th { "Date" }
                        th { "Status" }
                    }
                }
                tbody {
                    for invoice in rows {
                        tr { key: "{invoice.id}",
                            td { "{invoice.name}" }
                            td { "{invoice.email}" }
                            td { {invoice.formatted_amount()} }
                            td { "{invoice.date}" }
                            td { class: "status status-{invoice.status}", "{invoice.status}" }
                        }
                    }
                }
            }

            if count == 0 {
                p { class: "invoices-empty", "No invoices match \"{term}\"." }
            }

            div { class: "pagination",
                for n in 1..=pages {
                    if n == page {
                        span { class: "page-link current", "{n}" }
                    } else {
                        Link {
                            to: page_route(&query, n),
                            class: "page-link",
                            "{n}"
                        }
                    }
                }
            }
        }
    }
}
