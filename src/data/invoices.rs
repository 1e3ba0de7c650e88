use std::fmt;

use crate::search::QueryParams;
use crate::utils::config;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvoiceStatus {
    Pending,
    Paid,
}

impl fmt::Display for InvoiceStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InvoiceStatus::Pending => write!(f, "pending"),
            InvoiceStatus::Paid => write!(f, "paid"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invoice {
    pub id: u32,
    pub name: &'static str,
    pub email: &'static str,
    pub amount_cents: u64,
    pub date: &'static str,
    pub status: InvoiceStatus,
}

impl Invoice {
    /// Amount as dollars, e.g. `$1,577.95`
    pub fn formatted_amount(&self) -> String {
        let dollars = self.amount_cents / 100;
        let cents = self.amount_cents % 100;
        let digits = dollars.to_string();
        let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
        for (i, c) in digits.chars().enumerate() {
            if i > 0 && (digits.len() - i) % 3 == 0 {
                grouped.push(',');
            }
            grouped.push(c);
        }
        format!("${grouped}.{cents:02}")
    }

    fn matches(&self, needle: &str) -> bool {
        [
            self.name.to_lowercase(),
            self.email.to_lowercase(),
            self.formatted_amount(),
            self.date.to_string(),
            self.status.to_string(),
        ]
        .iter()
        .any(|field| field.contains(needle))
    }
}

pub const INVOICES: &[Invoice] = &[
    Invoice { id: 1, name: "Evil Rabbit", email: "evil@rabbit.com", amount_cents: 15795, date: "2023-12-06", status: InvoiceStatus::Pending },
    Invoice { id: 2, name: "Delba de Oliveira", email: "delba@oliveira.com", amount_cents: 20348, date: "2023-11-14", status: InvoiceStatus::Pending },
    Invoice { id: 3, name: "Lee Robinson", email: "lee@robinson.com", amount_cents: 3040, date: "2022-10-29", status: InvoiceStatus::Paid },
    Invoice { id: 4, name: "Michael Novotny", email: "michael@novotny.com", amount_cents: 44800, date: "2023-09-10", status: InvoiceStatus::Paid },
    Invoice { id: 5, name: "Amy Burns", email: "amy@burns.com", amount_cents: 34577, date: "2023-08-05", status: InvoiceStatus::Pending },
    Invoice { id: 6, name: "Balazs Orban", email: "balazs@orban.com", amount_cents: 54246, date: "2023-07-16", status: InvoiceStatus::Pending },
    Invoice { id: 7, name: "Evil Rabbit", email: "evil@rabbit.com", amount_cents: 666, date: "2023-06-27", status: InvoiceStatus::Pending },
    Invoice { id: 8, name: "Delba de Oliveira", email: "delba@oliveira.com", amount_cents: 32545, date: "2023-06-09", status: InvoiceStatus::Paid },
    Invoice { id: 9, name: "Lee Robinson", email: "lee@robinson.com", amount_cents: 1250, date: "2023-06-17", status: InvoiceStatus::Paid },
    Invoice { id: 10, name: "Michael Novotny", email: "michael@novotny.com", amount_cents: 8546, date: "2023-06-07", status: InvoiceStatus::Paid },
    Invoice { id: 11, name: "Amy Burns", email: "amy@burns.com", amount_cents: 500, date: "2023-08-19", status: InvoiceStatus::Paid },
    Invoice { id: 12, name: "Balazs Orban", email: "balazs@orban.com", amount_cents: 8945, date: "2023-06-03", status: InvoiceStatus::Paid },
    Invoice { id: 13, name: "Evil Rabbit", email: "evil@rabbit.com", amount_cents: 32545, date: "2023-06-18", status: InvoiceStatus::Paid },
    Invoice { id: 14, name: "Evil Rabbit", email: "evil@rabbit.com", amount_cents: 1250, date: "2023-10-04", status: InvoiceStatus::Paid },
    Invoice { id: 15, name: "Amy Burns", email: "amy@burns.com", amount_cents: 8945, date: "2023-06-05", status: InvoiceStatus::Paid },
];

/// Invoices whose name, email, amount, date or status contain `term`, ignoring case.
/// A blank term matches everything.
pub fn filter_invoices<'a>(invoices: &'a [Invoice], term: &str) -> Vec<&'a Invoice> {
    let needle = term.trim().to_lowercase();
    if needle.is_empty() {
        return invoices.iter().collect();
    }
    invoices.iter().filter(|invoice| invoice.matches(&needle)).collect()
}

/// 1-based page from the `page` parameter; missing or malformed values mean page 1.
pub fn page_number(params: &QueryParams) -> usize {
    params
        .get(config::PAGE_PARAM)
        .and_then(|raw| raw.trim().parse::<usize>().ok())
        .filter(|page| *page > 0)
        .unwrap_or(1)
}

pub fn total_pages(count: usize) -> usize {
    count.div_ceil(config::INVOICES_PER_PAGE).max(1)
}

/// Items on `page`, clamped to the last page.
pub fn paginate<T: Clone>(items: &[T], page: usize) -> Vec<T> {
    let page = page.clamp(1, total_pages(items.len()));
    items
        .iter()
        .skip((page - 1) * config::INVOICES_PER_PAGE)
        .take(config::INVOICES_PER_PAGE)
        .cloned()
        .collect()
}
