//! Generated registration data and a paginated source over it.
//!
//! Registrations stand in for a remote, paginated data set: the table shows
//! one page at a time and asks [`RegistrationSource`] for the next one.

use chrono::{Duration, NaiveDate};
use tracing::debug;

use crate::table::{clamp_page, page_range};

use super::types::Registration;

/// Number of generated registrations.
pub const REGISTRATION_COUNT: usize = 137;

const FIRST_NAMES: &[&str] = &[
    "Avery", "Blake", "Casey", "Devon", "Emerson", "Finley", "Harper", "Jordan", "Kai", "Logan",
    "Morgan", "Quinn", "Riley", "Sage", "Taylor",
];

const LAST_NAMES: &[&str] = &[
    "Adams", "Brooks", "Chen", "Diaz", "Evans", "Fischer", "Gupta", "Hughes", "Ito", "Jensen",
    "Kowalski",
];

/// (ticket type, price)
const TICKETS: &[(&str, i64)] = &[
    ("Standard", 149),
    ("VIP Pass", 299),
    ("Standard", 149),
    ("Student", 49),
];

const STATUSES: &[&str] = &["confirmed", "confirmed", "pending", "waitlisted", "cancelled"];

/// Generate the registration fixture deterministically.
pub fn generate_registrations(count: usize) -> Vec<Registration> {
    let opened = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap_or_default();

    (0..count)
        .map(|i| {
            let first = FIRST_NAMES[i % FIRST_NAMES.len()];
            let last = LAST_NAMES[(i * 7) % LAST_NAMES.len()];
            let (ticket_type, price) = TICKETS[(i * 5) % TICKETS.len()];
            let status = STATUSES[(i * 3) % STATUSES.len()];
            let day = opened + Duration::days((i as i64 * 3) % 90);
            let hour = 8 + (i % 10);
            let amount = if status == "cancelled" { 0 } else { price };

            Registration {
                id: i as i64 + 1,
                attendee: format!("{} {}", first, last),
                email: format!(
                    "{}.{}{}@example.com",
                    first.to_lowercase(),
                    last.to_lowercase(),
                    i + 1
                ),
                ticket_type: ticket_type.to_string(),
                status: status.to_string(),
                registered_at: format!("{}T{:02}:00:00Z", day.format("%Y-%m-%d"), hour),
                amount,
            }
        })
        .collect()
}

/// One page of registrations.
#[derive(Debug, Clone, PartialEq)]
pub struct RegistrationPage {
    /// Rows on this page.
    pub rows: Vec<Registration>,
    /// 1-based page number actually served.
    pub page: usize,
    /// Rows per page.
    pub page_size: usize,
    /// Total registrations available.
    pub total: usize,
}

/// A paginated source of registrations.
#[derive(Debug, Clone)]
pub struct RegistrationSource {
    registrations: Vec<Registration>,
}

impl RegistrationSource {
    /// Create a source over the generated fixture.
    pub fn new() -> Self {
        Self::with_rows(generate_registrations(REGISTRATION_COUNT))
    }

    /// Create a source over the given rows.
    pub fn with_rows(registrations: Vec<Registration>) -> Self {
        Self { registrations }
    }

    /// Total number of registrations.
    pub fn total(&self) -> usize {
        self.registrations.len()
    }

    /// Fetch a page. Out-of-range pages are clamped and a page size of 0 is
    /// treated as 1.
    pub fn fetch(&self, page: usize, page_size: usize) -> RegistrationPage {
        let page_size = page_size.max(1);
        let total = self.total();
        let page = clamp_page(page, total, page_size);
        let rows = self.registrations[page_range(total, page, page_size)].to_vec();

        debug!(page, page_size, served = rows.len(), "Fetched registration page");

        RegistrationPage {
            rows,
            page,
            page_size,
            total,
        }
    }
}

impl Default for RegistrationSource {
    fn default() -> Self {
        Self::new()
    }
}
