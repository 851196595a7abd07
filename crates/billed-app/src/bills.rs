//! Bills listing.

use std::sync::Arc;

use anyhow::{Context, Result};
use billed_core::models::Bill;
use billed_store::BillStore;
use chrono::{Datelike, NaiveDate};

use crate::session::SessionStore;

const FRENCH_SHORT_MONTHS: [&str; 12] = [
    "Jan", "Fév", "Mar", "Avr", "Mai", "Juin", "Juil", "Aoû", "Sep", "Oct", "Nov", "Déc",
];

/// Fetches the logged-in user's bills from the store.
pub struct BillsService {
    store: Arc<dyn BillStore>,
    session: Arc<dyn SessionStore>,
}

impl BillsService {
    pub fn new(store: Arc<dyn BillStore>, session: Arc<dyn SessionStore>) -> Self {
        Self { store, session }
    }

    /// Bills of the logged-in user, newest first. Ordering compares the raw
    /// date strings, which sorts ISO-like dates anti-chronologically and
    /// keeps rows with corrupted dates instead of dropping them.
    pub async fn bills(&self) -> Result<Vec<Bill>> {
        let user = self.session.current_user().context("read session user")?;
        let mut bills = self
            .store
            .list_bills(&user.email)
            .await
            .context("list bills")?;
        bills.sort_by(|a, b| b.date.cmp(&a.date));
        Ok(bills)
    }
}

/// Display form of a bill date: "2004-04-04" becomes "4 Avr. 04". A date
/// that does not parse is returned unchanged.
pub fn format_date(raw: &str) -> String {
    let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") else {
        return raw.to_string();
    };
    let month = FRENCH_SHORT_MONTHS[date.month0() as usize];
    format!("{} {}. {:02}", date.day(), month, date.year() % 100)
}

/// Display form of a bill status; unknown statuses pass through.
pub fn format_status(raw: &str) -> String {
    match raw {
        "pending" => "En attente".to_string(),
        "accepted" => "Accepté".to_string(),
        "refused" => "Refusé".to_string(),
        other => other.to_string(),
    }
}
