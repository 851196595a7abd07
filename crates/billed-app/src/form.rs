//! Form field extraction.
//!
//! The form arrives as raw text fields; the numeric ones are parsed here.
//! `pct` falls back to 20 whenever the parsed value is absent or zero;
//! `amount` is deliberately not defaulted and stays absent when it does
//! not parse.

use billed_core::models::{BillDraft, BillStatus};

pub const DEFAULT_PCT: i64 = 20;

/// Raw field values captured from the submission form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BillForm {
    pub expense_type: String,
    pub name: String,
    pub amount: String,
    pub date: String,
    pub vat: String,
    pub pct: String,
    pub commentary: String,
}

impl BillForm {
    pub fn amount(&self) -> Option<i64> {
        parse_integer(&self.amount)
    }

    pub fn pct(&self) -> i64 {
        parse_integer(&self.pct)
            .filter(|pct| *pct != 0)
            .unwrap_or(DEFAULT_PCT)
    }

    /// Assemble the draft persisted to the store. `file_url` must come from
    /// a validated attachment; `file_name` is the selected file's display
    /// name. A fresh draft is always pending.
    pub fn into_draft(self, email: String, file_url: String, file_name: String) -> BillDraft {
        let amount = self.amount();
        let pct = self.pct();
        BillDraft {
            email,
            expense_type: self.expense_type,
            name: self.name,
            amount,
            date: self.date,
            vat: self.vat,
            pct,
            commentary: self.commentary,
            file_url,
            file_name,
            status: BillStatus::Pending,
        }
    }
}

fn parse_integer(raw: &str) -> Option<i64> {
    raw.trim().parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form() -> BillForm {
        BillForm {
            expense_type: "Transports".to_string(),
            name: "Vol Paris Londres".to_string(),
            amount: "348".to_string(),
            date: "2004-04-04".to_string(),
            vat: "70".to_string(),
            pct: "20".to_string(),
            commentary: "séminaire billed".to_string(),
        }
    }

    #[test]
    fn amount_parses_integers() {
        assert_eq!(form().amount(), Some(348));
    }

    #[test]
    fn unparsable_amount_is_not_defaulted() {
        let mut form = form();
        form.amount = "".to_string();
        assert_eq!(form.amount(), None);
        form.amount = "abc".to_string();
        assert_eq!(form.amount(), None);
    }

    #[test]
    fn pct_parses_numeric_input() {
        assert_eq!(form().pct(), 20);
        let mut form = form();
        form.pct = "50".to_string();
        assert_eq!(form.pct(), 50);
    }

    #[test]
    fn pct_falls_back_to_twenty_when_unparsable() {
        let mut form = form();
        form.pct = "".to_string();
        assert_eq!(form.pct(), DEFAULT_PCT);
        form.pct = "abc".to_string();
        assert_eq!(form.pct(), DEFAULT_PCT);
    }

    #[test]
    fn zero_pct_falls_back_to_twenty() {
        let mut form = form();
        form.pct = "0".to_string();
        assert_eq!(form.pct(), DEFAULT_PCT);
    }

    #[test]
    fn into_draft_builds_a_pending_record() {
        let draft = form().into_draft(
            "employee@test.com".to_string(),
            "http://localhost:5678/test.jpg".to_string(),
            "test.jpg".to_string(),
        );
        assert_eq!(draft.email, "employee@test.com");
        assert_eq!(draft.expense_type, "Transports");
        assert_eq!(draft.amount, Some(348));
        assert_eq!(draft.pct, 20);
        assert_eq!(draft.file_url, "http://localhost:5678/test.jpg");
        assert_eq!(draft.file_name, "test.jpg");
        assert_eq!(draft.status, BillStatus::Pending);
    }
}
