//! Billed application layer
//!
//! Hosts the submission workflow (receipt selection, two-phase persistence)
//! and the bills listing, wired to the store and session through injected
//! trait objects so the CLI and the tests share one orchestration path.

pub mod bills;
pub mod form;
pub mod navigation;
pub mod notify;
pub mod session;
pub mod submission;

pub use bills::{format_date, format_status, BillsService};
pub use form::BillForm;
pub use navigation::{Navigator, Route};
pub use notify::{Notifier, StderrNotifier};
pub use session::{FileSessionStore, SessionError, SessionStore};
pub use submission::{SelectionOutcome, SubmissionOutcome, SubmissionService};
