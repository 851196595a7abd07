//! New-bill submission workflow.
//!
//! One controller instance owns the selected receipt and drives a
//! submission attempt through upload, response validation, record update,
//! and navigation. Uploading only happens at submit time, so a selection
//! that is never submitted costs nothing on the store.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use anyhow::Context;
use billed_core::models::{BillDraft, SelectedReceipt, StoredAttachment};
use billed_core::validation::ReceiptValidator;
use billed_store::{BillStore, StoreError};
use tokio::sync::Mutex;

use crate::form::BillForm;
use crate::navigation::{Navigator, Route};
use crate::notify::{self, Notifier};
use crate::session::SessionStore;

/// Outcome of one file-selection event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionOutcome {
    /// The file was retained as the receipt for the next submission.
    Accepted,
    /// The file was discarded; any previously accepted receipt is kept.
    Rejected,
    /// No file in the event; nothing changed.
    NoFile,
}

/// Terminal state of one submission attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmissionOutcome {
    Submitted(BillDraft),
    MissingReceipt,
    UploadInvalid,
    UploadRejected,
    /// Refused: another submission on this controller is still running.
    AlreadyInFlight,
}

/// The attachment step collapses its two failure channels (rejected call,
/// sentinel-valued success) into one tagged outcome.
enum UploadOutcome {
    Stored(StoredAttachment),
    Invalid,
    Rejected(StoreError),
}

pub struct SubmissionService {
    store: Arc<dyn BillStore>,
    session: Arc<dyn SessionStore>,
    navigator: Arc<dyn Navigator>,
    notifier: Arc<dyn Notifier>,
    validator: ReceiptValidator,
    upload_base_url: String,
    selected: Mutex<Option<SelectedReceipt>>,
    in_flight: AtomicBool,
}

impl SubmissionService {
    pub fn new(
        store: Arc<dyn BillStore>,
        session: Arc<dyn SessionStore>,
        navigator: Arc<dyn Navigator>,
        notifier: Arc<dyn Notifier>,
        upload_base_url: String,
    ) -> Self {
        Self {
            store,
            session,
            navigator,
            notifier,
            validator: ReceiptValidator::default(),
            upload_base_url,
            selected: Mutex::new(None),
            in_flight: AtomicBool::new(false),
        }
    }

    /// Handle a file-selection event. The last accepted file wins; a
    /// rejected file is dropped with one alert and leaves any previously
    /// accepted receipt in place.
    pub async fn select_receipt(&self, candidate: Option<SelectedReceipt>) -> SelectionOutcome {
        let Some(candidate) = candidate else {
            return SelectionOutcome::NoFile;
        };

        if !self.validator.is_acceptable(&candidate.media_type) {
            tracing::debug!(media_type = %candidate.media_type, "receipt selection rejected");
            self.notifier.alert(notify::UNSUPPORTED_FILE_FORMAT);
            return SelectionOutcome::Rejected;
        }

        *self.selected.lock().await = Some(candidate);
        SelectionOutcome::Accepted
    }

    /// Submit the form: upload the retained receipt, validate the store's
    /// answer, persist the full record, then navigate to the bills list.
    ///
    /// At most one submission runs per controller; re-entry while one is in
    /// flight is refused without touching the store.
    pub async fn submit(&self, form: BillForm) -> anyhow::Result<SubmissionOutcome> {
        if self.in_flight.swap(true, Ordering::SeqCst) {
            tracing::warn!("submission already in flight, ignoring submit");
            return Ok(SubmissionOutcome::AlreadyInFlight);
        }

        let result = self.run(form).await;
        self.in_flight.store(false, Ordering::SeqCst);
        result
    }

    async fn run(&self, form: BillForm) -> anyhow::Result<SubmissionOutcome> {
        let Some(receipt) = self.selected.lock().await.clone() else {
            self.notifier.alert(notify::MISSING_RECEIPT);
            return Ok(SubmissionOutcome::MissingReceipt);
        };

        let user = self.session.current_user().context("read session user")?;

        let stored = match self.upload_receipt(&receipt, &user.email).await {
            UploadOutcome::Stored(stored) => stored,
            UploadOutcome::Invalid => {
                tracing::warn!("attachment response failed validation, no record persisted");
                self.notifier.alert(notify::UPLOAD_INVALID);
                return Ok(SubmissionOutcome::UploadInvalid);
            }
            UploadOutcome::Rejected(err) => {
                tracing::error!(error = %err, "receipt upload failed");
                self.notifier.alert(notify::SEND_FAILED);
                return Ok(SubmissionOutcome::UploadRejected);
            }
        };

        let file_url = stored.public_url(&self.upload_base_url);
        let draft = form.into_draft(user.email, file_url, receipt.name.clone());
        self.persist_record(&stored.key, &draft).await?;
        self.navigator.navigate(Route::Bills);
        Ok(SubmissionOutcome::Submitted(draft))
    }

    async fn upload_receipt(&self, receipt: &SelectedReceipt, email: &str) -> UploadOutcome {
        match self.store.create_attachment(receipt, email).await {
            Ok(response) => match response.into_stored() {
                Some(stored) => UploadOutcome::Stored(stored),
                None => UploadOutcome::Invalid,
            },
            Err(err) => UploadOutcome::Rejected(err),
        }
    }

    /// Persist the draft on the record opened by the attachment step.
    /// An update failure is logged and swallowed: navigation proceeds
    /// either way, while creation failures abort before this point.
    async fn persist_record(&self, selector: &str, draft: &BillDraft) -> anyhow::Result<()> {
        let data = serde_json::to_string(draft).context("serialize bill draft")?;
        if let Err(err) = self.store.update_bill(selector, data).await {
            tracing::error!(selector, error = %err, "bill update failed");
        }
        Ok(())
    }
}
