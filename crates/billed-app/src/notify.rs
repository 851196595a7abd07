//! User-facing alerts.
//!
//! These four literal strings are the whole error surface the user ever
//! sees; everything else goes to the logs.

pub const UNSUPPORTED_FILE_FORMAT: &str =
    "Format de fichier non supporté. Veuillez sélectionner une image (JPG, JPEG ou PNG).";
pub const MISSING_RECEIPT: &str = "Veuillez joindre un justificatif.";
pub const UPLOAD_INVALID: &str =
    "Erreur lors de l'upload du fichier. Veuillez sélectionner une image valide.";
pub const SEND_FAILED: &str = "Erreur lors de l'envoi de la facture. Veuillez réessayer.";

/// Delivers an alert to the user.
pub trait Notifier: Send + Sync {
    fn alert(&self, message: &str);
}

/// Alert surface of the CLI: plain lines on stderr.
#[derive(Debug, Default)]
pub struct StderrNotifier;

impl Notifier for StderrNotifier {
    fn alert(&self, message: &str) {
        eprintln!("{}", message);
    }
}
