use serde::{Deserialize, Serialize};

/// A receipt file chosen by the user, held locally until the form is
/// submitted. No upload happens at selection time, so an abandoned
/// selection never leaves an orphaned file on the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectedReceipt {
    pub content: Vec<u8>,
    /// Declared media type (e.g. "image/jpeg"), as reported by the file source.
    pub media_type: String,
    /// Display name, kept as the bill's fileName.
    pub name: String,
}

/// Wire shape of the store's attachment-creation response.
///
/// The store is loose about this shape: any field may be missing, and a
/// present field may carry the literal string "null" meaning "no value".
/// Nothing downstream consumes this type directly; it must first pass
/// through [`AttachmentResponse::into_stored`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AttachmentResponse {
    #[serde(rename = "filePath", default)]
    pub file_path: Option<String>,
    #[serde(rename = "fileName", default)]
    pub file_name: Option<String>,
    #[serde(default)]
    pub key: Option<String>,
}

/// An attachment the store has confirmed: path and name are real values
/// and the record key can target the follow-up update.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredAttachment {
    pub file_path: String,
    pub file_name: String,
    pub key: String,
}

impl AttachmentResponse {
    /// Validate the response into a usable attachment.
    ///
    /// Returns `None` when the file path or name is absent, empty, or the
    /// "null" sentinel, or when no record key came back. All of these mean
    /// the store did not actually keep the file.
    pub fn into_stored(self) -> Option<StoredAttachment> {
        let file_path = non_sentinel(self.file_path)?;
        let file_name = non_sentinel(self.file_name)?;
        let key = self.key.filter(|k| !k.is_empty())?;
        Some(StoredAttachment {
            file_path,
            file_name,
            key,
        })
    }
}

impl StoredAttachment {
    /// Public URL of the stored file: the last segment of the storage path
    /// served from the upload base (e.g. "http://localhost:5678/").
    pub fn public_url(&self, upload_base_url: &str) -> String {
        let segment = self
            .file_path
            .rsplit('/')
            .next()
            .unwrap_or(self.file_path.as_str());
        format!("{}{}", upload_base_url, segment)
    }
}

fn non_sentinel(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty() && v != "null")
}
