/// Media types a receipt may declare. The store only renders image
/// justificatifs, so the set is closed.
pub const ACCEPTED_MEDIA_TYPES: [&str; 3] = ["image/jpeg", "image/jpg", "image/png"];

/// Validation errors for candidate receipt files
#[derive(Debug, thiserror::Error)]
pub enum ValidationError {
    #[error("Unsupported media type: {media_type} (allowed: {allowed:?})")]
    UnsupportedMediaType {
        media_type: String,
        allowed: Vec<String>,
    },
}

/// Receipt file validator
///
/// Pure predicate over a candidate file's declared media type; no I/O and
/// no inspection of the file content.
#[derive(Debug, Clone)]
pub struct ReceiptValidator {
    allowed_media_types: Vec<String>,
}

impl ReceiptValidator {
    pub fn new(allowed_media_types: Vec<String>) -> Self {
        Self {
            allowed_media_types,
        }
    }

    /// Whether the declared media type belongs to the accepted set.
    /// Absent types are passed as "" and rejected like any other outsider.
    pub fn is_acceptable(&self, media_type: &str) -> bool {
        self.allowed_media_types.iter().any(|mt| mt == media_type)
    }

    /// Validate the declared media type
    pub fn validate_media_type(&self, media_type: &str) -> Result<(), ValidationError> {
        if !self.is_acceptable(media_type) {
            return Err(ValidationError::UnsupportedMediaType {
                media_type: media_type.to_string(),
                allowed: self.allowed_media_types.clone(),
            });
        }

        Ok(())
    }
}

impl Default for ReceiptValidator {
    fn default() -> Self {
        Self::new(ACCEPTED_MEDIA_TYPES.iter().map(|mt| mt.to_string()).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_the_three_image_types() {
        let validator = ReceiptValidator::default();
        assert!(validator.is_acceptable("image/jpeg"));
        assert!(validator.is_acceptable("image/jpg"));
        assert!(validator.is_acceptable("image/png"));
    }

    #[test]
    fn rejects_everything_else() {
        let validator = ReceiptValidator::default();
        assert!(!validator.is_acceptable("image/gif"));
        assert!(!validator.is_acceptable("application/pdf"));
        assert!(!validator.is_acceptable("text/plain"));
        assert!(!validator.is_acceptable("video/mp4"));
    }

    #[test]
    fn rejects_absent_or_empty_type() {
        let validator = ReceiptValidator::default();
        assert!(!validator.is_acceptable(""));
    }

    #[test]
    fn match_is_exact_not_case_folded() {
        let validator = ReceiptValidator::default();
        assert!(!validator.is_acceptable("IMAGE/JPEG"));
        assert!(!validator.is_acceptable("image/jpeg "));
    }

    #[test]
    fn validate_media_type_reports_the_allowed_set() {
        let validator = ReceiptValidator::default();
        assert!(validator.validate_media_type("image/png").is_ok());
        let err = validator
            .validate_media_type("image/webp")
            .expect_err("webp is not accepted");
        assert!(matches!(
            err,
            ValidationError::UnsupportedMediaType { ref media_type, .. } if media_type == "image/webp"
        ));
    }
}
