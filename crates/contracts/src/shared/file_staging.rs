//! Checks and formatting for files staged in an upload zone.

use crate::shared::config::UploadRules;
use thiserror::Error;

/// A file picked or dropped by the user. Never uploaded from here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StagedFile {
    pub name: String,
    /// Size in bytes
    pub size: u64,
    pub mime_type: String,
}

/// Why a staged file got no preview card.
/// The `Display` text is shown to the user as a warning toast.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FileRejection {
    #[error("File too large! Maximum size is {}.", size_limit(.max))]
    TooLarge { size: u64, max: u64 },
    #[error("Invalid file type! Only PDF and Word documents are allowed.")]
    UnsupportedType { mime_type: String },
}

/// Size is checked before type, so an oversized file of the wrong type
/// reports `TooLarge`.
pub fn validate_file(file: &StagedFile, rules: &UploadRules) -> Result<(), FileRejection> {
    if file.size > rules.max_file_size {
        return Err(FileRejection::TooLarge {
            size: file.size,
            max: rules.max_file_size,
        });
    }

    if !rules
        .allowed_mime_types
        .iter()
        .any(|allowed| allowed == &file.mime_type)
    {
        return Err(FileRejection::UnsupportedType {
            mime_type: file.mime_type.clone(),
        });
    }

    Ok(())
}

/// Limit as written in the rejection message, e.g. `16MB`
fn size_limit(max: &u64) -> String {
    format_file_size(*max).replace(' ', "")
}

const SIZE_UNITS: [&str; 4] = ["Bytes", "KB", "MB", "GB"];

/// Human readable size with 1024-based units, rounded to two decimals.
///
/// ```
/// use contracts::shared::file_staging::format_file_size;
/// assert_eq!(format_file_size(1500), "1.46 KB");
/// ```
pub fn format_file_size(bytes: u64) -> String {
    if bytes == 0 {
        return "0 Bytes".to_string();
    }

    let mut value = bytes as f64;
    let mut unit = 0;
    while value >= 1024.0 && unit < SIZE_UNITS.len() - 1 {
        value /= 1024.0;
        unit += 1;
    }

    let rounded = (value * 100.0).round() / 100.0;
    format!("{} {}", rounded, SIZE_UNITS[unit])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::config::{MIME_DOC, MIME_DOCX, MIME_PDF};

    fn file(size: u64, mime_type: &str) -> StagedFile {
        StagedFile {
            name: "report.pdf".to_string(),
            size,
            mime_type: mime_type.to_string(),
        }
    }

    #[test]
    fn test_format_file_size() {
        assert_eq!(format_file_size(0), "0 Bytes");
        assert_eq!(format_file_size(1), "1 Bytes");
        assert_eq!(format_file_size(1023), "1023 Bytes");
        assert_eq!(format_file_size(1024), "1 KB");
        assert_eq!(format_file_size(1500), "1.46 KB");
        assert_eq!(format_file_size(1_048_576), "1 MB");
        assert_eq!(format_file_size(16_777_216), "16 MB");
        assert_eq!(format_file_size(1_073_741_824), "1 GB");
        assert_eq!(format_file_size(5 * 1_099_511_627_776), "5120 GB");
    }

    #[test]
    fn test_accepts_allowed_types_up_to_limit() {
        let rules = UploadRules::default();
        for mime in [MIME_PDF, MIME_DOC, MIME_DOCX] {
            assert_eq!(validate_file(&file(0, mime), &rules), Ok(()));
            assert_eq!(validate_file(&file(16_777_216, mime), &rules), Ok(()));
        }
    }

    #[test]
    fn test_rejects_over_limit() {
        let rules = UploadRules::default();
        let rejection = validate_file(&file(16_777_217, MIME_PDF), &rules).unwrap_err();
        assert_eq!(
            rejection,
            FileRejection::TooLarge {
                size: 16_777_217,
                max: 16_777_216
            }
        );
    }

    #[test]
    fn test_rejects_unknown_type() {
        let rules = UploadRules::default();
        for mime in ["image/png", "", "application/PDF", "text/csv"] {
            assert!(matches!(
                validate_file(&file(10, mime), &rules),
                Err(FileRejection::UnsupportedType { .. })
            ));
        }
    }

    #[test]
    fn test_twenty_megabyte_pdf_is_too_large() {
        let rules = UploadRules::default();
        let rejection = validate_file(&file(20 * 1024 * 1024, MIME_PDF), &rules).unwrap_err();
        assert!(rejection.to_string().starts_with("File too large!"));
        assert_eq!(
            rejection.to_string(),
            "File too large! Maximum size is 16MB."
        );
    }

    #[test]
    fn test_limit_in_message_follows_rules() {
        let rules = UploadRules {
            max_file_size: 1500,
            ..UploadRules::default()
        };
        let rejection = validate_file(&file(1501, MIME_PDF), &rules).unwrap_err();
        assert_eq!(
            rejection.to_string(),
            "File too large! Maximum size is 1.46KB."
        );
    }

    #[test]
    fn test_size_checked_before_type() {
        let rules = UploadRules::default();
        assert!(matches!(
            validate_file(&file(u64::MAX, "image/png"), &rules),
            Err(FileRejection::TooLarge { .. })
        ));
    }
}
