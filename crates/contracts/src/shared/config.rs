//! Page enhancement settings.
//!
//! The server may render a JSON block with overrides; every field that is
//! missing keeps its default.

use anyhow::Context;
use serde::{Deserialize, Serialize};

/// 16 MB, same limit as the upload endpoint
pub const DEFAULT_MAX_FILE_SIZE: u64 = 16 * 1024 * 1024;

pub const MIME_PDF: &str = "application/pdf";
pub const MIME_DOC: &str = "application/msword";
pub const MIME_DOCX: &str =
    "application/vnd.openxmlformats-officedocument.wordprocessingml.document";

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    pub upload: UploadRules,
    pub table: TableSettings,
    pub notifications: NotificationTiming,
    pub tooltip: TooltipSettings,
}

/// Client-side checks applied to staged files
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UploadRules {
    /// Maximum file size in bytes (inclusive)
    pub max_file_size: u64,
    pub allowed_mime_types: Vec<String>,
}

impl Default for UploadRules {
    fn default() -> Self {
        Self {
            max_file_size: DEFAULT_MAX_FILE_SIZE,
            allowed_mime_types: vec![
                MIME_PDF.to_string(),
                MIME_DOC.to_string(),
                MIME_DOCX.to_string(),
            ],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TableSettings {
    /// Quiet period before the search box filters rows
    pub search_debounce_ms: u32,
}

impl Default for TableSettings {
    fn default() -> Self {
        Self {
            search_debounce_ms: 300,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NotificationTiming {
    /// How long a toast stays fully visible
    pub visible_ms: u32,
    /// Length of the opacity transition before removal
    pub fade_ms: u32,
    /// Delay before server-rendered `.alert` banners start fading
    pub alert_dismiss_ms: u32,
}

impl Default for NotificationTiming {
    fn default() -> Self {
        Self {
            visible_ms: 5000,
            fade_ms: 300,
            alert_dismiss_ms: 5000,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TooltipSettings {
    /// Gap between the tooltip and the top edge of its element
    pub offset_px: f64,
}

impl Default for TooltipSettings {
    fn default() -> Self {
        Self { offset_px: 5.0 }
    }
}

impl UiConfig {
    /// Parse a JSON config block. Blank input yields the defaults.
    pub fn from_json(json: &str) -> anyhow::Result<Self> {
        if json.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_json::from_str(json).context("invalid page enhancement config")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = UiConfig::default();
        assert_eq!(config.upload.max_file_size, 16_777_216);
        assert_eq!(config.upload.allowed_mime_types.len(), 3);
        assert_eq!(config.table.search_debounce_ms, 300);
        assert_eq!(config.notifications.visible_ms, 5000);
        assert_eq!(config.notifications.fade_ms, 300);
        assert_eq!(config.tooltip.offset_px, 5.0);
    }

    #[test]
    fn test_partial_override() {
        let config =
            UiConfig::from_json(r#"{"upload": {"max_file_size": 1024}, "table": {}}"#).unwrap();
        assert_eq!(config.upload.max_file_size, 1024);
        assert_eq!(config.upload.allowed_mime_types, UploadRules::default().allowed_mime_types);
        assert_eq!(config.table.search_debounce_ms, 300);
        assert_eq!(config.notifications, NotificationTiming::default());
    }

    #[test]
    fn test_blank_and_invalid() {
        assert_eq!(UiConfig::from_json("  \n").unwrap(), UiConfig::default());
        assert!(UiConfig::from_json("{not json").is_err());
        assert!(UiConfig::from_json(r#"{"upload": {"max_file_size": "big"}}"#).is_err());
    }
}
