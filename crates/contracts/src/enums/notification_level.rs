use serde::{Deserialize, Serialize};

/// Severity of a toast or alert banner
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationLevel {
    #[default]
    Info,
    Success,
    Warning,
    Danger,
}

impl NotificationLevel {
    /// Name used in the `alert-{name}` CSS class
    pub fn code(&self) -> &'static str {
        match self {
            NotificationLevel::Info => "info",
            NotificationLevel::Success => "success",
            NotificationLevel::Warning => "warning",
            NotificationLevel::Danger => "danger",
        }
    }

    pub fn css_class(&self) -> String {
        format!("alert alert-{} notification-toast", self.code())
    }

    /// Bootstrap icon shown in front of the message
    pub fn icon_class(&self) -> &'static str {
        match self {
            NotificationLevel::Info => "bi bi-info-circle me-2",
            NotificationLevel::Success => "bi bi-check-circle me-2",
            NotificationLevel::Warning => "bi bi-exclamation-triangle me-2",
            NotificationLevel::Danger => "bi bi-x-circle me-2",
        }
    }

    /// Lenient parsing for names coming from page scripts.
    /// Unknown names fall back to `Info`.
    pub fn from_name(name: &str) -> Self {
        match name.trim().to_ascii_lowercase().as_str() {
            "success" => NotificationLevel::Success,
            "warning" | "warn" => NotificationLevel::Warning,
            "danger" | "error" => NotificationLevel::Danger,
            _ => NotificationLevel::Info,
        }
    }
}
