//! Active page configuration.

use contracts::shared::config::UiConfig;
use std::cell::RefCell;
use web_sys::Document;

/// `<script type="application/json">` block the server may render
pub const CONFIG_ELEMENT_ID: &str = "paper-cms-config";

// Read by the functions exported to page scripts
thread_local! {
    static ACTIVE_CONFIG: RefCell<UiConfig> = RefCell::new(UiConfig::default());
}

/// Config from the page, or the defaults if the block is absent or broken
pub fn load_from_page(document: &Document) -> UiConfig {
    let Some(json) = document
        .get_element_by_id(CONFIG_ELEMENT_ID)
        .and_then(|el| el.text_content())
    else {
        return UiConfig::default();
    };

    match UiConfig::from_json(&json) {
        Ok(config) => config,
        Err(e) => {
            log::warn!("{:#}, falling back to defaults", e);
            UiConfig::default()
        }
    }
}

pub fn set_active(config: UiConfig) {
    ACTIVE_CONFIG.with(|active| *active.borrow_mut() = config);
}

pub fn active() -> UiConfig {
    ACTIVE_CONFIG.with(|active| active.borrow().clone())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_active_config_replaced() {
        assert_eq!(active(), UiConfig::default());

        let mut config = UiConfig::default();
        config.notifications.visible_ms = 1200;
        set_active(config.clone());
        assert_eq!(active().notifications.visible_ms, 1200);
        assert_eq!(active(), config);
    }
}
