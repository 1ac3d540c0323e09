//! Start-up: wait for the DOM, then attach every enhancer once.

use crate::enhancers::notifications::NotificationCenter;
use crate::enhancers::{data_table, file_upload, forms, tooltip};
use crate::shared::{dom, settings, styles};
use wasm_bindgen::JsValue;

/// Run `boot` now if the document is parsed, otherwise on
/// `DOMContentLoaded`. The wasm module usually finishes loading after the
/// event has already fired.
pub fn run_when_ready() {
    let Some(document) = dom::document() else {
        log::warn!("no document, page enhancements disabled");
        return;
    };

    let ready_state = js_sys::Reflect::get(&document, &JsValue::from_str("readyState"))
        .ok()
        .and_then(|state| state.as_string());

    if ready_state.as_deref() == Some("loading") {
        if let Err(e) = dom::listen(&document, "DOMContentLoaded", |_| boot()) {
            log::warn!("could not wait for DOMContentLoaded: {:?}", e);
        }
    } else {
        boot();
    }
}

pub fn boot() {
    let Some(document) = dom::document() else {
        return;
    };

    let config = settings::load_from_page(&document);
    settings::set_active(config.clone());
    styles::inject(&document);

    let notifications = NotificationCenter::new(config.notifications);

    let zones = file_upload::attach_all(&document, &config.upload, notifications);
    let tables = data_table::attach_all(&document, &config.table, notifications);
    let tooltips = tooltip::attach_all(&document, &config.tooltip);
    let (forms, fields) = forms::attach_all(&document);
    let alerts = notifications.dismiss_alerts(&document);

    log::debug!(
        "enhanced: {} upload zones, {} tables, {} tooltips, {} forms, {} fields, {} alerts",
        zones,
        tables,
        tooltips,
        forms,
        fields,
        alerts
    );
    log::info!("Paper-CMS initialized successfully!");
}
