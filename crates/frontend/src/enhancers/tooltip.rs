//! Hover tooltips for `[data-bs-toggle="tooltip"]` elements.

use crate::shared::dom;
use contracts::shared::config::TooltipSettings;
use contracts::shared::tooltip::{tooltip_position, AnchorRect};
use wasm_bindgen::prelude::*;
use web_sys::{Document, Element};

const TRIGGER_SELECTOR: &str = r#"[data-bs-toggle="tooltip"]"#;
const TOOLTIP_CLASS: &str = "tooltip-custom";

pub fn attach_all(document: &Document, settings: &TooltipSettings) -> usize {
    let triggers = dom::query_all(document, TRIGGER_SELECTOR);
    for trigger in &triggers {
        if let Err(e) = attach(trigger, settings.offset_px) {
            log::warn!("tooltip skipped: {:?}", e);
        }
    }
    triggers.len()
}

fn attach(trigger: &Element, offset_px: f64) -> Result<(), JsValue> {
    let hovered = trigger.clone();
    dom::listen(trigger, "mouseenter", move |_| {
        if let Some(text) = tooltip_text(&hovered) {
            show(&hovered, &text, offset_px);
        }
    })?;
    dom::listen(trigger, "mouseleave", |_| hide())
}

/// `title`, falling back to `data-bs-title`
fn tooltip_text(el: &Element) -> Option<String> {
    ["title", "data-bs-title"]
        .into_iter()
        .filter_map(|attr| el.get_attribute(attr))
        .find(|text| !text.is_empty())
}

fn show(anchor: &Element, text: &str, offset_px: f64) {
    // At most one tooltip on the page
    hide();

    let Some(document) = dom::document() else {
        return;
    };
    let Some(body) = document.body() else {
        return;
    };
    let Ok(tooltip) = dom::create_html_element(&document, "div", TOOLTIP_CLASS) else {
        return;
    };
    tooltip.set_text_content(Some(text));
    if body.append_child(&tooltip).is_err() {
        return;
    }

    let rect = anchor.get_bounding_client_rect();
    let scroll = web_sys::window()
        .map(|w| (w.scroll_x().unwrap_or(0.0), w.scroll_y().unwrap_or(0.0)))
        .unwrap_or((0.0, 0.0));
    let (left, top) = tooltip_position(
        AnchorRect {
            left: rect.left(),
            top: rect.top(),
            width: rect.width(),
        },
        f64::from(tooltip.offset_width()),
        f64::from(tooltip.offset_height()),
        offset_px,
        scroll,
    );

    let style = tooltip.style();
    let _ = style.set_property("left", &format!("{}px", left));
    let _ = style.set_property("top", &format!("{}px", top));
    let _ = style.set_property("opacity", "1");
}

fn hide() {
    let Some(document) = dom::document() else {
        return;
    };
    for tooltip in dom::query_all(&document, &format!(".{}", TOOLTIP_CLASS)) {
        tooltip.remove();
    }
}
