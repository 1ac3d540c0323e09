//! Drag-and-drop and click-to-browse staging for `.file-upload` zones.
//!
//! Files are only validated and previewed here. The upload itself happens
//! when the surrounding form is submitted.

use super::notifications::NotificationCenter;
use crate::shared::dom;
use contracts::enums::NotificationLevel;
use contracts::shared::config::UploadRules;
use contracts::shared::file_staging::{format_file_size, validate_file, StagedFile};
use leptos::ev::MouseEvent;
use leptos::prelude::*;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, DragEvent, Element, Event, FileList, HtmlElement, HtmlInputElement};

const ZONE_SELECTOR: &str = ".file-upload, .file-upload-zone";
const PREVIEW_SELECTOR: &str = ".file-preview";
const DRAG_OVER_CLASS: &str = "drag-over";

pub fn attach_all(
    document: &Document,
    rules: &UploadRules,
    notifications: NotificationCenter,
) -> usize {
    let rules = Rc::new(rules.clone());
    let mut attached = 0;
    for zone in dom::query_all(document, ZONE_SELECTOR) {
        match attach(document, &zone, rules.clone(), notifications) {
            Ok(true) => attached += 1,
            Ok(false) => {}
            Err(e) => log::warn!("upload zone skipped: {:?}", e),
        }
    }
    attached
}

/// Returns `false` for zones without a file input.
fn attach(
    document: &Document,
    zone: &Element,
    rules: Rc<UploadRules>,
    notifications: NotificationCenter,
) -> Result<bool, JsValue> {
    let Some(input) = zone.query_selector(r#"input[type="file"]"#)? else {
        return Ok(false);
    };
    let input: HtmlInputElement = input.dyn_into().map_err(JsValue::from)?;

    // Keep the browser from opening dropped files
    for event in ["dragenter", "dragover", "dragleave", "drop"] {
        dom::listen(zone, event, |ev: Event| {
            ev.prevent_default();
            ev.stop_propagation();
        })?;
    }

    for event in ["dragenter", "dragover"] {
        let zone_hl = zone.clone();
        dom::listen(zone, event, move |_| {
            let _ = zone_hl.class_list().add_1(DRAG_OVER_CLASS);
        })?;
    }

    for event in ["dragleave", "drop"] {
        let zone_hl = zone.clone();
        dom::listen(zone, event, move |_| {
            let _ = zone_hl.class_list().remove_1(DRAG_OVER_CLASS);
        })?;
    }

    let stager = Stager::new(document, zone, rules, notifications);

    let drop_stager = stager.clone();
    dom::listen(zone, "drop", move |ev: Event| {
        let files = ev
            .dyn_ref::<DragEvent>()
            .and_then(|drag| drag.data_transfer())
            .and_then(|transfer| transfer.files());
        if let Some(files) = files {
            drop_stager.stage_all(&files);
        }
    })?;

    let browse_input = input.clone();
    dom::listen(zone, "click", move |ev: Event| {
        if !opens_picker(&ev, &browse_input) {
            return;
        }
        browse_input.click();
    })?;

    let change_input = input.clone();
    dom::listen(&input, "change", move |_| {
        if let Some(files) = change_input.files() {
            stager.stage_all(&files);
        }
    })?;

    Ok(true)
}

/// Clicks on the input itself (including the one we trigger) and on preview
/// cards must not open the picker again.
fn opens_picker(ev: &Event, input: &HtmlInputElement) -> bool {
    let Some(target) = dom::event_element(ev) else {
        return true;
    };
    let input_el: &Element = input;
    if &target == input_el {
        return false;
    }
    !matches!(target.closest(PREVIEW_SELECTOR), Ok(Some(_)))
}

/// Validates files for one zone and renders their preview cards
#[derive(Clone)]
pub struct Stager {
    document: Document,
    zone: Element,
    rules: Rc<UploadRules>,
    notifications: NotificationCenter,
}

impl Stager {
    pub fn new(
        document: &Document,
        zone: &Element,
        rules: Rc<UploadRules>,
        notifications: NotificationCenter,
    ) -> Self {
        Self {
            document: document.clone(),
            zone: zone.clone(),
            rules,
            notifications,
        }
    }

    fn stage_all(&self, files: &FileList) {
        for file in (0..files.length()).filter_map(|i| files.get(i)) {
            let staged = StagedFile {
                name: file.name(),
                size: file.size() as u64,
                mime_type: file.type_(),
            };
            self.stage(staged);
        }
    }

    /// Rejected files only raise a warning toast; accepted ones get a card.
    pub fn stage(&self, file: StagedFile) {
        if let Err(rejection) = validate_file(&file, &self.rules) {
            log::debug!("rejected {}: {:?}", file.name, rejection);
            self.notifications
                .notify(&rejection.to_string(), NotificationLevel::Warning);
            return;
        }

        if let Err(e) = self.show_preview(file) {
            log::warn!("file preview not rendered: {:?}", e);
        }
    }

    fn show_preview(&self, file: StagedFile) -> Result<(), JsValue> {
        let container = self.preview_container()?;
        let size = format_file_size(file.size);
        let name = file.name;

        dom::mount_into(&container, move || {
            view! {
                <div class="file-preview-card d-flex align-items-center p-3 border rounded mb-2">
                    <i class="bi bi-file-earmark-text text-primary me-3" style="font-size: 1.5rem;"></i>
                    <div class="flex-grow-1">
                        <div class="fw-semibold">{name}</div>
                        <small class="text-muted">{size}</small>
                    </div>
                    <button
                        type="button"
                        class="btn btn-sm btn-outline-danger"
                        title="Remove"
                        on:click=move |ev: MouseEvent| {
                            ev.prevent_default();
                            ev.stop_propagation();
                            dom::remove_closest(&ev, ".file-preview-card");
                        }
                    >
                        <i class="bi bi-trash"></i>
                    </button>
                </div>
            }
        });
        Ok(())
    }

    /// The zone's `.file-preview` block, created on first accepted file
    fn preview_container(&self) -> Result<HtmlElement, JsValue> {
        if let Some(existing) = self.zone.query_selector(PREVIEW_SELECTOR)? {
            return existing.dyn_into().map_err(JsValue::from);
        }
        let preview = dom::create_html_element(&self.document, "div", "file-preview mt-3")?;
        self.zone.append_child(&preview)?;
        Ok(preview)
    }
}
