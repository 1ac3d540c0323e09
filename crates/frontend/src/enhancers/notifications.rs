//! Toast notifications and auto-dismissal of server-rendered alerts.

use crate::shared::{dom, settings, styles};
use contracts::enums::NotificationLevel;
use contracts::shared::config::NotificationTiming;
use contracts::shared::toast::{ToastPhase, ToastStep};
use gloo_timers::future::TimeoutFuture;
use leptos::ev::MouseEvent;
use leptos::prelude::*;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys::{Document, Element};

const CONTAINER_CLASS: &str = "notification-container";

/// Pushes toasts into the shared top-right container.
///
/// Passed by value to the enhancers that report problems to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NotificationCenter {
    timing: NotificationTiming,
}

impl NotificationCenter {
    pub fn new(timing: NotificationTiming) -> Self {
        Self { timing }
    }

    /// Center using the config loaded at start-up
    pub fn from_active_config() -> Self {
        Self::new(settings::active().notifications)
    }

    pub fn notify(&self, message: &str, level: NotificationLevel) {
        let Some(document) = dom::document() else {
            return;
        };
        if let Err(e) = self.push_toast(&document, message, level) {
            log::warn!("toast not shown: {:?}", e);
        }
    }

    fn push_toast(
        &self,
        document: &Document,
        message: &str,
        level: NotificationLevel,
    ) -> Result<(), JsValue> {
        styles::inject(document);
        let container = container(document)?;
        let toast = dom::create_html_element(document, "div", &level.css_class())?;
        toast.set_attribute("role", "alert")?;
        container.append_child(&toast)?;

        let message = message.to_string();
        let icon = level.icon_class();
        dom::mount_into(&toast, move || {
            view! {
                <div class="d-flex align-items-center">
                    <i class=icon></i>
                    <span>{message}</span>
                    <button
                        type="button"
                        class="btn-close ms-auto"
                        aria-label="Close"
                        on:click=move |ev: MouseEvent| dom::remove_closest(&ev, ".notification-toast")
                    ></button>
                </div>
            }
        });

        schedule_dismissal(toast.into(), self.timing.toast_schedule());
        Ok(())
    }

    /// Fade out every `.alert` present on the page. Returns how many.
    pub fn dismiss_alerts(&self, document: &Document) -> usize {
        let alerts = dom::query_all(document, ".alert");
        for alert in &alerts {
            schedule_dismissal(alert.clone(), self.timing.alert_schedule());
        }
        alerts.len()
    }
}

/// Shared container, created on first use
fn container(document: &Document) -> Result<Element, JsValue> {
    if let Some(existing) = document.query_selector(&format!(".{}", CONTAINER_CLASS))? {
        return Ok(existing);
    }
    let body = document
        .body()
        .ok_or_else(|| JsValue::from_str("document has no body"))?;
    let container = dom::create_html_element(document, "div", CONTAINER_CLASS)?;
    body.append_child(&container)?;
    Ok(container.into())
}

/// Walk the element through its dismissal steps. Removing an element that
/// the user already closed is a no-op.
fn schedule_dismissal(element: Element, steps: [ToastStep; 2]) {
    spawn_local(async move {
        for step in steps {
            TimeoutFuture::new(step.delay_ms).await;
            match step.phase {
                ToastPhase::Visible => {}
                ToastPhase::Fading => dom::set_style(&element, "opacity", "0"),
                ToastPhase::Removed => element.remove(),
            }
        }
    });
}

/// Toast entry point for other scripts on the page.
///
/// `level` accepts `info`, `success`, `warning`, `danger` (or `error`).
#[wasm_bindgen(js_name = showNotification)]
pub fn show_notification(message: &str, level: Option<String>) {
    let level = level
        .as_deref()
        .map(NotificationLevel::from_name)
        .unwrap_or_default();
    NotificationCenter::from_active_config().notify(message, level);
}

