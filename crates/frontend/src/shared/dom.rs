//! Small helpers over `web_sys` used by every enhancer.

use leptos::prelude::*;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, Event, EventTarget, HtmlElement, NodeList};

pub fn document() -> Option<Document> {
    web_sys::window().and_then(|w| w.document())
}

/// Elements of a `NodeList`, in document order
pub fn elements(list: &NodeList) -> Vec<Element> {
    (0..list.length())
        .filter_map(|i| list.get(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

/// All elements in the document matching `selector`
pub fn query_all(document: &Document, selector: &str) -> Vec<Element> {
    document
        .query_selector_all(selector)
        .map(|list| elements(&list))
        .unwrap_or_default()
}

/// Attach a listener for the page lifetime. The closure is leaked.
pub fn listen<F>(target: &EventTarget, event: &str, handler: F) -> Result<(), JsValue>
where
    F: FnMut(Event) + 'static,
{
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(Event)>);
    target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}

/// Element that dispatched the event
pub fn event_element(event: &Event) -> Option<Element> {
    event.target().and_then(|t| t.dyn_into::<Element>().ok())
}

/// Remove the nearest ancestor of the event target matching `selector`
pub fn remove_closest(event: &Event, selector: &str) {
    if let Some(el) = event_element(event).and_then(|el| el.closest(selector).ok().flatten()) {
        el.remove();
    }
}

pub fn create_html_element(
    document: &Document,
    tag: &str,
    class_name: &str,
) -> Result<HtmlElement, JsValue> {
    let el = document.create_element(tag)?;
    el.set_class_name(class_name);
    el.dyn_into::<HtmlElement>().map_err(JsValue::from)
}

pub fn set_style(el: &Element, property: &str, value: &str) {
    if let Some(el) = el.dyn_ref::<HtmlElement>() {
        let _ = el.style().set_property(property, value);
    }
}

pub fn clear_style(el: &Element, property: &str) {
    if let Some(el) = el.dyn_ref::<HtmlElement>() {
        let _ = el.style().remove_property(property);
    }
}

/// Render a view at the end of `host` and keep it mounted for the page
/// lifetime. Removing the host's nodes later is plain DOM removal.
pub fn mount_into<F, N>(host: &HtmlElement, view: F)
where
    F: FnOnce() -> N + 'static,
    N: IntoView,
{
    leptos::mount::mount_to(host.clone(), view).forget();
}
