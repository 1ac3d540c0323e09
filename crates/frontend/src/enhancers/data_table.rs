//! Search box, header sorting and scroll wrapper for `.table` elements.

use super::notifications::NotificationCenter;
use crate::shared::debounce::Debouncer;
use crate::shared::dom;
use contracts::enums::NotificationLevel;
use contracts::shared::config::TableSettings;
use contracts::shared::table::{sort_permutation, visible_rows, SortOrder, SORT_ORDER_ATTRIBUTE};
use leptos::prelude::*;
use std::cmp::Ordering;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, Event, HtmlInputElement, HtmlTableRowElement, Node};

const TABLE_SELECTOR: &str = ".table";
const SORT_ICON_HTML: &str = r#" <i class="bi bi-arrow-down-up ms-1 opacity-50"></i>"#;
const EXPORT_PLACEHOLDER: &str = "Export functionality will be implemented soon!";

pub fn attach_all(
    document: &Document,
    settings: &TableSettings,
    notifications: NotificationCenter,
) -> usize {
    let mut attached = 0;
    for (index, table) in dom::query_all(document, TABLE_SELECTOR).iter().enumerate() {
        match attach(document, table, index, settings, notifications) {
            Ok(()) => attached += 1,
            Err(e) => log::warn!("table #{} only partly enhanced: {:?}", index, e),
        }
    }
    attached
}

fn attach(
    document: &Document,
    table: &Element,
    index: usize,
    settings: &TableSettings,
    notifications: NotificationCenter,
) -> Result<(), JsValue> {
    add_search(document, table, index, settings, notifications)?;
    add_sorting(table)?;
    wrap_responsive(document, table)
}

fn add_search(
    document: &Document,
    table: &Element,
    index: usize,
    settings: &TableSettings,
    notifications: NotificationCenter,
) -> Result<(), JsValue> {
    let wrapper = match table.closest(".card-body")? {
        Some(card_body) => card_body,
        None => table
            .parent_element()
            .ok_or_else(|| JsValue::from_str("table has no parent"))?,
    };

    let toolbar = dom::create_html_element(document, "div", "mb-3")?;
    wrapper.prepend_with_node_1(&toolbar)?;

    let input_id = format!("tableSearch-{}", index);
    let view_input_id = input_id.clone();
    dom::mount_into(&toolbar, move || {
        view! {
            <div class="d-flex justify-content-between align-items-center">
                <div class="input-group" style="max-width: 300px;">
                    <span class="input-group-text"><i class="bi bi-search"></i></span>
                    <input type="text" class="form-control" placeholder="Search..." id=view_input_id />
                </div>
                <div class="btn-group" role="group">
                    <button
                        type="button"
                        class="btn btn-sm btn-outline-primary"
                        on:click=move |_| notifications.notify(EXPORT_PLACEHOLDER, NotificationLevel::Info)
                    >
                        <i class="bi bi-download me-1"></i>
                        "Export CSV"
                    </button>
                </div>
            </div>
        }
    });

    let input: HtmlInputElement = toolbar
        .query_selector(&format!("#{}", input_id))?
        .ok_or_else(|| JsValue::from_str("search input not rendered"))?
        .dyn_into()
        .map_err(JsValue::from)?;

    let debouncer = Debouncer::new(settings.search_debounce_ms);
    let search_input = input.clone();
    let search_table = table.clone();
    dom::listen(&input, "input", move |_| {
        let query = search_input.value();
        let table = search_table.clone();
        debouncer.call(move || filter_rows(&table, &query));
    })
}

/// Hide body rows whose text does not contain `query`
fn filter_rows(table: &Element, query: &str) {
    let Ok(list) = table.query_selector_all("tbody tr") else {
        return;
    };
    let rows = dom::elements(&list);
    let texts: Vec<String> = rows
        .iter()
        .map(|row| row.text_content().unwrap_or_default())
        .collect();

    for (row, visible) in rows.iter().zip(visible_rows(&texts, query)) {
        if visible {
            dom::clear_style(row, "display");
        } else {
            dom::set_style(row, "display", "none");
        }
    }
}

fn add_sorting(table: &Element) -> Result<(), JsValue> {
    let headers = dom::elements(&table.query_selector_all("th")?);
    for (column, header) in headers.iter().enumerate() {
        dom::set_style(header, "cursor", "pointer");
        header.insert_adjacent_html("beforeend", SORT_ICON_HTML)?;

        let sort_table_el = table.clone();
        dom::listen(header, "click", move |_: Event| sort_by_column(&sort_table_el, column))?;
    }
    Ok(())
}

/// Reorder body rows by the clicked column and store the applied order
fn sort_by_column(table: &Element, column: usize) {
    let Ok(Some(tbody)) = table.query_selector("tbody") else {
        return;
    };
    let Ok(list) = tbody.query_selector_all("tr") else {
        return;
    };
    let rows = dom::elements(&list);
    let keys: Vec<String> = rows.iter().map(|row| cell_text(row, column)).collect();

    let stored = table
        .get_attribute(SORT_ORDER_ATTRIBUTE)
        .as_deref()
        .and_then(SortOrder::from_attr);
    let order = SortOrder::next(stored);

    for index in sort_permutation(&keys, order, locale_compare) {
        let _ = tbody.append_child(&rows[index]);
    }
    let _ = table.set_attribute(SORT_ORDER_ATTRIBUTE, order.as_attr());
}

/// Trimmed text of a row's cell; missing cells sort as empty text
fn cell_text(row: &Element, column: usize) -> String {
    row.dyn_ref::<HtmlTableRowElement>()
        .and_then(|row| row.cells().item(column as u32))
        .and_then(|cell| cell.text_content())
        .map(|text| text.trim().to_string())
        .unwrap_or_default()
}

fn locale_compare(a: &str, b: &str) -> Ordering {
    js_sys::JsString::from(a)
        .locale_compare(b, &js_sys::Array::new(), &js_sys::Object::new())
        .cmp(&0)
}

fn wrap_responsive(document: &Document, table: &Element) -> Result<(), JsValue> {
    if table.closest(".table-responsive")?.is_some() {
        return Ok(());
    }
    let parent = table
        .parent_node()
        .ok_or_else(|| JsValue::from_str("table has no parent"))?;
    let wrapper = dom::create_html_element(document, "div", "table-responsive")?;
    let table_node: &Node = table;
    parent.insert_before(&wrapper, Some(table_node))?;
    wrapper.append_child(table_node)?;
    Ok(())
}

/// Placeholder behind the "Export CSV" button, callable from page scripts
#[wasm_bindgen(js_name = exportTable)]
pub fn export_table(format: Option<String>) {
    log::debug!("export requested: {}", format.as_deref().unwrap_or("csv"));
    NotificationCenter::from_active_config().notify(EXPORT_PLACEHOLDER, NotificationLevel::Info);
}
