//! Shared stylesheet for toasts, tooltips and the submit spinner.

use web_sys::Document;

pub const STYLE_ELEMENT_ID: &str = "paper-cms-enhancements";

const ENHANCEMENT_CSS: &str = r#"
    .notification-container {
        position: fixed;
        top: 20px;
        right: 20px;
        z-index: 9999;
        max-width: 350px;
    }

    .notification-toast {
        margin-bottom: 10px;
        transition: opacity 0.3s ease;
    }

    .alert {
        transition: opacity 0.3s ease;
    }

    .tooltip-custom {
        position: absolute;
        background: #333;
        color: white;
        padding: 5px 10px;
        border-radius: 4px;
        font-size: 12px;
        z-index: 9999;
        opacity: 0;
        transition: opacity 0.3s ease;
        pointer-events: none;
    }

    .tooltip-custom::after {
        content: '';
        position: absolute;
        top: 100%;
        left: 50%;
        margin-left: -5px;
        border: 5px solid transparent;
        border-top-color: #333;
    }

    .spinner {
        display: inline-block;
        width: 1rem;
        height: 1rem;
        border: 2px solid #f3f3f3;
        border-top: 2px solid var(--primary);
        border-radius: 50%;
        animation: spin 1s linear infinite;
    }

    @keyframes spin {
        0% { transform: rotate(0deg); }
        100% { transform: rotate(360deg); }
    }
"#;

/// Append the stylesheet to `<head>` unless it is already there.
pub fn inject(document: &Document) {
    if document.get_element_by_id(STYLE_ELEMENT_ID).is_some() {
        return;
    }
    let Some(head) = document.head() else {
        log::warn!("no <head>, enhancement styles not injected");
        return;
    };
    if let Ok(style) = document.create_element("style") {
        style.set_id(STYLE_ELEMENT_ID);
        style.set_text_content(Some(ENHANCEMENT_CSS));
        let _ = head.append_child(&style);
    }
}
