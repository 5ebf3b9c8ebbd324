//! Back-link and print-link wiring
//!
//! Convenience handlers carried over from the page's bundled script: the
//! GOV.UK back link routes to `history.back()`, the print link wraps its
//! text in an anchor and routes to `window.print()`, and the current
//! history entry is replaced on load to suppress the browser's resubmit
//! warning. Each handler degrades silently when its element is absent.

use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Event, Window};

const BACK_LINK_SELECTOR: &str = ".govuk-back-link";
const PRINT_LINK_SELECTOR: &str = ".cbc-print-link";

/// Replace the current history entry with itself so a reload after the
/// native form submission does not prompt to resubmit.
pub fn squash_resubmit_warning(window: &Window) -> Result<(), JsValue> {
    let Ok(history) = window.history() else {
        return Ok(());
    };
    let href = window.location().href()?;
    history.replace_state_with_url(&JsValue::NULL, "", Some(&href))
}

/// Route a back-link click to `history.back()` instead of its href.
pub fn wire_back_link(window: &Window, document: &Document) -> Result<(), JsValue> {
    let Some(link) = document.query_selector(BACK_LINK_SELECTOR)? else {
        return Ok(());
    };
    let history = window.history()?;
    let handler = Closure::wrap(Box::new(move |event: Event| {
        event.prevent_default();
        event.stop_propagation();
        if let Err(err) = history.back() {
            web_sys::console::error_2(&JsValue::from_str("history.back failed"), &err);
        }
    }) as Box<dyn FnMut(Event)>);
    link.add_event_listener_with_callback("click", handler.as_ref().unchecked_ref())?;
    handler.forget();
    Ok(())
}

/// Wrap the print link's content in a `govuk-link` anchor and route clicks
/// to `window.print()`.
pub fn wire_print_link(window: &Window, document: &Document) -> Result<(), JsValue> {
    let Some(link) = document.query_selector(PRINT_LINK_SELECTOR)? else {
        return Ok(());
    };

    let anchor = document.create_element("a")?;
    anchor.set_class_name("govuk-link");
    anchor.set_attribute("href", "#")?;
    anchor.set_inner_html(&link.inner_html());
    link.set_inner_html("");
    link.append_child(&anchor)?;

    let window = window.clone();
    let handler = Closure::wrap(Box::new(move |event: Event| {
        event.prevent_default();
        event.stop_propagation();
        if let Err(err) = window.print() {
            web_sys::console::error_2(&JsValue::from_str("window.print failed"), &err);
        }
    }) as Box<dyn FnMut(Event)>);
    link.add_event_listener_with_callback("click", handler.as_ref().unchecked_ref())?;
    handler.forget();
    Ok(())
}
