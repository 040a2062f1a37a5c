//! Thin query and listener helpers over `web_sys`.
//!
//! Every component goes through these so absence handling stays uniform:
//! a selector that matches nothing is `None` / an empty list, never an error.

use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::convert::FromWasmAbi;
use web_sys::{AddEventListenerOptions, Document, Element, EventTarget, HtmlInputElement, HtmlTextAreaElement, NodeList};

use crate::error::FxError;

/// The current document, if running in a browser window.
#[must_use]
pub fn document() -> Option<Document> {
    web_sys::window().and_then(|w| w.document())
}

/// First element in the document matching `selector`.
///
/// # Errors
///
/// Returns [`FxError::Dom`] if the selector is rejected by the browser.
pub fn query(document: &Document, selector: &str) -> Result<Option<Element>, FxError> {
    Ok(document.query_selector(selector)?)
}

/// All elements in the document matching `selector`, in document order.
///
/// # Errors
///
/// Returns [`FxError::Dom`] if the selector is rejected by the browser.
pub fn query_all(document: &Document, selector: &str) -> Result<Vec<Element>, FxError> {
    Ok(elements(&document.query_selector_all(selector)?))
}

/// All descendants of `root` matching `selector`.
///
/// # Errors
///
/// Returns [`FxError::Dom`] if the selector is rejected by the browser.
pub fn query_all_in(root: &Element, selector: &str) -> Result<Vec<Element>, FxError> {
    Ok(elements(&root.query_selector_all(selector)?))
}

fn elements(list: &NodeList) -> Vec<Element> {
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_ref::<Element>().cloned())
        .collect()
}

/// Trimmed value of the input or textarea matching `selector`.
///
/// A missing element, or one that is not a text control, reads as empty.
///
/// # Errors
///
/// Returns [`FxError::Dom`] if the selector is rejected by the browser.
pub fn field_value(document: &Document, selector: &str) -> Result<String, FxError> {
    let Some(el) = query(document, selector)? else {
        return Ok(String::new());
    };
    let raw = if let Some(input) = el.dyn_ref::<HtmlInputElement>() {
        input.value()
    } else if let Some(area) = el.dyn_ref::<HtmlTextAreaElement>() {
        area.value()
    } else {
        String::new()
    };
    Ok(raw.trim().to_owned())
}

/// Register `handler` for `event` on `target` for the lifetime of the page.
///
/// Passive listeners promise the browser they never call `preventDefault`.
///
/// # Errors
///
/// Returns [`FxError::Dom`] if the listener cannot be attached.
pub fn listen<E>(
    target: &EventTarget,
    event: &str,
    passive: bool,
    handler: impl FnMut(E) + 'static,
) -> Result<(), FxError>
where
    E: FromWasmAbi + 'static,
{
    let cb = Closure::wrap(Box::new(handler) as Box<dyn FnMut(E)>);
    if passive {
        let opts = AddEventListenerOptions::new();
        opts.set_passive(true);
        target.add_event_listener_with_callback_and_add_event_listener_options(
            event,
            cb.as_ref().unchecked_ref(),
            &opts,
        )?;
    } else {
        target.add_event_listener_with_callback(event, cb.as_ref().unchecked_ref())?;
    }
    // Listeners live until the page is torn down.
    cb.forget();
    Ok(())
}

/// Log a failed handler run; handlers never propagate past the event loop.
pub fn report(component: &str, result: Result<(), FxError>) {
    if let Err(err) = result {
        log::warn!("{component}: {err}");
    }
}
