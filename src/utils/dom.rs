//! DOM and Web API utility functions.
//!
//! Provides safe, consistent access to browser APIs with proper error handling.

use wasm_bindgen::prelude::*;
use web_sys::{Document, Element, Storage, Window};

use crate::core::error::FullscreenError;

/// Get the browser window object.
#[inline]
pub fn window() -> Option<Window> {
    web_sys::window()
}

/// Get the document.
#[inline]
pub fn document() -> Option<Document> {
    window()?.document()
}

/// Get the root (`<html>`) element.
#[inline]
pub fn root_element() -> Option<Element> {
    document()?.document_element()
}

/// Get localStorage.
#[inline]
pub fn local_storage() -> Option<Storage> {
    window()?.local_storage().ok()?
}

/// Add (`enabled = true`) or remove a class on the root element.
///
/// Returns `true` if the root element was found and updated.
pub fn set_root_class(class: &str, enabled: bool) -> bool {
    root_element().is_some_and(|root| root.class_list().toggle_with_force(class, enabled).is_ok())
}

/// Check whether the root element currently carries `class`.
pub fn root_has_class(class: &str) -> bool {
    root_element().is_some_and(|root| root.class_list().contains(class))
}

// =============================================================================
// Console
// =============================================================================

/// Log an informational message to the browser console.
pub fn console_log(message: &str) {
    #[cfg(target_arch = "wasm32")]
    web_sys::console::log_1(&message.into());
    #[cfg(not(target_arch = "wasm32"))]
    let _ = message;
}

/// Log a warning to the browser console.
pub fn console_warn(message: &str) {
    #[cfg(target_arch = "wasm32")]
    web_sys::console::warn_1(&message.into());
    #[cfg(not(target_arch = "wasm32"))]
    let _ = message;
}

/// Log an error to the browser console.
pub fn console_error(message: &str) {
    #[cfg(target_arch = "wasm32")]
    web_sys::console::error_1(&message.into());
    #[cfg(not(target_arch = "wasm32"))]
    let _ = message;
}

// =============================================================================
// Fullscreen
// =============================================================================

// web-sys binds these as synchronous calls; browsers return a Promise whose
// rejection carries the actual failure.
#[wasm_bindgen]
extern "C" {
    /// An `Element` or `Document` seen through the promise-returning
    /// fullscreen API.
    type FullscreenTarget;

    #[wasm_bindgen(method, catch, js_name = requestFullscreen)]
    fn request_fullscreen_promise(this: &FullscreenTarget) -> Result<js_sys::Promise, JsValue>;

    #[wasm_bindgen(method, catch, js_name = exitFullscreen)]
    fn exit_fullscreen_promise(this: &FullscreenTarget) -> Result<js_sys::Promise, JsValue>;
}

/// Describe a thrown JS value as `message (name)` when it is an `Error`.
fn js_error_message(value: &JsValue) -> String {
    match value.dyn_ref::<js_sys::Error>() {
        Some(err) => format!("{} ({})", String::from(err.message()), String::from(err.name())),
        None => value.as_string().unwrap_or_else(|| format!("{:?}", value)),
    }
}

/// Enter fullscreen on the root element, or leave it if already active.
///
/// Synchronous failures are returned. A rejected promise is logged to the
/// console once it settles; either way no application state changes.
pub fn toggle_fullscreen() -> Result<(), FullscreenError> {
    let document = document().ok_or(FullscreenError::NoDocument)?;

    let promise = if document.fullscreen_element().is_some() {
        document
            .unchecked_ref::<FullscreenTarget>()
            .exit_fullscreen_promise()
    } else {
        let root = document
            .document_element()
            .ok_or(FullscreenError::NoDocument)?;
        root.unchecked_ref::<FullscreenTarget>()
            .request_fullscreen_promise()
    }
    .map_err(|err| FullscreenError::Rejected(js_error_message(&err)))?;

    wasm_bindgen_futures::spawn_local(async move {
        if let Err(err) = wasm_bindgen_futures::JsFuture::from(promise).await {
            console_error(&FullscreenError::Rejected(js_error_message(&err)).to_string());
        }
    });
    Ok(())
}
