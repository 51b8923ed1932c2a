//! Failures of optional browser APIs.

use wasm_bindgen::JsValue;

/// A browser facility the site wanted was missing or refused the call.
///
/// None of these are fatal: callers log them and carry on without the
/// feature.
#[derive(Debug, thiserror::Error)]
pub enum BrowserError {
	/// No global `window`, e.g. outside a browser.
	#[error("no global window")]
	NoWindow,
	/// No `document` on the window.
	#[error("no document on window")]
	NoDocument,
	/// `localStorage` is disabled or unavailable.
	#[error("local storage unavailable")]
	StorageUnavailable,
	/// The canvas refused to hand out a 2d context.
	#[error("2d canvas context unavailable")]
	NoCanvasContext,
	/// A JavaScript call threw.
	#[error("javascript error: {0}")]
	Js(String),
}

impl From<JsValue> for BrowserError {
	fn from(value: JsValue) -> Self {
		Self::Js(value.as_string().unwrap_or_else(|| format!("{value:?}")))
	}
}

/// The global window, as a `Result`.
pub fn window() -> Result<web_sys::Window, BrowserError> {
	web_sys::window().ok_or(BrowserError::NoWindow)
}

/// The window's document, as a `Result`.
pub fn document() -> Result<web_sys::Document, BrowserError> {
	window()?.document().ok_or(BrowserError::NoDocument)
}
