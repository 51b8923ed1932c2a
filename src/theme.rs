//! Dark-mode preference: resolved at startup, mirrored onto `<html>` and
//! persisted on every change.

use leptos::prelude::*;
use log::{debug, warn};

use crate::config::SiteConfig;
use crate::error::{BrowserError, document, window};
use crate::i18n::use_i18n;

/// Key/value storage for small user preferences.
pub trait PreferenceStore {
	/// Stored value under `key`, if any.
	fn load(&self, key: &str) -> Result<Option<String>, BrowserError>;
	/// Overwrite `key` with `value`.
	fn save(&self, key: &str, value: &str) -> Result<(), BrowserError>;
}

/// The browser's `localStorage`.
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalPreferences;

impl LocalPreferences {
	fn storage() -> Result<web_sys::Storage, BrowserError> {
		window()?.local_storage()?.ok_or(BrowserError::StorageUnavailable)
	}
}

impl PreferenceStore for LocalPreferences {
	fn load(&self, key: &str) -> Result<Option<String>, BrowserError> {
		Ok(Self::storage()?.get_item(key)?)
	}

	fn save(&self, key: &str, value: &str) -> Result<(), BrowserError> {
		Ok(Self::storage()?.set_item(key, value)?)
	}
}

/// Any stored value wins and means dark only when it is exactly `"true"`;
/// with nothing stored the OS preference decides.
pub fn resolve_dark_mode(stored: Option<&str>, os_dark: bool) -> bool {
	match stored {
		Some(value) => value == "true",
		None => os_dark,
	}
}

/// Startup value of the dark-mode flag read from `store`.
pub fn initial_dark_mode(store: &impl PreferenceStore, key: &str, os_dark: bool) -> bool {
	let stored = store.load(key).unwrap_or_else(|err| {
		warn!("dark mode preference unreadable: {err}");
		None
	});
	resolve_dark_mode(stored.as_deref(), os_dark)
}

fn os_prefers_dark() -> Result<bool, BrowserError> {
	Ok(window()?
		.match_media("(prefers-color-scheme: dark)")?
		.is_some_and(|query| query.matches()))
}

fn apply_dark_class(dark: bool) -> Result<(), BrowserError> {
	let root = document()?.document_element().ok_or(BrowserError::NoDocument)?;
	root.class_list().toggle_with_force("dark", dark)?;
	Ok(())
}

/// Dark-mode handle, shared through context.
#[derive(Clone, Copy)]
pub struct Theme {
	dark: RwSignal<bool>,
}

impl Theme {
	pub fn new(dark: bool) -> Self {
		Self {
			dark: RwSignal::new(dark),
		}
	}

	pub fn is_dark(&self) -> bool {
		self.dark.get()
	}

	pub fn toggle(&self) {
		self.dark.update(|dark| *dark = !*dark);
	}
}

/// Resolve the preference, install the [`Theme`] handle and keep the page and
/// `localStorage` in sync with it.
pub fn provide_theme(config: &SiteConfig) -> Theme {
	let os_dark = os_prefers_dark().unwrap_or_else(|err| {
		warn!("color scheme query failed: {err}");
		false
	});
	let theme = Theme::new(initial_dark_mode(&LocalPreferences, config.dark_mode_key, os_dark));
	provide_context(theme);

	let key = config.dark_mode_key;
	Effect::new(move |_| {
		let dark = theme.dark.get();
		debug!("dark mode: {dark}");
		if let Err(err) = apply_dark_class(dark) {
			warn!("could not apply theme: {err}");
		}
		if let Err(err) = LocalPreferences.save(key, if dark { "true" } else { "false" }) {
			warn!("could not persist theme: {err}");
		}
	});

	theme
}

/// The theme handle, if one was provided.
pub fn use_theme() -> Option<Theme> {
	use_context::<Theme>()
}

/// Sun/moon button flipping the theme.
#[component]
pub fn ThemeToggle() -> impl IntoView {
	let i18n = use_i18n();
	let theme = use_theme();

	view! {
		<button
			class="btn-icon theme-toggle"
			aria-label=move || i18n.t().nav.dark_mode
			title=move || i18n.t().nav.dark_mode
			on:click=move |_| {
				if let Some(theme) = theme {
					theme.toggle();
				}
			}
		>
			{move || if theme.is_some_and(|t| t.is_dark()) { "☀" } else { "☾" }}
		</button>
	}
}

#[cfg(test)]
mod tests {
	use std::cell::RefCell;
	use std::collections::HashMap;

	use super::*;

	#[derive(Default)]
	struct MemoryStore(RefCell<HashMap<String, String>>);

	impl PreferenceStore for MemoryStore {
		fn load(&self, key: &str) -> Result<Option<String>, BrowserError> {
			Ok(self.0.borrow().get(key).cloned())
		}

		fn save(&self, key: &str, value: &str) -> Result<(), BrowserError> {
			self.0.borrow_mut().insert(key.to_owned(), value.to_owned());
			Ok(())
		}
	}

	struct BrokenStore;

	impl PreferenceStore for BrokenStore {
		fn load(&self, _: &str) -> Result<Option<String>, BrowserError> {
			Err(BrowserError::StorageUnavailable)
		}

		fn save(&self, _: &str, _: &str) -> Result<(), BrowserError> {
			Err(BrowserError::StorageUnavailable)
		}
	}

	#[test]
	fn stored_value_wins_over_os() {
		assert!(resolve_dark_mode(Some("true"), false));
		assert!(!resolve_dark_mode(Some("false"), true));
	}

	#[test]
	fn missing_value_falls_back_to_os() {
		assert!(resolve_dark_mode(None, true));
		assert!(!resolve_dark_mode(None, false));
	}

	#[test]
	fn unrecognised_stored_value_means_light() {
		assert!(!resolve_dark_mode(Some("yes"), true));
		assert!(!resolve_dark_mode(Some(""), true));
		assert!(!resolve_dark_mode(Some(" true"), true));
	}

	#[test]
	fn startup_reads_from_store() {
		let store = MemoryStore::default();
		assert!(!initial_dark_mode(&store, "im3-dark-mode", false));
		store.save("im3-dark-mode", "true").unwrap();
		assert!(initial_dark_mode(&store, "im3-dark-mode", false));
		assert!(initial_dark_mode(&BrokenStore, "im3-dark-mode", true));
	}

	#[test]
	fn toggle_flips_flag() {
		Owner::new().with(|| {
			let theme = Theme::new(false);
			theme.toggle();
			assert!(theme.is_dark());
			theme.toggle();
			assert!(!theme.is_dark());
		});
	}
}
