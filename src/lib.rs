//! IM3 Systems marketing site: Leptos client-side app wiring and routes.

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::components::*;
use leptos_router::StaticSegment;
use log::info;

// Modules
mod audio;
mod components;
mod config;
mod error;
mod i18n;
mod pages;
mod theme;

// Top-Level pages
use crate::pages::booking::Booking;
use crate::pages::confirmed::Confirmed;
use crate::pages::home::Home;
use crate::pages::not_found::NotFound;

use crate::audio::provide_audio;
use crate::config::{SiteConfig, provide_site_config};
use crate::i18n::provide_i18n;
use crate::theme::provide_theme;

/// Pages reachable by URL. Anything else renders [`NotFound`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Page {
	/// Landing page.
	Home,
	/// Embedded booking calendar.
	Booking,
	/// Post-booking briefing.
	Confirmed,
}

impl Page {
	/// Route segment the router matches.
	pub fn segment(self) -> &'static str {
		match self {
			Page::Home => "",
			Page::Booking => "booking",
			Page::Confirmed => "confirmed",
		}
	}

	/// Absolute link target.
	pub fn path(self) -> &'static str {
		match self {
			Page::Home => "/",
			Page::Booking => "/booking",
			Page::Confirmed => "/confirmed",
		}
	}
}

/// Initialize logging and panic hooks for the WASM target.
pub fn init_logging() {
	let _ = console_log::init_with_level(SiteConfig::default().log_level);
	console_error_panic_hook::set_once();
	info!("Logging initialized");
}

/// An app router which renders the site pages and handles 404's
#[component]
pub fn App() -> impl IntoView {
	// Provides context that manages stylesheets, titles, meta tags, etc.
	provide_meta_context();

	let config = provide_site_config();
	let i18n = provide_i18n();
	let theme = provide_theme(&config);
	provide_audio();

	view! {
		<Html
			attr:lang=move || i18n.language().code()
			attr:dir="ltr"
			attr:data-theme=move || if theme.is_dark() { "dark" } else { "light" }
		/>

		// sets the document title
		<Title text=move || i18n.t().meta.title />

		// injects metadata in the <head> of the page
		<Meta charset="UTF-8" />
		<Meta name="viewport" content="width=device-width, initial-scale=1.0" />

		<Router>
			<Routes fallback=|| view! { <NotFound /> }>
				<Route path=StaticSegment(Page::Home.segment()) view=Home />
				<Route path=StaticSegment(Page::Booking.segment()) view=Booking />
				<Route path=StaticSegment(Page::Confirmed.segment()) view=Confirmed />
			</Routes>
		</Router>
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	const PAGES: [Page; 3] = [Page::Home, Page::Booking, Page::Confirmed];

	#[test]
	fn links_match_routed_segments() {
		for page in PAGES {
			assert_eq!(page.path(), format!("/{}", page.segment()));
		}
	}

	#[test]
	fn routed_paths_are_distinct() {
		let paths: Vec<_> = PAGES.iter().map(|p| p.path()).collect();
		assert_eq!(paths, ["/", "/booking", "/confirmed"]);
	}
}
