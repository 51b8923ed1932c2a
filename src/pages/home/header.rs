use leptos::ev;
use leptos::prelude::*;
use log::warn;

use super::{Section, scroll_to_section};
use crate::config::use_site_config;
use crate::error::window;
use crate::i18n::{Language, use_i18n};
use crate::theme::ThemeToggle;

/// Scroll offset past which the header compacts.
const SCROLL_COMPACT: f64 = 20.0;

fn go_to(section: Section) {
	if let Err(err) = scroll_to_section(section) {
		warn!("scroll to #{} failed: {err}", section.id());
	}
}

#[component]
fn LanguageSwitch(
	/// Show full language names instead of codes.
	#[prop(optional)]
	long: bool,
) -> impl IntoView {
	let i18n = use_i18n();

	Language::ALL
		.into_iter()
		.map(|lang| {
			let label = move || {
				let t = i18n.t();
				match (long, lang) {
					(true, Language::Es) => t.nav.spanish.to_owned(),
					(true, Language::En) => t.nav.english.to_owned(),
					(false, _) => lang.code().to_uppercase(),
				}
			};
			view! {
				<button
					class=move || if i18n.language() == lang { "lang-btn active" } else { "lang-btn" }
					on:click=move |_| i18n.set_language(lang)
				>
					<span class="lang-flag">{lang.flag()}</span>
					" "
					{label}
				</button>
			}
		})
		.collect_view()
}

/// Fixed top bar with section links, language and theme switches.
#[component]
pub fn Header() -> impl IntoView {
	let i18n = use_i18n();
	let config = use_site_config();
	let (booking_url, logo) = (config.booking_url, config.logo_url);
	let scrolled = RwSignal::new(false);
	let menu_open = RwSignal::new(false);

	let handle = window_event_listener(ev::scroll, move |_| {
		match window().and_then(|w| Ok(w.scroll_y()?)) {
			Ok(y) => scrolled.set(y > SCROLL_COMPACT),
			Err(err) => warn!("scroll position unavailable: {err}"),
		}
	});
	on_cleanup(move || handle.remove());

	let nav_link = move |section: Section, class: &'static str| {
		view! {
			<button
				class=class
				on:click=move |_| {
					menu_open.set(false);
					go_to(section);
				}
			>
				{move || section.label(i18n.t())}
			</button>
		}
	};

	view! {
		<header class=move || if scrolled.get() { "site-header scrolled" } else { "site-header" }>
			<div class="header-bar">
				<a href=crate::Page::Home.path() class="logo">
					<img src=logo alt="IM3 Systems" />
				</a>

				<nav class="desktop-nav">
					<div class="lang-switch">
						<LanguageSwitch />
					</div>
					{Section::NAV.into_iter().map(|s| nav_link(s, "nav-link")).collect_view()}
				</nav>

				<div class="header-actions">
					<button class="btn-icon mobile-only" on:click=move |_| i18n.toggle()>
						{move || i18n.language().other().flag()}
					</button>
					<ThemeToggle />
					<a
						class="btn btn-ink desktop-only"
						href=booking_url
						target="_blank"
						rel="noopener noreferrer"
					>
						{move || i18n.t().nav.request_diagnosis}
						" →"
					</a>
					<button
						class="btn-icon mobile-only"
						aria-label=move || i18n.t().nav.menu
						on:click=move |_| menu_open.update(|open| *open = !*open)
					>
						{move || if menu_open.get() { "✕" } else { "☰" }}
					</button>
				</div>
			</div>

			<Show when=move || menu_open.get()>
				<div class="mobile-menu">
					<div class="lang-switch">
						<LanguageSwitch long=true />
					</div>
					{Section::NAV.into_iter().map(|s| nav_link(s, "mobile-link")).collect_view()}
					<a
						class="btn btn-ink"
						href=booking_url
						target="_blank"
						rel="noopener noreferrer"
						on:click=move |_| menu_open.set(false)
					>
						{move || i18n.t().nav.request_diagnosis}
					</a>
				</div>
			</Show>
		</header>
	}
}
