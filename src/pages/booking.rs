use leptos::html::Iframe;
use leptos::prelude::*;
use leptos_meta::Title;
use log::{debug, warn};
use web_sys::Element;

use crate::components::reveal::Reveal;
use crate::config::{SiteConfig, use_site_config};
use crate::error::{BrowserError, document};
use crate::i18n::use_i18n;

/// Append the booking widget's helper script to `<body>`.
fn inject_embed_script(config: &SiteConfig) -> Result<Element, BrowserError> {
	let doc = document()?;
	if let Some(existing) = doc.get_element_by_id(config.embed_script_id) {
		return Ok(existing);
	}
	let script = doc.create_element("script")?;
	script.set_id(config.embed_script_id);
	script.set_attribute("src", config.embed_script_url)?;
	script.set_attribute("type", "text/javascript")?;
	script.set_attribute("async", "")?;
	doc.body().ok_or(BrowserError::NoDocument)?.append_child(&script)?;
	debug!("booking embed script injected");
	Ok(script)
}

/// Attributes of the calendar frame, in the order they are set. `src` comes
/// last so lazy loading is already in force when the browser sees it.
fn frame_attributes(url: &'static str) -> [(&'static str, &'static str); 3] {
	[("loading", "lazy"), ("scrolling", "no"), ("src", url)]
}

fn configure_frame(frame: &Element, url: &'static str) -> Result<(), BrowserError> {
	for (name, value) in frame_attributes(url) {
		frame.set_attribute(name, value)?;
	}
	Ok(())
}

/// Booking page: session details beside the embedded calendar.
#[component]
pub fn Booking() -> impl IntoView {
	let i18n = use_i18n();
	let config = use_site_config();
	let script = StoredValue::new_local(None::<Element>);
	let frame = NodeRef::<Iframe>::new();
	let booking_url = config.booking_url;

	Effect::new(move |_| {
		let Some(el) = frame.get() else {
			return;
		};
		if let Err(err) = configure_frame(&el, booking_url) {
			warn!("booking frame not configured: {err}");
		}
	});

	match inject_embed_script(&config) {
		Ok(el) => script.set_value(Some(el)),
		Err(err) => warn!("booking embed script not loaded: {err}"),
	}
	on_cleanup(move || {
		script.update_value(|s| {
			if let Some(el) = s.take() {
				el.remove();
				debug!("booking embed script removed");
			}
		})
	});

	let details = move || {
		let b = &i18n.t().booking;
		view! {
			<div class="booking-cards">
				<div class="booking-card">
					<h3>"◈ " {b.goal_title}</h3>
					<p>{b.goal_text}</p>
				</div>
				<div class="booking-card">
					<h3>"▥ " {b.deliverable_title}</h3>
					<p>{b.deliverable_text}</p>
				</div>
			</div>
			<div class="booking-focus">
				<p class="eyebrow">{b.focus_title}</p>
				<ul>
					{b
						.focus_items
						.iter()
						.map(|item| view! { <li><span class="check">"✓"</span> {*item}</li> })
						.collect_view()}
				</ul>
			</div>
		}
	};

	view! {
		<Title text=move || i18n.t().meta.booking_title />
		<div class="booking-page">
			<aside class="booking-info">
				<a href=crate::Page::Home.path() class="logo-chip">
					<img src=config.logo_url alt="IM3 Systems" />
				</a>
				<header class="booking-head">
					<div class="hero-badge">
						<span class="dot dot-teal"></span>
						{move || i18n.t().booking.badge}
					</div>
					<h1>
						{move || i18n.t().booking.headline}
						<br />
						<span class="accent">{move || i18n.t().booking.headline_accent}</span>
					</h1>
					<div class="booking-duration">"◷ " {move || i18n.t().booking.duration}</div>
				</header>
				<div class="booking-details-head mobile-only">
					<h3>{move || i18n.t().booking.details_title}</h3>
					<p>{move || i18n.t().booking.details_subtitle}</p>
				</div>
				{details}
				<div class="booking-disclaimer">
					<span class="check">"⛨"</span>
					<p>
						{move || i18n.t().booking.disclaimer}
						<br />
						<span>{move || i18n.t().booking.disclaimer_accent}</span>
					</p>
				</div>
			</aside>

			<div class="booking-embed">
				<Reveal class="booking-frame">
					<iframe
						node_ref=frame
						title=move || i18n.t().booking.iframe_title
						id=config.booking_iframe_id
						style="width: 100%; border: none; overflow: hidden; min-height: 650px"
					></iframe>
				</Reveal>
				<p class="booking-auto">{move || i18n.t().booking.auto_confirm}</p>
			</div>
		</div>
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn frame_points_at_booking_widget() {
		let url = SiteConfig::default().booking_url;
		let attrs = frame_attributes(url);
		assert!(attrs.contains(&("src", url)));
		assert!(attrs.contains(&("scrolling", "no")));
	}

	#[test]
	fn lazy_loading_is_set_before_src() {
		let attrs = frame_attributes("https://example.invalid/widget");
		let pos = |name: &str| attrs.iter().position(|(n, _)| *n == name);
		assert!(pos("loading") < pos("src"));
		assert_eq!(attrs.last().map(|(n, _)| *n), Some("src"));
	}
}
