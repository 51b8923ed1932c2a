use leptos::prelude::*;
use log::warn;

use super::{Section, scroll_to_top};
use crate::components::reveal::Reveal;
use crate::config::use_site_config;
use crate::i18n::use_i18n;

/// Accordion rule: clicking the open item closes it, any other opens alone.
fn toggle_open(current: Option<usize>, clicked: usize) -> Option<usize> {
	if current == Some(clicked) {
		None
	} else {
		Some(clicked)
	}
}

#[component]
pub fn Offer() -> impl IntoView {
	let i18n = use_i18n();
	let booking_url = use_site_config().booking_url;

	view! {
		<section id="oferta" class="section">
			<div class="container narrow">
				<Reveal class="section-head centered">
					<h2>{move || i18n.t().offer.title}</h2>
					<p class="lead">{move || i18n.t().offer.subtitle}</p>
				</Reveal>
				<div class="grid-2">
					{move || {
						let o = &i18n.t().offer;
						[
							("⚡", "tint-blue", o.full_implementation, o.full_implementation_tag, o.full_implementation_desc, o.full_implementation_benefit),
							("☷", "tint-amber", o.strategic_guidance, o.strategic_guidance_tag, o.strategic_guidance_desc, o.strategic_guidance_benefit),
						]
							.into_iter()
							.enumerate()
							.map(|(i, (icon, tint, title, tag, desc, benefit))| {
								view! {
									<Reveal delay=(i as u32 + 1) * 100>
										<div class="card offer-card">
											<div class=format!("icon-square {tint}")>{icon}</div>
											<h3>{title} <span class="offer-tag">{tag}</span></h3>
											<p class="muted grow">{desc}</p>
											<div class="offer-benefit">"✓ " {benefit}</div>
										</div>
									</Reveal>
								}
							})
							.collect_view()
					}}
				</div>
				<Reveal delay=300>
					<div class="no-pressure">
						<h3>{move || i18n.t().offer.no_sales_pressure}</h3>
						<p class="muted">{move || i18n.t().offer.no_sales_pressure_desc}</p>
						<a class="link-teal" href=booking_url target="_blank" rel="noopener noreferrer">
							{move || i18n.t().offer.schedule_conversation}
							" →"
						</a>
					</div>
				</Reveal>
			</div>
		</section>
	}
}

#[component]
pub fn Faq() -> impl IntoView {
	let i18n = use_i18n();
	let open = RwSignal::new(None::<usize>);

	view! {
		<section id=Section::Faq.id() class="section section-paper">
			<div class="container narrow">
				<Reveal class="section-head centered">
					<h2>{move || i18n.t().faq.title}</h2>
					<p class="lead">{move || i18n.t().faq.subtitle}</p>
				</Reveal>
				<div class="faq-list">
					{move || {
						i18n.t()
							.faq
							.items
							.iter()
							.enumerate()
							.map(|(i, item)| {
								let is_open = move || open.get() == Some(i);
								view! {
									<div class=move || if is_open() { "faq-item open" } else { "faq-item" }>
										<button
											class="faq-question"
											aria-expanded=move || is_open().to_string()
											on:click=move |_| open.update(|o| *o = toggle_open(*o, i))
										>
											<span>{item.question}</span>
											<span class="faq-chevron">{move || if is_open() { "−" } else { "+" }}</span>
										</button>
										<Show when=is_open>
											<p class="faq-answer">{item.answer}</p>
										</Show>
									</div>
								}
							})
							.collect_view()
					}}
				</div>
			</div>
		</section>
	}
}

#[component]
pub fn Contact() -> impl IntoView {
	let i18n = use_i18n();
	let booking_url = use_site_config().booking_url;

	view! {
		<section id=Section::Contact.id() class="section">
			<div class="container narrow centered">
				<Reveal>
					<h2>{move || i18n.t().contact.title}</h2>
					<p class="lead">{move || i18n.t().contact.subtitle}</p>
					<div class="contact-actions">
						<a class="btn btn-ink" href=booking_url target="_blank" rel="noopener noreferrer">
							"🗓 "
							{move || i18n.t().contact.schedule_call}
						</a>
						<button
							class="btn btn-light"
							on:click=move |_| {
								if let Err(err) = scroll_to_top() {
									warn!("scroll failed: {err}");
								}
							}
						>
							{move || i18n.t().contact.back_to_top}
							" ↗"
						</button>
					</div>
				</Reveal>
			</div>
		</section>
	}
}

#[component]
pub fn Footer() -> impl IntoView {
	let i18n = use_i18n();
	let config = use_site_config();
	let year = js_sys::Date::new_0().get_full_year();
	let mailto = config.mailto();

	let links = move || {
		let f = &i18n.t().footer;
		[
			(Section::WhatWeDo, f.what_we_do),
			(Section::HowWeWork, f.how_we_work),
			(Section::ForWhom, f.for_whom),
			(Section::Diagnosis, f.diagnosis),
			(Section::Faq, f.faq),
		]
			.into_iter()
			.map(|(section, label)| view! { <a href=format!("#{}", section.id())>{label}</a> })
			.collect_view()
	};

	view! {
		<footer class="site-footer">
			<div class="container footer-row">
				<img class="footer-logo" src=config.logo_url alt="IM3 Systems" />
				<nav class="footer-links">{links}</nav>
				<div class="footer-meta">
					<a href=mailto>{config.contact_email}</a>
					<span class="sep">"•"</span>
					<a href=config.linkedin_url target="_blank" rel="noopener noreferrer">
						"LinkedIn"
					</a>
					<span class="sep">"•"</span>
					<span>"© " {year} " " {move || i18n.t().footer.copyright}</span>
					<span class="sep">"•"</span>
					<span>{move || i18n.t().footer.privacy_policy}</span>
				</div>
			</div>
		</footer>
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn accordion_opens_one_item_at_a_time() {
		assert_eq!(toggle_open(None, 2), Some(2));
		assert_eq!(toggle_open(Some(2), 2), None);
		assert_eq!(toggle_open(Some(0), 3), Some(3));
	}
}
