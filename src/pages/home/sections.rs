use leptos::prelude::*;

use super::Section;
use crate::components::reveal::Reveal;
use crate::config::use_site_config;
use crate::i18n::use_i18n;

/// Clients shown as wordmarks, in scroll order.
const CLIENTS: [&str; 5] = [
	"La Glorieta",
	"Xtremcol",
	"Passport Fluency",
	"Salomé Momentos",
	"AMJ Solutions",
];

/// Copies of [`CLIENTS`] laid end to end so the marquee loops seamlessly.
const LOGO_REPEAT: usize = 4;

/// Initials shown in a reviewer's avatar or a client badge, e.g. `"Laura Méndez"` → `"LM"`.
pub fn initials(name: &str) -> String {
	name.split_whitespace().filter_map(|w| w.chars().next()).collect()
}

#[component]
pub fn LogoStrip() -> impl IntoView {
	let i18n = use_i18n();

	view! {
		<section class="logo-strip">
			<p class="eyebrow">{move || i18n.t().logo_strip.title}</p>
			<div class="marquee">
				<div class="marquee-track">
					{CLIENTS
						.iter()
						.cycle()
						.take(CLIENTS.len() * LOGO_REPEAT)
						.map(|name| {
							view! {
								<div class="logo-item">
									<span class="logo-badge">{initials(name)}</span>
									<span class="logo-wordmark">{*name}</span>
								</div>
							}
						})
						.collect_view()}
				</div>
			</div>
			<div class="credibility">
				{move || {
					let c = &i18n.t().credibility;
					[
						(c.systems, c.systems_label),
						(c.industries, c.industries_label),
						(c.conversion, c.conversion_label),
					]
						.into_iter()
						.map(|(value, label)| {
							view! {
								<div class="cred-item">
									<div class="cred-value">{value}</div>
									<div class="cred-label">{label}</div>
								</div>
							}
						})
						.collect_view()
				}}
			</div>
		</section>
	}
}

#[component]
pub fn Services() -> impl IntoView {
	let i18n = use_i18n();

	view! {
		<section id=Section::WhatWeDo.id() class="section">
			<div class="container">
				<Reveal class="section-head">
					<h2>{move || i18n.t().services.title}</h2>
					<p class="lead">{move || i18n.t().services.subtitle}</p>
				</Reveal>
				<div class="grid-3">
					{move || {
						let s = &i18n.t().services;
						[
							("▦", "tint-blue", s.internal_apps, s.internal_apps_desc),
							("⚡", "tint-amber", s.automation, s.automation_desc),
							("〜", "tint-green", s.control_systems, s.control_systems_desc),
						]
							.into_iter()
							.enumerate()
							.map(|(i, (icon, tint, title, text))| {
								view! {
									<Reveal delay=(i as u32) * 100>
										<div class="card service-card">
											<div class=format!("icon-square {tint}")>{icon}</div>
											<h3>{title}</h3>
											<p class="muted">{text}</p>
										</div>
									</Reveal>
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
pub fn LeadMagnet() -> impl IntoView {
	let i18n = use_i18n();
	let booking_url = use_site_config().booking_url;

	view! {
		<section id=Section::Diagnosis.id() class="section">
			<Reveal>
				<div class="lead-magnet">
					<div class="lead-magnet-copy">
						<span class="pill">{move || i18n.t().lead_magnet.badge}</span>
						<h3>{move || i18n.t().lead_magnet.title}</h3>
						<p>{move || i18n.t().lead_magnet.description}</p>
					</div>
					<a class="btn btn-teal" href=booking_url target="_blank" rel="noopener noreferrer">
						{move || i18n.t().lead_magnet.cta}
					</a>
				</div>
			</Reveal>
		</section>
	}
}

#[component]
pub fn Process() -> impl IntoView {
	let i18n = use_i18n();

	view! {
		<section id=Section::HowWeWork.id() class="section section-paper">
			<div class="container">
				<Reveal class="section-head centered">
					<h2>{move || i18n.t().process.title}</h2>
				</Reveal>
				<div class="steps">
					{move || {
						i18n.t()
							.process
							.steps
							.iter()
							.enumerate()
							.map(|(i, step)| {
								view! {
									<Reveal delay=(i as u32) * 100>
										<div class="card step-card">
											<div class="step-num">{step.num}</div>
											<div class="step-index">{i + 1}</div>
											<h4>{step.title}</h4>
											<p class="muted small">{step.text}</p>
										</div>
									</Reveal>
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
pub fn TargetAudience() -> impl IntoView {
	let i18n = use_i18n();

	let list = |items: &'static [&'static str], bullet: &'static str| {
		items
			.iter()
			.map(|item| {
				view! {
					<li>
						<span class=bullet></span>
						<span>{*item}</span>
					</li>
				}
			})
			.collect_view()
	};

	view! {
		<section id=Section::ForWhom.id() class="section">
			<div class="container">
				<Reveal class="section-head">
					<h2>{move || i18n.t().target_audience.title}</h2>
					<p class="lead">{move || i18n.t().target_audience.subtitle}</p>
				</Reveal>
				<div class="grid-2">
					<Reveal>
						<div class="audience-card fits">
							<h3>"✓ " {move || i18n.t().target_audience.fits_you_if}</h3>
							<ul>{move || list(i18n.t().target_audience.fits_items, "bullet bullet-teal")}</ul>
						</div>
					</Reveal>
					<Reveal delay=200>
						<div class="audience-card not-for">
							<h3>"✕ " {move || i18n.t().target_audience.not_for_you}</h3>
							<ul>{move || list(i18n.t().target_audience.not_for_items, "bullet bullet-red")}</ul>
						</div>
					</Reveal>
				</div>
			</div>
		</section>
	}
}

#[component]
pub fn Testimonials() -> impl IntoView {
	let i18n = use_i18n();

	view! {
		<section class="section section-paper">
			<div class="container">
				<Reveal>
					<h2>{move || i18n.t().testimonials.title}</h2>
					<p class="muted">{move || i18n.t().testimonials.subtitle}</p>
				</Reveal>
				<div class="grid-3">
					{move || {
						i18n.t()
							.testimonials
							.reviews
							.iter()
							.enumerate()
							.map(|(i, review)| {
								view! {
									<Reveal delay=(i as u32) * 100>
										<div class="card review-card">
											<p class="review-quote">"\u{201C}" {review.quote} "\u{201D}"</p>
											<div class="review-author">
												<div class="avatar">{initials(review.author)}</div>
												<div>
													<div class="review-name">{review.author}</div>
													<div class="muted small">{review.role}</div>
												</div>
											</div>
										</div>
									</Reveal>
								}
							})
							.collect_view()
					}}
				</div>
			</div>
		</section>
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn initials_take_first_letter_of_each_word() {
		assert_eq!(initials("Laura Méndez"), "LM");
		assert_eq!(initials("  Paula   Andrade "), "PA");
		assert_eq!(initials(""), "");
	}

	#[test]
	fn client_badges_are_distinct() {
		let mut badges: Vec<String> = CLIENTS.iter().map(|c| initials(c)).collect();
		assert!(badges.iter().all(|b| !b.is_empty()));
		badges.sort();
		badges.dedup();
		assert_eq!(badges.len(), CLIENTS.len());
	}
}
