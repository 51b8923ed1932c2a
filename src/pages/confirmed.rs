use leptos::prelude::*;
use leptos_meta::Title;
use web_sys::MouseEvent;

use crate::components::reveal::Reveal;
use crate::config::use_site_config;
use crate::i18n::{SystemCard, SystemGlyph, use_i18n};

/// Line-art diagram for a scope card.
fn glyph(kind: SystemGlyph) -> impl IntoView {
	let shapes = match kind {
		SystemGlyph::Control => view! {
			<rect x="10" y="10" width="30" height="20" rx="2" />
			<rect x="10" y="35" width="30" height="4" rx="1" opacity="0.5" />
			<path d="M45 20h15v20h25" stroke-dasharray="4 4" />
			<circle cx="85" cy="40" r="3" />
		}
		.into_any(),
		SystemGlyph::Automation => view! {
			<circle cx="20" cy="30" r="8" />
			<path d="M28 30h14" />
			<rect x="42" y="20" width="16" height="20" rx="2" />
			<path d="M58 30h14" />
			<circle cx="80" cy="30" r="8" stroke-dasharray="2 2" />
		}
		.into_any(),
		SystemGlyph::Tracking => view! {
			<rect x="15" y="15" width="70" height="30" rx="2" />
			<path d="M15 25h70" opacity="0.3" />
			<path d="M30 15v30" opacity="0.3" />
			<path d="M60 15v30" opacity="0.3" />
		}
		.into_any(),
		SystemGlyph::Dashboard => view! {
			<rect x="10" y="10" width="35" height="40" rx="2" />
			<rect x="55" y="10" width="35" height="18" rx="2" />
			<rect x="55" y="32" width="35" height="18" rx="2" />
			<path d="M20 20h15" opacity="0.5" />
			<path d="M20 28h15" opacity="0.5" />
		}
		.into_any(),
	};

	view! {
		<svg viewBox="0 0 100 60" fill="none" stroke="currentColor" stroke-width="1.5">
			{shapes}
		</svg>
	}
}

/// Scope card with a spotlight that follows the pointer.
#[component]
fn TechCard(card: &'static SystemCard) -> impl IntoView {
	let spot = RwSignal::new((0.0, 0.0));

	let on_move = move |ev: MouseEvent| {
		let Some(target) = ev
			.current_target()
			.and_then(|t| wasm_bindgen::JsCast::dyn_into::<web_sys::Element>(t).ok())
		else {
			return;
		};
		let rect = target.get_bounding_client_rect();
		spot.set((ev.client_x() as f64 - rect.left(), ev.client_y() as f64 - rect.top()));
	};

	view! {
		<div class="tech-card" on:mousemove=on_move>
			<div
				class="tech-card-spot"
				style=move || {
					let (x, y) = spot.get();
					format!(
						"background: radial-gradient(250px circle at {x}px {y}px, rgba(0,0,0,0.04), transparent 80%)",
					)
				}
			></div>
			<div class="tech-card-text">
				<span class="mono-tag">{card.id}</span>
				<span class="tech-card-title">{card.title}</span>
			</div>
			<div class="tech-card-glyph">{glyph(card.glyph)}</div>
		</div>
	}
}

/// Post-booking confirmation and briefing page.
#[component]
pub fn Confirmed() -> impl IntoView {
	let i18n = use_i18n();
	let config = use_site_config();
	let email = config.contact_email;
	let logo = config.logo_url;
	let mailto = config.mailto();

	let body = move || {
		let c = &i18n.t().confirmed;
		let mailto = mailto.clone();
		view! {
			<Reveal class="confirmed-hero">
				<div class="confirmed-ring">
					<svg viewBox="0 0 80 80" fill="none">
						<circle cx="40" cy="40" r="38" stroke="currentColor" stroke-width="1" class="ring-track" />
						<circle cx="40" cy="40" r="38" stroke="currentColor" stroke-width="2" class="ring-draw" />
						<path d="M26 41l9 9 19-20" stroke="currentColor" stroke-width="2.5" class="ring-check" />
					</svg>
				</div>
				<div class="mono-tag">{c.verified} " · " {c.reference}</div>
				<h1>{c.headline}</h1>
				<p class="lead">{c.lead}</p>
				<div class="confirmed-actions">
					<a class="btn btn-ink" href="#sesion">{c.start_briefing}</a>
					<a class="link-muted" href="#metodo">{c.read_protocol}</a>
				</div>
			</Reveal>

			<Reveal class="confirmed-block">
				<h2 id="sesion" class="block-heading">"01 · " {c.session_heading}</h2>
				<ul class="session-list">
					{c.session_items.iter().map(|item| view! { <li>{*item}</li> }).collect_view()}
				</ul>
				<p class="muted small">{c.session_note}</p>
			</Reveal>

			<Reveal class="confirmed-block">
				<h2 id="metodo" class="block-heading">"02 · " {c.method_heading}</h2>
				<div class="grid-2">
					<div class="method-card anti">
						<h3>{c.anti_pattern}</h3>
						<p>{c.anti_pattern_text}</p>
					</div>
					<div class="method-card core">
						<h3>{c.core_value}</h3>
						<p>{c.core_value_text}</p>
						<div class="tags">
							{c.core_tags.iter().map(|tag| view! { <span class="mono-tag">{*tag}</span> }).collect_view()}
						</div>
					</div>
				</div>
			</Reveal>

			<Reveal class="confirmed-block">
				<h2 class="block-heading">"03 · " {c.scope_heading}</h2>
				<div class="tech-grid">
					{c.systems.iter().map(|card| view! { <TechCard card=card /> }).collect_view()}
				</div>
				<p class="muted small">{c.scope_note}</p>
			</Reveal>

			<Reveal class="confirmed-block">
				<h2 class="block-heading">"04 · " {c.prework_heading}</h2>
				<div class="grid-2">
					<div class="prework-card">
						<h3>{c.inputs_title}</h3>
						<p>{c.inputs_text}</p>
						<p class="mono-tag">{c.checklist_label}</p>
						<ul class="checklist">
							{c
								.checklist_items
								.iter()
								.map(|item| view! { <li><span class="box"></span> {*item}</li> })
								.collect_view()}
						</ul>
					</div>
					<div class="prework-card">
						<h3>{c.transmission_title}</h3>
						<p>{c.transmission_text}</p>
					</div>
				</div>
			</Reveal>

			<Reveal class="confirmed-block">
				<h2 class="block-heading">"05 · " {c.intel_heading}</h2>
				<div class="prework-card">
					<h3>{c.channel_title}</h3>
					<p>{c.channel_text}</p>
					<a class="link-teal" href=mailto>{email}</a>
				</div>
			</Reveal>

			<footer class="confirmed-footer">
				<p class="farewell">{c.farewell}</p>
				<p class="muted">{c.farewell_sub}</p>
				<p class="mono-tag">{c.tagline}</p>
			</footer>
		}
	};

	view! {
		<Title text=move || i18n.t().meta.confirmed_title />
		<div class="confirmed-page">
			<div class="status-bar">
				<a href=crate::Page::Home.path() class="logo-mini">
					<img src=logo alt="IM3" />
				</a>
				<div class="status">
					<span class="dot dot-teal"></span>
					{move || i18n.t().confirmed.status}
				</div>
				<div class="mono-tag">"IM3.OS v2.4"</div>
			</div>
			<div class="container narrow">{body}</div>
		</div>
	}
}
