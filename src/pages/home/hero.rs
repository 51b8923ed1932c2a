use leptos::prelude::*;
use log::warn;

use super::{Section, scroll_to_section};
use crate::components::ops_dashboard::OpsDashboard;
use crate::components::reveal::Reveal;
use crate::config::use_site_config;
use crate::i18n::use_i18n;

const BADGE_ICONS: [&str; 6] = ["▦", "⚡", "⛓", "◔", "✦", "≣"];

/// Dark hero panel with the headline, dashboard mock and priorities card.
#[component]
pub fn Hero() -> impl IntoView {
	let i18n = use_i18n();
	let booking_url = use_site_config().booking_url;

	let see_more = move |_| {
		if let Err(err) = scroll_to_section(Section::WhatWeDo) {
			warn!("scroll failed: {err}");
		}
	};

	view! {
		<section class="hero">
			<div class="hero-panel">
				<div class="hero-grid">
					<div class="hero-copy">
						<Reveal>
							<div class="hero-badge">
								<span class="dot dot-teal"></span>
								{move || i18n.t().hero.badge}
							</div>
						</Reveal>
						<Reveal delay=100>
							<h1 class="hero-title">{move || i18n.t().hero.headline}</h1>
						</Reveal>
						<Reveal delay=200>
							<p class="hero-lead">{move || i18n.t().hero.subheadline}</p>
						</Reveal>
						<Reveal delay=300>
							<div class="hero-actions">
								<a
									class="btn btn-teal"
									href=booking_url
									target="_blank"
									rel="noopener noreferrer"
								>
									{move || i18n.t().hero.cta}
								</a>
								<button class="btn btn-ghost" on:click=see_more>
									{move || i18n.t().hero.secondary}
								</button>
							</div>
						</Reveal>
						<Reveal delay=400>
							<div class="hero-chips">
								{move || {
									i18n.t()
										.hero
										.badges
										.iter()
										.zip(BADGE_ICONS.iter().cycle())
										.map(|(label, icon)| {
											view! {
												<span class="chip">
													<span class="chip-icon">{*icon}</span>
													{*label}
												</span>
											}
										})
										.collect_view()
								}}
							</div>
						</Reveal>
					</div>

					<Reveal delay=200 class="hero-widget">
						<div class="hero-widget-frame">
							<OpsDashboard />
						</div>
					</Reveal>
				</div>
			</div>

			<Priorities />
		</section>
	}
}

/// Card overlapping the bottom of the hero.
#[component]
fn Priorities() -> impl IntoView {
	let i18n = use_i18n();

	view! {
		<div class="priorities">
			<Reveal delay=600>
				{move || {
					let p = &i18n.t().priorities;
					view! {
						<div class="card priorities-card">
							<div class="priorities-intro">
								<h3>{p.title}</h3>
								<p class="muted">{p.subtitle}</p>
								<p class="priorities-flow">{p.flow.join(" → ")}</p>
							</div>
							<div class="priorities-grid">
								<div>
									<div class="icon-round">"✓"</div>
									<h4>{p.clear_execution}</h4>
									<p class="muted small">{p.clear_execution_desc}</p>
								</div>
								<div>
									<div class="icon-round">"▦"</div>
									<h4>{p.structure}</h4>
									<p class="muted small">{p.structure_desc}</p>
								</div>
								<div>
									<div class="icon-round">"⛨"</div>
									<h4>{p.maintainable}</h4>
									<p class="muted small">{p.maintainable_desc}</p>
								</div>
							</div>
						</div>
					}
				}}
			</Reveal>
		</div>
	}
}
