//! The landing page, assembled from presentational sections.

mod closing;
mod header;
mod hero;
mod sections;

use leptos::prelude::*;
use leptos_meta::Title;
use web_sys::{ScrollBehavior, ScrollIntoViewOptions, ScrollToOptions};

use crate::components::living_system::LivingSystemHero;
use crate::error::{BrowserError, document, window};
use crate::i18n::{Translations, use_i18n};

use closing::{Contact, Faq, Footer, Offer};
use header::Header;
use hero::Hero;
use sections::{LeadMagnet, LogoStrip, Process, Services, TargetAudience, Testimonials};

/// In-page anchors the navigation can scroll to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Section {
	WhatWeDo,
	HowWeWork,
	ForWhom,
	Diagnosis,
	Faq,
	Contact,
}

impl Section {
	/// Entries of the header navigation, in order.
	pub const NAV: [Section; 3] = [Section::WhatWeDo, Section::HowWeWork, Section::ForWhom];

	/// DOM id of the section element.
	pub fn id(self) -> &'static str {
		match self {
			Section::WhatWeDo => "que",
			Section::HowWeWork => "como",
			Section::ForWhom => "para",
			Section::Diagnosis => "diagnostico",
			Section::Faq => "faq",
			Section::Contact => "contacto",
		}
	}

	pub fn label(self, t: &'static Translations) -> &'static str {
		match self {
			Section::WhatWeDo => t.nav.what_we_do,
			Section::HowWeWork => t.nav.how_we_work,
			Section::ForWhom => t.nav.for_whom,
			Section::Diagnosis => t.footer.diagnosis,
			Section::Faq => t.footer.faq,
			Section::Contact => t.contact.title,
		}
	}
}

/// Smooth-scroll the section into view. Unknown ids are ignored.
pub(crate) fn scroll_to_section(section: Section) -> Result<(), BrowserError> {
	if let Some(el) = document()?.get_element_by_id(section.id()) {
		let options = ScrollIntoViewOptions::new();
		options.set_behavior(ScrollBehavior::Smooth);
		el.scroll_into_view_with_scroll_into_view_options(&options);
	}
	Ok(())
}

pub(crate) fn scroll_to_top() -> Result<(), BrowserError> {
	let options = ScrollToOptions::new();
	options.set_top(0.0);
	options.set_behavior(ScrollBehavior::Smooth);
	window()?.scroll_to_with_scroll_to_options(&options);
	Ok(())
}

/// Landing page.
#[component]
pub fn Home() -> impl IntoView {
	let i18n = use_i18n();

	view! {
		<Title text=move || i18n.t().meta.title />
		<div class="page">
			<Header />
			<main>
				<Hero />
				<LivingSystemHero />
				<LogoStrip />
				<Services />
				<LeadMagnet />
				<Process />
				<TargetAudience />
				<Testimonials />
				<Offer />
				<Faq />
				<Contact />
			</main>
			<Footer />
		</div>
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn section_ids_are_unique() {
		let all = [
			Section::WhatWeDo,
			Section::HowWeWork,
			Section::ForWhom,
			Section::Diagnosis,
			Section::Faq,
			Section::Contact,
		];
		let mut ids: Vec<_> = all.iter().map(|s| s.id()).collect();
		ids.sort_unstable();
		ids.dedup();
		assert_eq!(ids.len(), all.len());
	}

	#[test]
	fn nav_labels_follow_language() {
		use crate::i18n::Language;
		let es = Section::WhatWeDo.label(Language::Es.translations());
		let en = Section::WhatWeDo.label(Language::En.translations());
		assert_ne!(es, en);
	}
}
