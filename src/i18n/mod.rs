//! Spanish/English copy and the provider that selects between them.

mod dictionary;
mod en;
mod es;

use leptos::prelude::*;
use log::info;

pub use dictionary::*;

/// Languages the site is written in.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Language {
	/// Spanish, the default.
	#[default]
	Es,
	/// English.
	En,
}

impl Language {
	/// Every supported language, in switcher order.
	pub const ALL: [Language; 2] = [Language::Es, Language::En];

	/// BCP 47 code, used for the document `lang` attribute.
	pub fn code(self) -> &'static str {
		match self {
			Language::Es => "es",
			Language::En => "en",
		}
	}

	pub fn flag(self) -> &'static str {
		match self {
			Language::Es => "🇪🇸",
			Language::En => "🇺🇸",
		}
	}

	/// The other language.
	pub fn other(self) -> Self {
		match self {
			Language::Es => Language::En,
			Language::En => Language::Es,
		}
	}

	/// Dictionary for this language.
	pub fn translations(self) -> &'static Translations {
		match self {
			Language::Es => &es::ES,
			Language::En => &en::EN,
		}
	}
}

/// Active language handle, shared through context.
#[derive(Clone, Copy)]
pub struct I18n {
	language: RwSignal<Language>,
}

impl I18n {
	pub fn new(language: Language) -> Self {
		Self {
			language: RwSignal::new(language),
		}
	}

	/// Active language, tracked.
	pub fn language(&self) -> Language {
		self.language.get()
	}

	pub fn set_language(&self, language: Language) {
		if self.language.get_untracked() != language {
			info!("language -> {}", language.code());
			self.language.set(language);
		}
	}

	pub fn toggle(&self) {
		self.set_language(self.language.get_untracked().other());
	}

	/// Dictionary of the active language, tracked.
	pub fn t(&self) -> &'static Translations {
		self.language.get().translations()
	}

	/// Dictionary of the active language, for timers and event handlers.
	pub fn t_untracked(&self) -> &'static Translations {
		self.language.get_untracked().translations()
	}
}

/// Install the language handle, starting in Spanish.
pub fn provide_i18n() -> I18n {
	let i18n = I18n::new(Language::default());
	provide_context(i18n);
	i18n
}

/// The language handle.
///
/// # Panics
///
/// Panics when called outside a component tree where [`provide_i18n`] ran.
pub fn use_i18n() -> I18n {
	expect_context::<I18n>()
}

#[cfg(test)]
mod tests {
	use super::*;

	/// Every string of a dictionary in a fixed order, so two languages can be
	/// compared key by key. Each struct is destructured without `..`, so a new
	/// field fails to compile here until it is listed.
	fn strings(t: &Translations) -> Vec<&'static str> {
		let Translations {
			meta,
			nav,
			hero,
			priorities,
			logo_strip,
			credibility,
			services,
			lead_magnet,
			process,
			target_audience,
			testimonials,
			offer,
			faq,
			contact,
			footer,
			living,
			dashboard,
			booking,
			confirmed,
			not_found,
		} = t;
		let mut out = Vec::new();
		{
			let Meta { title, booking_title, confirmed_title, not_found_title } = meta;
			out.extend([*title, *booking_title, *confirmed_title, *not_found_title]);
		}
		{
			let Nav { what_we_do, how_we_work, for_whom, request_diagnosis, spanish, english, dark_mode, menu } = nav;
			out.extend([*what_we_do, *how_we_work, *for_whom, *request_diagnosis, *spanish, *english, *dark_mode, *menu]);
		}
		{
			let Hero { badge, headline, subheadline, cta, secondary, badges } = hero;
			out.extend([*badge, *headline, *subheadline, *cta, *secondary]);
			out.extend(*badges);
		}
		{
			let Priorities { title, subtitle, flow, clear_execution, clear_execution_desc, structure, structure_desc, maintainable, maintainable_desc } = priorities;
			out.extend([*title, *subtitle, *clear_execution, *clear_execution_desc, *structure, *structure_desc, *maintainable, *maintainable_desc]);
			out.extend(*flow);
		}
		{
			let LogoStrip { title } = logo_strip;
			out.extend([*title]);
		}
		{
			let Credibility { systems, systems_label, industries, industries_label, conversion, conversion_label } = credibility;
			out.extend([*systems, *systems_label, *industries, *industries_label, *conversion, *conversion_label]);
		}
		{
			let Services { title, subtitle, internal_apps, internal_apps_desc, automation, automation_desc, control_systems, control_systems_desc } = services;
			out.extend([*title, *subtitle, *internal_apps, *internal_apps_desc, *automation, *automation_desc, *control_systems, *control_systems_desc]);
		}
		{
			let LeadMagnet { badge, title, description, cta } = lead_magnet;
			out.extend([*badge, *title, *description, *cta]);
		}
		{
			let Process { title, steps } = process;
			out.extend([*title]);
			for item in *steps {
				let Step { num, title, text } = item;
				out.extend([*num, *title, *text]);
			}
		}
		{
			let TargetAudience { title, subtitle, fits_you_if, fits_items, not_for_you, not_for_items } = target_audience;
			out.extend([*title, *subtitle, *fits_you_if, *not_for_you]);
			out.extend(*fits_items);
			out.extend(*not_for_items);
		}
		{
			let Testimonials { title, subtitle, reviews } = testimonials;
			out.extend([*title, *subtitle]);
			for item in *reviews {
				let Review { quote, author, role } = item;
				out.extend([*quote, *author, *role]);
			}
		}
		{
			let Offer { title, subtitle, full_implementation, full_implementation_tag, full_implementation_desc, full_implementation_benefit, strategic_guidance, strategic_guidance_tag, strategic_guidance_desc, strategic_guidance_benefit, no_sales_pressure, no_sales_pressure_desc, schedule_conversation } = offer;
			out.extend([*title, *subtitle, *full_implementation, *full_implementation_tag, *full_implementation_desc, *full_implementation_benefit, *strategic_guidance, *strategic_guidance_tag, *strategic_guidance_desc, *strategic_guidance_benefit, *no_sales_pressure, *no_sales_pressure_desc, *schedule_conversation]);
		}
		{
			let Faq { title, subtitle, items } = faq;
			out.extend([*title, *subtitle]);
			for item in *items {
				let FaqItem { question, answer } = item;
				out.extend([*question, *answer]);
			}
		}
		{
			let Contact { title, subtitle, schedule_call, back_to_top } = contact;
			out.extend([*title, *subtitle, *schedule_call, *back_to_top]);
		}
		{
			let Footer { copyright, what_we_do, how_we_work, for_whom, diagnosis, faq, privacy_policy } = footer;
			out.extend([*copyright, *what_we_do, *how_we_work, *for_whom, *diagnosis, *faq, *privacy_policy]);
		}
		{
			let Living { badge, headline, intro, hint, cta, reset, add_tool, redesign, complexity_up, tradeoff, local_flow, redesigned, closing } = living;
			out.extend([*badge, *headline, *intro, *hint, *cta, *reset, *add_tool, *redesign, *complexity_up, *tradeoff, *local_flow, *redesigned, *closing]);
		}
		{
			let Dashboard { title, online, efficiency, uptime, tasks, throughput, recent, resolve, footer, automation, alert, report, system, task_titles, task_ages, log_lines } = dashboard;
			out.extend([*title, *online, *efficiency, *uptime, *tasks, *throughput, *recent, *resolve, *footer, *automation, *alert, *report, *system]);
			out.extend(*task_titles);
			out.extend(*task_ages);
			out.extend(*log_lines);
		}
		{
			let Booking { badge, headline, headline_accent, duration, details_title, details_subtitle, goal_title, goal_text, deliverable_title, deliverable_text, focus_title, focus_items, disclaimer, disclaimer_accent, iframe_title, auto_confirm } = booking;
			out.extend([*badge, *headline, *headline_accent, *duration, *details_title, *details_subtitle, *goal_title, *goal_text, *deliverable_title, *deliverable_text, *focus_title, *disclaimer, *disclaimer_accent, *iframe_title, *auto_confirm]);
			out.extend(*focus_items);
		}
		{
			let Confirmed { status, verified, reference, headline, lead, start_briefing, read_protocol, session_heading, session_items, session_note, method_heading, anti_pattern, anti_pattern_text, core_value, core_value_text, core_tags, scope_heading, systems, scope_note, prework_heading, inputs_title, inputs_text, checklist_label, checklist_items, transmission_title, transmission_text, intel_heading, channel_title, channel_text, farewell, farewell_sub, tagline } = confirmed;
			out.extend([*status, *verified, *reference, *headline, *lead, *start_briefing, *read_protocol, *session_heading, *session_note, *method_heading, *anti_pattern, *anti_pattern_text, *core_value, *core_value_text, *scope_heading, *scope_note, *prework_heading, *inputs_title, *inputs_text, *checklist_label, *transmission_title, *transmission_text, *intel_heading, *channel_title, *channel_text, *farewell, *farewell_sub, *tagline]);
			out.extend(*session_items);
			out.extend(*core_tags);
			for item in *systems {
				let SystemCard { id, title, glyph: _ } = item;
				out.extend([*id, *title]);
			}
			out.extend(*checklist_items);
		}
		{
			let NotFound { message, back_home } = not_found;
			out.extend([*message, *back_home]);
		}
		out
	}

	#[test]
	fn dictionaries_have_the_same_shape() {
		let (es, en) = (Language::Es.translations(), Language::En.translations());
		assert_eq!(es.hero.badges.len(), en.hero.badges.len());
		assert_eq!(es.process.steps.len(), en.process.steps.len());
		assert_eq!(es.faq.items.len(), en.faq.items.len());
		assert_eq!(es.testimonials.reviews.len(), en.testimonials.reviews.len());
		assert_eq!(es.dashboard.task_titles.len(), en.dashboard.task_titles.len());
		assert_eq!(es.dashboard.task_ages.len(), en.dashboard.task_ages.len());
		assert_eq!(es.dashboard.log_lines.len(), en.dashboard.log_lines.len());
		assert_eq!(es.confirmed.systems.len(), en.confirmed.systems.len());
		assert_eq!(strings(es).len(), strings(en).len());
		assert!(strings(es).iter().chain(&strings(en)).all(|s| !s.is_empty()));
	}

	#[test]
	fn headline_copy_is_translated() {
		let (es, en) = (Language::Es.translations(), Language::En.translations());
		assert_ne!(es.hero.headline, en.hero.headline);
		assert_ne!(es.living.headline, en.living.headline);
		assert_ne!(es.booking.headline, en.booking.headline);
		assert_ne!(es.not_found.back_home, en.not_found.back_home);
	}

	#[test]
	fn switching_language_swaps_every_entry() {
		let owner = Owner::new();
		owner.with(|| {
			let i18n = provide_i18n();
			assert_eq!(i18n.language(), Language::Es);
			assert_eq!(strings(i18n.t()), strings(&es::ES));

			use_i18n().set_language(Language::En);
			assert_eq!(i18n.language(), Language::En);
			assert_eq!(strings(i18n.t()), strings(&en::EN));

			i18n.toggle();
			assert_eq!(strings(i18n.t_untracked()), strings(&es::ES));
		});
	}

	#[test]
	#[should_panic]
	fn use_i18n_outside_provider_panics() {
		Owner::new().with(|| {
			use_i18n();
		});
	}

	#[test]
	fn languages_pair_up() {
		assert_eq!(Language::Es.other(), Language::En);
		assert_eq!(Language::En.other(), Language::Es);
		assert_eq!(Language::ALL.map(Language::code), ["es", "en"]);
	}
}
