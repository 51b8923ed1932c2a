//! Shape of the translation table. One static instance exists per language.

pub struct Translations {
	pub meta: Meta,
	pub nav: Nav,
	pub hero: Hero,
	pub priorities: Priorities,
	pub logo_strip: LogoStrip,
	pub credibility: Credibility,
	pub services: Services,
	pub lead_magnet: LeadMagnet,
	pub process: Process,
	pub target_audience: TargetAudience,
	pub testimonials: Testimonials,
	pub offer: Offer,
	pub faq: Faq,
	pub contact: Contact,
	pub footer: Footer,
	pub living: Living,
	pub dashboard: Dashboard,
	pub booking: Booking,
	pub confirmed: Confirmed,
	pub not_found: NotFound,
}

pub struct Meta {
	pub title: &'static str,
	pub booking_title: &'static str,
	pub confirmed_title: &'static str,
	pub not_found_title: &'static str,
}

pub struct Nav {
	pub what_we_do: &'static str,
	pub how_we_work: &'static str,
	pub for_whom: &'static str,
	pub request_diagnosis: &'static str,
	pub spanish: &'static str,
	pub english: &'static str,
	pub dark_mode: &'static str,
	pub menu: &'static str,
}

pub struct Hero {
	pub badge: &'static str,
	pub headline: &'static str,
	pub subheadline: &'static str,
	pub cta: &'static str,
	pub secondary: &'static str,
	/// Capability chips under the call to action.
	pub badges: &'static [&'static str],
}

pub struct Priorities {
	pub title: &'static str,
	pub subtitle: &'static str,
	pub flow: &'static [&'static str],
	pub clear_execution: &'static str,
	pub clear_execution_desc: &'static str,
	pub structure: &'static str,
	pub structure_desc: &'static str,
	pub maintainable: &'static str,
	pub maintainable_desc: &'static str,
}

pub struct LogoStrip {
	pub title: &'static str,
}

pub struct Credibility {
	pub systems: &'static str,
	pub systems_label: &'static str,
	pub industries: &'static str,
	pub industries_label: &'static str,
	pub conversion: &'static str,
	pub conversion_label: &'static str,
}

pub struct Services {
	pub title: &'static str,
	pub subtitle: &'static str,
	pub internal_apps: &'static str,
	pub internal_apps_desc: &'static str,
	pub automation: &'static str,
	pub automation_desc: &'static str,
	pub control_systems: &'static str,
	pub control_systems_desc: &'static str,
}

pub struct LeadMagnet {
	pub badge: &'static str,
	pub title: &'static str,
	pub description: &'static str,
	pub cta: &'static str,
}

pub struct Step {
	pub num: &'static str,
	pub title: &'static str,
	pub text: &'static str,
}

pub struct Process {
	pub title: &'static str,
	pub steps: &'static [Step],
}

pub struct TargetAudience {
	pub title: &'static str,
	pub subtitle: &'static str,
	pub fits_you_if: &'static str,
	pub fits_items: &'static [&'static str],
	pub not_for_you: &'static str,
	pub not_for_items: &'static [&'static str],
}

pub struct Review {
	pub quote: &'static str,
	pub author: &'static str,
	pub role: &'static str,
}

pub struct Testimonials {
	pub title: &'static str,
	pub subtitle: &'static str,
	pub reviews: &'static [Review],
}

pub struct Offer {
	pub title: &'static str,
	pub subtitle: &'static str,
	pub full_implementation: &'static str,
	pub full_implementation_tag: &'static str,
	pub full_implementation_desc: &'static str,
	pub full_implementation_benefit: &'static str,
	pub strategic_guidance: &'static str,
	pub strategic_guidance_tag: &'static str,
	pub strategic_guidance_desc: &'static str,
	pub strategic_guidance_benefit: &'static str,
	pub no_sales_pressure: &'static str,
	pub no_sales_pressure_desc: &'static str,
	pub schedule_conversation: &'static str,
}

pub struct FaqItem {
	pub question: &'static str,
	pub answer: &'static str,
}

pub struct Faq {
	pub title: &'static str,
	pub subtitle: &'static str,
	pub items: &'static [FaqItem],
}

pub struct Contact {
	pub title: &'static str,
	pub subtitle: &'static str,
	pub schedule_call: &'static str,
	pub back_to_top: &'static str,
}

pub struct Footer {
	pub copyright: &'static str,
	pub what_we_do: &'static str,
	pub how_we_work: &'static str,
	pub for_whom: &'static str,
	pub diagnosis: &'static str,
	pub faq: &'static str,
	pub privacy_policy: &'static str,
}

/// Copy of the living system hero widget.
pub struct Living {
	pub badge: &'static str,
	pub headline: &'static str,
	pub intro: &'static str,
	pub hint: &'static str,
	pub cta: &'static str,
	pub reset: &'static str,
	pub add_tool: &'static str,
	pub redesign: &'static str,
	pub complexity_up: &'static str,
	pub tradeoff: &'static str,
	pub local_flow: &'static str,
	pub redesigned: &'static str,
	pub closing: &'static str,
}

/// Copy of the mock operations dashboard.
pub struct Dashboard {
	pub title: &'static str,
	pub online: &'static str,
	pub efficiency: &'static str,
	pub uptime: &'static str,
	pub tasks: &'static str,
	pub throughput: &'static str,
	pub recent: &'static str,
	pub resolve: &'static str,
	pub footer: &'static str,
	pub automation: &'static str,
	pub alert: &'static str,
	pub report: &'static str,
	pub system: &'static str,
	pub task_titles: &'static [&'static str],
	pub task_ages: &'static [&'static str],
	pub log_lines: &'static [&'static str],
}

pub struct Booking {
	pub badge: &'static str,
	pub headline: &'static str,
	pub headline_accent: &'static str,
	pub duration: &'static str,
	pub details_title: &'static str,
	pub details_subtitle: &'static str,
	pub goal_title: &'static str,
	pub goal_text: &'static str,
	pub deliverable_title: &'static str,
	pub deliverable_text: &'static str,
	pub focus_title: &'static str,
	pub focus_items: &'static [&'static str],
	pub disclaimer: &'static str,
	pub disclaimer_accent: &'static str,
	pub iframe_title: &'static str,
	pub auto_confirm: &'static str,
}

/// Kind of diagram drawn on a scope card of the confirmation page.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SystemGlyph {
	Control,
	Automation,
	Tracking,
	Dashboard,
}

pub struct SystemCard {
	pub id: &'static str,
	pub title: &'static str,
	pub glyph: SystemGlyph,
}

pub struct Confirmed {
	pub status: &'static str,
	pub verified: &'static str,
	pub reference: &'static str,
	pub headline: &'static str,
	pub lead: &'static str,
	pub start_briefing: &'static str,
	pub read_protocol: &'static str,
	pub session_heading: &'static str,
	pub session_items: &'static [&'static str],
	pub session_note: &'static str,
	pub method_heading: &'static str,
	pub anti_pattern: &'static str,
	pub anti_pattern_text: &'static str,
	pub core_value: &'static str,
	pub core_value_text: &'static str,
	pub core_tags: &'static [&'static str],
	pub scope_heading: &'static str,
	pub systems: &'static [SystemCard],
	pub scope_note: &'static str,
	pub prework_heading: &'static str,
	pub inputs_title: &'static str,
	pub inputs_text: &'static str,
	pub checklist_label: &'static str,
	pub checklist_items: &'static [&'static str],
	pub transmission_title: &'static str,
	pub transmission_text: &'static str,
	pub intel_heading: &'static str,
	pub channel_title: &'static str,
	pub channel_text: &'static str,
	pub farewell: &'static str,
	pub farewell_sub: &'static str,
	pub tagline: &'static str,
}

pub struct NotFound {
	pub message: &'static str,
	pub back_home: &'static str,
}
