use super::dictionary::*;

pub static EN: Translations = Translations {
	meta: Meta {
		title: "IM3 Systems | Software development, automation and artificial intelligence for business",
		booking_title: "Book a Diagnosis | IM3 Systems",
		confirmed_title: "Session Confirmed | IM3 Systems",
		not_found_title: "Page not found | IM3 Systems",
	},
	nav: Nav {
		what_we_do: "What we do",
		how_we_work: "How we work",
		for_whom: "Who it's for",
		request_diagnosis: "Request free diagnosis",
		spanish: "Español",
		english: "English",
		dark_mode: "Toggle theme",
		menu: "Menu",
	},
	hero: Hero {
		badge: "IM3 · OPERATIONAL SYSTEMS",
		headline: "Reliable systems for frictionless operations",
		subheadline: "Cut manual hours, errors, and operational chaos with custom-built systems tailored to your business.",
		cta: "Request free diagnosis",
		secondary: "See what we do",
		badges: &[
			"Internal apps",
			"Automation",
			"Integrations",
			"Dashboards",
			"Applied AI",
			"Maintainable systems",
		],
	},
	priorities: Priorities {
		title: "Our priorities",
		subtitle: "We turn technology into a practical tool to improve your processes, save time, and grow your business.",
		flow: &["Order", "Clarity", "Results"],
		clear_execution: "Clear execution",
		clear_execution_desc: "Goals defined from day one so you know what you'll achieve and how it impacts your business.",
		structure: "Solid structure",
		structure_desc: "We organize processes and systems so your operation is more efficient and easier to scale.",
		maintainable: "Maintainable solutions",
		maintainable_desc: "We deliver clear, documented tools ready for your team to use without complications.",
	},
	logo_strip: LogoStrip {
		title: "Companies that trust IM3 systems",
	},
	credibility: Credibility {
		systems: "12+",
		systems_label: "Systems implemented",
		industries: "6",
		industries_label: "Industries",
		conversion: "100%",
		conversion_label: "Of assessments lead to implementation",
	},
	services: Services {
		title: "Internal systems that bring order to operations",
		subtitle: "We build tailored solutions to reduce friction, centralize information, and improve execution.",
		internal_apps: "Internal applications",
		internal_apps_desc: "Custom tools for operational control, reports, checklists, records, and internal workflows.",
		automation: "Automation",
		automation_desc: "We connect your apps and data to eliminate repetitive tasks and reduce daily errors.",
		control_systems: "Control systems",
		control_systems_desc: "Dashboards, reconciliations, alerts, and audits: real visibility for better decisions.",
	},
	lead_magnet: LeadMagnet {
		badge: "FREE",
		title: "Initial operations assessment",
		description: "We analyze your operations, identify bottlenecks, and deliver a clear roadmap of what system to implement, why, and in what order.",
		cta: "Request free assessment",
	},
	process: Process {
		title: "How we work with you",
		steps: &[
			Step {
				num: "01",
				title: "Strategic diagnosis",
				text: "We analyze your operation, understand your business, detect opportunities and critical points, and define the system, processes, and tools you truly need.",
			},
			Step {
				num: "02",
				title: "Solution development",
				text: "We design and build the system to fit: interfaces, automations, integrations, and workflows adapted to how your team operates day to day.",
			},
			Step {
				num: "03",
				title: "Implementation",
				text: "We integrate it directly into your real operation, migrate data, connect existing tools, and validate everything works before going live.",
			},
			Step {
				num: "04",
				title: "Delivery & support",
				text: "We leave everything documented, train your team, and walk alongside you for the first weeks to ensure frictionless adoption.",
			},
		],
	},
	target_audience: TargetAudience {
		title: "SMBs with real operations",
		subtitle: "Especially teams that need order and control, not more disconnected tools.",
		fits_you_if: "It's a fit if...",
		fits_items: &[
			"Your operations rely on people and WhatsApp, but you need structure.",
			"Manual reports, closings, reconciliations, or audits take hours.",
			"You use multiple apps that aren't connected (Sheets, POS, CRM, etc.).",
			"You want a maintainable system, not a never-ending project.",
		],
		not_for_you: "Not for you if...",
		not_for_items: &[
			"You're looking for a generic solution without understanding your operations.",
			"There's no internal owner or real intention to use the system.",
			"You want a copy-paste implementation.",
			"You expect solutions that don't require documented processes.",
		],
	},
	testimonials: Testimonials {
		title: "Results that speak for themselves",
		subtitle: "Real operational impact cases.",
		reviews: &[
			Review {
				quote: "We reduced our closing time from 4 days to 4 hours.",
				author: "Laura Méndez",
				role: "Operations · Bodega 72",
			},
			Review {
				quote: "We went from losing 8% of inventory due to manual errors to under 0.5%. We finally have real visibility.",
				author: "Carlos Rojas",
				role: "Admin · CasaMesa",
			},
			Review {
				quote: "In 2 weeks our team was operating without support. Before, it took us months to adopt new tools.",
				author: "Paula Andrade",
				role: "Director · Quanta",
			},
		],
	},
	offer: Offer {
		title: "Engagement Models",
		subtitle: "After the assessment, we define together the best way forward.",
		full_implementation: "Full implementation",
		full_implementation_tag: "(Done For You)",
		full_implementation_desc: "We handle everything. We design, build, and deliver the working system, turnkey. Your team just uses it.",
		full_implementation_benefit: "Ideal if you want speed and guaranteed execution.",
		strategic_guidance: "Strategic guidance",
		strategic_guidance_tag: "(Consulting + Design)",
		strategic_guidance_desc: "We design the architecture and guide your technical team (or external) to build with our roadmap and quality oversight.",
		strategic_guidance_benefit: "Ideal if you have technical capacity but need direction.",
		no_sales_pressure: "No sales pressure",
		no_sales_pressure_desc: "The goal of the assessment is to understand your operations. If we can help, we'll present these options. If not, we'll give you an honest recommendation.",
		schedule_conversation: "Request free diagnosis",
	},
	faq: Faq {
		title: "Frequently asked questions",
		subtitle: "What you need to know before taking the first step.",
		items: &[
			FaqItem {
				question: "How long does a typical implementation take?",
				answer: "It depends on scope, but a functional MVP is usually ready in 4 to 8 weeks. We start with what impacts your operation most and iterate from there.",
			},
			FaqItem {
				question: "What if my team isn't technical?",
				answer: "You don't need a technical team. We design everything to be easy to use. Plus, we deliver documentation and training so your team can operate without depending on us.",
			},
			FaqItem {
				question: "What technologies do you use?",
				answer: "We use whatever tools best fit your case: from modern web apps to integrations with platforms you already use (Google Sheets, CRMs, POS, etc.).",
			},
			FaqItem {
				question: "What's the investment range?",
				answer: "Every project is different. The initial assessment is free, and at the end we deliver a clear proposal with defined scope, timeline, and costs. No surprises.",
			},
			FaqItem {
				question: "Does the assessment cost anything or have any commitment?",
				answer: "No. The assessment is 100% free with no commitment. If after understanding your operation we can help, we present options. If not, we give you an honest recommendation.",
			},
		],
	},
	contact: Contact {
		title: "Where is your operation losing time or control?",
		subtitle: "A short conversation to understand your case and propose the next step.",
		schedule_call: "Request free diagnosis",
		back_to_top: "Back to top",
	},
	footer: Footer {
		copyright: "IM3 Systems",
		what_we_do: "What we do",
		how_we_work: "How we work",
		for_whom: "Who it's for",
		diagnosis: "Free diagnosis",
		faq: "FAQ",
		privacy_policy: "Privacy policy",
	},
	living: Living {
		badge: "IM3 · LIVING SYSTEMS",
		headline: "Software systems applied to operations.",
		intro: "Disrupt the system to understand it.",
		hint: "Drag nodes, add tools (+) or redesign the structure.",
		cta: "Book an operations diagnosis",
		reset: "Reset system",
		add_tool: "Add tool",
		redesign: "Redesign",
		complexity_up: "Complexity went up. New dependencies created.",
		tradeoff: "Local automation: one process sped up, but friction appeared elsewhere.",
		local_flow: "Flow optimized locally.",
		redesigned: "System redesigned: simplified, maintainable topology.",
		closing: "Control isn't bought. It's designed.",
	},
	dashboard: Dashboard {
		title: "OPS CENTER",
		online: "ONLINE",
		efficiency: "Efficiency",
		uptime: "Uptime",
		tasks: "Tasks",
		throughput: "Process flow",
		recent: "Recent Activity",
		resolve: "RESOLVE",
		footer: "Real-time view of the operating system",
		automation: "Automation",
		alert: "Alert",
		report: "Report",
		system: "System",
		task_titles: &[
			"Inventory sync",
			"Low stock: Ref. 4829",
			"Daily closing generated",
			"Database backup",
		],
		task_ages: &["2m ago", "Now", "5m ago", "15m ago"],
		log_lines: &[
			"order #8812 reconciled",
			"POS webhook received",
			"weekly report sent",
			"stock alert resolved",
			"CRM sync complete",
		],
	},
	booking: Booking {
		badge: "Strategy Session",
		headline: "AI & Technology",
		headline_accent: "Diagnosis",
		duration: "30 minutes · Technical assessment",
		details_title: "Session details",
		details_subtitle: "What we'll cover on the call",
		goal_title: "The Goal",
		goal_text: "Identify concrete opportunities where Artificial Intelligence and modern technology can optimize your business operations. No generalities.",
		deliverable_title: "Direct Deliverable",
		deliverable_text: "We'll tell you exactly which processes can be automated today and which technologies are viable for your current infrastructure.",
		focus_title: "Session focus",
		focus_items: &[
			"Real AI use cases in your industry",
			"Technical feasibility analysis",
			"Suggested implementation roadmap",
		],
		disclaimer: "If we don't see a clear application of technology for your case, we'll tell you.",
		disclaimer_accent: "A technical diagnosis, not a sales call.",
		iframe_title: "IM3 Systems booking calendar",
		auto_confirm: "Automatic confirmation by email.",
	},
	confirmed: Confirmed {
		status: "Confirmed",
		verified: "Verified",
		reference: "CONFIRMATION #2401-OP",
		headline: "Your operations diagnosis is confirmed.",
		lead: "A technical conversation to understand your operation and assess whether designing a system makes sense.",
		start_briefing: "Start Briefing",
		read_protocol: "Read the session protocol",
		session_heading: "The Session",
		session_items: &[
			"Understand the current operational context",
			"Dig into one or two real friction points",
			"Show possible technical paths",
			"Define the next step only if it makes sense",
		],
		session_note: "Not a demo. Not a sales pitch.",
		method_heading: "Methodology",
		anti_pattern: "ANTI-PATTERN",
		anti_pattern_text: "We don't sell packaged tools or promise instant magic results.",
		core_value: "CORE VALUE",
		core_value_text: "We design custom software structures that reduce friction, errors, and operational dependency.",
		core_tags: &["Custom apps", "Automations"],
		scope_heading: "Scope",
		systems: &[
			SystemCard {
				id: "SYS-05",
				title: "Custom Apps",
				glyph: SystemGlyph::Control,
			},
			SystemCard {
				id: "SYS-01",
				title: "Operational Control",
				glyph: SystemGlyph::Control,
			},
			SystemCard {
				id: "SYS-02",
				title: "Automation",
				glyph: SystemGlyph::Automation,
			},
			SystemCard {
				id: "SYS-03",
				title: "Records & Tracking",
				glyph: SystemGlyph::Tracking,
			},
			SystemCard {
				id: "SYS-04",
				title: "Dashboards",
				glyph: SystemGlyph::Dashboard,
			},
		],
		scope_note: "Every system is different. Scope is defined after the diagnosis.",
		prework_heading: "Pre-Work",
		inputs_title: "Input requirements",
		inputs_text: "No need to prepare presentations. We only need your first-hand experience of the current operation.",
		checklist_label: "Discussion checklist:",
		checklist_items: &[
			"Where you feel the most friction today",
			"Which tasks cause the most rework",
			"What critical information is missing",
		],
		transmission_title: "Study material",
		transmission_text: "You'll receive a series of emails ahead of our call. They contain valuable technical information to make the most of our session. We recommend reading them.",
		intel_heading: "Intelligence",
		channel_title: "Research Channel",
		channel_text: "Access our public content on systems architecture and operational efficiency.",
		farewell: "See you at the session.",
		farewell_sub: "Initial Operations Diagnosis",
		tagline: "Software systems applied to operations",
	},
	not_found: NotFound {
		message: "The page you're looking for doesn't exist or was moved.",
		back_home: "Back to home",
	},
};
