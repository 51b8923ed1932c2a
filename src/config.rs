//! Site-wide constants, provided through context so pages never hardcode them.

use leptos::prelude::*;
use log::Level;

/// External endpoints and settings of the site.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SiteConfig {
	/// Booking widget, embedded on `/booking` and opened by home page CTAs.
	pub booking_url: &'static str,
	/// `id` of the booking iframe; the embed script looks it up.
	pub booking_iframe_id: &'static str,
	/// Helper script that resizes the booking iframe.
	pub embed_script_url: &'static str,
	/// `id` given to the injected script element, used to remove it again.
	pub embed_script_id: &'static str,
	/// Site logo, served from `public/assets` by Trunk.
	pub logo_url: &'static str,
	/// `localStorage` key holding `"true"`/`"false"` for dark mode.
	pub dark_mode_key: &'static str,
	pub contact_email: &'static str,
	pub linkedin_url: &'static str,
	pub log_level: Level,
}

impl Default for SiteConfig {
	fn default() -> Self {
		Self {
			booking_url: "https://api.leadconnectorhq.com/widget/booking/e1UKFLu5HkQcVg5aZdei",
			booking_iframe_id: "e1UKFLu5HkQcVg5aZdei_1769311894804",
			embed_script_url: "https://link.msgsndr.com/js/form_embed.js",
			embed_script_id: "booking-embed-script",
			logo_url: "/assets/im3-logo.svg",
			dark_mode_key: "im3-dark-mode",
			contact_email: "info@im3systems.com",
			linkedin_url: "https://www.linkedin.com/company/im3-systems",
			log_level: if cfg!(debug_assertions) {
				Level::Debug
			} else {
				Level::Info
			},
		}
	}
}

impl SiteConfig {
	pub fn mailto(&self) -> String {
		format!("mailto:{}", self.contact_email)
	}
}

/// Install the default configuration and return it.
pub fn provide_site_config() -> SiteConfig {
	let config = SiteConfig::default();
	provide_context(config.clone());
	config
}

/// The configuration from context, or the defaults outside a provider.
pub fn use_site_config() -> SiteConfig {
	use_context::<SiteConfig>().unwrap_or_default()
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn defaults_point_at_booking_widget() {
		let config = SiteConfig::default();
		assert!(config.booking_url.starts_with("https://"));
		assert!(config.booking_url.ends_with("e1UKFLu5HkQcVg5aZdei"));
		assert_eq!(config.dark_mode_key, "im3-dark-mode");
		assert_eq!(config.mailto(), "mailto:info@im3systems.com");
	}

	#[test]
	fn logo_ships_with_the_site() {
		let logo = SiteConfig::default().logo_url;
		let on_disk = std::path::Path::new(env!("CARGO_MANIFEST_DIR"))
			.join("public")
			.join(logo.trim_start_matches('/'));
		assert!(on_disk.is_file(), "{} missing", on_disk.display());
	}

	#[test]
	fn context_falls_back_to_defaults() {
		Owner::new().with(|| {
			assert_eq!(use_site_config(), SiteConfig::default());
			provide_site_config();
			assert_eq!(use_site_config().dark_mode_key, "im3-dark-mode");
		});
	}
}
