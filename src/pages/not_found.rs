use leptos::prelude::*;
use leptos_meta::Title;

use crate::i18n::use_i18n;

/// 404 fallback.
#[component]
pub fn NotFound() -> impl IntoView {
	let i18n = use_i18n();

	view! {
		<Title text=move || i18n.t().meta.not_found_title />
		<div class="not-found">
			<h1>"404"</h1>
			<p class="lead">{move || i18n.t().not_found.message}</p>
			<a href=crate::Page::Home.path() class="btn btn-teal">
				{move || i18n.t().not_found.back_home}
			</a>
		</div>
	}
}
