use leptos::html::Div;
use leptos::prelude::*;
use log::warn;
use wasm_bindgen::prelude::*;
use web_sys::{IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

use crate::error::BrowserError;

/// Fraction of the element that must be on screen before it reveals.
const THRESHOLD: f64 = 0.1;

/// Observer plus the JS callback it calls into; dropping the callback while
/// the observer is live would leave it pointing at freed memory.
struct Watch {
	observer: IntersectionObserver,
	_callback: Closure<dyn FnMut(js_sys::Array, IntersectionObserver)>,
}

fn watch_once(
	target: &web_sys::Element,
	mut on_visible: impl FnMut() + 'static,
) -> Result<Watch, BrowserError> {
	let callback = Closure::<dyn FnMut(js_sys::Array, IntersectionObserver)>::new(
		move |entries: js_sys::Array, observer: IntersectionObserver| {
			let hit = entries
				.iter()
				.filter_map(|e| e.dyn_into::<IntersectionObserverEntry>().ok())
				.any(|e| e.is_intersecting());
			if hit {
				on_visible();
				observer.disconnect();
			}
		},
	);

	let options = IntersectionObserverInit::new();
	options.set_threshold(&JsValue::from_f64(THRESHOLD));
	let observer = IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)?;
	observer.observe(target);

	Ok(Watch {
		observer,
		_callback: callback,
	})
}

/// Fades and slides its children in the first time they scroll into view.
///
/// Without `IntersectionObserver` the content is shown immediately.
#[component]
pub fn Reveal(
	children: Children,
	#[prop(optional, into)] class: String,
	/// Transition delay in milliseconds, for staggering siblings.
	#[prop(optional)]
	delay: u32,
) -> impl IntoView {
	let node = NodeRef::<Div>::new();
	let visible = RwSignal::new(false);
	let watch = StoredValue::new_local(None::<Watch>);

	Effect::new(move |_| {
		let Some(el) = node.get() else {
			return;
		};
		if watch.with_value(Option::is_some) {
			return;
		}
		match watch_once(&el, move || visible.set(true)) {
			Ok(w) => watch.set_value(Some(w)),
			Err(err) => {
				warn!("reveal disabled: {err}");
				visible.set(true);
			}
		}
	});

	on_cleanup(move || {
		watch.update_value(|w| {
			if let Some(w) = w.take() {
				w.observer.disconnect();
			}
		})
	});

	view! {
		<div
			node_ref=node
			class=move || {
				let state = if visible.get() { "reveal is-visible" } else { "reveal" };
				if class.is_empty() { state.to_owned() } else { format!("{state} {class}") }
			}
			style=format!("transition-delay: {delay}ms")
		>
			{children()}
		</div>
	}
}
