use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use leptos::prelude::*;
use log::{debug, warn};
use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, MouseEvent};

use super::render;
use super::state::LivingSystem;
use super::types::{AutomateOutcome, Stage};
use crate::audio::{Cue, use_audio};
use crate::error::BrowserError;
use crate::i18n::{Translations, use_i18n};

/// Status line shown over the canvas after an interaction.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Notice {
	ComplexityUp,
	Tradeoff,
	LocalFlow,
	Redesigned,
}

impl Notice {
	fn text(self, t: &'static Translations) -> &'static str {
		match self {
			Notice::ComplexityUp => t.living.complexity_up,
			Notice::Tradeoff => t.living.tradeoff,
			Notice::LocalFlow => t.living.local_flow,
			Notice::Redesigned => t.living.redesigned,
		}
	}
}

const NOTICE_TTL: Duration = Duration::from_secs(3);

fn container_size(canvas: &HtmlCanvasElement) -> (f64, f64) {
	canvas
		.parent_element()
		.map(|p| (p.client_width() as f64, p.client_height() as f64))
		.filter(|(w, h)| *w > 0.0 && *h > 0.0)
		.unwrap_or((800.0, 600.0))
}

fn context_2d(canvas: &HtmlCanvasElement) -> Result<CanvasRenderingContext2d, BrowserError> {
	canvas
		.get_context("2d")?
		.ok_or(BrowserError::NoCanvasContext)?
		.dyn_into()
		.map_err(|_| BrowserError::NoCanvasContext)
}

fn pointer_position(canvas: Option<HtmlCanvasElement>, ev: &MouseEvent) -> Option<(f64, f64)> {
	let rect = canvas?.get_bounding_client_rect();
	Some((
		ev.client_x() as f64 - rect.left(),
		ev.client_y() as f64 - rect.top(),
	))
}

/// Empty the simulation and frame-callback slots. The callback holds a clone
/// of its own slot, so the loop must clear it or the pair is never dropped.
fn release<S, F>(system: &RefCell<Option<S>>, frame: &RefCell<Option<F>>) -> bool {
	system.borrow_mut().take();
	frame.borrow_mut().take().is_some()
}

/// Interactive "living system" hero: a force-directed graph that degrades as
/// tools are bolted on and stabilises when redesigned.
#[component]
pub fn LivingSystemHero() -> impl IntoView {
	let i18n = use_i18n();
	let booking_href = crate::Page::Booking.path();
	let audio = use_audio();
	let play = move |cue: Cue| {
		if let Some(audio) = audio {
			audio.play(cue);
		}
	};

	let canvas_ref = NodeRef::<leptos::html::Canvas>::new();
	let system: Rc<RefCell<Option<LivingSystem>>> = Rc::new(RefCell::new(None));
	let animate: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
	let (system_init, animate_init) = (system.clone(), animate.clone());

	let mounted = StoredValue::new(true);
	on_cleanup(move || mounted.set_value(false));

	let stage = RwSignal::new(Stage::Initial);
	let notice = RwSignal::new(None::<Notice>);
	let notice_seq = StoredValue::new(0u32);
	let closing = RwSignal::new(false);
	let sound = RwSignal::new(audio.is_some_and(|a| a.is_enabled()));

	let show = move |next: Notice, expires: bool| {
		notice_seq.update_value(|n| *n += 1);
		let seq = notice_seq.get_value();
		notice.set(Some(next));
		if expires {
			set_timeout(
				move || {
					if notice_seq.try_get_value() == Some(seq) {
						notice.set(None);
					}
				},
				NOTICE_TTL,
			);
		}
	};

	Effect::new(move |_| {
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		let canvas: HtmlCanvasElement = canvas.into();
		let (w, h) = container_size(&canvas);
		canvas.set_width(w as u32);
		canvas.set_height(h as u32);

		let ctx = match context_2d(&canvas) {
			Ok(ctx) => ctx,
			Err(err) => {
				warn!("living system disabled: {err}");
				return;
			}
		};
		*system_init.borrow_mut() = Some(LivingSystem::new(w, h, js_sys::Date::now() as u64));
		debug!("living system started at {w}x{h}");

		let (system_anim, animate_inner) = (system_init.clone(), animate_init.clone());
		*animate_init.borrow_mut() = Some(Closure::new(move || {
			if mounted.try_get_value() != Some(true) {
				release(&system_anim, &animate_inner);
				debug!("living system stopped");
				return;
			}
			if let Some(ref mut s) = *system_anim.borrow_mut() {
				s.step();
				render::render(s, &ctx);
			}
			if let (Some(win), Some(cb)) = (web_sys::window(), animate_inner.borrow().as_ref()) {
				let _ = win.request_animation_frame(cb.as_ref().unchecked_ref());
			}
		}));
		if let (Some(win), Some(cb)) = (web_sys::window(), animate_init.borrow().as_ref()) {
			let _ = win.request_animation_frame(cb.as_ref().unchecked_ref());
		}
	});

	let system_rs = system.clone();
	let resize = window_event_listener(leptos::ev::resize, move |_| {
		let Some(canvas) = canvas_ref.get_untracked() else {
			return;
		};
		let (w, h) = container_size(&canvas);
		canvas.set_width(w as u32);
		canvas.set_height(h as u32);
		if let Some(ref mut s) = *system_rs.borrow_mut() {
			s.resize(w, h);
		}
	});
	on_cleanup(move || resize.remove());

	let system_md = system.clone();
	let on_mousedown = move |ev: MouseEvent| {
		let Some((x, y)) = pointer_position(canvas_ref.get_untracked(), &ev) else {
			return;
		};
		let outcome = {
			let mut guard = system_md.borrow_mut();
			let Some(s) = guard.as_mut() else {
				return;
			};
			if let Some(id) = s.node_at_position(x, y) {
				s.begin_drag(id);
				debug!("dragging {id:?}");
				play(Cue::Click);
				return;
			}
			let Some(edge) = s.edge_at_position(x, y) else {
				return;
			};
			let outcome = s.automate_edge(edge);
			debug!("automated {edge:?}, {} bottleneck(s) left", s.bottleneck_count());
			outcome
		};
		match outcome {
			Some(AutomateOutcome::Tradeoff(jammed)) => {
				debug!("automation moved the bottleneck to {jammed:?}");
				show(Notice::Tradeoff, true);
			}
			Some(AutomateOutcome::LocalOnly) => show(Notice::LocalFlow, true),
			None => return,
		}
		play(Cue::Connect);
	};

	let system_mm = system.clone();
	let on_mousemove = move |ev: MouseEvent| {
		let Some((x, y)) = pointer_position(canvas_ref.get_untracked(), &ev) else {
			return;
		};
		if let Some(ref mut s) = *system_mm.borrow_mut() {
			s.drag_to(x, y);
		}
	};

	let system_mu = system.clone();
	let release = move |_: MouseEvent| {
		if let Some(ref mut s) = *system_mu.borrow_mut() {
			s.end_drag();
		}
	};
	let on_mouseleave = release.clone();

	let system_add = system.clone();
	let on_add_tool = move |_| {
		// A freshly redesigned system is left alone.
		if stage.get_untracked() == Stage::Optimized {
			return;
		}
		let Some(added) = system_add.borrow_mut().as_mut().map(LivingSystem::add_tool) else {
			return;
		};
		debug!("added tool {added:?}");
		stage.set(Stage::Complexity);
		show(Notice::ComplexityUp, true);
		play(Cue::Pop);
	};

	let system_rd = system.clone();
	let on_redesign = move |_| {
		let redesigned = system_rd
			.borrow_mut()
			.as_mut()
			.is_some_and(LivingSystem::redesign);
		if !redesigned {
			return;
		}
		stage.set(Stage::Optimized);
		show(Notice::Redesigned, false);
		closing.set(true);
		play(Cue::Stabilize);
	};

	let system_reset = system;
	let on_reset = move |_| {
		if let Some(ref mut s) = *system_reset.borrow_mut() {
			s.reset();
		}
		notice_seq.update_value(|n| *n += 1);
		stage.set(Stage::Initial);
		notice.set(None);
		closing.set(false);
	};

	let on_toggle_sound = move |_| {
		let on = !sound.get_untracked();
		sound.set(on);
		if let Some(audio) = audio {
			audio.toggle(on);
		}
	};

	view! {
		<section class="living-system">
			<div class="living-copy">
				<div class="living-badge">
					<span class=move || {
						if stage.get() == Stage::Optimized { "dot dot-ok" } else { "dot dot-busy" }
					}></span>
					{move || i18n.t().living.badge}
				</div>
				<h1>{move || i18n.t().living.headline}</h1>
				{move || {
					let t = i18n.t();
					if closing.get() {
						view! { <p class="living-closing">{t.living.closing}</p> }.into_any()
					} else {
						view! {
							<p class="living-intro">
								{t.living.intro}
								<br />
								<span class="living-hint">{t.living.hint}</span>
							</p>
						}
							.into_any()
					}
				}}
				<div class="living-actions">
					<a href=booking_href class="btn btn-ink">
						{move || i18n.t().living.cta}
						" →"
					</a>
					<button
						class="btn-icon"
						title=move || i18n.t().living.reset
						on:click=on_reset
					>
						"↻"
					</button>
				</div>
			</div>

			<div class="living-stage">
				<canvas
					node_ref=canvas_ref
					class="living-canvas"
					on:mousedown=on_mousedown
					on:mousemove=on_mousemove
					on:mouseup=release
					on:mouseleave=on_mouseleave
				/>
				<div class="living-feedback">
					<button class="btn-round" on:click=on_toggle_sound>
						{move || if sound.get() { "🔊" } else { "🔇" }}
					</button>
					{move || {
						notice
							.get()
							.map(|n| view! { <div class="living-toast">{n.text(i18n.t())}</div> })
					}}
				</div>
				<div class="living-controls">
					<button class="btn btn-light" on:click=on_add_tool>
						"+ "
						{move || i18n.t().living.add_tool}
					</button>
					<button class="btn btn-teal" on:click=on_redesign>
						{move || i18n.t().living.redesign}
					</button>
				</div>
			</div>
		</section>
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	type Slot = Rc<RefCell<Option<Box<dyn Fn() -> usize>>>>;

	#[test]
	fn release_breaks_self_referencing_frame() {
		let frame: Slot = Rc::new(RefCell::new(None));
		let inner = frame.clone();
		*frame.borrow_mut() = Some(Box::new(move || Rc::strong_count(&inner)));
		assert_eq!(Rc::strong_count(&frame), 2);

		let system = RefCell::new(Some(LivingSystem::new(800.0, 600.0, 7)));
		assert!(release(&system, &frame));
		assert!(system.borrow().is_none());
		assert_eq!(Rc::strong_count(&frame), 1);
	}

	#[test]
	fn release_twice_is_harmless() {
		let frame: RefCell<Option<()>> = RefCell::new(Some(()));
		let system: RefCell<Option<LivingSystem>> = RefCell::new(None);
		assert!(release(&system, &frame));
		assert!(!release(&system, &frame));
	}
}
