use std::time::Duration;

use leptos::prelude::*;
use log::warn;
use rand::SeedableRng;
use rand::rngs::SmallRng;

use super::state::{OpsMetrics, Task, TaskKind, TaskStatus, initial_tasks, resolve};
use crate::i18n::{Translations, use_i18n};

const TICK: Duration = Duration::from_secs(3);
const CHART_W: f64 = 220.0;
const CHART_H: f64 = 40.0;

fn kind_label(t: &'static Translations, kind: TaskKind) -> &'static str {
	match kind {
		TaskKind::Automation => t.dashboard.automation,
		TaskKind::Alert => t.dashboard.alert,
		TaskKind::Report => t.dashboard.report,
		TaskKind::System => t.dashboard.system,
	}
}

fn kind_icon(kind: TaskKind) -> &'static str {
	match kind {
		TaskKind::Automation => "⚡",
		TaskKind::Alert => "!",
		TaskKind::Report => "◷",
		TaskKind::System => "⛨",
	}
}

fn status_class(status: TaskStatus) -> &'static str {
	match status {
		TaskStatus::Completed => "ops-task done",
		TaskStatus::Pending => "ops-task pending",
		TaskStatus::Processing => "ops-task busy",
	}
}

/// Mock operations console whose numbers wiggle plausibly.
#[component]
pub fn OpsDashboard() -> impl IntoView {
	let i18n = use_i18n();
	let metrics = RwSignal::new(OpsMetrics::default());
	let tasks = RwSignal::new(initial_tasks());
	let rng = StoredValue::new(SmallRng::seed_from_u64(js_sys::Date::now() as u64));

	match set_interval_with_handle(
		move || {
			let lines = i18n.t_untracked().dashboard.log_lines.len();
			rng.update_value(|rng| metrics.update(|m| m.tick(rng, lines)));
		},
		TICK,
	) {
		Ok(handle) => on_cleanup(move || handle.clear()),
		Err(err) => warn!("dashboard timer not started: {err:?}"),
	}

	let row = move |task: Task| {
		let t = i18n.t();
		let id = task.id;
		view! {
			<li class=status_class(task.status)>
				<div class="ops-task-main">
					<span class="ops-icon">{kind_icon(task.kind)}</span>
					<div>
						<div class="ops-task-title">
							{t.dashboard.task_titles.get(task.title).copied().unwrap_or_default()}
						</div>
						<div class="ops-task-meta">
							{kind_label(t, task.kind)}
							" • "
							{t.dashboard.task_ages.get(task.age).copied().unwrap_or_default()}
						</div>
					</div>
				</div>
				{if task.status == TaskStatus::Pending {
					view! {
						<button
							class="ops-resolve"
							on:click=move |_| tasks.update(|ts| resolve(ts, id))
						>
							{t.dashboard.resolve}
						</button>
					}
						.into_any()
				} else {
					view! { <span class="ops-check">"✓"</span> }.into_any()
				}}
			</li>
		}
	};

	view! {
		<div class="ops-dashboard">
			<div class="ops-header">
				<span class="ops-title">{move || i18n.t().dashboard.title}</span>
				<span class="ops-online">
					<span class="dot dot-ok"></span>
					{move || i18n.t().dashboard.online}
				</span>
			</div>

			<div class="ops-stats">
				<div class="ops-stat">
					<div class="ops-stat-label">{move || i18n.t().dashboard.efficiency}</div>
					<div class="ops-stat-value">
						{move || format!("{:.1}%", metrics.with(|m| m.efficiency))}
					</div>
				</div>
				<div class="ops-stat">
					<div class="ops-stat-label">{move || i18n.t().dashboard.uptime}</div>
					<div class="ops-stat-value">{move || format!("{}%", metrics.with(|m| m.uptime))}</div>
				</div>
				<div class="ops-stat">
					<div class="ops-stat-label">{move || i18n.t().dashboard.tasks}</div>
					<div class="ops-stat-value">{move || metrics.with(|m| m.tasks)}</div>
				</div>
			</div>

			<div class="ops-chart">
				<div class="ops-section-label">{move || i18n.t().dashboard.throughput}</div>
				<svg viewBox=format!("0 0 {CHART_W} {CHART_H}") preserveAspectRatio="none">
					<polyline
						fill="none"
						stroke="currentColor"
						stroke-width="1.5"
						points=move || metrics.with(|m| m.sparkline(CHART_W, CHART_H))
					/>
				</svg>
			</div>

			<div class="ops-section-label">{move || i18n.t().dashboard.recent}</div>
			<ul class="ops-tasks">{move || tasks.get().into_iter().map(row).collect_view()}</ul>

			<ul class="ops-log">
				{move || {
					let lines = i18n.t().dashboard.log_lines;
					metrics
						.with(|m| m.feed.iter().filter_map(|i| lines.get(*i).copied()).collect::<Vec<_>>())
						.into_iter()
						.map(|line| view! { <li>"> " {line}</li> })
						.collect_view()
				}}
			</ul>

			<div class="ops-footer">{move || i18n.t().dashboard.footer}</div>
		</div>
	}
}
