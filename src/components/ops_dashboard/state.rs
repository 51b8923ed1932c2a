use std::collections::VecDeque;

use rand::Rng;

pub const EFFICIENCY_RANGE: (f64, f64) = (90.0, 100.0);
pub const THROUGHPUT_RANGE: (f64, f64) = (20.0, 100.0);
pub const SPARKLINE_POINTS: usize = 12;
pub const FEED_LEN: usize = 4;
const TASK_CHANCE: f64 = 0.3;
const THROUGHPUT_STEP: f64 = 8.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TaskKind {
	Automation,
	Alert,
	Report,
	System,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TaskStatus {
	Completed,
	Pending,
	Processing,
}

/// One row of the activity list. `title` and `age` index the active dictionary.
#[derive(Clone, Debug, PartialEq)]
pub struct Task {
	pub id: u32,
	pub kind: TaskKind,
	pub title: usize,
	pub age: usize,
	pub status: TaskStatus,
}

pub fn initial_tasks() -> Vec<Task> {
	[
		(TaskKind::Automation, TaskStatus::Completed),
		(TaskKind::Alert, TaskStatus::Pending),
		(TaskKind::Report, TaskStatus::Processing),
		(TaskKind::System, TaskStatus::Completed),
	]
	.into_iter()
	.enumerate()
	.map(|(i, (kind, status))| Task {
		id: i as u32 + 1,
		kind,
		title: i,
		age: i,
		status,
	})
	.collect()
}

/// Flip a task between pending and completed.
pub fn resolve(tasks: &mut [Task], id: u32) {
	if let Some(task) = tasks.iter_mut().find(|t| t.id == id) {
		task.status = match task.status {
			TaskStatus::Pending => TaskStatus::Completed,
			_ => TaskStatus::Pending,
		};
	}
}

/// Headline numbers, mock log and chart of the dashboard.
#[derive(Clone, Debug, PartialEq)]
pub struct OpsMetrics {
	pub efficiency: f64,
	pub uptime: f64,
	pub tasks: u32,
	pub throughput: VecDeque<f64>,
	/// Indices into the dictionary's log lines, newest first.
	pub feed: VecDeque<usize>,
	next_log: usize,
}

impl Default for OpsMetrics {
	fn default() -> Self {
		Self {
			efficiency: 94.0,
			uptime: 99.9,
			tasks: 128,
			throughput: [62.0, 58.0, 66.0, 71.0, 64.0, 69.0, 75.0, 72.0, 78.0, 74.0, 81.0, 79.0]
				.into_iter()
				.collect(),
			feed: VecDeque::new(),
			next_log: 0,
		}
	}
}

impl OpsMetrics {
	/// One tick of the simulated activity. `log_lines` is the size of the
	/// rotating log vocabulary.
	pub fn tick<R: Rng>(&mut self, rng: &mut R, log_lines: usize) {
		let (lo, hi) = EFFICIENCY_RANGE;
		self.efficiency = (self.efficiency + rng.gen_range(-0.5..0.5)).clamp(lo, hi);
		if rng.gen_bool(TASK_CHANCE) {
			self.tasks += 1;
		}

		let (lo, hi) = THROUGHPUT_RANGE;
		let last = self.throughput.back().copied().unwrap_or((lo + hi) / 2.0);
		let next = (last + rng.gen_range(-THROUGHPUT_STEP..THROUGHPUT_STEP)).clamp(lo, hi);
		self.throughput.push_back(next);
		while self.throughput.len() > SPARKLINE_POINTS {
			self.throughput.pop_front();
		}

		if log_lines > 0 {
			self.feed.push_front(self.next_log % log_lines);
			self.next_log = (self.next_log + 1) % log_lines;
			self.feed.truncate(FEED_LEN);
		}
	}

	/// SVG polyline points for the sparkline in a `width` x `height` box.
	pub fn sparkline(&self, width: f64, height: f64) -> String {
		let (lo, hi) = THROUGHPUT_RANGE;
		let step = width / (SPARKLINE_POINTS.saturating_sub(1).max(1)) as f64;
		self.throughput
			.iter()
			.enumerate()
			.map(|(i, v)| {
				let y = height - (v - lo) / (hi - lo) * height;
				format!("{:.1},{:.1}", i as f64 * step, y)
			})
			.collect::<Vec<_>>()
			.join(" ")
	}
}

#[cfg(test)]
mod tests {
	use rand::SeedableRng;
	use rand::rngs::SmallRng;

	use super::*;

	#[test]
	fn metrics_stay_within_bounds() {
		let mut rng = SmallRng::seed_from_u64(11);
		let mut m = OpsMetrics::default();
		let start_tasks = m.tasks;
		let mut last_tasks = m.tasks;
		for _ in 0..5_000 {
			m.tick(&mut rng, 5);
			assert!((90.0..=100.0).contains(&m.efficiency));
			assert!(m.throughput.iter().all(|v| (20.0..=100.0).contains(v)));
			assert_eq!(m.throughput.len(), SPARKLINE_POINTS);
			assert!(m.feed.len() <= FEED_LEN);
			assert!(m.tasks == last_tasks || m.tasks == last_tasks + 1);
			last_tasks = m.tasks;
			assert_eq!(m.uptime, 99.9);
		}
		assert!(m.tasks > start_tasks);
	}

	#[test]
	fn feed_rotates_newest_first() {
		let mut rng = SmallRng::seed_from_u64(1);
		let mut m = OpsMetrics::default();
		for _ in 0..3 {
			m.tick(&mut rng, 3);
		}
		assert_eq!(m.feed.iter().copied().collect::<Vec<_>>(), vec![2, 1, 0]);
		m.tick(&mut rng, 3);
		m.tick(&mut rng, 3);
		assert_eq!(m.feed.iter().copied().collect::<Vec<_>>(), vec![1, 0, 2, 1]);
	}

	#[test]
	fn empty_log_vocabulary_leaves_feed_alone() {
		let mut rng = SmallRng::seed_from_u64(1);
		let mut m = OpsMetrics::default();
		m.tick(&mut rng, 0);
		assert!(m.feed.is_empty());
	}

	#[test]
	fn resolve_toggles_pending_and_completed() {
		let mut tasks = initial_tasks();
		assert_eq!(tasks[1].status, TaskStatus::Pending);
		resolve(&mut tasks, 2);
		assert_eq!(tasks[1].status, TaskStatus::Completed);
		resolve(&mut tasks, 2);
		assert_eq!(tasks[1].status, TaskStatus::Pending);
		resolve(&mut tasks, 42);
		assert_eq!(tasks, {
			let mut expected = initial_tasks();
			resolve(&mut expected, 2);
			resolve(&mut expected, 2);
			expected
		});
	}

	#[test]
	fn sparkline_spans_the_box() {
		let m = OpsMetrics::default();
		let points = m.sparkline(110.0, 40.0);
		let coords: Vec<&str> = points.split(' ').collect();
		assert_eq!(coords.len(), SPARKLINE_POINTS);
		assert!(coords[0].starts_with("0.0,"));
		assert!(coords[SPARKLINE_POINTS - 1].starts_with("110.0,"));
	}
}
