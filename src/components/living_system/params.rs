//! Tunables of the living system simulation.

/// Forces, thresholds and scripted values used by [`super::state::LivingSystem`].
#[derive(Clone, Debug, PartialEq)]
pub struct SimulationParameters {
	/// Numerator of the inverse-square node repulsion.
	pub repulsion: f64,
	/// Spring constant applied along every edge.
	pub spring: f64,
	/// Edge length the springs settle toward.
	pub ideal_length: f64,
	/// Pull toward the canvas midpoint, per pixel of offset.
	pub centering: f64,
	/// Velocity multiplier applied every frame.
	pub damping: f64,
	/// Chance per frame that a particle is spawned.
	pub spawn_chance: f64,
	pub base_particle_speed: f64,
	pub throughput_speed: f64,
	/// Speed multiplier for particles on a bottlenecked edge.
	pub bottleneck_slowdown: f64,
	pub node_hit_radius: f64,
	pub edge_hit_distance: f64,
	/// Chance that each other edge is picked to absorb the friction of an automate.
	pub tradeoff_chance: f64,
	pub automated_throughput: f64,
	pub bottleneck_throughput: f64,
	pub added_throughput: f64,
	pub redesigned_throughput: f64,
	/// Velocity kick toward the circular layout on redesign.
	pub redesign_impulse: f64,
	/// Redesign only prunes edges above this count.
	pub redesign_prune_above: usize,
}

impl Default for SimulationParameters {
	fn default() -> Self {
		Self {
			repulsion: 2000.0,
			spring: 0.05,
			ideal_length: 120.0,
			centering: 0.005,
			damping: 0.9,
			spawn_chance: 0.05,
			base_particle_speed: 0.005,
			throughput_speed: 0.01,
			bottleneck_slowdown: 0.2,
			node_hit_radius: 20.0,
			edge_hit_distance: 10.0,
			tradeoff_chance: 0.3,
			automated_throughput: 0.9,
			bottleneck_throughput: 0.1,
			added_throughput: 0.4,
			redesigned_throughput: 0.6,
			redesign_impulse: 5.0,
			redesign_prune_above: 5,
		}
	}
}
