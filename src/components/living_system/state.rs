use std::collections::HashMap;
use std::f64::consts::TAU;

use rand::rngs::SmallRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use super::params::SimulationParameters;
use super::types::{AutomateOutcome, Edge, EdgeId, Node, NodeId, NodeKind, Particle};

/// Mutable state of the living system graph, stepped once per animation frame.
///
/// Lives outside the reactive graph; the renderer only reads it.
pub struct LivingSystem {
	pub nodes: Vec<Node>,
	pub edges: Vec<Edge>,
	pub particles: Vec<Particle>,
	pub params: SimulationParameters,
	pub width: f64,
	pub height: f64,
	/// Node following the pointer; skipped by integration.
	pub dragging: Option<NodeId>,
	/// Last pointer position over the canvas.
	pub pointer: Option<(f64, f64)>,
	next_node: u32,
	next_edge: u32,
	rng: SmallRng,
}

impl LivingSystem {
	pub fn new(width: f64, height: f64, seed: u64) -> Self {
		Self::with_params(width, height, seed, SimulationParameters::default())
	}

	pub fn with_params(width: f64, height: f64, seed: u64, params: SimulationParameters) -> Self {
		let mut system = Self {
			nodes: Vec::new(),
			edges: Vec::new(),
			particles: Vec::new(),
			params,
			width,
			height,
			dragging: None,
			pointer: None,
			next_node: 1,
			next_edge: 1,
			rng: SmallRng::seed_from_u64(seed),
		};
		system.reset();
		system
	}

	/// Rebuild the balanced starter graph around the canvas centre.
	pub fn reset(&mut self) {
		let (cx, cy) = (self.width / 2.0, self.height / 2.0);
		self.nodes.clear();
		self.edges.clear();
		self.particles.clear();
		self.dragging = None;
		self.next_node = 1;
		self.next_edge = 1;

		for (dx, dy, radius) in [
			(-100.0, -50.0, 6.0),
			(100.0, -50.0, 6.0),
			(0.0, 80.0, 6.0),
			(-150.0, 50.0, 4.0),
			(150.0, 50.0, 4.0),
		] {
			let id = self.next_node_id();
			self.nodes
				.push(Node::at_rest(id, cx + dx, cy + dy, radius, NodeKind::Core));
		}

		for (from, to, throughput) in [(1, 2, 0.5), (2, 3, 0.5), (3, 1, 0.5), (4, 1, 0.3), (2, 5, 0.3)] {
			self.connect(NodeId(from), NodeId(to), throughput);
		}
	}

	pub fn resize(&mut self, width: f64, height: f64) {
		self.width = width;
		self.height = height;
	}

	pub fn node(&self, id: NodeId) -> Option<&Node> {
		self.nodes.iter().find(|n| n.id == id)
	}

	pub fn edge(&self, id: EdgeId) -> Option<&Edge> {
		self.edges.iter().find(|e| e.id == id)
	}

	pub fn endpoints(&self, edge: &Edge) -> Option<(&Node, &Node)> {
		Some((self.node(edge.from)?, self.node(edge.to)?))
	}

	pub fn bottleneck_count(&self) -> usize {
		self.edges.iter().filter(|e| e.bottleneck).count()
	}

	/// Advance the simulation by one frame.
	pub fn step(&mut self) {
		self.apply_forces();
		self.spawn_particle();
		self.advance_particles();
	}

	fn apply_forces(&mut self) {
		let p = &self.params;
		let (cx, cy) = (self.width / 2.0, self.height / 2.0);
		let index: HashMap<NodeId, usize> =
			self.nodes.iter().enumerate().map(|(i, n)| (n.id, i)).collect();
		let mut forces = vec![(0.0_f64, 0.0_f64); self.nodes.len()];

		for (i, node) in self.nodes.iter().enumerate() {
			for (j, other) in self.nodes.iter().enumerate() {
				if i == j {
					continue;
				}
				let (dx, dy) = (node.x - other.x, node.y - other.y);
				let mut dist = (dx * dx + dy * dy).sqrt();
				if dist == 0.0 {
					dist = 1.0;
				}
				let force = p.repulsion / (dist * dist);
				forces[i].0 += dx / dist * force;
				forces[i].1 += dy / dist * force;
			}
		}

		for edge in &self.edges {
			let (Some(&a), Some(&b)) = (index.get(&edge.from), index.get(&edge.to)) else {
				continue;
			};
			let (dx, dy) = (self.nodes[a].x - self.nodes[b].x, self.nodes[a].y - self.nodes[b].y);
			let dist = (dx * dx + dy * dy).sqrt();
			if dist < f64::EPSILON {
				continue;
			}
			let force = (dist - p.ideal_length) * p.spring;
			let (fx, fy) = (dx / dist * force, dy / dist * force);
			forces[a].0 -= fx;
			forces[a].1 -= fy;
			forces[b].0 += fx;
			forces[b].1 += fy;
		}

		for (node, (fx, fy)) in self.nodes.iter_mut().zip(forces) {
			if self.dragging == Some(node.id) {
				continue;
			}
			let fx = fx - (node.x - cx) * p.centering;
			let fy = fy - (node.y - cy) * p.centering;
			node.vx = (node.vx + fx) * p.damping;
			node.vy = (node.vy + fy) * p.damping;
			node.x += node.vx;
			node.y += node.vy;
		}
	}

	fn spawn_particle(&mut self) {
		if self.edges.is_empty() || !self.rng.gen_bool(self.params.spawn_chance) {
			return;
		}
		let edge = &self.edges[self.rng.gen_range(0..self.edges.len())];
		self.particles.push(Particle {
			edge: edge.id,
			progress: 0.0,
			speed: self.params.base_particle_speed + edge.throughput * self.params.throughput_speed,
		});
	}

	fn advance_particles(&mut self) {
		let edges = &self.edges;
		let slowdown = self.params.bottleneck_slowdown;
		self.particles.retain_mut(|particle| {
			let Some(edge) = edges.iter().find(|e| e.id == particle.edge) else {
				return false;
			};
			let modifier = if edge.bottleneck { slowdown } else { 1.0 };
			particle.progress += particle.speed * modifier;
			particle.progress < 1.0
		});
	}

	pub fn node_at_position(&self, x: f64, y: f64) -> Option<NodeId> {
		let r2 = self.params.node_hit_radius * self.params.node_hit_radius;
		self.nodes
			.iter()
			.find(|n| (n.x - x).powi(2) + (n.y - y).powi(2) < r2)
			.map(|n| n.id)
	}

	/// First edge whose segment passes within the hit distance of `(x, y)`.
	pub fn edge_at_position(&self, x: f64, y: f64) -> Option<EdgeId> {
		let limit = self.params.edge_hit_distance * self.params.edge_hit_distance;
		self.edges
			.iter()
			.find(|edge| {
				self.endpoints(edge)
					.is_some_and(|(a, b)| segment_distance_sq((x, y), (a.x, a.y), (b.x, b.y)) < limit)
			})
			.map(|e| e.id)
	}

	pub fn set_pointer(&mut self, x: f64, y: f64) {
		self.pointer = Some((x, y));
	}

	pub fn begin_drag(&mut self, id: NodeId) {
		self.dragging = Some(id);
	}

	/// Move the dragged node, if any, to the pointer.
	pub fn drag_to(&mut self, x: f64, y: f64) {
		self.set_pointer(x, y);
		let Some(id) = self.dragging else {
			return;
		};
		if let Some(node) = self.nodes.iter_mut().find(|n| n.id == id) {
			node.x = x;
			node.y = y;
			node.vx = 0.0;
			node.vy = 0.0;
		}
	}

	pub fn end_drag(&mut self) {
		self.dragging = None;
	}

	/// Speed up one edge. Another edge, picked at random, may become a bottleneck.
	///
	/// Returns `None` if the edge does not exist.
	pub fn automate_edge(&mut self, id: EdgeId) -> Option<AutomateOutcome> {
		let edge = self.edges.iter_mut().find(|e| e.id == id)?;
		edge.throughput = self.params.automated_throughput;
		edge.bottleneck = false;

		let chance = self.params.tradeoff_chance;
		let rng = &mut self.rng;
		let Some(other) = self
			.edges
			.iter_mut()
			.filter(|e| e.id != id)
			.find(|_| rng.gen_bool(chance))
		else {
			return Some(AutomateOutcome::LocalOnly);
		};
		other.bottleneck = true;
		other.throughput = self.params.bottleneck_throughput;
		Some(AutomateOutcome::Tradeoff(other.id))
	}

	/// Insert a new tool node wired to up to two existing nodes.
	pub fn add_tool(&mut self) -> NodeId {
		let (x, y) = self
			.pointer
			.unwrap_or((self.width / 2.0, self.height / 2.0));
		let first = self.nodes.choose(&mut self.rng).map(|n| n.id);
		let second = self.nodes.choose(&mut self.rng).map(|n| n.id);

		let id = self.next_node_id();
		self.nodes
			.push(Node::at_rest(id, x, y, 5.0, NodeKind::Added));

		let throughput = self.params.added_throughput;
		if let Some(target) = first {
			self.connect(id, target, throughput);
		}
		if let Some(target) = second.filter(|t| Some(*t) != first) {
			self.connect(id, target, throughput);
		}
		id
	}

	/// Push the graph toward a simpler, bottleneck-free topology.
	///
	/// Returns `false` and does nothing when the graph has no nodes.
	pub fn redesign(&mut self) -> bool {
		if self.nodes.is_empty() {
			return false;
		}

		let count = self.nodes.len() as f64;
		let impulse = self.params.redesign_impulse;
		for (i, node) in self.nodes.iter_mut().enumerate() {
			let angle = i as f64 / count * TAU;
			node.vx += angle.cos() * impulse;
			node.vy += angle.sin() * impulse;
		}

		if self.edges.len() > self.params.redesign_prune_above {
			let mut i = 0;
			self.edges.retain(|_| {
				let keep = i < 4 || i % 2 == 0;
				i += 1;
				keep
			});
		}

		for edge in &mut self.edges {
			edge.bottleneck = false;
			edge.throughput = self.params.redesigned_throughput;
		}
		true
	}

	fn connect(&mut self, from: NodeId, to: NodeId, throughput: f64) -> EdgeId {
		let id = EdgeId(self.next_edge);
		self.next_edge += 1;
		self.edges.push(Edge {
			id,
			from,
			to,
			throughput,
			bottleneck: false,
		});
		id
	}

	fn next_node_id(&mut self) -> NodeId {
		let id = NodeId(self.next_node);
		self.next_node += 1;
		id
	}
}

/// Squared distance from `p` to the segment `a`-`b`.
fn segment_distance_sq(p: (f64, f64), a: (f64, f64), b: (f64, f64)) -> f64 {
	let (cx, cy) = (b.0 - a.0, b.1 - a.1);
	let len_sq = cx * cx + cy * cy;
	let t = if len_sq == 0.0 {
		0.0
	} else {
		(((p.0 - a.0) * cx + (p.1 - a.1) * cy) / len_sq).clamp(0.0, 1.0)
	};
	let (x, y) = (a.0 + t * cx, a.1 + t * cy);
	(p.0 - x).powi(2) + (p.1 - y).powi(2)
}

#[cfg(test)]
mod tests {
	use super::*;

	fn system() -> LivingSystem {
		LivingSystem::new(800.0, 600.0, 7)
	}

	#[test]
	fn starter_graph_is_five_nodes_and_five_edges() {
		let s = system();
		assert_eq!(s.nodes.len(), 5);
		assert_eq!(s.edges.len(), 5);
		assert!(s.nodes.iter().all(|n| n.kind == NodeKind::Core));
		assert_eq!(s.bottleneck_count(), 0);
		assert_eq!(s.node(NodeId(3)).map(|n| (n.x, n.y)), Some((400.0, 380.0)));
	}

	#[test]
	fn add_tool_adds_one_node_and_at_most_two_edges() {
		for seed in 0..50 {
			let mut s = LivingSystem::new(800.0, 600.0, seed);
			let node_ids: Vec<_> = s.nodes.iter().map(|n| n.id).collect();
			let edge_ids: Vec<_> = s.edges.iter().map(|e| e.id).collect();

			let added = s.add_tool();

			assert_eq!(s.nodes.len(), node_ids.len() + 1);
			let new_edges = s.edges.len() - edge_ids.len();
			assert!((1..=2).contains(&new_edges), "seed {seed}: {new_edges} edges");
			assert!(node_ids.iter().all(|id| s.node(*id).is_some()));
			assert!(edge_ids.iter().all(|id| s.edge(*id).is_some()));
			assert_eq!(s.node(added).map(|n| n.kind), Some(NodeKind::Added));
			assert!(s.edges[edge_ids.len()..].iter().all(|e| e.from == added && e.to != added));
		}
	}

	#[test]
	fn add_tool_places_node_at_pointer_or_centre() {
		let mut s = system();
		let centred = s.add_tool();
		assert_eq!(s.node(centred).map(|n| (n.x, n.y)), Some((400.0, 300.0)));

		s.set_pointer(120.0, 80.0);
		let pointed = s.add_tool();
		assert_eq!(s.node(pointed).map(|n| (n.x, n.y)), Some((120.0, 80.0)));
	}

	#[test]
	fn add_tool_on_empty_graph_adds_isolated_node() {
		let mut s = system();
		s.nodes.clear();
		s.edges.clear();
		s.add_tool();
		assert_eq!(s.nodes.len(), 1);
		assert!(s.edges.is_empty());
	}

	#[test]
	fn add_then_redesign_scenario() {
		let mut s = system();
		s.add_tool();
		assert_eq!(s.nodes.len(), 6);
		assert!(s.edges.len() <= 7);

		let before = s.edges.len();
		assert!(s.redesign());
		assert!(s.edges.len() <= before);
		assert_eq!(s.bottleneck_count(), 0);
	}

	#[test]
	fn redesign_prunes_by_index_and_resets_throughput() {
		let mut s = system();
		s.set_pointer(10.0, 10.0);
		while s.edges.len() < 9 {
			s.add_tool();
		}
		s.edges.truncate(9);
		s.edges[3].bottleneck = true;
		s.edges[8].bottleneck = true;
		let kept: Vec<_> = s
			.edges
			.iter()
			.enumerate()
			.filter(|(i, _)| *i < 4 || i % 2 == 0)
			.map(|(_, e)| e.id)
			.collect();

		assert!(s.redesign());

		assert_eq!(s.edges.iter().map(|e| e.id).collect::<Vec<_>>(), kept);
		assert_eq!(s.bottleneck_count(), 0);
		assert!(s.edges.iter().all(|e| e.throughput == 0.6));
	}

	#[test]
	fn redesign_keeps_small_graphs_intact() {
		let mut s = system();
		s.edges[1].bottleneck = true;
		assert!(s.redesign());
		assert_eq!(s.edges.len(), 5);
		assert_eq!(s.bottleneck_count(), 0);
	}

	#[test]
	fn redesign_without_nodes_is_skipped() {
		let mut s = system();
		s.nodes.clear();
		s.edges[0].bottleneck = true;
		assert!(!s.redesign());
		assert_eq!(s.bottleneck_count(), 1);
	}

	#[test]
	fn spawned_particle_moves_forward_until_removed() {
		let mut s = LivingSystem::with_params(
			800.0,
			600.0,
			3,
			SimulationParameters {
				spawn_chance: 1.0,
				..SimulationParameters::default()
			},
		);
		s.spawn_particle();
		assert_eq!(s.particles.len(), 1);
		assert_eq!(s.particles[0].progress, 0.0);
		s.params.spawn_chance = 0.0;

		let mut last = 0.0;
		let mut frames = 0;
		while let Some(p) = s.particles.first() {
			assert!(p.progress >= last);
			last = p.progress;
			s.step();
			if let Some(p) = s.particles.first() {
				assert!(p.progress > last);
				assert!(p.progress < 1.0);
			}
			frames += 1;
			assert!(frames < 1000, "particle never finished");
		}
		assert!(s.particles.is_empty());
	}

	#[test]
	fn particle_is_removed_when_it_completes() {
		let mut s = system();
		s.params.spawn_chance = 0.0;
		let edge = s.edges[0].id;
		s.particles.push(Particle {
			edge,
			progress: 0.995,
			speed: 0.01,
		});
		s.step();
		assert!(s.particles.is_empty());
	}

	#[test]
	fn particle_is_removed_with_its_edge() {
		let mut s = system();
		s.params.spawn_chance = 0.0;
		let edge = s.edges[0].id;
		s.particles.push(Particle {
			edge,
			progress: 0.0,
			speed: 0.001,
		});
		s.edges.remove(0);
		s.step();
		assert!(s.particles.is_empty());
	}

	#[test]
	fn bottleneck_slows_particles() {
		let mut s = system();
		s.params.spawn_chance = 0.0;
		s.edges[1].bottleneck = true;
		let (free, jammed) = (s.edges[0].id, s.edges[1].id);
		for edge in [free, jammed] {
			s.particles.push(Particle {
				edge,
				progress: 0.0,
				speed: 0.01,
			});
		}
		s.step();
		assert!((s.particles[0].progress - 0.01).abs() < 1e-12);
		assert!((s.particles[1].progress - 0.002).abs() < 1e-12);
	}

	#[test]
	fn automate_boosts_edge_and_creates_tradeoff() {
		let mut s = system();
		s.params.tradeoff_chance = 1.0;
		let clicked = s.edges[2].id;
		s.edges[2].bottleneck = true;

		let outcome = s.automate_edge(clicked);

		let first_other = s.edges[0].id;
		assert_eq!(outcome, Some(AutomateOutcome::Tradeoff(first_other)));
		let edge = s.edge(clicked).unwrap();
		assert!(!edge.bottleneck);
		assert_eq!(edge.throughput, 0.9);
		let other = s.edge(first_other).unwrap();
		assert!(other.bottleneck);
		assert_eq!(other.throughput, 0.1);
	}

	#[test]
	fn automate_without_tradeoff_is_local() {
		let mut s = system();
		s.params.tradeoff_chance = 0.0;
		let clicked = s.edges[0].id;
		assert_eq!(s.automate_edge(clicked), Some(AutomateOutcome::LocalOnly));
		assert_eq!(s.bottleneck_count(), 0);
		assert_eq!(s.automate_edge(EdgeId(999)), None);
	}

	#[test]
	fn hit_testing_finds_nodes_and_edges() {
		let s = system();
		// Node 1 sits at (300, 250), node 2 at (500, 250).
		assert_eq!(s.node_at_position(310.0, 255.0), Some(NodeId(1)));
		assert_eq!(s.node_at_position(400.0, 100.0), None);
		assert_eq!(s.edge_at_position(400.0, 255.0), Some(s.edges[0].id));
		assert_eq!(s.edge_at_position(400.0, 265.0), None);
	}

	#[test]
	fn segment_distance_clamps_to_endpoints() {
		assert_eq!(segment_distance_sq((5.0, 3.0), (0.0, 0.0), (10.0, 0.0)), 9.0);
		assert_eq!(segment_distance_sq((-3.0, 4.0), (0.0, 0.0), (10.0, 0.0)), 25.0);
		assert_eq!(segment_distance_sq((1.0, 1.0), (0.0, 0.0), (0.0, 0.0)), 2.0);
	}

	#[test]
	fn dragged_node_follows_pointer_and_ignores_forces() {
		let mut s = system();
		s.begin_drag(NodeId(4));
		s.drag_to(50.0, 60.0);
		for _ in 0..10 {
			s.step();
		}
		let node = s.node(NodeId(4)).unwrap();
		assert_eq!((node.x, node.y, node.vx, node.vy), (50.0, 60.0, 0.0, 0.0));

		s.end_drag();
		s.step();
		assert_ne!(s.node(NodeId(4)).map(|n| (n.x, n.y)), Some((50.0, 60.0)));
	}

	#[test]
	fn centering_pulls_lone_node_inward() {
		let mut s = system();
		s.edges.clear();
		s.nodes.truncate(1);
		s.nodes[0].x = 700.0;
		s.nodes[0].y = 500.0;
		let before = (700.0_f64 - 400.0).hypot(500.0 - 300.0);
		for _ in 0..20 {
			s.step();
		}
		let n = &s.nodes[0];
		assert!((n.x - 400.0).hypot(n.y - 300.0) < before);
	}

	#[test]
	fn reset_restores_starter_graph() {
		let mut s = system();
		s.add_tool();
		s.redesign();
		s.begin_drag(NodeId(1));
		s.reset();
		assert_eq!(s.nodes.len(), 5);
		assert_eq!(s.edges.len(), 5);
		assert!(s.particles.is_empty());
		assert!(s.dragging.is_none());
		assert_eq!(s.add_tool(), NodeId(6));
	}
}
