#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub u32);

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EdgeId(pub u32);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NodeKind {
	Core,
	Added,
	Critical,
}

#[derive(Clone, Debug)]
pub struct Node {
	pub id: NodeId,
	pub x: f64,
	pub y: f64,
	pub vx: f64,
	pub vy: f64,
	pub radius: f64,
	pub kind: NodeKind,
}

impl Node {
	pub fn at_rest(id: NodeId, x: f64, y: f64, radius: f64, kind: NodeKind) -> Self {
		Self {
			id,
			x,
			y,
			vx: 0.0,
			vy: 0.0,
			radius,
			kind,
		}
	}
}

#[derive(Clone, Debug)]
pub struct Edge {
	pub id: EdgeId,
	pub from: NodeId,
	pub to: NodeId,
	/// Flow speed in `[0, 1]`.
	pub throughput: f64,
	pub bottleneck: bool,
}

#[derive(Clone, Debug)]
pub struct Particle {
	pub edge: EdgeId,
	/// Position along the edge, `0.0` at `from`, removed at `1.0`.
	pub progress: f64,
	pub speed: f64,
}

/// Narrative phase of the widget; gates which message and actions apply next.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Stage {
	#[default]
	Initial,
	Complexity,
	Optimized,
}

/// What an automate click ended up doing elsewhere in the graph.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AutomateOutcome {
	/// The clicked edge sped up and another edge became a bottleneck.
	Tradeoff(EdgeId),
	LocalOnly,
}
