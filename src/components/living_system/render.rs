use std::f64::consts::PI;

use web_sys::CanvasRenderingContext2d;

use super::state::LivingSystem;
use super::types::NodeKind;

pub const INK: &str = "#0B1C2D";
pub const TEAL: &str = "#2FA4A9";
pub const ALERT: &str = "#E11D48";

const PARTICLE_RADIUS: f64 = 2.0;
const HALO_GAP: f64 = 4.0;

pub fn render(system: &LivingSystem, ctx: &CanvasRenderingContext2d) {
	ctx.clear_rect(0.0, 0.0, system.width, system.height);
	draw_edges(system, ctx);
	draw_particles(system, ctx);
	draw_nodes(system, ctx);
}

fn draw_edges(system: &LivingSystem, ctx: &CanvasRenderingContext2d) {
	for edge in &system.edges {
		let Some((a, b)) = system.endpoints(edge) else {
			continue;
		};
		let (color, alpha, width) = if edge.bottleneck {
			(ALERT, 0.5, 2.0)
		} else {
			(INK, 0.1, 1.0)
		};

		ctx.begin_path();
		ctx.move_to(a.x, a.y);
		ctx.line_to(b.x, b.y);
		ctx.set_stroke_style_str(color);
		ctx.set_global_alpha(alpha);
		ctx.set_line_width(width);
		ctx.stroke();
		ctx.set_global_alpha(1.0);
	}
}

fn draw_particles(system: &LivingSystem, ctx: &CanvasRenderingContext2d) {
	for particle in &system.particles {
		let Some(edge) = system.edge(particle.edge) else {
			continue;
		};
		let Some((a, b)) = system.endpoints(edge) else {
			continue;
		};
		let (x, y) = (
			a.x + (b.x - a.x) * particle.progress,
			a.y + (b.y - a.y) * particle.progress,
		);

		ctx.begin_path();
		let _ = ctx.arc(x, y, PARTICLE_RADIUS, 0.0, 2.0 * PI);
		ctx.set_fill_style_str(if edge.bottleneck { ALERT } else { TEAL });
		ctx.fill();
	}
}

fn draw_nodes(system: &LivingSystem, ctx: &CanvasRenderingContext2d) {
	for node in &system.nodes {
		ctx.begin_path();
		let _ = ctx.arc(node.x, node.y, node.radius, 0.0, 2.0 * PI);
		ctx.set_fill_style_str(if node.kind == NodeKind::Critical {
			ALERT
		} else {
			INK
		});
		ctx.fill();

		if node.kind == NodeKind::Added {
			ctx.begin_path();
			let _ = ctx.arc(node.x, node.y, node.radius + HALO_GAP, 0.0, 2.0 * PI);
			ctx.set_stroke_style_str(TEAL);
			ctx.set_line_width(1.0);
			ctx.stroke();
		}
	}
}
