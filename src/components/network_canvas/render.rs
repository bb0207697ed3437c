//! Canvas rendering for the network graph.
//!
//! Pure function of engine state: background, then edges (arrowheads on the
//! directed ones), then the highlight segment, then nodes with centered
//! labels and the highlight ring on top. Invoked every animation frame.

use std::f64::consts::PI;

use web_sys::CanvasRenderingContext2d;

use super::state::{Highlight, NetworkState};
use super::theme::Theme;
use super::types::Node;

/// Renders the complete network to the canvas.
pub fn render(
	state: &NetworkState,
	ctx: &CanvasRenderingContext2d,
	theme: &Theme,
	width: f64,
	height: f64,
) {
	ctx.set_fill_style_str(&theme.background.to_css());
	ctx.fill_rect(0.0, 0.0, width, height);

	let graph = state.graph();
	for edge in graph.edges() {
		let (Some(a), Some(b)) = (
			graph.find_node_by_label(&edge.from),
			graph.find_node_by_label(&edge.to),
		) else {
			continue;
		};
		draw_edge(ctx, theme, a, b, edge.directed);
	}

	if let Highlight::Segment { from, to } = state.highlight()
		&& let (Some(a), Some(b)) = (
			graph.find_node_by_label(from),
			graph.find_node_by_label(to),
		) {
		draw_hop_segment(ctx, theme, a, b);
	}

	for node in graph.nodes() {
		draw_node(ctx, theme, node);
	}

	if let Highlight::Node(label) = state.highlight()
		&& let Some(node) = graph.find_node_by_label(label)
	{
		draw_highlight_ring(ctx, theme, node);
	}
}

fn draw_node(ctx: &CanvasRenderingContext2d, theme: &Theme, node: &Node) {
	ctx.begin_path();
	let _ = ctx.arc(node.x, node.y, theme.node_radius, 0.0, PI * 2.0);
	ctx.set_fill_style_str(&theme.node_fill.to_css());
	ctx.fill();
	ctx.set_stroke_style_str(&theme.node_stroke.to_css());
	ctx.set_line_width(2.0);
	ctx.stroke();

	ctx.set_fill_style_str(&theme.node_stroke.to_css());
	ctx.set_font(theme.font);
	ctx.set_text_align("center");
	ctx.set_text_baseline("middle");
	let _ = ctx.fill_text(&node.label, node.x, node.y);
}

fn draw_edge(ctx: &CanvasRenderingContext2d, theme: &Theme, a: &Node, b: &Node, directed: bool) {
	ctx.begin_path();
	ctx.move_to(a.x, a.y);
	ctx.line_to(b.x, b.y);
	ctx.set_stroke_style_str(&theme.edge.to_css());
	ctx.set_line_width(2.0);
	ctx.stroke();

	if directed {
		draw_arrowhead(ctx, theme, a, b);
	}
}

fn draw_arrowhead(ctx: &CanvasRenderingContext2d, theme: &Theme, a: &Node, b: &Node) {
	let ang = (b.y - a.y).atan2(b.x - a.x);
	ctx.begin_path();
	ctx.move_to(b.x, b.y);
	ctx.line_to(
		b.x - 10.0 * (ang - 0.3).cos(),
		b.y - 10.0 * (ang - 0.3).sin(),
	);
	ctx.line_to(
		b.x - 10.0 * (ang + 0.3).cos(),
		b.y - 10.0 * (ang + 0.3).sin(),
	);
	ctx.close_path();
	ctx.set_fill_style_str(&theme.arrowhead.to_css());
	ctx.fill();
}

fn draw_hop_segment(ctx: &CanvasRenderingContext2d, theme: &Theme, a: &Node, b: &Node) {
	ctx.begin_path();
	ctx.move_to(a.x, a.y);
	ctx.line_to(b.x, b.y);
	ctx.set_stroke_style_str(&theme.highlight.to_css());
	ctx.set_line_width(4.0);
	ctx.stroke();
}

fn draw_highlight_ring(ctx: &CanvasRenderingContext2d, theme: &Theme, node: &Node) {
	ctx.begin_path();
	let _ = ctx.arc(node.x, node.y, theme.node_radius + 5.0, 0.0, PI * 2.0);
	ctx.set_stroke_style_str(&theme.highlight.to_css());
	ctx.set_line_width(3.0);
	ctx.stroke();
}
