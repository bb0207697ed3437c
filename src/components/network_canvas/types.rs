//! Core graph data structures and the seed-data input format.

use serde::Deserialize;

/// A node placed on the canvas.
#[derive(Clone, Debug, PartialEq)]
pub struct Node {
	/// Unique label, assigned sequentially at creation ("N1", "N2", ...).
	pub label: String,
	/// Horizontal position in canvas space.
	pub x: f64,
	/// Vertical position in canvas space.
	pub y: f64,
}

/// A connection between two nodes, referenced by label.
///
/// Edges carry a `directed` flag rather than being a separate type: topology
/// generators emit undirected edges, manual linking emits directed ones, and
/// both kinds coexist in the same collection. Duplicate edges and self-loops
/// are legal (the mesh topology deliberately stores both directions of every
/// pair).
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Edge {
	/// Source node label.
	pub from: String,
	/// Target node label.
	pub to: String,
	/// One-way reachability when true; both ways when false.
	pub directed: bool,
}

impl Edge {
	/// Convenience constructor for a directed edge.
	pub fn directed(from: impl Into<String>, to: impl Into<String>) -> Self {
		Self {
			from: from.into(),
			to: to.into(),
			directed: true,
		}
	}

	/// Convenience constructor for an undirected edge.
	pub fn undirected(from: impl Into<String>, to: impl Into<String>) -> Self {
		Self {
			from: from.into(),
			to: to.into(),
			directed: false,
		}
	}
}

/// A seeded node position in the input format.
#[derive(Clone, Debug, Deserialize)]
pub struct SeedNode {
	/// Horizontal position in canvas space.
	pub x: f64,
	/// Vertical position in canvas space.
	pub y: f64,
}

/// Optional startup graph: nodes and edges.
/// Expected as JSON in a `<script id="network-data">` element.
///
/// Seeded nodes are labeled in array order by the same sequential scheme used
/// for clicks, so seed edges reference labels "N1", "N2", ...
#[derive(Clone, Debug, Default, Deserialize)]
pub struct NetworkData {
	/// Node positions, labeled in order.
	pub nodes: Vec<SeedNode>,
	/// Edges between seeded labels.
	#[serde(default)]
	pub edges: Vec<Edge>,
}
