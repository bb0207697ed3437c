//! Mutable graph model: node/edge storage and structural queries.
//!
//! Nodes are stored in insertion order, which doubles as the index order the
//! topology generators build against. Edges reference nodes by label and are
//! never deduplicated. Deleting a node cascades to every edge touching it, so
//! the collection can never hold a dangling endpoint.

use std::collections::HashMap;

use super::types::{Edge, Node};

/// Distance below which a click counts as hitting a node.
pub const HIT_RADIUS: f64 = 25.0;

/// The network graph: ordered node list, edge list, and the label counter.
#[derive(Clone, Debug, Default)]
pub struct NetworkGraph {
	nodes: Vec<Node>,
	edges: Vec<Edge>,
	/// Labels issued this session. Not decremented on deletion, so labels are
	/// never reused until a full reset.
	created: usize,
}

impl NetworkGraph {
	/// Create an empty graph.
	pub fn new() -> Self {
		Self::default()
	}

	/// Nodes in insertion order.
	pub fn nodes(&self) -> &[Node] {
		&self.nodes
	}

	/// All edges, in creation order.
	pub fn edges(&self) -> &[Edge] {
		&self.edges
	}

	/// Number of nodes currently present.
	pub fn node_count(&self) -> usize {
		self.nodes.len()
	}

	/// Create a node at the given position with the next sequential label.
	pub fn add_node(&mut self, x: f64, y: f64) -> &Node {
		self.created += 1;
		let label = format!("N{}", self.created);
		self.nodes.push(Node { label, x, y });
		self.nodes.last().expect("node just pushed")
	}

	/// Remove a node and every edge referencing it. No-op if the label is
	/// absent.
	pub fn delete_node(&mut self, label: &str) {
		let before = self.nodes.len();
		self.nodes.retain(|n| n.label != label);
		if self.nodes.len() == before {
			return;
		}
		self.edges.retain(|e| e.from != label && e.to != label);
	}

	/// Append an edge. No uniqueness check, no self-loop rejection.
	pub fn add_edge(&mut self, from: impl Into<String>, to: impl Into<String>, directed: bool) {
		self.edges.push(Edge {
			from: from.into(),
			to: to.into(),
			directed,
		});
	}

	/// Drop every edge, keeping nodes.
	pub fn clear_edges(&mut self) {
		self.edges.clear();
	}

	/// Drop everything and restart the label counter.
	pub fn clear_all(&mut self) {
		self.nodes.clear();
		self.edges.clear();
		self.created = 0;
	}

	/// Replace the whole edge set, e.g. from a topology build.
	pub fn replace_edges(&mut self, edges: Vec<Edge>) {
		self.edges = edges;
	}

	/// First node (in insertion order) within [`HIT_RADIUS`] of the point.
	///
	/// Only one node can be hit per click even when several overlap; the
	/// first-match rule is part of the contract, not an accident.
	pub fn find_node_near(&self, x: f64, y: f64) -> Option<&Node> {
		self.nodes
			.iter()
			.find(|n| (n.x - x).hypot(n.y - y) < HIT_RADIUS)
	}

	/// Exact lookup by label.
	pub fn find_node_by_label(&self, label: &str) -> Option<&Node> {
		self.nodes.iter().find(|n| n.label == label)
	}

	/// One-hop adjacency by label, respecting directionality: an undirected
	/// edge contributes both directions, a directed edge only from→to.
	pub fn adjacency(&self) -> HashMap<String, Vec<String>> {
		let mut adj: HashMap<String, Vec<String>> = self
			.nodes
			.iter()
			.map(|n| (n.label.clone(), Vec::new()))
			.collect();
		for e in &self.edges {
			if let Some(out) = adj.get_mut(&e.from) {
				out.push(e.to.clone());
			}
			if !e.directed
				&& let Some(back) = adj.get_mut(&e.to)
			{
				back.push(e.from.clone());
			}
		}
		adj
	}
}
