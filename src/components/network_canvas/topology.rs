//! Preset topology generators.
//!
//! Each topology is a pure function of the ordered node-label list. Building a
//! topology always replaces the whole edge set; the engine handles the
//! replacement and the `Custom` mode switch, this module only computes edges.

use std::fmt;
use std::str::FromStr;

use super::types::Edge;

/// A named rule for generating an edge set from the node list.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Topology {
	/// Chain of undirected edges between consecutive nodes.
	#[default]
	Bus,
	/// Undirected edges from the first node to every other.
	Star,
	/// Undirected cycle over all nodes (a single node gets a self-loop).
	Ring,
	/// Both directions of every unordered pair, stored as two separate
	/// undirected edges. Redundant on purpose, kept for compatibility.
	Mesh,
	/// Directed binary-heap edges: i → 2i+1 and i → 2i+2.
	Tree,
	/// No generated edges; the user links nodes interactively.
	Custom,
}

impl Topology {
	/// Name used in the UI and in log lines.
	pub fn name(self) -> &'static str {
		match self {
			Topology::Bus => "bus",
			Topology::Star => "star",
			Topology::Ring => "ring",
			Topology::Mesh => "mesh",
			Topology::Tree => "tree",
			Topology::Custom => "custom",
		}
	}
}

impl fmt::Display for Topology {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.name())
	}
}

impl FromStr for Topology {
	type Err = ();

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		match s {
			"bus" => Ok(Topology::Bus),
			"star" => Ok(Topology::Star),
			"ring" => Ok(Topology::Ring),
			"mesh" => Ok(Topology::Mesh),
			"tree" => Ok(Topology::Tree),
			"custom" => Ok(Topology::Custom),
			_ => Err(()),
		}
	}
}

/// Compute the edge set for a topology over nodes given in insertion order.
///
/// `Custom` yields no edges. For N=1, `Ring` yields a self-loop by design.
pub fn build_edges(kind: Topology, labels: &[String]) -> Vec<Edge> {
	let n = labels.len();
	let mut edges = Vec::new();
	match kind {
		Topology::Bus => {
			for i in 0..n.saturating_sub(1) {
				edges.push(Edge::undirected(&labels[i], &labels[i + 1]));
			}
		}
		Topology::Star => {
			for i in 1..n {
				edges.push(Edge::undirected(&labels[0], &labels[i]));
			}
		}
		Topology::Ring => {
			for i in 0..n {
				edges.push(Edge::undirected(&labels[i], &labels[(i + 1) % n]));
			}
		}
		Topology::Mesh => {
			for i in 0..n {
				for j in (i + 1)..n {
					edges.push(Edge::undirected(&labels[i], &labels[j]));
					edges.push(Edge::undirected(&labels[j], &labels[i]));
				}
			}
		}
		Topology::Tree => {
			for i in 0..n {
				let (left, right) = (2 * i + 1, 2 * i + 2);
				if left < n {
					edges.push(Edge::directed(&labels[i], &labels[left]));
				}
				if right < n {
					edges.push(Edge::directed(&labels[i], &labels[right]));
				}
			}
		}
		Topology::Custom => {}
	}
	edges
}

#[cfg(test)]
mod tests {
	use super::*;

	fn labels(n: usize) -> Vec<String> {
		(1..=n).map(|i| format!("N{i}")).collect()
	}

	#[test]
	fn bus_links_consecutive_nodes() {
		let edges = build_edges(Topology::Bus, &labels(4));
		assert_eq!(edges.len(), 3);
		for (i, e) in edges.iter().enumerate() {
			assert_eq!(e.from, format!("N{}", i + 1));
			assert_eq!(e.to, format!("N{}", i + 2));
			assert!(!e.directed);
		}
	}

	#[test]
	fn star_radiates_from_first_node() {
		let edges = build_edges(Topology::Star, &labels(5));
		assert_eq!(edges.len(), 4);
		assert!(edges.iter().all(|e| e.from == "N1" && !e.directed));
	}

	#[test]
	fn ring_wraps_and_single_node_self_loops() {
		let edges = build_edges(Topology::Ring, &labels(3));
		assert_eq!(edges.len(), 3);
		assert_eq!(edges[2], Edge::undirected("N3", "N1"));

		let loop_edges = build_edges(Topology::Ring, &labels(1));
		assert_eq!(loop_edges, vec![Edge::undirected("N1", "N1")]);
	}

	#[test]
	fn mesh_stores_both_directions_of_every_pair() {
		let n = 4;
		let edges = build_edges(Topology::Mesh, &labels(n));
		assert_eq!(edges.len(), n * (n - 1));
		assert!(edges.contains(&Edge::undirected("N1", "N3")));
		assert!(edges.contains(&Edge::undirected("N3", "N1")));
	}

	#[test]
	fn tree_follows_binary_heap_indexing() {
		let edges = build_edges(Topology::Tree, &labels(5));
		let expected = vec![
			Edge::directed("N1", "N2"),
			Edge::directed("N1", "N3"),
			Edge::directed("N2", "N4"),
			Edge::directed("N2", "N5"),
		];
		assert_eq!(edges, expected);
	}

	#[test]
	fn custom_and_empty_produce_nothing() {
		assert!(build_edges(Topology::Custom, &labels(5)).is_empty());
		assert!(build_edges(Topology::Bus, &labels(0)).is_empty());
		assert!(build_edges(Topology::Mesh, &labels(1)).is_empty());
	}
}
