//! Breadth-first shortest-path search as a resumable stepper.
//!
//! The walk is not computed eagerly: each [`BfsWalk::advance`] call dequeues
//! exactly one node, so an external clock (the animation loop) controls
//! pacing. Ties between equal-length paths are broken by FIFO order; the path
//! reported is whichever the frontier surfaces first.

use std::collections::{HashMap, VecDeque};

use super::graph::NetworkGraph;

/// Terminal result of a finished walk.
#[derive(Clone, Debug, PartialEq)]
pub enum BfsOutcome {
	/// Ordered labels from source to target, endpoints inclusive.
	Path(Vec<String>),
	/// The frontier was exhausted without dequeuing the target. A normal
	/// outcome to report, not an error.
	NoPath,
}

/// Result of advancing the walk by one step.
#[derive(Clone, Debug, PartialEq)]
pub enum BfsStep {
	/// One node was dequeued. `discovered` lists `(node, from)` pairs for
	/// neighbors seen for the first time during this step.
	Visit {
		/// The dequeued node.
		node: String,
		/// First-time-seen neighbors and the node they were reached from.
		discovered: Vec<(String, String)>,
	},
	/// No work remains; the outcome is final.
	Finished(BfsOutcome),
}

/// Breadth-first search over a graph snapshot, advanced one dequeue at a time.
#[derive(Clone, Debug)]
pub struct BfsWalk {
	adj: HashMap<String, Vec<String>>,
	queue: VecDeque<String>,
	/// Parent pointers keyed by label; the source maps to `None`.
	parent: HashMap<String, Option<String>>,
	source: String,
	target: String,
	outcome: Option<BfsOutcome>,
}

impl BfsWalk {
	/// Snapshot the graph's adjacency and seed the frontier with `source`.
	pub fn new(graph: &NetworkGraph, source: &str, target: &str) -> Self {
		let mut queue = VecDeque::new();
		queue.push_back(source.to_string());
		let mut parent = HashMap::new();
		parent.insert(source.to_string(), None);
		Self {
			adj: graph.adjacency(),
			queue,
			parent,
			source: source.to_string(),
			target: target.to_string(),
			outcome: None,
		}
	}

	/// Source label this walk started from.
	pub fn source(&self) -> &str {
		&self.source
	}

	/// Whether the walk has reached its terminal outcome.
	pub fn is_done(&self) -> bool {
		self.outcome.is_some()
	}

	/// Advance by exactly one dequeue. Once finished, keeps returning
	/// [`BfsStep::Finished`] with the same outcome.
	pub fn advance(&mut self) -> BfsStep {
		if let Some(outcome) = &self.outcome {
			return BfsStep::Finished(outcome.clone());
		}
		let Some(u) = self.queue.pop_front() else {
			let outcome = BfsOutcome::NoPath;
			self.outcome = Some(outcome.clone());
			return BfsStep::Finished(outcome);
		};
		if u == self.target {
			// Halt on dequeue, not on discovery.
			self.outcome = Some(BfsOutcome::Path(self.reconstruct_path()));
			return BfsStep::Visit {
				node: u,
				discovered: Vec::new(),
			};
		}
		let mut discovered = Vec::new();
		for v in self.adj.get(&u).map(Vec::as_slice).unwrap_or(&[]) {
			if !self.parent.contains_key(v) {
				self.parent.insert(v.clone(), Some(u.clone()));
				self.queue.push_back(v.clone());
				discovered.push((v.clone(), u.clone()));
			}
		}
		BfsStep::Visit { node: u, discovered }
	}

	fn reconstruct_path(&self) -> Vec<String> {
		let mut path = Vec::new();
		let mut cur = Some(self.target.clone());
		while let Some(label) = cur {
			cur = self.parent.get(&label).cloned().flatten();
			path.push(label);
		}
		path.reverse();
		path
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn graph_with(edges: &[(&str, &str, bool)], nodes: usize) -> NetworkGraph {
		let mut g = NetworkGraph::new();
		for i in 0..nodes {
			g.add_node(i as f64 * 50.0, 0.0);
		}
		for (from, to, directed) in edges {
			g.add_edge(*from, *to, *directed);
		}
		g
	}

	fn run_to_end(walk: &mut BfsWalk) -> BfsOutcome {
		loop {
			if let BfsStep::Finished(outcome) = walk.advance() {
				return outcome;
			}
		}
	}

	#[test]
	fn directed_chain_is_followed_one_way() {
		let g = graph_with(&[("N1", "N2", true), ("N2", "N3", true)], 3);
		let mut walk = BfsWalk::new(&g, "N1", "N3");
		assert_eq!(
			run_to_end(&mut walk),
			BfsOutcome::Path(vec!["N1".into(), "N2".into(), "N3".into()])
		);

		let mut reverse = BfsWalk::new(&g, "N3", "N1");
		assert_eq!(run_to_end(&mut reverse), BfsOutcome::NoPath);
	}

	#[test]
	fn undirected_ring_yields_two_hop_path_between_opposites() {
		let g = graph_with(
			&[
				("N1", "N2", false),
				("N2", "N3", false),
				("N3", "N4", false),
				("N4", "N1", false),
			],
			4,
		);
		let mut walk = BfsWalk::new(&g, "N1", "N3");
		match run_to_end(&mut walk) {
			BfsOutcome::Path(path) => {
				assert_eq!(path.len(), 3);
				assert_eq!(path.first().map(String::as_str), Some("N1"));
				assert_eq!(path.last().map(String::as_str), Some("N3"));
			}
			BfsOutcome::NoPath => panic!("expected a path around the ring"),
		}
	}

	#[test]
	fn steps_emit_visit_then_discoveries() {
		let g = graph_with(&[("N1", "N2", true), ("N1", "N3", true)], 3);
		let mut walk = BfsWalk::new(&g, "N1", "N3");
		match walk.advance() {
			BfsStep::Visit { node, discovered } => {
				assert_eq!(node, "N1");
				assert_eq!(
					discovered,
					vec![
						("N2".to_string(), "N1".to_string()),
						("N3".to_string(), "N1".to_string())
					]
				);
			}
			other => panic!("unexpected step: {other:?}"),
		}
		assert!(!walk.is_done());
	}

	#[test]
	fn halts_when_target_is_dequeued_not_enqueued() {
		let g = graph_with(&[("N1", "N2", true), ("N2", "N3", true)], 3);
		let mut walk = BfsWalk::new(&g, "N1", "N2");
		// Visit N1 (discovers N2) — not done yet even though N2 is enqueued.
		walk.advance();
		assert!(!walk.is_done());
		// Visit N2 — now done.
		walk.advance();
		assert!(walk.is_done());
		assert_eq!(
			run_to_end(&mut walk),
			BfsOutcome::Path(vec!["N1".into(), "N2".into()])
		);
	}

	#[test]
	fn source_equals_target_is_a_single_node_path() {
		let g = graph_with(&[], 1);
		let mut walk = BfsWalk::new(&g, "N1", "N1");
		assert_eq!(run_to_end(&mut walk), BfsOutcome::Path(vec!["N1".into()]));
	}
}
