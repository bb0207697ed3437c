//! Kahn's topological sort as a resumable stepper.
//!
//! One dequeue-process-requeue cycle per [`TopoSchedule::advance`] call, so
//! the animation loop can pace the sort tick by tick instead of replaying a
//! precomputed order.

use std::collections::{HashMap, VecDeque};

use super::graph::NetworkGraph;

/// Terminal result of a finished sort.
#[derive(Clone, Debug, PartialEq)]
pub enum TopoOutcome {
	/// Every node was processed; a valid topological order.
	Sorted(Vec<String>),
	/// The queue drained with nodes left over: a cycle blocks the rest.
	Cycle {
		/// How many nodes made it into the partial order.
		processed: usize,
	},
}

/// Result of advancing the sort by one step.
#[derive(Clone, Debug, PartialEq)]
pub enum TopoStep {
	/// One node was dequeued and appended to the order.
	Processing {
		/// The node just processed.
		node: String,
		/// Successors whose in-degree just reached zero.
		released: Vec<String>,
	},
	/// No work remains; the outcome is final.
	Finished(TopoOutcome),
}

/// In-degree-based scheduler over a graph snapshot.
///
/// Every edge counts as from→to for in-degree purposes, including edges with
/// the directed flag unset — undirected edges should not occur in a sort
/// context, but when they do they contribute exactly like directed ones.
#[derive(Clone, Debug)]
pub struct TopoSchedule {
	adj: HashMap<String, Vec<String>>,
	in_degree: HashMap<String, usize>,
	queue: VecDeque<String>,
	order: Vec<String>,
	total: usize,
	outcome: Option<TopoOutcome>,
}

impl TopoSchedule {
	/// Compute in-degrees and seed the queue with zero-in-degree nodes in
	/// node-insertion order.
	pub fn new(graph: &NetworkGraph) -> Self {
		let mut adj: HashMap<String, Vec<String>> = HashMap::new();
		let mut in_degree: HashMap<String, usize> = HashMap::new();
		for node in graph.nodes() {
			adj.insert(node.label.clone(), Vec::new());
			in_degree.insert(node.label.clone(), 0);
		}
		for edge in graph.edges() {
			if let Some(out) = adj.get_mut(&edge.from) {
				out.push(edge.to.clone());
			}
			if let Some(d) = in_degree.get_mut(&edge.to) {
				*d += 1;
			}
		}
		let queue = graph
			.nodes()
			.iter()
			.filter(|n| in_degree.get(&n.label) == Some(&0))
			.map(|n| n.label.clone())
			.collect();
		Self {
			adj,
			in_degree,
			queue,
			order: Vec::new(),
			total: graph.node_count(),
			outcome: None,
		}
	}

	/// Whether the sort has reached its terminal outcome.
	pub fn is_done(&self) -> bool {
		self.outcome.is_some()
	}

	/// Partial order built so far.
	pub fn order(&self) -> &[String] {
		&self.order
	}

	/// Advance by one dequeue-process-requeue cycle. Once finished, keeps
	/// returning [`TopoStep::Finished`] with the same outcome.
	pub fn advance(&mut self) -> TopoStep {
		if let Some(outcome) = &self.outcome {
			return TopoStep::Finished(outcome.clone());
		}
		let Some(u) = self.queue.pop_front() else {
			let outcome = if self.order.len() == self.total {
				TopoOutcome::Sorted(self.order.clone())
			} else {
				TopoOutcome::Cycle {
					processed: self.order.len(),
				}
			};
			self.outcome = Some(outcome.clone());
			return TopoStep::Finished(outcome);
		};
		self.order.push(u.clone());
		let mut released = Vec::new();
		for v in self.adj.get(&u).cloned().unwrap_or_default() {
			if let Some(d) = self.in_degree.get_mut(&v) {
				*d = d.saturating_sub(1);
				if *d == 0 {
					self.queue.push_back(v.clone());
					released.push(v);
				}
			}
		}
		TopoStep::Processing { node: u, released }
	}
}
