//! Engine state: graph, interaction modes, and animation stepping.
//!
//! [`NetworkState`] is the single owned state object behind the canvas. It
//! interprets pointer events according to the active [`Mode`], mutates the
//! graph, and drives at most one algorithm animation at a time. The component
//! layer owns pacing (one [`NetworkState::tick`] per step interval) and
//! rendering; nothing here touches the DOM.

use super::bfs::{BfsOutcome, BfsStep, BfsWalk};
use super::graph::NetworkGraph;
use super::kahn::{TopoOutcome, TopoSchedule, TopoStep};
use super::logbook::ActionLog;
use super::topology::{self, Topology};
use super::types::NetworkData;

/// How a canvas click is interpreted.
///
/// Exactly one mode is active at a time; arming a new mode replaces the old
/// one along with its pending buffer, so two modes can never be latent
/// simultaneously.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub enum Mode {
	/// Clicks on empty canvas create nodes.
	#[default]
	Idle,
	/// Two-click edge pairing; exits after one edge.
	AddingEdge {
		/// First endpoint once chosen.
		pending: Option<String>,
	},
	/// Next node click becomes the sender.
	SelectingSender,
	/// Next node click becomes the receiver.
	SelectingReceiver,
	/// Two-click edge pairing that stays armed for further pairs until a
	/// topology rebuild or reset.
	CustomLinking {
		/// First endpoint once chosen.
		pending: Option<String>,
	},
}

/// What the renderer should emphasize this frame.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub enum Highlight {
	/// Nothing highlighted.
	#[default]
	None,
	/// Ring around one node (algorithm visit / processing).
	Node(String),
	/// Thick segment for a message hop in flight.
	Segment {
		/// Hop start label.
		from: String,
		/// Hop end label.
		to: String,
	},
}

/// Which algorithm the Run button triggers.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Algorithm {
	/// Breadth-first shortest path, visualized via message sending.
	#[default]
	Bfs,
	/// Kahn's topological sort.
	Topo,
}

impl Algorithm {
	/// Name used in the UI and the exported report.
	pub fn name(self) -> &'static str {
		match self {
			Algorithm::Bfs => "bfs",
			Algorithm::Topo => "topo",
		}
	}
}

impl std::str::FromStr for Algorithm {
	type Err = ();

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		match s {
			"bfs" => Ok(Algorithm::Bfs),
			"topo" => Ok(Algorithm::Topo),
			_ => Err(()),
		}
	}
}

/// The single in-flight animation, if any.
///
/// Holding the stepper in one owned slot is the cancellation guard: starting
/// a new animation replaces the slot, so a stale stepper can never tick again.
#[derive(Clone, Debug)]
enum Animation {
	/// BFS search phase of a message send.
	Search {
		walk: BfsWalk,
		message: String,
	},
	/// Hop-by-hop delivery along a found path.
	Flight {
		path: Vec<String>,
		hop: usize,
		message: String,
	},
	/// Topological sort in progress.
	Sort(TopoSchedule),
}

/// Owned engine state for one network canvas.
#[derive(Clone, Debug, Default)]
pub struct NetworkState {
	graph: NetworkGraph,
	mode: Mode,
	sender: Option<String>,
	receiver: Option<String>,
	/// Pending endpoint for the double-click quick-link path. Independent of
	/// the mode buffers; only consulted while the mode is `Idle`.
	quick_link: Option<String>,
	topology: Topology,
	algorithm: Algorithm,
	log: ActionLog,
	highlight: Highlight,
	animation: Option<Animation>,
}

impl NetworkState {
	/// Empty engine.
	pub fn new() -> Self {
		Self::default()
	}

	/// Engine pre-populated from seed data. Seed nodes get the usual
	/// sequential labels in array order; seed edges are appended as-is.
	pub fn from_seed(seed: &NetworkData) -> Self {
		let mut state = Self::new();
		for n in &seed.nodes {
			state.graph.add_node(n.x, n.y);
		}
		for e in &seed.edges {
			state.graph.add_edge(e.from.clone(), e.to.clone(), e.directed);
		}
		state
	}

	/// The graph, read-only.
	pub fn graph(&self) -> &NetworkGraph {
		&self.graph
	}

	/// Active interaction mode.
	pub fn mode(&self) -> &Mode {
		&self.mode
	}

	/// Current sender label, if chosen.
	pub fn sender(&self) -> Option<&str> {
		self.sender.as_deref()
	}

	/// Current receiver label, if chosen.
	pub fn receiver(&self) -> Option<&str> {
		self.receiver.as_deref()
	}

	/// Currently selected topology.
	pub fn topology(&self) -> Topology {
		self.topology
	}

	/// Currently selected algorithm.
	pub fn algorithm(&self) -> Algorithm {
		self.algorithm
	}

	/// The action log, read-only.
	pub fn log(&self) -> &ActionLog {
		&self.log
	}

	/// Current highlight for the renderer.
	pub fn highlight(&self) -> &Highlight {
		&self.highlight
	}

	/// Whether an animation is in flight.
	pub fn is_animating(&self) -> bool {
		self.animation.is_some()
	}

	/// Remember the topology chosen in the UI without building it.
	pub fn set_topology(&mut self, kind: Topology) {
		self.topology = kind;
	}

	/// Remember the algorithm chosen in the UI.
	pub fn set_algorithm(&mut self, algorithm: Algorithm) {
		self.algorithm = algorithm;
	}

	/// Interpret a single click at canvas coordinates.
	pub fn click(&mut self, x: f64, y: f64) {
		let mode = std::mem::take(&mut self.mode);
		self.mode = match mode {
			Mode::AddingEdge { pending } => match self.graph.find_node_near(x, y) {
				// Miss-clicks leave the mode armed.
				None => Mode::AddingEdge { pending },
				Some(node) => {
					let label = node.label.clone();
					match pending {
						None => {
							self.log.push(format!("Selected {label} as first node"));
							Mode::AddingEdge {
								pending: Some(label),
							}
						}
						Some(first) => {
							self.graph.add_edge(first.clone(), label.clone(), true);
							self.log.push(format!("Edge added: {first} -> {label}"));
							self.log
								.push("Add Edge mode off — arm it again for another connection");
							Mode::Idle
						}
					}
				}
			},
			Mode::SelectingSender => match self.graph.find_node_near(x, y) {
				None => Mode::SelectingSender,
				Some(node) => {
					let label = node.label.clone();
					self.log.push(format!("Sender selected: {label}"));
					self.sender = Some(label);
					Mode::Idle
				}
			},
			Mode::SelectingReceiver => match self.graph.find_node_near(x, y) {
				None => Mode::SelectingReceiver,
				Some(node) => {
					let label = node.label.clone();
					self.log.push(format!("Receiver selected: {label}"));
					self.receiver = Some(label);
					Mode::Idle
				}
			},
			Mode::CustomLinking { pending } => match self.graph.find_node_near(x, y) {
				None => Mode::CustomLinking { pending },
				Some(node) => {
					let label = node.label.clone();
					match pending {
						None => {
							self.log
								.push(format!("Selected {label} as first node to link"));
							Mode::CustomLinking {
								pending: Some(label),
							}
						}
						Some(first) => {
							self.graph.add_edge(first.clone(), label.clone(), true);
							self.log.push(format!("Linked {first} -> {label}"));
							// Stays armed for further pairs.
							Mode::CustomLinking { pending: None }
						}
					}
				}
			},
			Mode::Idle => {
				if self.graph.find_node_near(x, y).is_none() {
					let node = self.graph.add_node(x, y);
					let label = node.label.clone();
					self.log.push(format!(
						"Node {label} created at ({}, {})",
						x.round(),
						y.round()
					));
				}
				Mode::Idle
			}
		};
	}

	/// Interpret a double-click: the quick-link path. Only meaningful while
	/// the mode is `Idle`; its pending buffer is separate from the edge modes.
	pub fn double_click(&mut self, x: f64, y: f64) {
		if self.mode != Mode::Idle {
			return;
		}
		let Some(node) = self.graph.find_node_near(x, y) else {
			return;
		};
		let label = node.label.clone();
		match self.quick_link.take() {
			None => self.quick_link = Some(label),
			Some(first) if first == label => {
				// Same node again: stay armed.
				self.quick_link = Some(first);
			}
			Some(first) => {
				self.graph.add_edge(first.clone(), label.clone(), true);
				self.log.push(format!("Edge created: {first} -> {label}"));
			}
		}
	}

	/// Arm the two-click edge mode. Needs at least two nodes.
	pub fn arm_add_edge(&mut self) {
		if self.graph.node_count() < 2 {
			self.log.push("Need at least two nodes to add an edge");
			return;
		}
		self.mode = Mode::AddingEdge { pending: None };
		self.log
			.push("Add Edge mode on — click node A then node B to create A -> B");
	}

	/// Arm sender selection: the next node click becomes the sender.
	pub fn arm_select_sender(&mut self) {
		self.mode = Mode::SelectingSender;
		self.log.push("Click a node to select as sender");
	}

	/// Arm receiver selection: the next node click becomes the receiver.
	pub fn arm_select_receiver(&mut self) {
		self.mode = Mode::SelectingReceiver;
		self.log.push("Click a node to select as receiver");
	}

	/// Clear sender and receiver without touching the topology.
	pub fn clear_selection(&mut self) {
		self.sender = None;
		self.receiver = None;
		self.log.push("Sender/receiver selections cleared");
	}

	/// Delete a node, cascading to its edges and invalidating every
	/// reference to it (selections, pending buffers). Cancels any in-flight
	/// animation, since its snapshot may name the node. No-op for unknown
	/// labels.
	pub fn delete_node(&mut self, label: &str) {
		if self.graph.find_node_by_label(label).is_none() {
			return;
		}
		self.graph.delete_node(label);
		if self.sender.as_deref() == Some(label) {
			self.sender = None;
		}
		if self.receiver.as_deref() == Some(label) {
			self.receiver = None;
		}
		if self.quick_link.as_deref() == Some(label) {
			self.quick_link = None;
		}
		match &mut self.mode {
			Mode::AddingEdge { pending } | Mode::CustomLinking { pending }
				if pending.as_deref() == Some(label) =>
			{
				*pending = None;
			}
			_ => {}
		}
		self.cancel_animation();
		self.log.push(format!("Node {label} deleted"));
	}

	/// Build a topology, replacing the whole edge set. `Custom` clears edges
	/// and switches to [`Mode::CustomLinking`]; any other kind leaves custom
	/// mode if it was armed. Cancels an in-flight animation.
	pub fn build_topology(&mut self, kind: Topology) {
		self.topology = kind;
		self.cancel_animation();
		if kind == Topology::Custom {
			self.graph.clear_edges();
			self.mode = Mode::CustomLinking { pending: None };
			self.log
				.push("Custom mode active — click node pairs to link them");
			return;
		}
		if matches!(self.mode, Mode::CustomLinking { .. }) {
			self.mode = Mode::Idle;
		}
		let labels: Vec<String> = self.graph.nodes().iter().map(|n| n.label.clone()).collect();
		self.graph
			.replace_edges(topology::build_edges(kind, &labels));
		self.log.push(format!(
			"Topology \"{kind}\" built with {} nodes",
			labels.len()
		));
	}

	/// Clear everything back to a fresh session. The log is kept: it is
	/// append-only history, and the reset itself is logged.
	pub fn reset(&mut self) {
		self.graph.clear_all();
		self.sender = None;
		self.receiver = None;
		self.quick_link = None;
		self.mode = Mode::Idle;
		self.cancel_animation();
		self.log.push("Canvas reset — all nodes and edges cleared");
	}

	/// Send a chat message: BFS from sender to receiver, then a hop-by-hop
	/// delivery animation. Aborts (with a log line) when either endpoint is
	/// missing; aborts silently on blank text.
	pub fn send_message(&mut self, text: &str) {
		let (Some(sender), Some(receiver)) = (self.sender.clone(), self.receiver.clone()) else {
			self.log
				.push("Select both sender and receiver before sending a message");
			return;
		};
		let message = text.trim();
		if message.is_empty() {
			return;
		}
		self.log.push(format!("Message sent: \"{message}\""));
		self.log.push(format!("BFS started from {sender}"));
		self.cancel_animation();
		self.animation = Some(Animation::Search {
			walk: BfsWalk::new(&self.graph, &sender, &receiver),
			message: message.to_string(),
		});
	}

	/// Run the algorithm currently selected in the UI.
	pub fn run_algorithm(&mut self) {
		match self.algorithm {
			Algorithm::Topo => self.run_topological_sort(),
			Algorithm::Bfs => {
				self.log
					.push("Use the chat to visualize BFS — send a message");
			}
		}
	}

	/// Start the topological sort animation. Requires at least one edge; an
	/// edgeless graph is reported as unsortable, which is a usability message
	/// rather than a cycle failure.
	pub fn run_topological_sort(&mut self) {
		if self.graph.edges().is_empty() {
			self.log
				.push("No edges found — cannot perform topological sort");
			return;
		}
		self.log.push("Kahn's algorithm started");
		self.cancel_animation();
		self.animation = Some(Animation::Sort(TopoSchedule::new(&self.graph)));
	}

	/// Advance the active animation by exactly one step. Called by the
	/// external clock; a no-op when nothing is animating.
	pub fn tick(&mut self) {
		let Some(animation) = self.animation.take() else {
			return;
		};
		match animation {
			Animation::Search { mut walk, message } => match walk.advance() {
				BfsStep::Visit { node, discovered } => {
					self.log.push(format!("Visiting: {node}"));
					for (v, from) in discovered {
						self.log.push(format!("Discovered: {v} from {from}"));
					}
					self.highlight = Highlight::Node(node);
					self.animation = Some(Animation::Search { walk, message });
				}
				BfsStep::Finished(BfsOutcome::Path(path)) => {
					self.log.push(format!("BFS path: {}", path.join(" -> ")));
					self.highlight = Highlight::Node(path[0].clone());
					self.animation = Some(Animation::Flight {
						path,
						hop: 0,
						message,
					});
				}
				BfsStep::Finished(BfsOutcome::NoPath) => {
					self.log.push("No path found between sender and receiver");
					self.highlight = Highlight::None;
				}
			},
			Animation::Flight { path, hop, message } => {
				if hop + 1 < path.len() {
					let (from, to) = (path[hop].clone(), path[hop + 1].clone());
					self.log.push(format!("Message moved from {from} -> {to}"));
					self.highlight = Highlight::Segment {
						from,
						to,
					};
					self.animation = Some(Animation::Flight {
						path,
						hop: hop + 1,
						message,
					});
				} else {
					let dest = path.last().cloned().unwrap_or_default();
					self.log
						.push(format!("Message delivered to {dest}: \"{message}\""));
					self.highlight = Highlight::None;
				}
			}
			Animation::Sort(mut schedule) => match schedule.advance() {
				TopoStep::Processing { node, .. } => {
					self.log.push(format!("Processing node: {node}"));
					self.highlight = Highlight::Node(node);
					self.animation = Some(Animation::Sort(schedule));
				}
				TopoStep::Finished(TopoOutcome::Sorted(order)) => {
					self.log
						.push(format!("Topological order: {}", order.join(" -> ")));
					self.highlight = Highlight::None;
				}
				TopoStep::Finished(TopoOutcome::Cycle { .. }) => {
					self.log
						.push("Cycle detected — topological sort not possible");
					self.highlight = Highlight::None;
				}
			},
		}
	}

	/// Plain-text report for the exporter boundary: topology, algorithm, and
	/// the full action log.
	pub fn export_report(&self) -> String {
		let mut out = String::from("Network Log Report\n");
		out.push_str(&format!("Topology: {}\n", self.topology));
		out.push_str(&format!("Algorithm: {}\n\nAction Log:\n", self.algorithm.name()));
		for line in self.log.entries() {
			out.push_str(line);
			out.push('\n');
		}
		out
	}

	/// Log-sink hook for boundary collaborators (e.g. the report exporter
	/// noting success or failure). Appends one timestamped line.
	pub fn log_action(&mut self, text: &str) {
		self.log.push(text);
	}

	fn cancel_animation(&mut self) {
		self.animation = None;
		self.highlight = Highlight::None;
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn last_log(state: &NetworkState) -> &str {
		state.log().entries().last().map(String::as_str).unwrap_or("")
	}

	fn tick_until_idle(state: &mut NetworkState) {
		let mut guard = 0;
		while state.is_animating() {
			state.tick();
			guard += 1;
			assert!(guard < 200, "animation never finished");
		}
	}

	#[test]
	fn idle_click_on_empty_canvas_creates_nodes() {
		let mut state = NetworkState::new();
		state.click(100.0, 100.0);
		state.click(200.0, 100.0);
		assert_eq!(state.graph().node_count(), 2);
		// Clicking an existing node in idle mode creates nothing.
		state.click(101.0, 99.0);
		assert_eq!(state.graph().node_count(), 2);
	}

	#[test]
	fn add_edge_mode_needs_two_nodes() {
		let mut state = NetworkState::new();
		state.click(100.0, 100.0);
		state.arm_add_edge();
		assert_eq!(*state.mode(), Mode::Idle);
		assert!(last_log(&state).contains("at least two nodes"));
	}

	#[test]
	fn add_edge_pairs_two_clicks_then_exits() {
		let mut state = NetworkState::new();
		state.click(100.0, 100.0);
		state.click(300.0, 100.0);
		state.arm_add_edge();
		// Miss-click is ignored, mode stays armed.
		state.click(500.0, 500.0);
		assert!(matches!(state.mode(), Mode::AddingEdge { pending: None }));
		state.click(100.0, 100.0);
		assert!(matches!(
			state.mode(),
			Mode::AddingEdge { pending: Some(p) } if p == "N1"
		));
		state.click(300.0, 100.0);
		assert_eq!(*state.mode(), Mode::Idle);
		assert_eq!(state.graph().edges().len(), 1);
		let e = &state.graph().edges()[0];
		assert!(e.directed && e.from == "N1" && e.to == "N2");
	}

	#[test]
	fn sender_and_receiver_selection_exit_to_idle() {
		let mut state = NetworkState::new();
		state.click(100.0, 100.0);
		state.click(300.0, 100.0);
		state.arm_select_sender();
		state.click(100.0, 100.0);
		assert_eq!(state.sender(), Some("N1"));
		assert_eq!(*state.mode(), Mode::Idle);
		state.arm_select_receiver();
		// Miss-click keeps the mode armed.
		state.click(500.0, 500.0);
		assert_eq!(*state.mode(), Mode::SelectingReceiver);
		state.click(300.0, 100.0);
		assert_eq!(state.receiver(), Some("N2"));
		state.clear_selection();
		assert_eq!(state.sender(), None);
		assert_eq!(state.receiver(), None);
	}

	#[test]
	fn arming_a_new_mode_cancels_the_previous_one() {
		let mut state = NetworkState::new();
		state.click(100.0, 100.0);
		state.click(300.0, 100.0);
		state.arm_add_edge();
		state.click(100.0, 100.0); // pending = N1
		state.arm_select_sender();
		assert_eq!(*state.mode(), Mode::SelectingSender);
		// The old pending buffer is gone with its mode.
		state.arm_add_edge();
		assert!(matches!(state.mode(), Mode::AddingEdge { pending: None }));
	}

	#[test]
	fn custom_linking_stays_armed_across_pairs() {
		let mut state = NetworkState::new();
		state.click(100.0, 100.0);
		state.click(300.0, 100.0);
		state.click(500.0, 100.0);
		state.build_topology(Topology::Custom);
		assert!(matches!(state.mode(), Mode::CustomLinking { .. }));
		state.click(100.0, 100.0);
		state.click(300.0, 100.0);
		state.click(300.0, 100.0);
		state.click(500.0, 100.0);
		assert_eq!(state.graph().edges().len(), 2);
		assert!(matches!(state.mode(), Mode::CustomLinking { pending: None }));
		// Rebuilding a preset topology leaves custom mode.
		state.build_topology(Topology::Bus);
		assert_eq!(*state.mode(), Mode::Idle);
	}

	#[test]
	fn double_click_quick_link_is_independent_of_modes() {
		let mut state = NetworkState::new();
		state.click(100.0, 100.0);
		state.click(300.0, 100.0);
		state.double_click(100.0, 100.0);
		// Re-arming on the same node keeps the buffer.
		state.double_click(100.0, 100.0);
		state.double_click(300.0, 100.0);
		assert_eq!(state.graph().edges().len(), 1);
		assert!(state.graph().edges()[0].directed);
		// Ignored while a mode is armed.
		state.arm_add_edge();
		state.double_click(100.0, 100.0);
		state.double_click(300.0, 100.0);
		assert_eq!(state.graph().edges().len(), 1);
	}

	#[test]
	fn topology_rebuild_replaces_prior_edges() {
		let mut state = NetworkState::new();
		for i in 0..4 {
			state.click(100.0 + 100.0 * i as f64, 100.0);
		}
		state.build_topology(Topology::Mesh);
		assert_eq!(state.graph().edges().len(), 12);
		state.build_topology(Topology::Bus);
		assert_eq!(state.graph().edges().len(), 3);
		assert!(state.graph().edges().iter().all(|e| !e.directed));
	}

	#[test]
	fn deleting_a_node_clears_selection_references() {
		let mut state = NetworkState::new();
		state.click(100.0, 100.0);
		state.click(300.0, 100.0);
		state.arm_select_sender();
		state.click(100.0, 100.0);
		state.arm_select_receiver();
		state.click(300.0, 100.0);
		state.delete_node("N1");
		assert_eq!(state.sender(), None);
		assert_eq!(state.receiver(), Some("N2"));
		// Pending edge endpoint is invalidated too.
		state.click(500.0, 100.0);
		state.arm_add_edge();
		state.click(300.0, 100.0);
		state.delete_node("N2");
		assert!(matches!(state.mode(), Mode::AddingEdge { pending: None }));
	}

	#[test]
	fn message_send_requires_both_endpoints_and_text() {
		let mut state = NetworkState::new();
		state.click(100.0, 100.0);
		state.send_message("hi");
		assert!(last_log(&state).contains("Select both sender and receiver"));
		assert!(!state.is_animating());

		state.click(300.0, 100.0);
		state.arm_select_sender();
		state.click(100.0, 100.0);
		state.arm_select_receiver();
		state.click(300.0, 100.0);
		let before = state.log().len();
		state.send_message("   ");
		assert_eq!(state.log().len(), before);
		assert!(!state.is_animating());
	}

	#[test]
	fn message_travels_along_bfs_path_and_is_delivered() {
		let mut state = NetworkState::new();
		state.click(100.0, 100.0);
		state.click(300.0, 100.0);
		state.click(500.0, 100.0);
		state.build_topology(Topology::Bus);
		state.arm_select_sender();
		state.click(100.0, 100.0);
		state.arm_select_receiver();
		state.click(500.0, 100.0);
		state.send_message("ping");
		assert!(state.is_animating());
		tick_until_idle(&mut state);
		let log = state.log().entries().join("\n");
		assert!(log.contains("BFS path: N1 -> N2 -> N3"));
		assert!(log.contains("Message moved from N1 -> N2"));
		assert!(log.contains("Message moved from N2 -> N3"));
		assert!(log.contains("Message delivered to N3: \"ping\""));
		assert_eq!(*state.highlight(), Highlight::None);
	}

	#[test]
	fn unreachable_receiver_reports_no_path() {
		let mut state = NetworkState::new();
		state.click(100.0, 100.0);
		state.click(300.0, 100.0);
		state.click(500.0, 100.0);
		// Directed edge pointing away from the receiver.
		state.double_click(300.0, 100.0);
		state.double_click(100.0, 100.0);
		state.arm_select_sender();
		state.click(100.0, 100.0);
		state.arm_select_receiver();
		state.click(500.0, 100.0);
		state.send_message("lost");
		tick_until_idle(&mut state);
		assert!(
			state
				.log()
				.entries()
				.iter()
				.any(|l| l.contains("No path found"))
		);
	}

	#[test]
	fn sort_without_edges_is_refused() {
		let mut state = NetworkState::new();
		state.click(100.0, 100.0);
		state.set_algorithm(Algorithm::Topo);
		state.run_algorithm();
		assert!(last_log(&state).contains("cannot perform topological sort"));
		assert!(!state.is_animating());
	}

	#[test]
	fn sort_animates_to_a_valid_order() {
		let mut state = NetworkState::new();
		for i in 0..3 {
			state.click(100.0 + 200.0 * i as f64, 100.0);
		}
		state.double_click(100.0, 100.0);
		state.double_click(300.0, 100.0);
		state.double_click(300.0, 100.0);
		state.double_click(500.0, 100.0);
		state.run_topological_sort();
		tick_until_idle(&mut state);
		assert!(
			state
				.log()
				.entries()
				.iter()
				.any(|l| l.contains("Topological order: N1 -> N2 -> N3"))
		);
	}

	#[test]
	fn sort_reports_cycles() {
		let mut state = NetworkState::new();
		state.click(100.0, 100.0);
		state.click(300.0, 100.0);
		state.double_click(100.0, 100.0);
		state.double_click(300.0, 100.0);
		state.double_click(300.0, 100.0);
		state.double_click(100.0, 100.0);
		state.run_topological_sort();
		tick_until_idle(&mut state);
		assert!(
			state
				.log()
				.entries()
				.iter()
				.any(|l| l.contains("Cycle detected"))
		);
	}

	#[test]
	fn starting_a_new_animation_replaces_the_old_one() {
		let mut state = NetworkState::new();
		for i in 0..3 {
			state.click(100.0 + 200.0 * i as f64, 100.0);
		}
		state.build_topology(Topology::Bus);
		state.arm_select_sender();
		state.click(100.0, 100.0);
		state.arm_select_receiver();
		state.click(500.0, 100.0);
		state.send_message("one");
		state.tick();
		state.send_message("two");
		tick_until_idle(&mut state);
		let log = state.log().entries().join("\n");
		assert!(log.contains("Message delivered to N3: \"two\""));
		assert!(!log.contains("delivered to N3: \"one\""));
	}

	#[test]
	fn structural_mutation_cancels_an_animation() {
		let mut state = NetworkState::new();
		for i in 0..3 {
			state.click(100.0 + 200.0 * i as f64, 100.0);
		}
		state.build_topology(Topology::Bus);
		state.arm_select_sender();
		state.click(100.0, 100.0);
		state.arm_select_receiver();
		state.click(500.0, 100.0);
		state.send_message("ping");
		state.tick();
		state.delete_node("N2");
		assert!(!state.is_animating());
		assert_eq!(*state.highlight(), Highlight::None);
	}

	#[test]
	fn reset_clears_state_but_keeps_history() {
		let mut state = NetworkState::new();
		state.click(100.0, 100.0);
		state.arm_select_sender();
		state.click(100.0, 100.0);
		let entries_before = state.log().len();
		state.reset();
		assert_eq!(state.graph().node_count(), 0);
		assert_eq!(state.sender(), None);
		assert_eq!(*state.mode(), Mode::Idle);
		assert_eq!(state.log().len(), entries_before + 1);
		// Labels restart after a reset.
		state.click(100.0, 100.0);
		assert_eq!(state.graph().nodes()[0].label, "N1");
	}

	#[test]
	fn seeded_state_labels_nodes_in_order() {
		let seed: NetworkData = serde_json::from_str(
			r#"{
				"nodes": [{"x": 10.0, "y": 10.0}, {"x": 90.0, "y": 10.0}],
				"edges": [{"from": "N1", "to": "N2", "directed": true}]
			}"#,
		)
		.unwrap();
		let state = NetworkState::from_seed(&seed);
		assert_eq!(state.graph().node_count(), 2);
		assert_eq!(state.graph().nodes()[1].label, "N2");
		assert_eq!(state.graph().edges().len(), 1);
	}

	#[test]
	fn export_report_includes_header_and_log() {
		let mut state = NetworkState::new();
		state.click(100.0, 100.0);
		let report = state.export_report();
		assert!(report.starts_with("Network Log Report"));
		assert!(report.contains("Topology: bus"));
		assert!(report.contains("Algorithm: bfs"));
		assert!(report.contains("Node N1 created"));
	}
}
