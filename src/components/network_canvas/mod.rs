//! Interactive network-topology sandbox component.
//!
//! Builds a graph on an HTML canvas from pointer input, wires edges manually
//! or via preset topology generators, and animates two classic algorithms
//! step by step with a timestamped action log:
//! - Breadth-first shortest path, visualized as message delivery hop by hop
//! - Kahn's topological sort, one dequeue per animation tick
//!
//! The pure core (graph model, interaction modes, topology generators, and
//! both algorithm steppers) has no DOM dependencies and is tested on the
//! host; the component and renderer are the thin WASM boundary around it.
//!
//! # Example
//!
//! ```ignore
//! use net_lab::NetworkLab;
//!
//! view! { <NetworkLab /> }
//! ```

mod bfs;
mod component;
mod graph;
mod kahn;
mod logbook;
mod render;
mod state;
pub mod theme;
mod topology;
mod types;

pub use bfs::{BfsOutcome, BfsStep, BfsWalk};
pub use component::NetworkLab;
pub use graph::NetworkGraph;
pub use kahn::{TopoOutcome, TopoSchedule, TopoStep};
pub use logbook::ActionLog;
pub use state::{Algorithm, Highlight, Mode, NetworkState};
pub use topology::{Topology, build_edges};
pub use types::{Edge, NetworkData, Node, SeedNode};
