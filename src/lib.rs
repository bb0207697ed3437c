//! net-lab: Interactive network topology sandbox with step-animated algorithms.
//!
//! This crate provides a WASM-based canvas component for building a small
//! graph by clicking, generating preset topologies (bus, star, ring, mesh,
//! tree, custom), and watching BFS message delivery and Kahn's topological
//! sort run as paced step-by-step animations with a timestamped action log.

use leptos::prelude::*;
use leptos_meta::*;
use log::{Level, info, warn};
use wasm_bindgen::JsCast;
use web_sys::{HtmlScriptElement, Window};

pub mod components;

pub use components::network_canvas::{Edge, NetworkData, NetworkLab, NetworkState};

/// Initialize logging and panic hooks for the WASM target.
pub fn init_logging() {
	let _ = console_log::init_with_level(Level::Debug);
	console_error_panic_hook::set_once();
	info!("net-lab: logging initialized");
}

/// Load an optional startup graph from a script element with
/// id="network-data". Expected format: JSON with { nodes: [...], edges: [...] }
fn load_network_data() -> Option<NetworkData> {
	let window: Window = web_sys::window()?;
	let document = window.document()?;
	let element = document.get_element_by_id("network-data")?;
	let script: HtmlScriptElement = element.dyn_into().ok()?;
	let json_text = script.text().ok()?;

	match serde_json::from_str::<NetworkData>(&json_text) {
		Ok(data) => {
			info!(
				"net-lab: seeded {} nodes, {} edges",
				data.nodes.len(),
				data.edges.len()
			);
			Some(data)
		}
		Err(e) => {
			warn!("net-lab: failed to parse network data: {}", e);
			None
		}
	}
}

/// Main application component.
/// Seeds the sandbox from the DOM when seed data is present, otherwise starts
/// with an empty canvas.
#[component]
pub fn App() -> impl IntoView {
	provide_meta_context();

	let seed = load_network_data();

	view! {
		<Html attr:lang="en" attr:dir="ltr" attr:data-theme="dark" />
		<Title text="Network Topology Lab" />
		<Meta charset="UTF-8" />
		<Meta name="viewport" content="width=device-width, initial-scale=1.0" />

		<div class="lab-page">
			<header class="lab-header">
				<h1>"Network Topology Lab"</h1>
				<p class="subtitle">
					"Click to place nodes. Double-click two nodes to link them. Build a topology, then send a message or run a sort."
				</p>
			</header>
			<NetworkLab seed=seed />
		</div>
	}
}
