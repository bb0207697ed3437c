//! Leptos component wrapping the network canvas and its control panel.
//!
//! The component owns one [`NetworkState`] engine behind an `Rc<RefCell<..>>`,
//! wires canvas click/double-click handlers and toolbar buttons to engine
//! commands, and runs a `requestAnimationFrame` loop that renders every frame
//! and advances the active algorithm animation once per step interval.
//! Reactive `RwSignal` mirrors carry engine state out to the widgets.

use std::cell::RefCell;
use std::rc::Rc;
use std::str::FromStr;

use leptos::prelude::*;
use log::warn;
use wasm_bindgen::prelude::*;
use web_sys::{
	Blob, BlobPropertyBag, CanvasRenderingContext2d, HtmlAnchorElement, HtmlCanvasElement,
	HtmlInputElement, HtmlSelectElement, MouseEvent, Url,
};

use super::render;
use super::state::{Algorithm, NetworkState};
use super::theme::Theme;
use super::topology::Topology;
use super::types::NetworkData;

/// Seconds between animation steps, the pace of the step-by-step visuals.
const STEP_INTERVAL: f64 = 0.8;

/// Reactive mirrors of engine state for the widget layer.
#[derive(Clone, Copy)]
struct UiSignals {
	node_labels: RwSignal<Vec<String>>,
	sender: RwSignal<String>,
	receiver: RwSignal<String>,
	log_lines: RwSignal<Vec<String>>,
}

impl UiSignals {
	fn new() -> Self {
		Self {
			node_labels: RwSignal::new(Vec::new()),
			sender: RwSignal::new("—".to_string()),
			receiver: RwSignal::new("—".to_string()),
			log_lines: RwSignal::new(Vec::new()),
		}
	}

	/// Re-publish everything the widgets display. Called after every engine
	/// command and after every animation step.
	fn refresh(&self, engine: &NetworkState) {
		self.node_labels.set(
			engine
				.graph()
				.nodes()
				.iter()
				.map(|n| n.label.clone())
				.collect(),
		);
		self.sender
			.set(engine.sender().unwrap_or("—").to_string());
		self.receiver
			.set(engine.receiver().unwrap_or("—").to_string());
		self.log_lines.set(engine.log().entries().to_vec());
	}
}

/// Canvas-relative coordinates of a mouse event.
fn event_coords(canvas: &HtmlCanvasElement, ev: &MouseEvent) -> (f64, f64) {
	let rect = canvas.get_bounding_client_rect();
	(
		ev.client_x() as f64 - rect.left(),
		ev.client_y() as f64 - rect.top(),
	)
}

/// Trigger a plain-text file download via a Blob object URL.
fn download_text(filename: &str, text: &str) -> Result<(), JsValue> {
	let parts = js_sys::Array::new();
	parts.push(&JsValue::from_str(text));
	let props = BlobPropertyBag::new();
	props.set_type("text/plain");
	let blob = Blob::new_with_str_sequence_and_options(&parts, &props)?;
	let url = Url::create_object_url_with_blob(&blob)?;
	let document = web_sys::window()
		.and_then(|w| w.document())
		.ok_or_else(|| JsValue::from_str("no document"))?;
	let anchor: HtmlAnchorElement = document.create_element("a")?.dyn_into()?;
	anchor.set_href(&url);
	anchor.set_download(filename);
	anchor.click();
	Url::revoke_object_url(&url)?;
	Ok(())
}

/// Interactive network-topology sandbox: canvas, toolbar, chat, and log pane.
///
/// Click the canvas to place nodes, link them manually or with a preset
/// topology, then watch message delivery (BFS) or a topological sort animate
/// step by step.
#[component]
pub fn NetworkLab(
	/// Optional startup graph.
	#[prop(optional_no_strip)]
	seed: Option<NetworkData>,
	/// Canvas width in pixels.
	#[prop(default = 900.0)]
	width: f64,
	/// Canvas height in pixels.
	#[prop(default = 520.0)]
	height: f64,
) -> impl IntoView {
	let engine = Rc::new(RefCell::new(match &seed {
		Some(data) => NetworkState::from_seed(data),
		None => NetworkState::new(),
	}));
	let ui = UiSignals::new();
	ui.refresh(&engine.borrow());

	let canvas_ref = NodeRef::<leptos::html::Canvas>::new();
	let delete_ref = NodeRef::<leptos::html::Select>::new();
	let topology_ref = NodeRef::<leptos::html::Select>::new();
	let algorithm_ref = NodeRef::<leptos::html::Select>::new();
	let chat_ref = NodeRef::<leptos::html::Input>::new();

	// Animation loop: render every frame, step the engine every STEP_INTERVAL.
	let animate: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
	let (engine_loop, animate_init) = (engine.clone(), animate.clone());
	Effect::new(move |_| {
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		let canvas: HtmlCanvasElement = canvas.into();
		canvas.set_width(width as u32);
		canvas.set_height(height as u32);

		let ctx: CanvasRenderingContext2d = canvas
			.get_context("2d")
			.unwrap()
			.unwrap()
			.dyn_into()
			.unwrap();
		let theme = Theme::default();

		let mut elapsed = 0.0;
		let (engine_anim, animate_inner) = (engine_loop.clone(), animate_init.clone());
		*animate_init.borrow_mut() = Some(Closure::new(move || {
			let dt = 0.016;
			{
				let mut engine = engine_anim.borrow_mut();
				if engine.is_animating() {
					elapsed += dt;
					if elapsed >= STEP_INTERVAL {
						elapsed = 0.0;
						engine.tick();
						ui.refresh(&engine);
					}
				} else {
					elapsed = 0.0;
				}
				render::render(&engine, &ctx, &theme, width, height);
			}
			if let Some(ref cb) = *animate_inner.borrow() {
				let _ = web_sys::window()
					.unwrap()
					.request_animation_frame(cb.as_ref().unchecked_ref());
			}
		}));
		if let Some(ref cb) = *animate_init.borrow() {
			let _ = web_sys::window()
				.unwrap()
				.request_animation_frame(cb.as_ref().unchecked_ref());
		}
	});

	let engine_click = engine.clone();
	let on_click = move |ev: MouseEvent| {
		let canvas: HtmlCanvasElement = canvas_ref.get().unwrap().into();
		let (x, y) = event_coords(&canvas, &ev);
		let mut engine = engine_click.borrow_mut();
		engine.click(x, y);
		ui.refresh(&engine);
	};

	let engine_dbl = engine.clone();
	let on_dblclick = move |ev: MouseEvent| {
		let canvas: HtmlCanvasElement = canvas_ref.get().unwrap().into();
		let (x, y) = event_coords(&canvas, &ev);
		let mut engine = engine_dbl.borrow_mut();
		engine.double_click(x, y);
		ui.refresh(&engine);
	};

	let engine_delete = engine.clone();
	let on_delete = move |_| {
		let Some(select) = delete_ref.get() else {
			return;
		};
		let select: HtmlSelectElement = select.into();
		let label = select.value();
		if label.is_empty() {
			return;
		}
		let mut engine = engine_delete.borrow_mut();
		engine.delete_node(&label);
		ui.refresh(&engine);
	};

	let engine_build = engine.clone();
	let on_build = move |_| {
		let Some(select) = topology_ref.get() else {
			return;
		};
		let select: HtmlSelectElement = select.into();
		let value = select.value();
		let Ok(kind) = Topology::from_str(&value) else {
			warn!("net-lab: unknown topology '{value}'");
			return;
		};
		let mut engine = engine_build.borrow_mut();
		engine.build_topology(kind);
		ui.refresh(&engine);
	};

	let engine_reset = engine.clone();
	let on_reset = move |_| {
		let mut engine = engine_reset.borrow_mut();
		engine.reset();
		ui.refresh(&engine);
	};

	let engine_run = engine.clone();
	let on_run = move |_| {
		let Some(select) = algorithm_ref.get() else {
			return;
		};
		let select: HtmlSelectElement = select.into();
		let value = select.value();
		let Ok(algorithm) = Algorithm::from_str(&value) else {
			warn!("net-lab: unknown algorithm '{value}'");
			return;
		};
		let mut engine = engine_run.borrow_mut();
		engine.set_algorithm(algorithm);
		engine.run_algorithm();
		ui.refresh(&engine);
	};

	let engine_edge = engine.clone();
	let on_add_edge = move |_| {
		let mut engine = engine_edge.borrow_mut();
		engine.arm_add_edge();
		ui.refresh(&engine);
	};

	let engine_sender = engine.clone();
	let on_select_sender = move |_| {
		let mut engine = engine_sender.borrow_mut();
		engine.arm_select_sender();
		ui.refresh(&engine);
	};

	let engine_receiver = engine.clone();
	let on_select_receiver = move |_| {
		let mut engine = engine_receiver.borrow_mut();
		engine.arm_select_receiver();
		ui.refresh(&engine);
	};

	let engine_clear = engine.clone();
	let on_clear_selection = move |_| {
		let mut engine = engine_clear.borrow_mut();
		engine.clear_selection();
		ui.refresh(&engine);
	};

	let engine_send = engine.clone();
	let on_send = move |_| {
		let Some(input) = chat_ref.get() else {
			return;
		};
		let input: HtmlInputElement = input.into();
		let text = input.value();
		let mut engine = engine_send.borrow_mut();
		engine.send_message(&text);
		input.set_value("");
		ui.refresh(&engine);
	};

	let engine_export = engine.clone();
	let on_download = move |_| {
		let mut engine = engine_export.borrow_mut();
		let report = engine.export_report();
		match download_text("network_log.txt", &report) {
			Ok(()) => engine.log_action("Log report exported"),
			Err(e) => {
				warn!("net-lab: export failed: {e:?}");
				engine.log_action("Failed to export log report");
			}
		}
		ui.refresh(&engine);
	};

	let (node_labels, sender, receiver, log_lines) =
		(ui.node_labels, ui.sender, ui.receiver, ui.log_lines);

	view! {
		<div class="network-lab">
			<div class="toolbar">
				<select node_ref=delete_ref class="node-select">
					<option value="">"— Choose Node —"</option>
					{move || {
						node_labels
							.get()
							.into_iter()
							.map(|label| view! { <option value=label.clone()>{label.clone()}</option> })
							.collect_view()
					}}
				</select>
				<button on:click=on_delete>"Delete Node"</button>
				<select node_ref=topology_ref class="topology-select">
					<option value="bus">"Bus"</option>
					<option value="star">"Star"</option>
					<option value="ring">"Ring"</option>
					<option value="mesh">"Mesh"</option>
					<option value="tree">"Tree"</option>
					<option value="custom">"Custom"</option>
				</select>
				<button on:click=on_build>"Build Topology"</button>
				<select node_ref=algorithm_ref class="algorithm-select">
					<option value="bfs">"BFS Path"</option>
					<option value="topo">"Topological Sort"</option>
				</select>
				<button on:click=on_run>"Run Algorithm"</button>
				<button on:click=on_reset>"Reset"</button>
			</div>
			<canvas
				node_ref=canvas_ref
				class="network-canvas"
				on:click=on_click
				on:dblclick=on_dblclick
				style="display: block; cursor: crosshair;"
			/>
			<div class="message-panel">
				<button on:click=on_add_edge>"Add Edge"</button>
				<button on:click=on_select_sender>"Select Sender"</button>
				<button on:click=on_select_receiver>"Select Receiver"</button>
				<button on:click=on_clear_selection>"Clear Selection"</button>
				<span class="role-label">"Sender: " {move || sender.get()}</span>
				<span class="role-label">"Receiver: " {move || receiver.get()}</span>
				<input node_ref=chat_ref type="text" placeholder="Message…" />
				<button on:click=on_send>"Send"</button>
				<button on:click=on_download>"Download Log"</button>
			</div>
			<div class="log-pane">
				{move || {
					log_lines
						.get()
						.into_iter()
						.map(|line| view! { <div class="log-line">{line}</div> })
						.collect_view()
				}}
			</div>
		</div>
	}
}
