//! Visual styling for the network canvas.

/// RGBA color representation.
#[derive(Clone, Copy, Debug)]
pub struct Color {
	/// Red channel.
	pub r: u8,
	/// Green channel.
	pub g: u8,
	/// Blue channel.
	pub b: u8,
	/// Alpha, 0.0..=1.0.
	pub a: f64,
}

impl Color {
	/// Opaque color from RGB channels.
	pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
		Self { r, g, b, a: 1.0 }
	}

	/// Color with an explicit alpha.
	pub const fn rgba(r: u8, g: u8, b: u8, a: f64) -> Self {
		Self { r, g, b, a }
	}

	/// CSS color string; hex when opaque, `rgba(...)` otherwise.
	pub fn to_css(self) -> String {
		if (self.a - 1.0).abs() < 0.001 {
			format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
		} else {
			format!("rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
		}
	}
}

/// Colors and sizes used by the renderer.
#[derive(Clone, Debug)]
pub struct Theme {
	/// Canvas background fill.
	pub background: Color,
	/// Node disc fill.
	pub node_fill: Color,
	/// Node outline and label color.
	pub node_stroke: Color,
	/// Edge line color.
	pub edge: Color,
	/// Arrowhead fill on directed edges.
	pub arrowhead: Color,
	/// Ring around the node an algorithm is visiting/processing, and the
	/// message-hop segment.
	pub highlight: Color,
	/// Node disc radius in pixels.
	pub node_radius: f64,
	/// Label font.
	pub font: &'static str,
}

impl Default for Theme {
	fn default() -> Self {
		Self {
			background: Color::rgb(8, 12, 20),
			node_fill: Color::rgb(0, 0, 0),
			node_stroke: Color::rgb(0, 255, 255),
			edge: Color::rgba(0, 255, 255, 0.4),
			arrowhead: Color::rgb(0, 255, 255),
			highlight: Color::rgb(0, 255, 136),
			node_radius: 20.0,
			font: "12px monospace",
		}
	}
}
