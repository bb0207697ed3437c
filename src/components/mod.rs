//! UI components.

pub mod network_canvas;
