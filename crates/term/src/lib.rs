//! Terminal presentation layer.
//!
//! The scene view renders the simulation into a styled character
//! framebuffer; the terminal renderer flushes that framebuffer to a real
//! terminal with crossterm. The view is pure (no I/O) so the whole frame
//! composition can be unit-tested headlessly.

pub mod fb;
pub mod renderer;
pub mod scene;

pub use tui_raycast_core as core;
pub use tui_raycast_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use renderer::TerminalRenderer;
pub use scene::SceneView;
