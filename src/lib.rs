//! Terminal pseudo-3D ray-casting walkthrough (workspace facade crate).
//!
//! This package keeps the `tui_raycast::{core,input,term,types}` public API
//! in one place while the implementation lives in dedicated crates under
//! `crates/`.

pub use tui_raycast_core as core;
pub use tui_raycast_input as input;
pub use tui_raycast_term as term;
pub use tui_raycast_types as types;
