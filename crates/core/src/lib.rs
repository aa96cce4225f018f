//! Core simulation and rendering mathematics - pure, deterministic, and testable
//!
//! This crate contains the world model, player movement, ray casting, and
//! shading logic. It has **zero dependencies** on UI or I/O, making it:
//!
//! - **Deterministic**: same pose and grid always produce the same frame
//! - **Testable**: the geometric properties have direct unit tests
//! - **Portable**: runs in any environment (terminal, headless, benchmarks)
//!
//! # Module Structure
//!
//! - [`world`]: immutable wall/empty tile grid with bounds-safe sampling
//! - [`sim`]: player pose, movement tuning, and per-frame intent application
//! - [`raycast`]: fixed-step ray marching with wall-seam (edge) detection
//! - [`shade`]: inverse-distance projection into ceiling/wall/floor glyphs
//!
//! # Example
//!
//! ```
//! use tui_raycast_core::{cast_ray, MovementConfig, Pose, WorldGrid};
//! use tui_raycast_types::DEFAULT_MAP;
//!
//! let grid = WorldGrid::parse(&DEFAULT_MAP).unwrap();
//! let pose = Pose::starting();
//! let config = MovementConfig::default();
//!
//! // Cast the center column of a 120-column screen.
//! let ray = cast_ray(&grid, &pose, &config, 60, 120);
//! assert!(ray.distance > 0.0 && ray.distance <= config.max_depth);
//! ```

pub mod raycast;
pub mod shade;
pub mod sim;
pub mod world;

pub use tui_raycast_types as types;

// Re-export commonly used items for convenience
pub use raycast::{cast_ray, ray_angle, RayResult};
pub use shade::{shade_cell, ShadeGradient, FLAT_SHADES, WALL_SHADES};
pub use sim::{MovementConfig, Pose, Simulation};
pub use world::{GridParseError, Tile, WorldGrid};
