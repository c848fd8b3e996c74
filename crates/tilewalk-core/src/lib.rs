//! **tilewalk-core**: core types for walkable tile maps.
//!
//! This crate provides the foundational types shared across the *tilewalk*
//! workspace: geometry primitives, tile-type codes with their walkability
//! policy, and an owned rectangular tile grid.

pub mod geom;
pub mod grid;
pub mod tiles;

pub use geom::{Point, Range};
pub use grid::{GridError, TileGrid};
pub use tiles::{Tile, TileKind};
