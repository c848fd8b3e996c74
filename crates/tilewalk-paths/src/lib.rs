//! A* route finding over walkable tile grids.
//!
//! This crate finds a shortest walkable route between two cells of a 2D tile
//! map. The engine is synchronous and keeps no state between calls: each
//! call allocates its own node arena and open set and drops them on return.
//!
//! - **Grid oracle** ([`GridOracle`]): bounds and walkability queries. Any
//!   map can be searched by implementing it; [`TileGrid`](tilewalk_core::TileGrid)
//!   already does.
//! - **Search engine** ([`find_path`], [`find_path_with`]): A* with
//!   cardinal steps of cost 1 and, optionally, diagonal steps of cost 1.414.
//! - **Distance functions** ([`manhattan`], [`euclidean`], [`chebyshev`],
//!   [`octile`]).
//!
//! # Failures
//!
//! | Variant | Meaning |
//! |---|---|
//! | [`PathError::InvalidCoordinate`] | start or goal outside the grid |
//! | [`PathError::BlockedEndpoint`] | start or goal on a wall |
//! | [`PathError::NoRouteExists`] | the search ran out of cells |
//! | [`PathError::ExpansionLimit`] | the optional budget ran out |
//!
//! # Example
//!
//! ```
//! use tilewalk_core::{Point, TileGrid};
//! use tilewalk_paths::find_path;
//!
//! let map = TileGrid::from_rows([
//!     [0, 0, 0],
//!     [1, 1, 0],
//!     [0, 0, 0],
//! ])
//! .unwrap();
//! let path = find_path(Point::new(0, 0), Point::new(0, 2), &map, false).unwrap();
//! assert_eq!(path.len(), 7);
//! assert_eq!(path.cost(), 6.0);
//! ```

mod astar;
mod distance;
mod error;
mod neighbors;
mod options;
mod path;
mod traits;

pub use astar::{find_path, find_path_with};
pub use distance::{chebyshev, euclidean, manhattan, octile};
pub use error::{Endpoint, PathError};
pub use neighbors::{
    CARDINAL, CARDINAL_COST, DIAGONAL, DIAGONAL_COST, Direction, directions, route_cost,
};
pub use options::{Heuristic, SearchOptions};
pub use path::Path;
pub use traits::GridOracle;
