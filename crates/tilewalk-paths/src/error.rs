//! Typed search failures.
//!
//! Every variant is an ordinary outcome the caller is expected to branch on.
//! None of them indicates a bug in the engine.

use std::fmt;

use tilewalk_core::Point;

/// Which endpoint of a request was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endpoint {
    Start,
    Goal,
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Endpoint::Start => f.write_str("start"),
            Endpoint::Goal => f.write_str("goal"),
        }
    }
}

/// Why a route could not be produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathError {
    /// An endpoint lies outside the grid.
    InvalidCoordinate { endpoint: Endpoint, point: Point },
    /// An endpoint lies on a blocking tile.
    BlockedEndpoint { endpoint: Endpoint, point: Point },
    /// Every reachable cell was explored without finding the goal.
    NoRouteExists { start: Point, goal: Point },
    /// The configured expansion budget ran out before the goal was reached.
    ExpansionLimit { limit: usize },
}

impl PathError {
    /// The rejected endpoint, for the two input-validation failures.
    pub fn endpoint(&self) -> Option<Endpoint> {
        match self {
            Self::InvalidCoordinate { endpoint, .. } | Self::BlockedEndpoint { endpoint, .. } => {
                Some(*endpoint)
            }
            Self::NoRouteExists { .. } | Self::ExpansionLimit { .. } => None,
        }
    }
}

impl fmt::Display for PathError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidCoordinate { endpoint, point } => {
                write!(f, "{endpoint} {point} is outside the grid")
            }
            Self::BlockedEndpoint { endpoint, point } => {
                write!(f, "{endpoint} {point} is not walkable")
            }
            Self::NoRouteExists { start, goal } => {
                write!(f, "no route exists from {start} to {goal}")
            }
            Self::ExpansionLimit { limit } => {
                write!(f, "search gave up after expanding {limit} cells")
            }
        }
    }
}

impl std::error::Error for PathError {}
