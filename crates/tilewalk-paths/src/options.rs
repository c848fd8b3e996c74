use tilewalk_core::Point;

use crate::distance;

/// Estimate of the remaining cost from a cell to the goal.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Heuristic {
    /// `|dx| + |dy|`, used for every search unless told otherwise.
    ///
    /// Exact for 4-directional movement. With diagonal moves it can
    /// overestimate, so 8-directional routes are not guaranteed shortest.
    #[default]
    Manhattan,
    /// Straight-line distance. Never overestimates, but expands more cells.
    Euclidean,
    /// Cheapest obstacle-free route under the step-cost model. Never
    /// overestimates in either movement mode.
    Octile,
}

impl Heuristic {
    /// Evaluate the heuristic from `from` to `goal`.
    #[inline]
    pub fn estimate(self, from: Point, goal: Point) -> f64 {
        match self {
            Heuristic::Manhattan => f64::from(distance::manhattan(from, goal)),
            Heuristic::Euclidean => distance::euclidean(from, goal),
            Heuristic::Octile => distance::octile(from, goal),
        }
    }
}

/// Per-call search configuration.
///
/// The default is 4-directional movement, the Manhattan heuristic and no
/// expansion budget.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SearchOptions {
    /// Enable the four diagonal moves.
    pub allow_diagonal: bool,
    /// Remaining-cost estimate used to order the open set.
    pub heuristic: Heuristic,
    /// Give up with [`PathError::ExpansionLimit`](crate::PathError::ExpansionLimit)
    /// after finalizing this many cells without reaching the goal.
    pub max_expansions: Option<usize>,
}

impl SearchOptions {
    /// Options for 4-directional (`false`) or 8-directional (`true`)
    /// movement, everything else default.
    pub fn new(allow_diagonal: bool) -> Self {
        Self {
            allow_diagonal,
            ..Self::default()
        }
    }

    pub fn with_diagonal(mut self, allow_diagonal: bool) -> Self {
        self.allow_diagonal = allow_diagonal;
        self
    }

    pub fn with_heuristic(mut self, heuristic: Heuristic) -> Self {
        self.heuristic = heuristic;
        self
    }

    pub fn with_max_expansions(mut self, limit: usize) -> Self {
        self.max_expansions = Some(limit);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let o = SearchOptions::default();
        assert!(!o.allow_diagonal);
        assert_eq!(o.heuristic, Heuristic::Manhattan);
        assert_eq!(o.max_expansions, None);
        assert_eq!(SearchOptions::new(true), o.with_diagonal(true));
    }

    #[test]
    fn builder() {
        let o = SearchOptions::new(true)
            .with_heuristic(Heuristic::Octile)
            .with_max_expansions(10);
        assert!(o.allow_diagonal);
        assert_eq!(o.heuristic, Heuristic::Octile);
        assert_eq!(o.max_expansions, Some(10));
    }

    #[test]
    fn heuristic_estimates() {
        let a = Point::new(0, 0);
        let b = Point::new(3, 4);
        assert_eq!(Heuristic::Manhattan.estimate(a, b), 7.0);
        assert!((Heuristic::Euclidean.estimate(a, b) - 5.0).abs() < 1e-12);
        assert!((Heuristic::Octile.estimate(a, b) - (4.0 + 3.0 * 0.414)).abs() < 1e-9);
    }
}
