use std::ops::Index;

use tilewalk_core::Point;

/// A route returned by a successful search.
///
/// Points run from the start to the goal, both inclusive, so a path always
/// holds at least one point. Consecutive points are grid-adjacent.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Path {
    points: Vec<Point>,
    cost: f64,
    expanded: usize,
}

impl Path {
    pub(crate) fn new(points: Vec<Point>, cost: f64, expanded: usize) -> Self {
        debug_assert!(!points.is_empty());
        Self {
            points,
            cost,
            expanded,
        }
    }

    /// The route's coordinates, start to goal.
    #[inline]
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Number of points, including both endpoints. Always at least 1.
    #[inline]
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Number of moves, one less than [`len`](Path::len).
    #[inline]
    pub fn steps(&self) -> usize {
        self.points.len() - 1
    }

    #[inline]
    pub fn start(&self) -> Point {
        self.points[0]
    }

    #[inline]
    pub fn goal(&self) -> Point {
        self.points[self.points.len() - 1]
    }

    /// Total step cost: 1 per cardinal move, 1.414 per diagonal move.
    #[inline]
    pub fn cost(&self) -> f64 {
        self.cost
    }

    /// How many cells the search finalized before returning this path.
    #[inline]
    pub fn expanded(&self) -> usize {
        self.expanded
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Point> {
        self.points.iter()
    }

    pub fn into_points(self) -> Vec<Point> {
        self.points
    }
}

impl Index<usize> for Path {
    type Output = Point;

    fn index(&self, i: usize) -> &Point {
        &self.points[i]
    }
}

impl<'a> IntoIterator for &'a Path {
    type Item = &'a Point;
    type IntoIter = std::slice::Iter<'a, Point>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.iter()
    }
}

impl IntoIterator for Path {
    type Item = Point;
    type IntoIter = std::vec::IntoIter<Point>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.into_iter()
    }
}

impl From<Path> for Vec<Point> {
    fn from(p: Path) -> Self {
        p.points
    }
}
