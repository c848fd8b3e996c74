//! Movement directions and the step-cost model.
//!
//! The order of [`CARDINAL`] and [`DIAGONAL`] is the order in which the
//! search discovers neighbours, and discovery order decides ties between
//! equally promising cells.

use tilewalk_core::Point;

/// Cost of a horizontal or vertical step.
pub const CARDINAL_COST: f64 = 1.0;

/// Cost of a diagonal step, approximating √2.
pub const DIAGONAL_COST: f64 = 1.414;

/// One of the eight grid moves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Direction {
    Up,
    Right,
    Down,
    Left,
    UpRight,
    DownRight,
    DownLeft,
    UpLeft,
}

/// Cardinal moves: up, right, down, left.
pub const CARDINAL: [Direction; 4] = [
    Direction::Up,
    Direction::Right,
    Direction::Down,
    Direction::Left,
];

/// Diagonal moves: up-right, down-right, down-left, up-left.
pub const DIAGONAL: [Direction; 4] = [
    Direction::UpRight,
    Direction::DownRight,
    Direction::DownLeft,
    Direction::UpLeft,
];

const ALL: [Direction; 8] = [
    Direction::Up,
    Direction::Right,
    Direction::Down,
    Direction::Left,
    Direction::UpRight,
    Direction::DownRight,
    Direction::DownLeft,
    Direction::UpLeft,
];

/// The moves available to a search: the four cardinals, followed by the
/// four diagonals when `allow_diagonal` is set.
#[inline]
pub fn directions(allow_diagonal: bool) -> &'static [Direction] {
    if allow_diagonal { &ALL } else { &CARDINAL }
}

impl Direction {
    /// Coordinate delta of this move. Y grows down, so `Up` is `(0, -1)`.
    #[inline]
    pub const fn offset(self) -> Point {
        match self {
            Direction::Up => Point::new(0, -1),
            Direction::Right => Point::new(1, 0),
            Direction::Down => Point::new(0, 1),
            Direction::Left => Point::new(-1, 0),
            Direction::UpRight => Point::new(1, -1),
            Direction::DownRight => Point::new(1, 1),
            Direction::DownLeft => Point::new(-1, 1),
            Direction::UpLeft => Point::new(-1, -1),
        }
    }

    #[inline]
    pub const fn is_diagonal(self) -> bool {
        matches!(
            self,
            Direction::UpRight | Direction::DownRight | Direction::DownLeft | Direction::UpLeft
        )
    }

    /// [`DIAGONAL_COST`] for diagonal moves, [`CARDINAL_COST`] otherwise.
    #[inline]
    pub const fn step_cost(self) -> f64 {
        if self.is_diagonal() {
            DIAGONAL_COST
        } else {
            CARDINAL_COST
        }
    }

    /// The move from `from` to the adjacent cell `to`, if they are adjacent.
    pub fn between(from: Point, to: Point) -> Option<Direction> {
        let d = to - from;
        ALL.into_iter().find(|dir| dir.offset() == d)
    }
}

/// Sum of step costs along a sequence of adjacent points.
///
/// Returns `None` if two consecutive points are not adjacent.
pub fn route_cost(points: &[Point]) -> Option<f64> {
    points.windows(2).try_fold(0.0, |acc, w| {
        Direction::between(w[0], w[1]).map(|d| acc + d.step_cost())
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn direction_sets() {
        assert_eq!(directions(false), &CARDINAL[..]);
        let all = directions(true);
        assert_eq!(all.len(), 8);
        assert_eq!(&all[..4], &CARDINAL[..]);
        assert_eq!(&all[4..], &DIAGONAL[..]);
    }

    #[test]
    fn offsets_and_costs() {
        for d in CARDINAL {
            let o = d.offset();
            assert_eq!(o.x.abs() + o.y.abs(), 1);
            assert!(!d.is_diagonal());
            assert_eq!(d.step_cost(), 1.0);
        }
        for d in DIAGONAL {
            let o = d.offset();
            assert_eq!((o.x.abs(), o.y.abs()), (1, 1));
            assert!(d.is_diagonal());
            assert_eq!(d.step_cost(), 1.414);
        }
    }

    #[test]
    fn between_inverts_offset() {
        let p = Point::new(3, 3);
        for d in directions(true) {
            assert_eq!(Direction::between(p, p + d.offset()), Some(*d));
        }
        assert_eq!(Direction::between(p, p), None);
        assert_eq!(Direction::between(p, Point::new(5, 3)), None);
    }

    #[test]
    fn route_cost_sums_steps() {
        let pts = [Point::new(0, 0), Point::new(1, 0), Point::new(2, 1)];
        let c = route_cost(&pts).unwrap();
        assert!((c - 2.414).abs() < 1e-12);
        assert_eq!(route_cost(&pts[..1]), Some(0.0));
        assert_eq!(route_cost(&[Point::new(0, 0), Point::new(2, 0)]), None);
    }
}
