use tilewalk_core::Point;

use crate::neighbors::{CARDINAL_COST, DIAGONAL_COST};

/// Manhattan (L1) distance between two points.
#[inline]
pub fn manhattan(a: Point, b: Point) -> i32 {
    (a.x - b.x).abs() + (a.y - b.y).abs()
}

/// Euclidean (L2) distance between two points.
#[inline]
pub fn euclidean(a: Point, b: Point) -> f64 {
    let dx = f64::from(a.x - b.x);
    let dy = f64::from(a.y - b.y);
    (dx * dx + dy * dy).sqrt()
}

/// Chebyshev (L∞) distance between two points.
#[inline]
pub fn chebyshev(a: Point, b: Point) -> i32 {
    (a.x - b.x).abs().max((a.y - b.y).abs())
}

/// Cost of the cheapest obstacle-free 8-directional route between two
/// points under the step-cost model.
#[inline]
pub fn octile(a: Point, b: Point) -> f64 {
    let dx = (a.x - b.x).abs();
    let dy = (a.y - b.y).abs();
    let (long, short) = (f64::from(dx.max(dy)), f64::from(dx.min(dy)));
    long * CARDINAL_COST + short * (DIAGONAL_COST - CARDINAL_COST)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn metrics() {
        let a = Point::new(0, 0);
        let b = Point::new(3, -4);
        assert_eq!(manhattan(a, b), 7);
        assert_eq!(manhattan(b, a), 7);
        assert_eq!(chebyshev(a, b), 4);
        assert!((euclidean(a, b) - 5.0).abs() < 1e-12);
        assert_eq!(manhattan(b, b), 0);
        assert_eq!(euclidean(b, b), 0.0);
    }

    #[test]
    fn octile_counts_diagonals_first() {
        let a = Point::new(1, 1);
        assert!((octile(a, Point::new(4, 3)) - (1.0 + 2.0 * 1.414)).abs() < 1e-9);
        assert!((octile(a, Point::new(1, 6)) - 5.0).abs() < 1e-9);
        // never above Manhattan, never below Euclidean
        let b = Point::new(-2, 5);
        assert!(octile(a, b) <= f64::from(manhattan(a, b)));
        assert!(octile(a, b) >= euclidean(a, b));
    }
}
