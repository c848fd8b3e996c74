use tilewalk_core::{Point, Range, TileGrid};

/// Read-only view of a map answering bounds and walkability queries.
///
/// The search engine only ever asks these two questions, so any map
/// representation can be searched by implementing this trait.
pub trait GridOracle {
    /// The rectangle of valid cells.
    fn bounds(&self) -> Range;

    /// Whether `p` is a cell of the map.
    #[inline]
    fn in_bounds(&self, p: Point) -> bool {
        self.bounds().contains(p)
    }

    /// Whether a route may pass through `p`. Only called for in-bounds
    /// points.
    fn is_walkable(&self, p: Point) -> bool;
}

impl GridOracle for TileGrid {
    #[inline]
    fn bounds(&self) -> Range {
        TileGrid::bounds(self)
    }

    #[inline]
    fn in_bounds(&self, p: Point) -> bool {
        self.contains(p)
    }

    #[inline]
    fn is_walkable(&self, p: Point) -> bool {
        self.at(p).is_some_and(|t| t.is_walkable())
    }
}

impl<G: GridOracle + ?Sized> GridOracle for &G {
    #[inline]
    fn bounds(&self) -> Range {
        (**self).bounds()
    }

    #[inline]
    fn in_bounds(&self, p: Point) -> bool {
        (**self).in_bounds(p)
    }

    #[inline]
    fn is_walkable(&self, p: Point) -> bool {
        (**self).is_walkable(p)
    }
}
