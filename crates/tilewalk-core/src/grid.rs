//! The [`TileGrid`] type: an owned rectangular snapshot of tile codes.
//!
//! Maps arrive as rows of integer codes. Construction checks that every row
//! has the same length, so code that reads a `TileGrid` can rely on a single
//! width for the whole map.

use std::fmt;

use crate::geom::{Point, Range};
use crate::tiles::{Tile, TileKind};

// ---------------------------------------------------------------------------
// GridError
// ---------------------------------------------------------------------------

/// Failure to build a [`TileGrid`] from external map data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    /// Row `row` has `found` tiles where the first row had `expected`.
    RaggedRow {
        row: usize,
        expected: usize,
        found: usize,
    },
    /// A character in an ASCII map that names no tile.
    UnknownRune { rune: char, pos: Point },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::RaggedRow {
                row,
                expected,
                found,
            } => write!(f, "row {row} has {found} tiles, expected {expected}"),
            Self::UnknownRune { rune, pos } => {
                write!(f, "unknown map character {rune:?} at {pos}")
            }
        }
    }
}

impl std::error::Error for GridError {}

// ---------------------------------------------------------------------------
// TileGrid
// ---------------------------------------------------------------------------

/// A rectangular, row-major grid of [`Tile`] codes.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(try_from = "Vec<Vec<Tile>>", into = "Vec<Vec<Tile>>")
)]
pub struct TileGrid {
    tiles: Vec<Tile>,
    width: i32,
    height: i32,
}

impl TileGrid {
    /// Create a grid filled with [`Tile::GRASS`].
    pub fn new(width: i32, height: i32) -> Self {
        let width = width.max(0);
        let height = height.max(0);
        Self {
            tiles: vec![Tile::GRASS; width as usize * height as usize],
            width,
            height,
        }
    }

    /// Build a grid from rows of tile codes.
    ///
    /// Every row must have the length of the first one. No rows at all
    /// gives an empty 0×0 grid.
    pub fn from_rows<I, R, T>(rows: I) -> Result<Self, GridError>
    where
        I: IntoIterator<Item = R>,
        R: AsRef<[T]>,
        T: Copy + Into<Tile>,
    {
        let mut tiles = Vec::new();
        let mut width = None;
        let mut height = 0;
        for (y, row) in rows.into_iter().enumerate() {
            let row = row.as_ref();
            let expected = *width.get_or_insert(row.len());
            if row.len() != expected {
                return Err(GridError::RaggedRow {
                    row: y,
                    expected,
                    found: row.len(),
                });
            }
            tiles.extend(row.iter().map(|&t| t.into()));
            height += 1;
        }
        let width = width.unwrap_or(0);
        // A grid with rows but no columns has no cells either.
        let height = if width == 0 { 0 } else { height };
        Ok(Self {
            tiles,
            width: width as i32,
            height,
        })
    }

    /// Build a grid from an ASCII picture, one line per row.
    ///
    /// Accepts the [`TileKind`] runes (`.` grass, `#` wall, `D` door, space
    /// for indoor floor) and the digits `0`–`9` as raw codes.
    pub fn parse(text: &str) -> Result<Self, GridError> {
        let mut rows = Vec::new();
        for (y, line) in text.lines().filter(|l| !l.is_empty()).enumerate() {
            let mut row = Vec::with_capacity(line.len());
            for (x, c) in line.chars().enumerate() {
                let tile = match (TileKind::from_rune(c), c.to_digit(10)) {
                    (Some(kind), _) => kind.tile(),
                    (None, Some(d)) => Tile(d as i32),
                    (None, None) => {
                        return Err(GridError::UnknownRune {
                            rune: c,
                            pos: Point::new(x as i32, y as i32),
                        });
                    }
                };
                row.push(tile);
            }
            rows.push(row);
        }
        Self::from_rows(rows)
    }

    /// The bounding range `[(0, 0), (width, height))`.
    #[inline]
    pub fn bounds(&self) -> Range {
        Range::new(0, 0, self.width, self.height)
    }

    /// Size as a `Point` (width = x, height = y).
    #[inline]
    pub fn size(&self) -> Point {
        Point::new(self.width, self.height)
    }

    /// Number of columns.
    #[inline]
    pub fn width(&self) -> i32 {
        self.width
    }

    /// Number of rows.
    #[inline]
    pub fn height(&self) -> i32 {
        self.height
    }

    /// Whether `p` lies on the grid.
    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        p.x >= 0 && p.y >= 0 && p.x < self.width && p.y < self.height
    }

    #[inline]
    fn index(&self, p: Point) -> Option<usize> {
        self.contains(p).then(|| (p.y * self.width + p.x) as usize)
    }

    /// The tile at `p`, or `None` if out of bounds.
    pub fn at(&self, p: Point) -> Option<Tile> {
        self.index(p).map(|i| self.tiles[i])
    }

    /// Set the tile at `p`. Does nothing if out of bounds.
    pub fn set(&mut self, p: Point, tile: impl Into<Tile>) {
        if let Some(i) = self.index(p) {
            self.tiles[i] = tile.into();
        }
    }

    /// Count how many cells hold `tile`.
    pub fn count(&self, tile: Tile) -> usize {
        self.tiles.iter().filter(|&&t| t == tile).count()
    }

    /// Iterate over the rows, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[Tile]> + '_ {
        // `max(1)` keeps `chunks` happy on an empty grid; there are no tiles
        // to yield in that case anyway.
        self.tiles.chunks(self.width.max(1) as usize)
    }

    /// Iterate over `(Point, Tile)` pairs in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (Point, Tile)> + '_ {
        self.bounds().iter().zip(self.tiles.iter().copied())
    }
}

impl TryFrom<Vec<Vec<Tile>>> for TileGrid {
    type Error = GridError;

    fn try_from(rows: Vec<Vec<Tile>>) -> Result<Self, GridError> {
        Self::from_rows(rows)
    }
}

impl From<TileGrid> for Vec<Vec<Tile>> {
    fn from(grid: TileGrid) -> Self {
        grid.rows().map(<[Tile]>::to_vec).collect()
    }
}

impl fmt::Display for TileGrid {
    /// Draws the grid with tile runes, one line per row.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.rows() {
            for t in row {
                write!(f, "{}", t.rune())?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_and_size() {
        let g = TileGrid::new(10, 5);
        assert_eq!(g.size(), Point::new(10, 5));
        assert_eq!(g.width(), 10);
        assert_eq!(g.height(), 5);
        assert_eq!(g.count(Tile::GRASS), 50);
    }

    #[test]
    fn test_new_degenerate_sizes() {
        let g = TileGrid::new(-3, 4);
        assert_eq!(g.size(), Point::new(0, 4));
        assert_eq!(g.iter().count(), 0);
        let g = TileGrid::new(i32::MAX, 0);
        assert_eq!(g.width(), i32::MAX);
        assert_eq!(g.count(Tile::GRASS), 0);
        let g = TileGrid::new(0, i32::MAX);
        assert_eq!(g.height(), i32::MAX);
        assert!(!g.contains(Point::new(0, 0)));
    }

    #[test]
    fn test_set_and_at() {
        let mut g = TileGrid::new(4, 4);
        let p = Point::new(2, 3);
        g.set(p, Tile::WALL);
        assert_eq!(g.at(p), Some(Tile::WALL));
        assert_eq!(g.at(Point::new(0, 0)), Some(Tile::GRASS));
        assert_eq!(g.at(Point::new(10, 10)), None);
        assert_eq!(g.at(Point::new(-1, 0)), None);
        // out of bounds set is ignored
        g.set(Point::new(4, 0), Tile::WALL);
        assert_eq!(g.count(Tile::WALL), 1);
    }

    #[test]
    fn test_from_rows_is_row_major() {
        let g = TileGrid::from_rows([[0, 1, 2], [3, 0, 9]]).unwrap();
        assert_eq!(g.size(), Point::new(3, 2));
        assert_eq!(g.at(Point::new(1, 0)), Some(Tile::WALL));
        assert_eq!(g.at(Point::new(0, 1)), Some(Tile::INDOOR_FLOOR));
        assert_eq!(g.at(Point::new(2, 1)), Some(Tile(9)));
    }

    #[test]
    fn test_from_rows_rejects_ragged() {
        let rows = vec![vec![0, 0, 0], vec![0, 0], vec![0, 0, 0]];
        let err = TileGrid::from_rows(&rows).unwrap_err();
        assert_eq!(
            err,
            GridError::RaggedRow {
                row: 1,
                expected: 3,
                found: 2
            }
        );
        assert_eq!(err.to_string(), "row 1 has 2 tiles, expected 3");
    }

    #[test]
    fn test_from_rows_empty() {
        let g = TileGrid::from_rows(Vec::<Vec<i32>>::new()).unwrap();
        assert_eq!(g.size(), Point::ZERO);
        assert!(g.bounds().is_empty());
        let g = TileGrid::from_rows(vec![Vec::<i32>::new(), Vec::new()]).unwrap();
        assert_eq!(g.size(), Point::ZERO);
        assert_eq!(g.rows().count(), 0);
    }

    #[test]
    fn test_parse_and_display() {
        let text = "..#\nD 7\n";
        let g = TileGrid::parse(text).unwrap();
        assert_eq!(g.at(Point::new(2, 0)), Some(Tile::WALL));
        assert_eq!(g.at(Point::new(0, 1)), Some(Tile::DOOR));
        assert_eq!(g.at(Point::new(1, 1)), Some(Tile::INDOOR_FLOOR));
        assert_eq!(g.at(Point::new(2, 1)), Some(Tile(7)));
        assert_eq!(g.to_string(), "..#\nD ?\n");
    }

    #[test]
    fn test_parse_unknown_rune() {
        let err = TileGrid::parse("..\n.x\n").unwrap_err();
        assert_eq!(
            err,
            GridError::UnknownRune {
                rune: 'x',
                pos: Point::new(1, 1)
            }
        );
    }

    #[test]
    fn test_iter_and_rows() {
        let g = TileGrid::from_rows([[0, 1], [2, 3]]).unwrap();
        let items: Vec<_> = g.iter().collect();
        assert_eq!(items.len(), 4);
        assert_eq!(items[2], (Point::new(0, 1), Tile::DOOR));
        let rows: Vec<Vec<Tile>> = g.clone().into();
        assert_eq!(rows, vec![vec![Tile(0), Tile(1)], vec![Tile(2), Tile(3)]]);
    }
}
