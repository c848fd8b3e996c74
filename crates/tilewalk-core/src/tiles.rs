//! Tile-type codes and their walkability policy.
//!
//! [`Tile`] is a newtype over `i32`: maps are authored as rows of integer
//! codes. Exactly one code, [`Tile::WALL`], blocks movement. Every other code
//! is walkable, including codes this crate does not recognize.

use std::fmt;

/// A raw tile-type code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Tile(pub i32);

impl Tile {
    /// Outdoor grass.
    pub const GRASS: Tile = Tile(0);
    /// Wall or other obstacle. The only blocking code.
    pub const WALL: Tile = Tile(1);
    /// Building entrance.
    pub const DOOR: Tile = Tile(2);
    /// Floor inside a building.
    pub const INDOOR_FLOOR: Tile = Tile(3);

    /// Create a tile from its code.
    pub const fn new(code: i32) -> Self {
        Self(code)
    }

    /// The underlying integer code.
    pub const fn code(self) -> i32 {
        self.0
    }

    /// Whether this tile stops movement.
    #[inline]
    pub const fn is_blocking(self) -> bool {
        self.0 == Self::WALL.0
    }

    /// Whether a route may pass through this tile.
    #[inline]
    pub const fn is_walkable(self) -> bool {
        !self.is_blocking()
    }

    /// The known kind of this tile, if any.
    pub fn kind(self) -> Option<TileKind> {
        TileKind::of(self)
    }

    /// Map rune, `'?'` for unrecognized codes.
    pub fn rune(self) -> char {
        self.kind().map_or('?', TileKind::rune)
    }
}

impl From<i32> for Tile {
    fn from(v: i32) -> Self {
        Self(v)
    }
}

impl From<Tile> for i32 {
    fn from(t: Tile) -> Self {
        t.0
    }
}

impl From<TileKind> for Tile {
    fn from(k: TileKind) -> Self {
        k.tile()
    }
}

/// The tile kinds with a reserved code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TileKind {
    Grass,
    Wall,
    Door,
    IndoorFloor,
}

impl TileKind {
    pub const ALL: [TileKind; 4] = [
        TileKind::Grass,
        TileKind::Wall,
        TileKind::Door,
        TileKind::IndoorFloor,
    ];

    /// Classify a raw code. Returns `None` for unrecognized codes.
    pub fn of(tile: Tile) -> Option<TileKind> {
        match tile {
            Tile::GRASS => Some(TileKind::Grass),
            Tile::WALL => Some(TileKind::Wall),
            Tile::DOOR => Some(TileKind::Door),
            Tile::INDOOR_FLOOR => Some(TileKind::IndoorFloor),
            _ => None,
        }
    }

    /// The reserved code for this kind.
    pub const fn tile(self) -> Tile {
        match self {
            TileKind::Grass => Tile::GRASS,
            TileKind::Wall => Tile::WALL,
            TileKind::Door => Tile::DOOR,
            TileKind::IndoorFloor => Tile::INDOOR_FLOOR,
        }
    }

    /// Human-readable name.
    pub const fn name(self) -> &'static str {
        match self {
            TileKind::Grass => "grass",
            TileKind::Wall => "wall",
            TileKind::Door => "door",
            TileKind::IndoorFloor => "indoor floor",
        }
    }

    /// Character used when drawing a map as text.
    pub const fn rune(self) -> char {
        match self {
            TileKind::Grass => '.',
            TileKind::Wall => '#',
            TileKind::Door => 'D',
            TileKind::IndoorFloor => ' ',
        }
    }

    /// Inverse of [`rune`](TileKind::rune).
    pub fn from_rune(c: char) -> Option<TileKind> {
        Self::ALL.into_iter().find(|k| k.rune() == c)
    }
}

impl fmt::Display for TileKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_wall_blocks() {
        assert!(Tile::WALL.is_blocking());
        assert!(Tile::GRASS.is_walkable());
        assert!(Tile::DOOR.is_walkable());
        assert!(Tile::INDOOR_FLOOR.is_walkable());
    }

    #[test]
    fn unknown_codes_are_walkable() {
        for code in [-7, 4, 9, 255] {
            let t = Tile(code);
            assert!(t.is_walkable(), "code {code} should be walkable");
            assert_eq!(t.kind(), None);
            assert_eq!(t.rune(), '?');
        }
    }

    #[test]
    fn kind_round_trips_through_code_and_rune() {
        for k in TileKind::ALL {
            assert_eq!(TileKind::of(k.tile()), Some(k));
            assert_eq!(TileKind::from_rune(k.rune()), Some(k));
        }
        assert_eq!(TileKind::from_rune('x'), None);
        assert_eq!(TileKind::IndoorFloor.to_string(), "indoor floor");
    }
}
