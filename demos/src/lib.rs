//! Shared helpers for the tilewalk demos.
//!
//! Provides the scenario maps, a text renderer that overlays a path on a
//! map, and a random walled-map generator for timing runs.

use crossterm::style::{Color, Stylize};
use rand::{Rng, RngExt};
use tilewalk_core::{Point, Tile, TileGrid, TileKind};
use tilewalk_paths::{GridOracle, Path, PathError};

// Colours
const COL_GRASS: Color = Color::Rgb { r: 60, g: 140, b: 60 };
const COL_WALL: Color = Color::Rgb { r: 110, g: 110, b: 130 };
const COL_DOOR: Color = Color::Rgb { r: 180, g: 120, b: 60 };
const COL_FLOOR: Color = Color::Rgb { r: 90, g: 80, b: 70 };
const COL_UNKNOWN: Color = Color::Rgb { r: 200, g: 60, b: 200 };
const COL_PATH: Color = Color::Rgb { r: 50, g: 180, b: 255 };
const COL_ENDPOINT: Color = Color::Rgb { r: 255, g: 220, b: 80 };

// ---------------------------------------------------------------------------
// Scenario maps
// ---------------------------------------------------------------------------

fn grid<const W: usize, const H: usize>(rows: [[i32; W]; H]) -> TileGrid {
    // Literal rows always have equal length.
    TileGrid::from_rows(rows).unwrap_or_default()
}

/// 5×5 map with two wall segments.
pub fn simple_map() -> TileGrid {
    grid([
        [0, 0, 0, 0, 0],
        [0, 1, 1, 1, 0],
        [0, 0, 0, 0, 0],
        [1, 1, 1, 0, 1],
        [0, 0, 0, 0, 0],
    ])
}

/// 5×5 map whose centre cell is walled in on all eight sides.
pub fn impossible_map() -> TileGrid {
    grid([
        [0, 0, 0, 0, 0],
        [0, 1, 1, 1, 0],
        [0, 1, 0, 1, 0],
        [0, 1, 1, 1, 0],
        [0, 0, 0, 0, 0],
    ])
}

/// 10×10 town with two buildings. The second building's door opens onto
/// the map edge, so its interior cannot be reached.
pub fn mini_town() -> TileGrid {
    grid([
        [0, 0, 0, 0, 0, 0, 0, 0, 0, 0],
        [0, 1, 1, 1, 1, 1, 0, 0, 0, 0],
        [0, 1, 3, 3, 3, 1, 0, 0, 0, 0],
        [0, 1, 3, 3, 3, 1, 0, 0, 0, 0],
        [0, 1, 3, 3, 3, 2, 0, 0, 0, 0],
        [0, 1, 1, 1, 1, 1, 0, 0, 0, 0],
        [0, 0, 0, 0, 0, 0, 0, 0, 0, 0],
        [0, 0, 0, 1, 1, 1, 1, 1, 0, 0],
        [0, 0, 0, 1, 3, 3, 3, 1, 0, 0],
        [0, 0, 0, 1, 1, 2, 1, 1, 0, 0],
    ])
}

/// A `width`×`height` map with a wall border and each inner cell walled
/// with probability `density`.
pub fn random_walled_map(rng: &mut impl Rng, width: i32, height: i32, density: f64) -> TileGrid {
    let mut map = TileGrid::new(width, height);
    for p in map.bounds() {
        let border = p.x == 0 || p.y == 0 || p.x == width - 1 || p.y == height - 1;
        let r: f64 = rng.random();
        if border || r < density {
            map.set(p, Tile::WALL);
        }
    }
    map
}

fn interior_cells(map: &TileGrid, margin: i32) -> Vec<Point> {
    map.iter()
        .filter(|&(p, t)| {
            t.is_walkable()
                && p.x >= margin
                && p.y >= margin
                && p.x < map.width() - margin
                && p.y < map.height() - margin
        })
        .map(|(p, _)| p)
        .collect()
}

/// A random walkable cell at least `margin` cells away from every edge.
///
/// Returns `None` if no such cell exists.
pub fn random_walkable(rng: &mut impl Rng, map: &TileGrid, margin: i32) -> Option<Point> {
    let candidates = interior_cells(map, margin);
    if candidates.is_empty() {
        return None;
    }
    Some(candidates[rng.random_range(0..candidates.len())])
}

/// Two distinct random walkable cells at least `margin` cells away from
/// every edge.
///
/// Returns `None` if fewer than two such cells exist.
pub fn random_endpoints(
    rng: &mut impl Rng,
    map: &TileGrid,
    margin: i32,
) -> Option<(Point, Point)> {
    let candidates = interior_cells(map, margin);
    if candidates.len() < 2 {
        return None;
    }
    let i = rng.random_range(0..candidates.len());
    // Draw from the remaining cells by skipping over `i`.
    let mut j = rng.random_range(0..candidates.len() - 1);
    if j >= i {
        j += 1;
    }
    Some((candidates[i], candidates[j]))
}

// ---------------------------------------------------------------------------
// Rendering
// ---------------------------------------------------------------------------

/// What to draw at one cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Mark {
    Tile(Tile),
    Step,
    Start,
    End,
}

fn marks(map: &TileGrid, path: Option<&Path>) -> Vec<Vec<Mark>> {
    let mut out: Vec<Vec<Mark>> = map
        .rows()
        .map(|row| row.iter().map(|&t| Mark::Tile(t)).collect())
        .collect();
    if let Some(path) = path {
        let mut put = |p: Point, m: Mark| {
            if map.in_bounds(p) {
                out[p.y as usize][p.x as usize] = m;
            }
        };
        for &p in path.points() {
            put(p, Mark::Step);
        }
        put(path.start(), Mark::Start);
        put(path.goal(), Mark::End);
    }
    out
}

fn mark_char(m: Mark) -> char {
    match m {
        Mark::Tile(t) => t.rune(),
        Mark::Step => '*',
        Mark::Start => 'S',
        Mark::End => 'E',
    }
}

/// Draw `map` as text, one line per row, with `path` overlaid: `S` start,
/// `E` end, `*` for the cells in between.
pub fn render_map(map: &TileGrid, path: Option<&Path>) -> String {
    let mut s = String::new();
    for row in marks(map, path) {
        s.extend(row.into_iter().map(mark_char));
        s.push('\n');
    }
    s
}

/// Same as [`render_map`] with terminal colours.
pub fn render_map_colored(map: &TileGrid, path: Option<&Path>) -> String {
    let mut s = String::new();
    for row in marks(map, path) {
        for m in row {
            let color = match m {
                Mark::Tile(t) => match t.kind() {
                    Some(TileKind::Grass) => COL_GRASS,
                    Some(TileKind::Wall) => COL_WALL,
                    Some(TileKind::Door) => COL_DOOR,
                    Some(TileKind::IndoorFloor) => COL_FLOOR,
                    None => COL_UNKNOWN,
                },
                Mark::Step => COL_PATH,
                Mark::Start | Mark::End => COL_ENDPOINT,
            };
            let styled = mark_char(m).with(color);
            s.push_str(&styled.to_string());
        }
        s.push('\n');
    }
    s
}

/// One-line summary of a search outcome.
pub fn describe(result: &Result<Path, PathError>) -> String {
    match result {
        Ok(path) => format!(
            "found path: {} cells, cost {:.3}, {} cells expanded",
            path.len(),
            path.cost(),
            path.expanded()
        ),
        Err(e) => format!("no path: {e}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use tilewalk_paths::find_path;

    #[test]
    fn render_without_path() {
        assert_eq!(
            render_map(&simple_map(), None),
            ".....\n.###.\n.....\n###.#\n.....\n"
        );
        assert!(render_map(&mini_town(), None).contains(".#   D...."));
    }

    #[test]
    fn render_with_path() {
        let map = simple_map();
        let path = find_path(Point::new(0, 0), Point::new(2, 2), &map, false).unwrap();
        assert_eq!(
            render_map(&map, Some(&path)),
            "S....\n*###.\n**E..\n###.#\n.....\n"
        );
    }

    #[test]
    fn colored_render_keeps_runes() {
        let map = simple_map();
        let s = render_map_colored(&map, None);
        assert!(s.contains('#'));
        assert_eq!(s.lines().count(), 5);
    }

    #[test]
    fn random_map_has_wall_border() {
        let mut rng = StdRng::seed_from_u64(1);
        let map = random_walled_map(&mut rng, 12, 8, 0.1);
        for p in map.bounds() {
            if p.x == 0 || p.y == 0 || p.x == 11 || p.y == 7 {
                assert_eq!(map.at(p), Some(Tile::WALL));
            }
        }
        let p = random_walkable(&mut rng, &map, 2).unwrap();
        assert!(map.is_walkable(p));
        assert!(p.x >= 2 && p.y >= 2 && p.x < 10 && p.y < 6);
    }

    #[test]
    fn random_endpoints_are_distinct() {
        let mut rng = StdRng::seed_from_u64(7);
        let map = random_walled_map(&mut rng, 12, 12, 0.1);
        for _ in 0..200 {
            let (from, to) = random_endpoints(&mut rng, &map, 2).unwrap();
            assert_ne!(from, to);
            assert!(map.is_walkable(from) && map.is_walkable(to));
        }
        // A 3×3 map with a wall border leaves a single interior cell.
        let map = random_walled_map(&mut rng, 3, 3, 0.0);
        assert_eq!(random_walkable(&mut rng, &map, 1), Some(Point::new(1, 1)));
        assert_eq!(random_endpoints(&mut rng, &map, 1), None);
        // Two interior cells: every draw uses both.
        let map = random_walled_map(&mut rng, 4, 3, 0.0);
        for _ in 0..20 {
            let (from, to) = random_endpoints(&mut rng, &map, 1).unwrap();
            assert_eq!(from.y, 1);
            assert_eq!(to.y, 1);
            assert_eq!(from.x + to.x, 3);
        }
    }

    #[test]
    fn describe_outcomes() {
        let map = impossible_map();
        let res = find_path(Point::new(0, 0), Point::new(2, 2), &map, false);
        assert_eq!(describe(&res), "no path: no route exists from (0, 0) to (2, 2)");
        let res = find_path(Point::new(0, 0), Point::new(4, 0), &map, false);
        assert!(describe(&res).starts_with("found path: 5 cells, cost 4.000"));
    }
}
