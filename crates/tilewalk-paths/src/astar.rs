use std::cmp::Ordering;
use std::collections::BinaryHeap;

use tilewalk_core::{Point, Range};

use crate::error::{Endpoint, PathError};
use crate::neighbors::directions;
use crate::options::SearchOptions;
use crate::path::Path;
use crate::traits::GridOracle;

const NO_PARENT: usize = usize::MAX;

// ---------------------------------------------------------------------------
// Per-call node arena
// ---------------------------------------------------------------------------

#[derive(Clone, Copy, PartialEq, Eq)]
enum NodeState {
    Unseen,
    Open,
    Closed,
}

#[derive(Clone)]
struct Node {
    g: f64,
    f: f64,
    parent: usize,
    /// Discovery order, fixed when the cell first enters the open set.
    seq: u64,
    /// Bumped on every (re)assignment; heap entries with an older stamp are
    /// stale.
    stamp: u32,
    state: NodeState,
}

impl Default for Node {
    fn default() -> Self {
        Self {
            g: 0.0,
            f: 0.0,
            parent: NO_PARENT,
            seq: 0,
            stamp: 0,
            state: NodeState::Unseen,
        }
    }
}

/// Heap entry ordered by lowest `f`, then earliest discovery.
struct OpenRef {
    f: f64,
    seq: u64,
    idx: usize,
    stamp: u32,
}

impl Ord for OpenRef {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reversed: BinaryHeap is a max-heap.
        other
            .f
            .total_cmp(&self.f)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for OpenRef {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for OpenRef {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for OpenRef {}

/// Node storage for one search, one slot per cell of the grid bounds.
struct Arena {
    rng: Range,
    width: usize,
    nodes: Vec<Node>,
}

impl Arena {
    fn new(rng: Range) -> Self {
        Self {
            rng,
            width: rng.width().max(0) as usize,
            nodes: vec![Node::default(); rng.len()],
        }
    }

    #[inline]
    fn idx(&self, p: Point) -> Option<usize> {
        if !self.rng.contains(p) {
            return None;
        }
        let x = (p.x - self.rng.min.x) as usize;
        let y = (p.y - self.rng.min.y) as usize;
        Some(y * self.width + x)
    }

    #[inline]
    fn point(&self, idx: usize) -> Point {
        let x = (idx % self.width) as i32 + self.rng.min.x;
        let y = (idx / self.width) as i32 + self.rng.min.y;
        Point::new(x, y)
    }

    fn reconstruct(&self, goal_idx: usize) -> Vec<Point> {
        let mut path = Vec::new();
        let mut ci = goal_idx;
        while ci != NO_PARENT {
            path.push(self.point(ci));
            ci = self.nodes[ci].parent;
        }
        path.reverse();
        path
    }
}

// ---------------------------------------------------------------------------
// Entry points
// ---------------------------------------------------------------------------

/// Find a walkable route from `start` to `goal`.
///
/// Movement is 4-directional unless `allow_diagonal` is set, in which case
/// the four diagonal moves are added. Remaining cost is estimated with the
/// Manhattan distance in both modes. See [`find_path_with`] for other
/// heuristics and an expansion budget.
///
/// On success the returned [`Path`] runs from `start` to `goal` inclusive.
/// When `start == goal` it holds that single point and no search is run.
pub fn find_path<G: GridOracle + ?Sized>(
    start: Point,
    goal: Point,
    grid: &G,
    allow_diagonal: bool,
) -> Result<Path, PathError> {
    find_path_with(start, goal, grid, &SearchOptions::new(allow_diagonal))
}

/// Find a walkable route from `start` to `goal` with explicit options.
///
/// Endpoints are checked in this order: start in bounds, goal in bounds,
/// start walkable, goal walkable. The first failing check is reported.
///
/// Among open cells with equal `f`, the one discovered first is expanded
/// first, so identical inputs always produce identical paths.
pub fn find_path_with<G: GridOracle + ?Sized>(
    start: Point,
    goal: Point,
    grid: &G,
    options: &SearchOptions,
) -> Result<Path, PathError> {
    validate(grid, start, goal).inspect_err(|e| log::debug!("path request rejected: {e}"))?;

    if start == goal {
        return Ok(Path::new(vec![start], 0.0, 0));
    }

    let result = search(grid, start, goal, options);
    match &result {
        Ok(path) => log::debug!(
            "path {start} -> {goal}: {} cells, cost {:.3}, {} expanded",
            path.len(),
            path.cost(),
            path.expanded()
        ),
        Err(e) => log::debug!("{e}"),
    }
    result
}

fn validate<G: GridOracle + ?Sized>(grid: &G, start: Point, goal: Point) -> Result<(), PathError> {
    for (endpoint, point) in [(Endpoint::Start, start), (Endpoint::Goal, goal)] {
        if !grid.in_bounds(point) {
            return Err(PathError::InvalidCoordinate { endpoint, point });
        }
    }
    for (endpoint, point) in [(Endpoint::Start, start), (Endpoint::Goal, goal)] {
        if !grid.is_walkable(point) {
            return Err(PathError::BlockedEndpoint { endpoint, point });
        }
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// A* loop
// ---------------------------------------------------------------------------

fn search<G: GridOracle + ?Sized>(
    grid: &G,
    start: Point,
    goal: Point,
    options: &SearchOptions,
) -> Result<Path, PathError> {
    let mut arena = Arena::new(grid.bounds());
    let (Some(start_idx), Some(goal_idx)) = (arena.idx(start), arena.idx(goal)) else {
        // `in_bounds` accepted a point outside `bounds`.
        let (endpoint, point) = if arena.idx(start).is_none() {
            (Endpoint::Start, start)
        } else {
            (Endpoint::Goal, goal)
        };
        return Err(PathError::InvalidCoordinate { endpoint, point });
    };
    let heuristic = options.heuristic;

    {
        let node = &mut arena.nodes[start_idx];
        node.g = 0.0;
        node.f = heuristic.estimate(start, goal);
        node.state = NodeState::Open;
    }

    let mut open: BinaryHeap<OpenRef> = BinaryHeap::new();
    open.push(OpenRef {
        f: arena.nodes[start_idx].f,
        seq: 0,
        idx: start_idx,
        stamp: 0,
    });
    let mut next_seq: u64 = 1;
    let mut expanded: usize = 0;

    while let Some(current) = open.pop() {
        let ci = current.idx;

        // Skip stale entries.
        {
            let node = &arena.nodes[ci];
            if node.state != NodeState::Open || node.stamp != current.stamp {
                continue;
            }
        }

        if let Some(limit) = options.max_expansions {
            if expanded >= limit {
                log::trace!("budget of {limit} expansions spent, {} open", open.len() + 1);
                return Err(PathError::ExpansionLimit { limit });
            }
        }

        arena.nodes[ci].state = NodeState::Closed;
        expanded += 1;

        if ci == goal_idx {
            let cost = arena.nodes[ci].g;
            return Ok(Path::new(arena.reconstruct(ci), cost, expanded));
        }

        let current_g = arena.nodes[ci].g;
        let current_point = arena.point(ci);

        for dir in directions(options.allow_diagonal) {
            let np = current_point + dir.offset();
            if !grid.in_bounds(np) || !grid.is_walkable(np) {
                continue;
            }
            let Some(ni) = arena.idx(np) else {
                continue;
            };

            let tentative_g = current_g + dir.step_cost();
            let n = &mut arena.nodes[ni];
            match n.state {
                NodeState::Closed => continue,
                NodeState::Open if tentative_g >= n.g => continue,
                NodeState::Open => {}
                NodeState::Unseen => {
                    n.state = NodeState::Open;
                    n.seq = next_seq;
                    next_seq += 1;
                }
            }

            n.g = tentative_g;
            n.f = tentative_g + heuristic.estimate(np, goal);
            n.parent = ci;
            n.stamp = n.stamp.wrapping_add(1);

            open.push(OpenRef {
                f: n.f,
                seq: n.seq,
                idx: ni,
                stamp: n.stamp,
            });
        }
    }

    Err(PathError::NoRouteExists { start, goal })
}
