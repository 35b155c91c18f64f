pub mod a_star;
pub mod bfs;
pub mod dfs;

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use crate::grid::{Cell, Grid, DX, DY};

use self::a_star::AStar;
use self::bfs::Bfs;
use self::dfs::Dfs;

/// One search step: the cell popped off the frontier, the best-known
/// path from start to it, and the neighbors discovered this step with
/// their priority scores (1 for BFS/DFS, `f = g + h` for A*). The trace
/// is ordered by pop time and immutable once returned, which is what
/// makes playback scrubbing possible.
#[derive(Debug, Clone, PartialEq)]
pub struct IterationRecord {
    pub current: Cell,
    pub path: Vec<Cell>,
    pub neighbors: HashMap<Cell, i32>,
}

impl IterationRecord {
    fn expand(current: Cell) -> Self {
        Self {
            current,
            path: Vec::new(),
            neighbors: HashMap::new(),
        }
    }
}

/// A search engine reads exactly one grid at a time through a shared
/// handle, so the host can swap the active maze without rebuilding the
/// engine. "No path" is an empty path, never an error; the trace
/// accumulated up to frontier exhaustion is returned either way.
pub trait Solver {
    fn set_grid(&mut self, grid: Rc<RefCell<Grid>>);
    fn find_path(&mut self, start: Cell, end: Cell) -> (Vec<Cell>, Vec<IterationRecord>);
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SolverKind {
    Bfs,
    Dfs,
    AStar,
}

pub fn new_solver(kind: SolverKind, grid: Rc<RefCell<Grid>>) -> Box<dyn Solver> {
    match kind {
        SolverKind::Bfs => Box::new(Bfs::new(grid)),
        SolverKind::Dfs => Box::new(Dfs::new(grid)),
        SolverKind::AStar => Box::new(AStar::new(grid)),
    }
}

// The sole place grid semantics enter the search: 4-cardinal, in
// bounds, not a wall.
pub(crate) fn neighbors(grid: &Grid, cell: Cell) -> Vec<Cell> {
    let mut out = Vec::with_capacity(4);
    for dir in 0..4 {
        let nx = cell.x + DX[dir];
        let ny = cell.y + DY[dir];

        if grid.is_valid_cell(nx, ny) && !grid.is_wall(nx, ny) {
            out.push(Cell::new(nx, ny));
        }
    }

    out
}

pub(crate) fn manhattan(a: Cell, b: Cell) -> i32 {
    (a.x - b.x).abs() + (a.y - b.y).abs()
}

// Walks the parent map back to the start and reverses. Strict policy:
// if the walk cannot reach the start, the path is empty. Stopping on
// `current == start` covers both the BFS/DFS self-seeded start entry
// and A*, which records no parent for the start.
pub(crate) fn reconstruct_path(
    came_from: &HashMap<Cell, Cell>,
    current: Cell,
    start: Cell,
) -> Vec<Cell> {
    let mut path = vec![current];

    let mut current = current;
    while current != start {
        match came_from.get(&current) {
            Some(&parent) => {
                current = parent;
                path.push(current);
            }
            None => return Vec::new(),
        }
    }

    path.reverse();
    path
}
