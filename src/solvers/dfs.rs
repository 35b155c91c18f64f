use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use log::debug;

use crate::grid::{Cell, Grid};
use crate::solvers::{neighbors, reconstruct_path, IterationRecord, Solver};

/// LIFO frontier; same mechanics as BFS otherwise. Finds a path, not
/// necessarily the shortest one -- that is the point of DFS, so no
/// attempt is made to match BFS results.
pub struct Dfs {
    grid: Rc<RefCell<Grid>>,
}

impl Dfs {
    pub fn new(grid: Rc<RefCell<Grid>>) -> Self {
        Self { grid }
    }
}

impl Solver for Dfs {
    fn set_grid(&mut self, grid: Rc<RefCell<Grid>>) {
        self.grid = grid;
    }

    fn find_path(&mut self, start: Cell, end: Cell) -> (Vec<Cell>, Vec<IterationRecord>) {
        let grid = self.grid.borrow();

        let mut stack = Vec::new();
        let mut came_from = HashMap::new();
        let mut trace = Vec::new();

        stack.push(start);
        came_from.insert(start, start);

        while let Some(current) = stack.pop() {
            if current == end {
                debug!("dfs: goal reached after {} expansions", trace.len());
                return (reconstruct_path(&came_from, current, start), trace);
            }

            let mut record = IterationRecord::expand(current);

            for neighbor in neighbors(&grid, current) {
                if !came_from.contains_key(&neighbor) {
                    stack.push(neighbor);
                    came_from.insert(neighbor, current);
                    record.neighbors.insert(neighbor, 1);
                }
            }

            record.path = reconstruct_path(&came_from, current, start);
            trace.push(record);
        }

        debug!("dfs: frontier exhausted after {} expansions", trace.len());
        (Vec::new(), trace)
    }
}
