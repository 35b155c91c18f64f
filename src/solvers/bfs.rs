use std::cell::RefCell;
use std::collections::{HashMap, VecDeque};
use std::rc::Rc;

use log::debug;

use crate::grid::{Cell, Grid};
use crate::solvers::{neighbors, reconstruct_path, IterationRecord, Solver};

/// FIFO frontier; shortest path in edge count on the unweighted grid.
/// The parent map doubles as the visited set, seeded `start -> start`.
pub struct Bfs {
    grid: Rc<RefCell<Grid>>,
}

impl Bfs {
    pub fn new(grid: Rc<RefCell<Grid>>) -> Self {
        Self { grid }
    }
}

impl Solver for Bfs {
    fn set_grid(&mut self, grid: Rc<RefCell<Grid>>) {
        self.grid = grid;
    }

    fn find_path(&mut self, start: Cell, end: Cell) -> (Vec<Cell>, Vec<IterationRecord>) {
        let grid = self.grid.borrow();

        let mut queue = VecDeque::new();
        let mut came_from = HashMap::new();
        let mut trace = Vec::new();

        queue.push_back(start);
        came_from.insert(start, start);

        while let Some(current) = queue.pop_front() {
            if current == end {
                debug!("bfs: goal reached after {} expansions", trace.len());
                return (reconstruct_path(&came_from, current, start), trace);
            }

            let mut record = IterationRecord::expand(current);

            for neighbor in neighbors(&grid, current) {
                if !came_from.contains_key(&neighbor) {
                    queue.push_back(neighbor);
                    came_from.insert(neighbor, current);
                    // all edges weigh the same in BFS
                    record.neighbors.insert(neighbor, 1);
                }
            }

            record.path = reconstruct_path(&came_from, current, start);
            trace.push(record);
        }

        debug!("bfs: frontier exhausted after {} expansions", trace.len());
        (Vec::new(), trace)
    }
}
