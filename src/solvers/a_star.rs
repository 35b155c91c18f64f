use std::cell::RefCell;
use std::cmp::Reverse;
use std::collections::{BinaryHeap, HashMap};
use std::rc::Rc;

use log::debug;

use crate::grid::{Cell, Grid};
use crate::solvers::{manhattan, neighbors, reconstruct_path, IterationRecord, Solver};

/// Priority frontier ordered by `f = g + h`, with uniform edge cost 1
/// and the Manhattan distance as heuristic -- admissible and consistent
/// on a 4-connected grid, so the returned path is optimal. Entries with
/// equal `f` are broken by cell order, which keeps the trace stable
/// across runs on the same maze.
pub struct AStar {
    grid: Rc<RefCell<Grid>>,
}

impl AStar {
    pub fn new(grid: Rc<RefCell<Grid>>) -> Self {
        Self { grid }
    }
}

impl Solver for AStar {
    fn set_grid(&mut self, grid: Rc<RefCell<Grid>>) {
        self.grid = grid;
    }

    fn find_path(&mut self, start: Cell, end: Cell) -> (Vec<Cell>, Vec<IterationRecord>) {
        let grid = self.grid.borrow();

        let mut open_set: BinaryHeap<Reverse<(i32, Cell)>> = BinaryHeap::new();
        let mut came_from = HashMap::new();
        let mut g_score: HashMap<Cell, i32> = HashMap::new();
        let mut trace = Vec::new();

        open_set.push(Reverse((0, start)));
        g_score.insert(start, 0);

        while let Some(Reverse((_, current))) = open_set.pop() {
            if current == end {
                debug!("a*: goal reached after {} expansions", trace.len());
                return (reconstruct_path(&came_from, current, start), trace);
            }

            let mut record = IterationRecord::expand(current);
            let current_g = g_score[&current];

            for neighbor in neighbors(&grid, current) {
                let tentative_g = current_g + 1;

                let improves = match g_score.get(&neighbor) {
                    Some(&known) => tentative_g < known,
                    None => true,
                };

                if improves {
                    came_from.insert(neighbor, current);
                    g_score.insert(neighbor, tentative_g);

                    let f_score = tentative_g + manhattan(neighbor, end);
                    open_set.push(Reverse((f_score, neighbor)));
                    record.neighbors.insert(neighbor, f_score);
                }
            }

            record.path = reconstruct_path(&came_from, current, start);
            trace.push(record);
        }

        debug!("a*: frontier exhausted after {} expansions", trace.len());
        (Vec::new(), trace)
    }
}
