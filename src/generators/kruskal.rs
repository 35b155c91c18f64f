use log::debug;
use rand::prelude::*;

use crate::disjoint_set::DisjointSet;
use crate::generators::{seeded_rng, Generator};
use crate::grid::{CellState, Grid};

/// Global algorithm: every lattice cell starts as its own component,
/// candidate walls are processed in shuffled order, and a wall comes
/// down exactly when it separates two components. The whole list is
/// processed; wall removal is gated solely by the union-find check.
pub struct Kruskal;

struct Wall {
    // lattice cells on either side
    x1: i32,
    y1: i32,
    x2: i32,
    y2: i32,
    // the wall cell between them
    wx: i32,
    wy: i32,
}

impl Generator for Kruskal {
    fn generate(&self, grid: &mut Grid, seed: u64) {
        grid.clear();
        let mut rng = seeded_rng(seed);

        let width = grid.width() as i32;
        let height = grid.height() as i32;

        let mut walls = Vec::new();
        for y in (0..height).step_by(2) {
            for x in (0..width).step_by(2) {
                if x + 2 < width {
                    walls.push(Wall {
                        x1: x,
                        y1: y,
                        x2: x + 2,
                        y2: y,
                        wx: x + 1,
                        wy: y,
                    });
                }
                if y + 2 < height {
                    walls.push(Wall {
                        x1: x,
                        y1: y,
                        x2: x,
                        y2: y + 2,
                        wx: x,
                        wy: y + 1,
                    });
                }
            }
        }

        for y in (0..height).step_by(2) {
            for x in (0..width).step_by(2) {
                grid.set_cell(x, y, CellState::Passage);
            }
        }

        walls.shuffle(&mut rng);

        let cells_across = ((width + 1) / 2) as usize;
        let cells_down = ((height + 1) / 2) as usize;
        let mut ds = DisjointSet::new(cells_across * cells_down);

        let mut removed = 0;
        for wall in &walls {
            let cell1 = (wall.y1 / 2) as usize * cells_across + (wall.x1 / 2) as usize;
            let cell2 = (wall.y2 / 2) as usize * cells_across + (wall.x2 / 2) as usize;

            if !ds.connected(cell1, cell2) {
                grid.set_cell(wall.wx, wall.wy, CellState::Passage);
                ds.unite(cell1, cell2);
                removed += 1;
            }
        }

        debug!(
            "kruskal: removed {} of {} candidate walls",
            removed,
            walls.len()
        );
    }
}
