use log::debug;
use rand::prelude::*;
use rand::rngs::StdRng;

use crate::generators::{seeded_rng, Generator};
use crate::grid::{CellState, Grid, DX, DY};

/// Depth-first carve. The textbook formulation recurses once per
/// lattice cell, which blows the call stack on large mazes; this keeps
/// the frames on the heap instead. Each frame remembers its shuffled
/// direction order and how far through it the walk has gotten, so the
/// carve order matches the recursive version exactly.
pub struct RecursiveBacktracking;

struct Frame {
    x: i32,
    y: i32,
    directions: [usize; 4],
    next: usize,
}

impl Frame {
    fn enter(x: i32, y: i32, rng: &mut StdRng) -> Self {
        let mut directions = [0, 1, 2, 3];
        directions.shuffle(rng);

        Self {
            x,
            y,
            directions,
            next: 0,
        }
    }
}

impl Generator for RecursiveBacktracking {
    fn generate(&self, grid: &mut Grid, seed: u64) {
        grid.clear();
        let mut rng = seeded_rng(seed);

        grid.set_cell(0, 0, CellState::Passage);
        let mut stack = vec![Frame::enter(0, 0, &mut rng)];

        while !stack.is_empty() {
            let top = stack.len() - 1;
            let (cx, cy) = (stack[top].x, stack[top].y);

            let mut descend = None;
            while stack[top].next < 4 {
                let dir = stack[top].directions[stack[top].next];
                stack[top].next += 1;

                let nx = cx + DX[dir] * 2;
                let ny = cy + DY[dir] * 2;

                if grid.is_valid_cell(nx, ny) && grid.is_wall(nx, ny) {
                    descend = Some((dir, nx, ny));
                    break;
                }
            }

            match descend {
                Some((dir, nx, ny)) => {
                    grid.set_cell(cx + DX[dir], cy + DY[dir], CellState::Passage);
                    grid.set_cell(nx, ny, CellState::Passage);
                    stack.push(Frame::enter(nx, ny, &mut rng));
                }
                None => {
                    stack.pop();
                }
            }
        }

        debug!(
            "recursive backtracking: carved {}x{} maze",
            grid.width(),
            grid.height()
        );
    }
}
