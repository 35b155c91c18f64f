//! Maze generation and pathfinding core for step-by-step
//! visualization.
//!
//! Generators carve a spanning maze into a [`grid::Grid`] from a seed;
//! solvers search it and, alongside the final path, return an ordered
//! trace of every expansion for replay. Rendering and UI live in the
//! host application and consume only these types.

pub mod disjoint_set;
pub mod generators;
pub mod grid;
pub mod playback;
pub mod solvers;

pub use crate::grid::{Cell, CellState, Grid};
pub use crate::playback::Playback;
pub use crate::solvers::IterationRecord;
