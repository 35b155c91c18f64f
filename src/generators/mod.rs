pub mod backtracking;
pub mod kruskal;
pub mod prim;

use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::grid::Grid;

use self::backtracking::RecursiveBacktracking;
use self::kruskal::Kruskal;
use self::prim::Prim;

/// A maze generator carves passages into the grid it is given. Every
/// variant resets the grid to all walls before carving, and any nonzero
/// seed makes the run fully deterministic.
pub trait Generator {
    fn generate(&self, grid: &mut Grid, seed: u64);
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GeneratorKind {
    RecursiveBacktracking,
    Kruskal,
    Prim,
}

pub fn new_generator(kind: GeneratorKind) -> Box<dyn Generator> {
    match kind {
        GeneratorKind::RecursiveBacktracking => Box::new(RecursiveBacktracking),
        GeneratorKind::Kruskal => Box::new(Kruskal),
        GeneratorKind::Prim => Box::new(Prim),
    }
}

/// Seed 0 requests a non-deterministic run.
pub(crate) fn seeded_rng(seed: u64) -> StdRng {
    if seed == 0 {
        StdRng::from_entropy()
    } else {
        StdRng::seed_from_u64(seed)
    }
}
