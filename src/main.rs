use std::cell::RefCell;
use std::rc::Rc;

use anyhow::Result;
use clap::{Parser, ValueEnum};
use log::info;

use maze_trace::generators::{new_generator, GeneratorKind};
use maze_trace::solvers::{new_solver, SolverKind};
use maze_trace::{Cell, Grid, Playback};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Algo {
    Backtracking,
    Kruskal,
    Prim,
}

impl From<Algo> for GeneratorKind {
    fn from(algo: Algo) -> Self {
        match algo {
            Algo::Backtracking => GeneratorKind::RecursiveBacktracking,
            Algo::Kruskal => GeneratorKind::Kruskal,
            Algo::Prim => GeneratorKind::Prim,
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Engine {
    Bfs,
    Dfs,
    AStar,
}

impl From<Engine> for SolverKind {
    fn from(engine: Engine) -> Self {
        match engine {
            Engine::Bfs => SolverKind::Bfs,
            Engine::Dfs => SolverKind::Dfs,
            Engine::AStar => SolverKind::AStar,
        }
    }
}

/// Generate a maze, solve it corner to corner, and print the result.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Maze width in cells (forced odd)
    #[arg(long, default_value_t = 21)]
    width: u32,

    /// Maze height in cells (forced odd)
    #[arg(long, default_value_t = 21)]
    height: u32,

    /// Random seed; 0 picks one from entropy
    #[arg(long, default_value_t = 0)]
    seed: u64,

    /// Maze generation algorithm
    #[arg(long, value_enum, default_value_t = Algo::Backtracking)]
    algo: Algo,

    /// Pathfinding algorithm
    #[arg(long, value_enum, default_value_t = Engine::AStar)]
    solver: Engine,

    /// Step through the search trace, printing each expansion
    #[arg(long)]
    replay: bool,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let mut grid = Grid::with_dims(args.width, args.height);
    new_generator(args.algo.into()).generate(&mut grid, args.seed);

    let start = Cell::new(0, 0);
    let end = Cell::new(grid.width() as i32 - 1, grid.height() as i32 - 1);

    let grid = Rc::new(RefCell::new(grid));
    let mut solver = new_solver(args.solver.into(), grid.clone());
    let (path, trace) = solver.find_path(start, end);

    info!(
        "{:?}/{:?}: {} expansions, path of {} cells",
        args.algo,
        args.solver,
        trace.len(),
        path.len()
    );

    if path.is_empty() {
        println!("no path from {:?} to {:?}", start, end);
        println!("{}", grid.borrow().render_text());
        return Ok(());
    }

    println!("{}", overlay_path(&grid.borrow(), &path));

    if args.replay {
        replay(&path, trace);
    }

    Ok(())
}

// Final-path overlay on the text rendering: wall = block glyph,
// passage = space, path = '*'.
fn overlay_path(grid: &Grid, path: &[Cell]) -> String {
    let mut rows: Vec<Vec<char>> = grid
        .render_text()
        .lines()
        .map(|line| line.chars().collect())
        .collect();

    for cell in path {
        rows[cell.y as usize][cell.x as usize] = '*';
    }

    rows.into_iter()
        .map(|row| row.into_iter().collect::<String>())
        .collect::<Vec<_>>()
        .join("\n")
}

fn replay(path: &[Cell], trace: Vec<maze_trace::IterationRecord>) {
    let total = trace.len();
    let mut playback = Playback::new(trace);
    playback.play();

    while playback.is_playing() {
        let record = match playback.current() {
            Some(record) => record,
            None => break,
        };

        println!(
            "step {}/{}: expand ({}, {}), path so far {} cells, {} discovered",
            playback.index() + 1,
            total,
            record.current.x,
            record.current.y,
            record.path.len(),
            record.neighbors.len()
        );

        if playback.index() + 1 == total {
            playback.pause();
        } else {
            playback.next();
        }
    }

    println!("final path: {} cells", path.len());
}
