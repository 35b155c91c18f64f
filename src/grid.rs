const DEFAULT_DIMS: (u32, u32) = (21, 21);

// Directions              N  E  S   W
pub const DX: [i32; 4] = [0, 1, 0, -1];
pub const DY: [i32; 4] = [1, 0, -1, 0];

/// One lattice position, compared and hashed by value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Cell {
    pub x: i32,
    pub y: i32,
}

impl Cell {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellState {
    Wall,
    Passage,
}

/// Wall/passage state for a rectangular cell lattice.
///
/// Width and height are forced odd since the generators carve passages
/// on alternating lattice positions; even values are bumped by one and
/// zero is treated as one.
pub struct Grid {
    width: u32,
    height: u32,

    cells: Vec<CellState>,
}

impl Grid {
    pub fn new() -> Self {
        Self::with_dims(DEFAULT_DIMS.0, DEFAULT_DIMS.1)
    }

    pub fn with_dims(width: u32, height: u32) -> Self {
        let width = normalize_dim(width);
        let height = normalize_dim(height);

        Self {
            cells: vec![CellState::Wall; (width * height) as usize],
            width,
            height,
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn is_valid_cell(&self, x: i32, y: i32) -> bool {
        x >= 0 && y >= 0 && x < self.width as i32 && y < self.height as i32
    }

    /// Panics on out-of-bounds coordinates; pre-check with
    /// `is_valid_cell`.
    pub fn is_wall(&self, x: i32, y: i32) -> bool {
        self.cell_at(x, y) == CellState::Wall
    }

    pub fn cell_at(&self, x: i32, y: i32) -> CellState {
        assert!(
            self.is_valid_cell(x, y),
            "cell ({}, {}) out of bounds for {}x{} grid",
            x,
            y,
            self.width,
            self.height
        );

        self.cells[(y as u32 * self.width + x as u32) as usize]
    }

    pub fn set_cell(&mut self, x: i32, y: i32, state: CellState) -> CellState {
        assert!(
            self.is_valid_cell(x, y),
            "cell ({}, {}) out of bounds for {}x{} grid",
            x,
            y,
            self.width,
            self.height
        );

        let index = (y as u32 * self.width + x as u32) as usize;
        let prev_state = self.cells[index];
        self.cells[index] = state;

        prev_state
    }

    /// Updates the declared dimensions without touching storage. Call
    /// `clear` (or run a generator, which clears first) before querying
    /// cells again.
    pub fn set_size(&mut self, width: u32, height: u32) {
        self.width = normalize_dim(width);
        self.height = normalize_dim(height);
    }

    /// Resets every cell to wall, sized to the declared dimensions.
    pub fn clear(&mut self) {
        self.cells = vec![CellState::Wall; (self.width * self.height) as usize];
    }

    /// Debug rendering: wall = block glyph, passage = space. Not a
    /// stable format.
    pub fn render_text(&self) -> String {
        let mut out = String::new();
        for y in 0..self.height as i32 {
            for x in 0..self.width as i32 {
                out.push(if self.is_wall(x, y) { '█' } else { ' ' });
            }
            out.push('\n');
        }

        out
    }
}

impl Default for Grid {
    fn default() -> Self {
        Self::new()
    }
}

fn normalize_dim(dim: u32) -> u32 {
    let dim = if dim == 0 { 1 } else { dim };

    if dim % 2 == 0 {
        dim + 1
    } else {
        dim
    }
}

#[cfg(test)]
mod test_grid {
    use super::*;

    #[test]
    fn it_works() {
        let mut grid = Grid::with_dims(5, 5);

        assert!(grid.is_wall(0, 0));
        assert_eq!(grid.set_cell(0, 0, CellState::Passage), CellState::Wall);
        assert!(!grid.is_wall(0, 0));

        grid.set_cell(4, 4, CellState::Passage);
        assert!(!grid.is_wall(4, 4));
        assert!(grid.is_wall(4, 3));

        grid.clear();
        assert!(grid.is_wall(0, 0));
        assert!(grid.is_wall(4, 4));
    }

    #[test]
    fn dims_are_forced_odd() {
        let grid = Grid::with_dims(20, 16);
        assert_eq!(grid.width(), 21);
        assert_eq!(grid.height(), 17);

        let grid = Grid::with_dims(21, 21);
        assert_eq!(grid.width(), 21);
        assert_eq!(grid.height(), 21);
    }

    #[test]
    fn degenerate_dims_normalize_to_one() {
        let grid = Grid::with_dims(0, 0);
        assert_eq!(grid.width(), 1);
        assert_eq!(grid.height(), 1);
        assert!(grid.is_wall(0, 0));
    }

    #[test]
    fn valid_cell_bounds() {
        let grid = Grid::with_dims(5, 7);

        assert!(grid.is_valid_cell(0, 0));
        assert!(grid.is_valid_cell(4, 6));
        assert!(!grid.is_valid_cell(-1, 0));
        assert!(!grid.is_valid_cell(0, -1));
        assert!(!grid.is_valid_cell(5, 0));
        assert!(!grid.is_valid_cell(0, 7));
    }

    #[test]
    #[should_panic(expected = "out of bounds")]
    fn wall_query_fails_fast_out_of_bounds() {
        let grid = Grid::with_dims(5, 5);
        grid.is_wall(5, 0);
    }

    #[test]
    fn set_size_defers_storage_to_clear() {
        let mut grid = Grid::with_dims(5, 5);
        grid.set_size(9, 8);

        assert_eq!(grid.width(), 9);
        assert_eq!(grid.height(), 9);

        grid.clear();
        assert!(grid.is_wall(8, 8));
    }

    #[test]
    fn text_rendering() {
        let mut grid = Grid::with_dims(3, 3);
        grid.set_cell(1, 0, CellState::Passage);

        assert_eq!(grid.render_text(), "█ █\n███\n███\n");
    }
}
