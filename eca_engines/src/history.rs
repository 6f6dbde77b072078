use std::fmt;

/// Generations of an automaton stacked into a `height x width` grid.
///
/// Row `t` is the generation at time step `t`; row 0 is the initial state.
/// Cells are stored row-major in a single buffer allocated up front.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct History {
    cells: Vec<bool>,
    width: usize,
    height: usize,
}

impl History {
    pub(crate) fn blank(width: usize, height: usize) -> Self {
        assert!(width >= 1 && height >= 1);
        Self {
            cells: vec![false; width * height],
            width,
            height,
        }
    }

    pub(crate) fn row_mut(&mut self, t: usize) -> &mut [bool] {
        &mut self.cells[t * self.width..(t + 1) * self.width]
    }

    /// Number of cells in a generation.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Number of generations.
    pub fn height(&self) -> usize {
        self.height
    }

    /// State of cell `col` at time step `row`.
    pub fn get(&self, row: usize, col: usize) -> bool {
        assert!(col < self.width);
        self.cells[col + row * self.width]
    }

    /// Generation at time step `t`.
    pub fn row(&self, t: usize) -> &[bool] {
        &self.cells[t * self.width..(t + 1) * self.width]
    }

    pub fn rows(&self) -> impl ExactSizeIterator<Item = &[bool]> + '_ {
        self.cells.chunks_exact(self.width)
    }

    /// All cells, row-major.
    pub fn cells(&self) -> &[bool] {
        &self.cells
    }

    /// Total number of live cells over all generations.
    pub fn population(&self) -> usize {
        self.cells.iter().filter(|&&c| c).count()
    }
}

impl fmt::Display for History {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.rows() {
            for &cell in row {
                write!(f, "{}", cell as u8)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
