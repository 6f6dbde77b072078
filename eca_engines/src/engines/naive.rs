use crate::{EcaEngine, Error, Result, RuleTable};

/// One `bool` per cell; every cell goes through [`RuleTable::lookup`].
pub struct NaiveEngine {
    cells_curr: Vec<bool>,
    cells_next: Vec<bool>,
    rule: RuleTable,
}

impl NaiveEngine {
    /// The `(left, center, right)` neighborhood of cell `i`.
    fn neighborhood(&self, i: usize) -> (bool, bool, bool) {
        let width = self.cells_curr.len();
        let i1 = if i == 0 { width - 1 } else { i - 1 };
        let i2 = if i == width - 1 { 0 } else { i + 1 };
        (self.cells_curr[i1], self.cells_curr[i], self.cells_curr[i2])
    }
}

impl EcaEngine for NaiveEngine {
    fn from_generation(rule: RuleTable, cells: &[bool]) -> Result<Self> {
        if cells.is_empty() {
            return Err(Error::InvalidDimensions {
                width: 0,
                height: 1,
            });
        }
        Ok(Self {
            cells_curr: cells.to_vec(),
            cells_next: vec![false; cells.len()],
            rule,
        })
    }

    fn width(&self) -> usize {
        self.cells_curr.len()
    }

    fn rule(&self) -> RuleTable {
        self.rule
    }

    fn write_generation(&self, dst: &mut [bool]) {
        dst.copy_from_slice(&self.cells_curr);
    }

    fn step(&mut self) {
        for i in 0..self.cells_curr.len() {
            let (left, center, right) = self.neighborhood(i);
            self.cells_next[i] = self.rule.lookup(left, center, right);
        }
        std::mem::swap(&mut self.cells_next, &mut self.cells_curr);
    }

    fn population(&self) -> usize {
        self.cells_curr.iter().filter(|&&c| c).count()
    }

    fn bytes_total(&self) -> usize {
        (self.cells_curr.capacity() + self.cells_next.capacity()) * size_of::<bool>()
    }
}
