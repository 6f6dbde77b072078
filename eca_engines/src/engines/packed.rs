use crate::{EcaEngine, Error, Result, RuleTable};

/// Engine that updates 64 cells at once with bitwise operations.
///
/// Cell `i` is bit `i % 64` of word `i / 64`. Bits of the last word past
/// `width` are kept at zero.
///
/// # Example
///
/// ```rust
/// use eca_engines::{EcaEngine, PackedEngine, RuleTable};
///
/// let mut cells = vec![false; 200];
/// cells[100] = true;
/// let mut engine = PackedEngine::from_generation(RuleTable::new(90), &cells).unwrap();
/// engine.step();
/// assert_eq!(engine.population(), 2);
/// ```
pub struct PackedEngine {
    /// The packed cells of the current generation
    data: Vec<u64>,
    /// Scratch buffer for the next generation
    next: Vec<u64>,
    width: usize,
    rule: RuleTable,
}

impl PackedEngine {
    const CELLS_IN_CHUNK: usize = 64;

    fn padding_mask(&self) -> u64 {
        match self.width % Self::CELLS_IN_CHUNK {
            0 => !0,
            r => (1 << r) - 1,
        }
    }

    /// Applies the rule to 64 neighborhoods given as `left`, `center` and
    /// `right` masks.
    #[inline]
    fn apply(outcomes: &[bool; 8], left: u64, center: u64, right: u64) -> u64 {
        let (nl, nc, nr) = (!left, !center, !right);
        let mut result = 0;
        for (pattern, &alive) in outcomes.iter().enumerate() {
            if !alive {
                continue;
            }
            let l = if pattern & 4 != 0 { left } else { nl };
            let c = if pattern & 2 != 0 { center } else { nc };
            let r = if pattern & 1 != 0 { right } else { nr };
            result |= l & c & r;
        }
        result
    }
}

impl EcaEngine for PackedEngine {
    fn from_generation(rule: RuleTable, cells: &[bool]) -> Result<Self> {
        if cells.is_empty() {
            return Err(Error::InvalidDimensions {
                width: 0,
                height: 1,
            });
        }
        let data = cells
            .chunks(Self::CELLS_IN_CHUNK)
            .map(|chunk| {
                chunk
                    .iter()
                    .enumerate()
                    .fold(0u64, |acc, (i, &alive)| acc | (alive as u64) << i)
            })
            .collect::<Vec<_>>();
        let next = vec![0; data.len()];
        Ok(Self {
            data,
            next,
            width: cells.len(),
            rule,
        })
    }

    fn width(&self) -> usize {
        self.width
    }

    fn rule(&self) -> RuleTable {
        self.rule
    }

    fn write_generation(&self, dst: &mut [bool]) {
        assert_eq!(dst.len(), self.width);
        for (i, cell) in dst.iter_mut().enumerate() {
            let chunk = self.data[i / Self::CELLS_IN_CHUNK];
            *cell = chunk >> (i % Self::CELLS_IN_CHUNK) & 1 == 1;
        }
    }

    fn step(&mut self) {
        // outcomes indexed by pattern instead of by bit position
        let mut outcomes = [false; 8];
        for (pattern, alive) in outcomes.iter_mut().enumerate() {
            *alive = self.rule.outcome(pattern as u8);
        }

        let (n, shift) = (self.data.len(), Self::CELLS_IN_CHUNK - 1);
        let last_pos = (self.width - 1) % Self::CELLS_IN_CHUNK;
        let first_cell = self.data[0] & 1;
        let last_cell = self.data[n - 1] >> last_pos & 1;

        for x in 0..n {
            let c = self.data[x];
            let carry_left = if x == 0 {
                last_cell
            } else {
                self.data[x - 1] >> shift
            };
            let carry_right = if x == n - 1 {
                first_cell << last_pos
            } else {
                self.data[x + 1] << shift
            };
            let l = (c << 1) | carry_left;
            let r = (c >> 1) | carry_right;
            self.next[x] = Self::apply(&outcomes, l, c, r);
        }
        self.next[n - 1] &= self.padding_mask();

        std::mem::swap(&mut self.data, &mut self.next);
    }

    fn population(&self) -> usize {
        self.data.iter().map(|x| x.count_ones() as usize).sum()
    }

    fn bytes_total(&self) -> usize {
        (self.data.capacity() + self.next.capacity()) * size_of::<u64>()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_packing_layout() {
        let mut cells = vec![false; 70];
        cells[0] = true;
        cells[63] = true;
        cells[69] = true;
        let engine = PackedEngine::from_generation(RuleTable::new(0), &cells).unwrap();
        assert_eq!(engine.data, vec![1 | 1 << 63, 1 << 5]);
        assert_eq!(engine.current_generation(), cells);
        assert_eq!(engine.padding_mask(), 0b11_1111);
    }

    #[test]
    fn test_padding_stays_clear() {
        let cells = vec![false; 10];
        let mut engine = PackedEngine::from_generation(RuleTable::new(255), &cells).unwrap();
        engine.step();
        assert_eq!(engine.data, vec![(1 << 10) - 1]);
        assert_eq!(engine.population(), 10);
    }

    #[test]
    fn test_ring_closes_across_words() {
        // rule 170 copies the right neighbor: the ring rotates left by one
        let mut cells = vec![false; 130];
        cells[0] = true;
        let mut engine = PackedEngine::from_generation(RuleTable::new(170), &cells).unwrap();
        engine.step();
        let gen = engine.current_generation();
        assert!(gen[129]);
        assert_eq!(engine.population(), 1);

        // rule 240 copies the left neighbor: the ring rotates right by one
        let mut engine = PackedEngine::from_generation(RuleTable::new(240), &gen).unwrap();
        engine.step();
        assert_eq!(engine.current_generation(), cells);
    }
}
