use crate::{Result, RuleTable};

/// Engine for an elementary cellular automaton on a ring of cells.
pub trait EcaEngine {
    /// Creates an engine whose current generation is `cells`.
    ///
    /// Fails with [`crate::Error::InvalidDimensions`] if `cells` is empty.
    fn from_generation(rule: RuleTable, cells: &[bool]) -> Result<Self>
    where
        Self: Sized;

    /// Number of cells in a generation.
    fn width(&self) -> usize;

    /// The transition table applied by [`EcaEngine::step`].
    fn rule(&self) -> RuleTable;

    /// Copies the current generation into `dst`.
    ///
    /// `dst.len()` must be equal to [`EcaEngine::width`].
    fn write_generation(&self, dst: &mut [bool]);

    /// Current generation as a freshly allocated vector.
    fn current_generation(&self) -> Vec<bool> {
        let mut cells = vec![false; self.width()];
        self.write_generation(&mut cells);
        cells
    }

    /// Replaces the current generation with the next one.
    ///
    /// Cell `0` and cell `width - 1` are neighbors.
    fn step(&mut self);

    /// Number of live cells in the current generation.
    fn population(&self) -> usize;

    /// Heap memory used by the engine.
    fn bytes_total(&self) -> usize;
}
