use crate::{Error, Result};

/// Transition table of an elementary cellular automaton.
///
/// `outcomes[k]` is the k-th bit of the rule code, most significant bit first,
/// so `outcomes[7 - p]` is the next state for the neighborhood pattern
/// `p = 4 * left + 2 * center + right`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct RuleTable {
    outcomes: [bool; 8],
}

impl RuleTable {
    /// Builds the table of an already validated rule code.
    pub fn new(code: u8) -> Self {
        let mut outcomes = [false; 8];
        let (mut quotient, mut i) = (code, outcomes.len());
        while quotient > 0 {
            i -= 1;
            outcomes[i] = quotient % 2 == 1;
            quotient /= 2;
        }
        Self { outcomes }
    }

    /// Builds the table of `code`, rejecting anything outside `0..=255`.
    pub fn build(code: i64) -> Result<Self> {
        u8::try_from(code)
            .map(Self::new)
            .map_err(|_| Error::InvalidRuleCode(code))
    }

    /// Next state of a cell given its left neighbor, itself and its right neighbor.
    #[inline]
    pub fn lookup(&self, left: bool, center: bool, right: bool) -> bool {
        self.outcome((left as u8) << 2 | (center as u8) << 1 | right as u8)
    }

    /// Next state for the neighborhood pattern `pattern` (`0..8`).
    #[inline]
    pub fn outcome(&self, pattern: u8) -> bool {
        self.outcomes[7 - pattern as usize]
    }

    /// The table in most-significant-bit-first order.
    pub fn outcomes(&self) -> [bool; 8] {
        self.outcomes
    }

    /// The rule code this table was derived from.
    pub fn code(&self) -> u8 {
        self.outcomes
            .iter()
            .fold(0, |acc, &bit| acc << 1 | bit as u8)
    }
}

impl TryFrom<i64> for RuleTable {
    type Error = Error;

    fn try_from(code: i64) -> Result<Self> {
        Self::build(code)
    }
}
