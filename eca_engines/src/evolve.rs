use crate::{DefaultEngine, EcaEngine, Error, History, Result, RuleTable, SeedPolicy};
use std::time::Instant;

/// Evolves `rule_code` for `height` generations of `width` cells seeded by `policy`.
///
/// Row 0 of the returned history is the seed, row `t` is obtained from row
/// `t - 1` with the leftmost and rightmost cells treated as neighbors.
///
/// # Errors
///
/// [`Error::InvalidRuleCode`] if `rule_code` is outside `0..=255`,
/// [`Error::InvalidDimensions`] if `width` or `height` is zero.
///
/// # Example
///
/// ```rust
/// use eca_engines::{evolve, SeedPolicy};
///
/// let history = evolve(90, 5, 3, SeedPolicy::Centered).unwrap();
/// assert_eq!(history.to_string(), "00010\n00101\n11000\n");
/// ```
pub fn evolve(rule_code: i64, width: usize, height: usize, policy: SeedPolicy) -> Result<History> {
    evolve_with::<DefaultEngine>(rule_code, width, height, policy)
}

/// [`evolve`] with an explicit engine.
pub fn evolve_with<E: EcaEngine>(
    rule_code: i64,
    width: usize,
    height: usize,
    policy: SeedPolicy,
) -> Result<History> {
    let rule = RuleTable::build(rule_code)?;
    check_dimensions(width, height)?;

    let mut history = History::blank(width, height);
    policy.fill(history.row_mut(0));
    run::<E>(rule, history)
}

/// Evolves `rule_code` for `height` generations starting from `initial`.
pub fn evolve_from(rule_code: i64, initial: &[bool], height: usize) -> Result<History> {
    evolve_from_with::<DefaultEngine>(rule_code, initial, height)
}

/// [`evolve_from`] with an explicit engine.
pub fn evolve_from_with<E: EcaEngine>(
    rule_code: i64,
    initial: &[bool],
    height: usize,
) -> Result<History> {
    let rule = RuleTable::build(rule_code)?;
    check_dimensions(initial.len(), height)?;

    let mut history = History::blank(initial.len(), height);
    history.row_mut(0).copy_from_slice(initial);
    run::<E>(rule, history)
}

fn check_dimensions(width: usize, height: usize) -> Result<()> {
    if width == 0 || height == 0 {
        return Err(Error::InvalidDimensions { width, height });
    }
    Ok(())
}

/// Fills rows `1..height` of a history whose row 0 is already seeded.
fn run<E: EcaEngine>(rule: RuleTable, mut history: History) -> Result<History> {
    let timer = Instant::now();
    let mut engine = E::from_generation(rule, history.row(0))?;
    for t in 1..history.height() {
        engine.step();
        engine.write_generation(history.row_mut(t));
    }
    log::debug!(
        "rule {}: {} generations of {} cells in {:?} ({} bytes of engine buffers)",
        rule.code(),
        history.height(),
        history.width(),
        timer.elapsed(),
        engine.bytes_total(),
    );
    Ok(history)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::PackedEngine;

    fn cells(bits: &[u8]) -> Vec<bool> {
        bits.iter().map(|&b| b == 1).collect()
    }

    #[test]
    fn test_rule_90_from_middle() {
        let history = evolve_from(90, &cells(&[0, 0, 1, 0, 0]), 2).unwrap();
        assert_eq!(history.row(1), cells(&[0, 1, 0, 1, 0]));
    }

    #[test]
    fn test_shape() {
        for (width, height) in [(1, 1), (1, 7), (5, 1), (400, 200), (64, 3)] {
            let history = evolve(110, width, height, SeedPolicy::Centered).unwrap();
            assert_eq!(history.width(), width);
            assert_eq!(history.height(), height);
            assert_eq!(history.rows().len(), height);
            assert!(history.rows().all(|row| row.len() == width));
        }
    }

    #[test]
    fn test_rule_0_dies_out() {
        let history = evolve(0, 31, 10, SeedPolicy::Centered).unwrap();
        assert_eq!(history.row(0).iter().filter(|&&c| c).count(), 1);
        assert!(history.rows().skip(1).all(|row| row.iter().all(|&c| !c)));
    }

    #[test]
    fn test_rule_255_fills() {
        for policy in [SeedPolicy::Centered, SeedPolicy::Random { seed: Some(7) }] {
            let history = evolve(255, 31, 10, policy).unwrap();
            assert!(history.rows().skip(1).all(|row| row.iter().all(|&c| c)));
        }
    }

    #[test]
    fn test_seed_row() {
        let history = evolve(30, 4, 2, SeedPolicy::Centered).unwrap();
        assert_eq!(history.row(0), cells(&[0, 0, 1, 0]));
        let history = evolve(30, 1, 2, SeedPolicy::Centered).unwrap();
        assert_eq!(history.row(0), cells(&[1]));
    }

    #[test]
    fn test_ring_boundary() {
        for width in [3, 5, 64, 65, 200] {
            // rule 16 fires only on 100: cell 0 sees cell `width - 1` on its left
            let mut initial = vec![false; width];
            initial[width - 1] = true;
            for history in [
                evolve_from_with::<DefaultEngine>(16, &initial, 2).unwrap(),
                evolve_from_with::<PackedEngine>(16, &initial, 2).unwrap(),
            ] {
                let mut expected = vec![false; width];
                expected[0] = true;
                assert_eq!(history.row(1), expected);
            }

            // rule 2 fires only on 001: cell `width - 1` sees cell 0 on its right
            let mut initial = vec![false; width];
            initial[0] = true;
            for history in [
                evolve_from_with::<DefaultEngine>(2, &initial, 2).unwrap(),
                evolve_from_with::<PackedEngine>(2, &initial, 2).unwrap(),
            ] {
                let mut expected = vec![false; width];
                expected[width - 1] = true;
                assert_eq!(history.row(1), expected);
            }
        }
    }

    #[test]
    fn test_deterministic() {
        for policy in [SeedPolicy::Centered, SeedPolicy::Random { seed: Some(42) }] {
            let a = evolve(30, 101, 50, policy).unwrap();
            let b = evolve(30, 101, 50, policy).unwrap();
            assert_eq!(a, b);
        }
    }

    #[test]
    fn test_invalid_input() {
        assert_eq!(
            evolve(30, 0, 10, SeedPolicy::Centered),
            Err(Error::InvalidDimensions {
                width: 0,
                height: 10
            })
        );
        assert_eq!(
            evolve(30, 10, 0, SeedPolicy::Centered),
            Err(Error::InvalidDimensions {
                width: 10,
                height: 0
            })
        );
        assert_eq!(
            evolve(-1, 10, 10, SeedPolicy::Centered),
            Err(Error::InvalidRuleCode(-1))
        );
        assert_eq!(
            evolve(256, 10, 10, SeedPolicy::Centered),
            Err(Error::InvalidRuleCode(256))
        );
        assert!(evolve_from(30, &[], 10).is_err());
    }
}
