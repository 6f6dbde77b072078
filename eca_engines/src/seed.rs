use crate::Error;
use std::{fmt, str::FromStr};

/// How generation 0 is filled.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SeedPolicy {
    /// A single live cell at index `(width + 1) / 2`.
    ///
    /// For even widths this is one past the middle. A width of 1 wraps the
    /// index around to 0.
    #[default]
    Centered,
    /// Every cell is live with probability 1/2.
    ///
    /// `seed` - random seed (if `None`, then random seed is generated)
    Random { seed: Option<u64> },
}

impl SeedPolicy {
    /// Fills `cells` with generation 0 according to the policy.
    pub fn fill(&self, cells: &mut [bool]) {
        use rand::{Rng, SeedableRng};

        if cells.is_empty() {
            return;
        }
        match *self {
            SeedPolicy::Centered => {
                cells.fill(false);
                cells[centered_index(cells.len())] = true;
            }
            SeedPolicy::Random { seed } => {
                let mut rng = if let Some(x) = seed {
                    rand_chacha::ChaCha8Rng::seed_from_u64(x)
                } else {
                    rand_chacha::ChaCha8Rng::from_entropy()
                };
                for cell in cells.iter_mut() {
                    *cell = rng.gen_bool(0.5);
                }
            }
        }
    }

    /// Generation 0 of the given width.
    pub fn generate(&self, width: usize) -> Vec<bool> {
        let mut cells = vec![false; width];
        self.fill(&mut cells);
        cells
    }

    /// Same policy with the random seed replaced; `Centered` is unaffected.
    pub fn with_seed(self, seed: Option<u64>) -> Self {
        match self {
            SeedPolicy::Centered => self,
            SeedPolicy::Random { .. } => SeedPolicy::Random { seed },
        }
    }
}

/// Index of the live cell of a centered seed.
pub fn centered_index(width: usize) -> usize {
    (width + 1) / 2 % width
}

impl FromStr for SeedPolicy {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "centered" | "center" => Ok(SeedPolicy::Centered),
            "random" => Ok(SeedPolicy::Random { seed: None }),
            _ => Err(Error::InvalidPolicy(s.to_string())),
        }
    }
}

impl fmt::Display for SeedPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SeedPolicy::Centered => write!(f, "centered"),
            SeedPolicy::Random { seed: Some(seed) } => write!(f, "random (seed {})", seed),
            SeedPolicy::Random { seed: None } => write!(f, "random"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_centered_index() {
        assert_eq!(centered_index(1), 0);
        assert_eq!(centered_index(2), 1);
        assert_eq!(centered_index(4), 2);
        assert_eq!(centered_index(5), 3);
        assert_eq!(centered_index(400), 200);
    }

    #[test]
    fn test_centered_has_single_live_cell() {
        for width in 1..100 {
            let cells = SeedPolicy::Centered.generate(width);
            assert_eq!(cells.len(), width);
            assert_eq!(cells.iter().filter(|&&c| c).count(), 1);
            assert!(cells[centered_index(width)]);
        }
    }

    #[test]
    fn test_random_is_reproducible() {
        let policy = SeedPolicy::Random { seed: Some(42) };
        let a = policy.generate(1000);
        let b = policy.generate(1000);
        assert_eq!(a, b);
        let population = a.iter().filter(|&&c| c).count();
        assert!((400..600).contains(&population), "population={}", population);

        let c = SeedPolicy::Random { seed: Some(43) }.generate(1000);
        assert_ne!(a, c);
    }

    #[test]
    fn test_parse() {
        assert_eq!("centered".parse::<SeedPolicy>(), Ok(SeedPolicy::Centered));
        assert_eq!(" Random ".parse::<SeedPolicy>(), Ok(SeedPolicy::Random { seed: None }));
        assert_eq!(
            "spiral".parse::<SeedPolicy>(),
            Err(Error::InvalidPolicy("spiral".to_string()))
        );
    }

    #[test]
    fn test_with_seed() {
        assert_eq!(
            SeedPolicy::Random { seed: None }.with_seed(Some(7)),
            SeedPolicy::Random { seed: Some(7) }
        );
        assert_eq!(SeedPolicy::Centered.with_seed(Some(7)), SeedPolicy::Centered);
    }
}
