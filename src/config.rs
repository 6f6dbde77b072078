use eca_engines::SeedPolicy;
use std::path::{Path, PathBuf};

/// Parameters of a run; defaults reproduce the classic 400x200 atlas.
#[derive(Clone, Debug)]
pub struct Config {
    /// Cells per generation.
    pub width: usize,
    /// Number of generations, the seed included.
    pub height: usize,
    /// Side of the pixel square drawn for one cell.
    pub scale: u32,
    pub policy: SeedPolicy,
    /// Directory receiving `rule_{code}.png` files.
    pub out_dir: PathBuf,
    /// Worker threads of the batch driver (`None` lets rayon decide).
    pub jobs: Option<usize>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            width: Self::DEFAULT_WIDTH,
            height: Self::DEFAULT_HEIGHT,
            scale: Self::DEFAULT_SCALE,
            policy: SeedPolicy::Centered,
            out_dir: PathBuf::from(Self::DEFAULT_OUT_DIR),
            jobs: None,
        }
    }
}

impl Config {
    pub const DEFAULT_WIDTH: usize = 400;
    pub const DEFAULT_HEIGHT: usize = 200;
    pub const DEFAULT_SCALE: u32 = 2;
    pub const DEFAULT_OUT_DIR: &'static str = "output";

    /// Gray level of a dead cell.
    pub const BACKGROUND: u8 = 0xff;
    /// Gray level of a live cell.
    pub const FOREGROUND: u8 = 0x00;

    pub fn file_name(rule: u8) -> String {
        format!("rule_{}.png", rule)
    }

    /// Where the batch driver writes the image of `rule`.
    pub fn rule_path(&self, rule: u8) -> PathBuf {
        self.out_dir.join(Self::file_name(rule))
    }

    pub fn out_dir(&self) -> &Path {
        &self.out_dir
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rule_path() {
        let config = Config {
            out_dir: PathBuf::from("atlas"),
            ..Default::default()
        };
        assert_eq!(config.rule_path(0), Path::new("atlas").join("rule_0.png"));
        assert_eq!(config.rule_path(255), Path::new("atlas").join("rule_255.png"));
    }
}
