#![warn(clippy::all, clippy::cargo)]

mod engines;
mod error;
mod evolve;
mod history;
mod rule;
mod seed;
mod traits;

pub use engines::{NaiveEngine, PackedEngine};
pub use error::{Error, Result};
pub use evolve::{evolve, evolve_from, evolve_from_with, evolve_with};
pub use history::History;
pub use rule::RuleTable;
pub use seed::{centered_index, SeedPolicy};
pub use traits::EcaEngine;

pub type DefaultEngine = NaiveEngine;

/// Number of distinct elementary rules.
pub const RULE_COUNT: usize = 256;
