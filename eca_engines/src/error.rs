use thiserror::Error;

/// Precondition violations rejected before any evolution takes place.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// Rule code outside `0..=255`.
    #[error("rule code {0} is outside 0..=255")]
    InvalidRuleCode(i64),

    /// Width or height is zero.
    #[error("invalid dimensions {width}x{height}: width and height must be positive")]
    InvalidDimensions { width: usize, height: usize },

    /// Initial state policy that is neither `centered` nor `random`.
    #[error("unknown initial state policy {0:?} (expected \"centered\" or \"random\")")]
    InvalidPolicy(String),
}

pub type Result<T> = std::result::Result<T, Error>;
