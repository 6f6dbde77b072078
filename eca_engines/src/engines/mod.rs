mod naive;
mod packed;

pub use naive::NaiveEngine;
pub use packed::PackedEngine;
