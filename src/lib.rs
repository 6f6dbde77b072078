mod config;
mod driver;
mod render;
mod utils;

pub use config::Config;
pub use driver::{run_batch, run_single, BatchSummary};
pub use render::{save_png, to_image};
pub use utils::NiceInt;
