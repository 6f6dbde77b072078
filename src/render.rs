use crate::Config;
use anyhow::{ensure, Context, Result};
use eca_engines::History;
use image::{GrayImage, ImageFormat, Luma};
use std::path::Path;

/// Draws `history` with every cell as a `scale x scale` square.
///
/// Generation `t` occupies pixel rows `t * scale..(t + 1) * scale`; live cells
/// are black on a white background.
pub fn to_image(history: &History, scale: u32) -> Result<GrayImage> {
    ensure!(scale > 0, "scale must be positive");
    let scaled = |cells: usize| {
        u32::try_from(cells)
            .ok()
            .and_then(|n| n.checked_mul(scale))
            .with_context(|| format!("{} cells scaled by {} overflow the image size", cells, scale))
    };
    let (width, height) = (scaled(history.width())?, scaled(history.height())?);

    Ok(GrayImage::from_fn(width, height, |x, y| {
        let alive = history.get((y / scale) as usize, (x / scale) as usize);
        Luma([if alive {
            Config::FOREGROUND
        } else {
            Config::BACKGROUND
        }])
    }))
}

/// Renders `history` and writes it to `path` as PNG.
pub fn save_png(history: &History, scale: u32, path: &Path) -> Result<()> {
    let image = to_image(history, scale)?;
    image
        .save_with_format(path, ImageFormat::Png)
        .with_context(|| format!("Failed to write image: {}", path.display()))
}
