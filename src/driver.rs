use crate::{render, Config, NiceInt};
use anyhow::{Context, Result};
use eca_engines::{evolve, History, SeedPolicy, RULE_COUNT};
use log::{debug, info};
use rayon::prelude::*;
use std::{
    fs,
    path::{Path, PathBuf},
    time::{Duration, Instant},
};

/// Outcome of [`run_batch`].
#[derive(Debug)]
pub struct BatchSummary {
    /// Images written, one per rule.
    pub paths: Vec<PathBuf>,
    /// Cells computed over all rules.
    pub cells: u64,
    /// Seed policy every rule started from.
    pub policy: SeedPolicy,
    pub elapsed: Duration,
}

/// Fixes the seed of a `Random` policy so that every rule of a batch starts
/// from the same generation.
fn resolve_seed(policy: SeedPolicy) -> SeedPolicy {
    use rand::{Rng, SeedableRng};

    match policy {
        SeedPolicy::Random { seed: None } => {
            let seed = rand_chacha::ChaCha8Rng::from_entropy().gen::<u64>();
            info!("Random seed: {}", seed);
            SeedPolicy::Random { seed: Some(seed) }
        }
        _ => policy,
    }
}

fn render_rule(config: &Config, policy: SeedPolicy, rule: u8) -> Result<PathBuf> {
    let history = evolve(rule as i64, config.width, config.height, policy)
        .with_context(|| format!("Failed to evolve rule {}", rule))?;
    let path = config.rule_path(rule);
    render::save_png(&history, config.scale, &path)?;
    debug!("rule {} -> {}", rule, path.display());
    Ok(path)
}

/// Evolves all 256 rules and writes `rule_{code}.png` for each into
/// `config.out_dir`.
///
/// Rules are rendered in parallel; the first failure aborts the batch.
pub fn run_batch(config: &Config) -> Result<BatchSummary> {
    let out_dir = config.out_dir();
    fs::create_dir_all(out_dir)
        .with_context(|| format!("Failed to create output directory: {}", out_dir.display()))?;

    let policy = resolve_seed(config.policy);
    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(config.jobs.unwrap_or(0))
        .build()
        .context("Failed to start worker threads")?;

    let timer = Instant::now();
    let paths = pool.install(|| {
        (0..=u8::MAX)
            .into_par_iter()
            .map(|rule| render_rule(config, policy, rule))
            .collect::<Result<Vec<_>>>()
    })?;

    let summary = BatchSummary {
        cells: (RULE_COUNT * config.width * config.height) as u64,
        paths,
        policy,
        elapsed: timer.elapsed(),
    };
    info!(
        "Rendered {} rules ({} cells, {} seed) into {} in {:?}",
        summary.paths.len(),
        NiceInt::from(summary.cells),
        summary.policy,
        out_dir.display(),
        summary.elapsed,
    );
    Ok(summary)
}

/// Evolves a single rule, writing its image to `png` when given.
pub fn run_single(config: &Config, rule: i64, png: Option<&Path>) -> Result<History> {
    let timer = Instant::now();
    let history = evolve(rule, config.width, config.height, config.policy)?;
    info!(
        "rule {}: {} generations of {} cells in {:?}, population {}",
        rule,
        history.height(),
        history.width(),
        timer.elapsed(),
        NiceInt::from_usize(history.population()),
    );
    if let Some(path) = png {
        render::save_png(&history, config.scale, path)?;
        info!("Wrote {}", path.display());
    }
    Ok(history)
}
