#![warn(clippy::all)]

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use eca::Config;
use eca_engines::SeedPolicy;
use log::LevelFilter;
use std::path::PathBuf;

/// Evolve elementary cellular automata and render their histories as PNG.
#[derive(Parser)]
#[command(name = "eca", version)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Render all 256 rules into `<out>/rule_<code>.png`.
    Batch {
        #[command(flatten)]
        run: RunArgs,
        /// Output directory.
        #[arg(long, default_value = Config::DEFAULT_OUT_DIR)]
        out: PathBuf,
        /// Worker threads (defaults to the number of CPUs).
        #[arg(long)]
        jobs: Option<usize>,
    },
    /// Evolve a single rule.
    #[command(allow_negative_numbers = true)]
    Rule {
        /// Rule code in 0..=255.
        rule: i64,
        #[command(flatten)]
        run: RunArgs,
        /// Write the rendered history to this file.
        #[arg(long)]
        png: Option<PathBuf>,
        /// Print the history as rows of 0 and 1.
        #[arg(long)]
        print: bool,
    },
}

#[derive(Args)]
struct RunArgs {
    /// Cells per generation.
    #[arg(long, default_value_t = Config::DEFAULT_WIDTH)]
    width: usize,
    /// Number of generations, the initial one included.
    #[arg(long, default_value_t = Config::DEFAULT_HEIGHT)]
    height: usize,
    /// Pixels per cell side.
    #[arg(long, default_value_t = Config::DEFAULT_SCALE)]
    scale: u32,
    /// Initial state: `centered` or `random`.
    #[arg(long, default_value = "centered")]
    policy: SeedPolicy,
    /// Seed for the `random` policy.
    #[arg(long)]
    seed: Option<u64>,
}

impl RunArgs {
    fn into_config(self) -> Config {
        Config {
            width: self.width,
            height: self.height,
            scale: self.scale,
            policy: self.policy.with_seed(self.seed),
            ..Default::default()
        }
    }
}

fn main() -> Result<()> {
    simple_logger::SimpleLogger::new()
        .with_level(LevelFilter::Info)
        .env()
        .init()?;

    match Cli::parse().command {
        Command::Batch { run, out, jobs } => {
            let config = Config {
                out_dir: out,
                jobs,
                ..run.into_config()
            };
            eca::run_batch(&config)?;
        }
        Command::Rule {
            rule,
            run,
            png,
            print,
        } => {
            let history = eca::run_single(&run.into_config(), rule, png.as_deref())?;
            if print {
                print!("{}", history);
            }
        }
    }
    Ok(())
}
