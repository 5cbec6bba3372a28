use std::path::PathBuf;

use anyhow::{bail, ensure, Result};
use clap::Parser;

#[derive(Parser, Debug)]
#[command(about = "Play the 3D Tunnels puzzle from a terminal", version)]
pub struct Args {
    /// Seed for the puzzle generator (random when omitted)
    #[arg(long)]
    pub seed: Option<u64>,

    /// Optional JSON session config (instance, identified, targets)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Fixed puzzle layout JSON; replaces random generation
    #[arg(long)]
    pub layout: Option<PathBuf>,

    /// Instance label used in log lines (overrides --config)
    #[arg(long)]
    pub instance: Option<u32>,

    /// Number of nodes identified at the start (overrides --config)
    #[arg(long)]
    pub identified: Option<usize>,

    /// Number of targets to confirm (overrides --config)
    #[arg(long)]
    pub targets: Option<usize>,

    /// Read commands from this file instead of stdin
    #[arg(long)]
    pub script: Option<PathBuf>,

    /// End the run once this many strikes have been given
    #[arg(long)]
    pub max_strikes: Option<u32>,

    /// Path to write the command/outcome log as JSON
    #[arg(long)]
    pub event_log_json: Option<PathBuf>,

    /// Print the target nodes before play starts
    #[arg(long)]
    pub reveal: bool,

    /// Log every move, not just warnings
    #[arg(long)]
    pub verbose: bool,
}

#[derive(Debug)]
pub enum Source {
    Random { seed: Option<u64> },
    Layout(PathBuf),
}

#[derive(Debug)]
pub struct ConfigOverrides {
    pub instance: Option<u32>,
    pub identified: Option<usize>,
    pub targets: Option<usize>,
}

#[derive(Debug)]
pub struct RunArgs {
    pub source: Source,
    pub config: Option<PathBuf>,
    pub overrides: ConfigOverrides,
    pub script: Option<PathBuf>,
    pub max_strikes: Option<u32>,
    pub event_log_json: Option<PathBuf>,
    pub reveal: bool,
    pub verbose: bool,
}

pub fn parse() -> Result<RunArgs> {
    let args = Args::parse();
    args.into_run()
}

impl Args {
    fn into_run(self) -> Result<RunArgs> {
        if self.layout.is_some() && self.seed.is_some() {
            bail!("--seed has no effect together with --layout");
        }
        if let Some(limit) = self.max_strikes {
            ensure!(limit > 0, "--max-strikes must be at least 1");
        }

        let source = match self.layout {
            Some(path) => Source::Layout(path),
            None => Source::Random { seed: self.seed },
        };

        Ok(RunArgs {
            source,
            config: self.config,
            overrides: ConfigOverrides {
                instance: self.instance,
                identified: self.identified,
                targets: self.targets,
            },
            script: self.script,
            max_strikes: self.max_strikes,
            event_log_json: self.event_log_json,
            reveal: self.reveal,
            verbose: self.verbose,
        })
    }
}
