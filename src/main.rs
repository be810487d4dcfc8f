//! Page replacement simulator CLI.

use std::io::{self, Write};
use std::num::NonZeroU32;
use std::path::PathBuf;
use std::process;

use clap::{ArgAction, Parser};
use log::info;

use pagesim::common::config::OutputFormat;
use pagesim::input::{
    parse_references, random_references, read_references, DEFAULT_MAX_PAGE,
    DEFAULT_RANDOM_LENGTH,
};
use pagesim::render::{comparison_table, history_table, summary_line};
use pagesim::{
    Comparison, Engine, OptimalStrategy, PageId, Policy, Result, SimulationConfig,
    SimulationResult,
};

#[derive(Parser, Debug)]
#[command(
    name = "pagesim",
    author,
    version,
    about = "Simulate FIFO, LRU and Optimal page replacement",
    long_about = None,
)]
struct Cli {
    /// Reference string, e.g. "7 0 1 2 0 3" or "7,0,1,2,0,3".
    #[arg(short = 'r', long, conflicts_with_all = ["input", "random"])]
    refs: Option<String>,

    /// File holding the reference string.
    #[arg(short = 'i', long, conflicts_with_all = ["refs", "random"])]
    input: Option<PathBuf>,

    /// Draw a random reference string of this length. Without any
    /// references, 10 are drawn.
    #[arg(long, value_name = "LEN")]
    random: Option<usize>,

    /// Largest page id for random references.
    #[arg(long, default_value_t = DEFAULT_MAX_PAGE)]
    max_page: NonZeroU32,

    /// Seed for random references; drawn at random and logged when omitted.
    #[arg(long)]
    seed: Option<u64>,

    /// JSON configuration file; other flags override its fields.
    #[arg(short = 'c', long)]
    config: Option<PathBuf>,

    /// Number of frames [default: 3].
    #[arg(short = 'f', long, allow_negative_numbers = true)]
    frames: Option<i64>,

    /// Policy to run (fifo, lru, optimal). Repeat for several; omit for all.
    #[arg(short = 'p', long = "policy")]
    policies: Vec<Policy>,

    /// Lookahead strategy for the Optimal policy.
    #[arg(long, value_enum)]
    strategy: Option<OptimalStrategy>,

    /// Output format.
    #[arg(long, value_enum)]
    format: Option<OutputFormat>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short = 'v', long, action = ArgAction::Count)]
    verbose: u8,
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("\x1b[1;31merror:\x1b[0m {}", e);
        process::exit(1);
    }
}

/// `RUST_LOG` wins over `-v` when set.
fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp(None)
        .init();
}

/// Merge the configuration file (if any) with command-line overrides.
fn build_config(cli: Cli) -> Result<SimulationConfig> {
    let mut config = match &cli.config {
        Some(path) => {
            info!("loading configuration from {}", path.display());
            SimulationConfig::load(path)?
        }
        None => SimulationConfig::default(),
    };

    if let Some(text) = &cli.refs {
        config.references = parse_references(text)?;
    } else if let Some(path) = &cli.input {
        config.references = read_references(path)?;
    } else if let Some(len) = cli.random {
        config.references = draw_references(&cli, len);
    } else if config.references.is_empty() {
        config.references = draw_references(&cli, DEFAULT_RANDOM_LENGTH);
    }
    if let Some(frames) = cli.frames {
        config.frames = frames;
    }
    if !cli.policies.is_empty() {
        config.policies = cli.policies;
    }
    if let Some(strategy) = cli.strategy {
        config.optimal_strategy = strategy;
    }
    if let Some(format) = cli.format {
        config.output = format;
    }
    Ok(config)
}

fn draw_references(cli: &Cli, len: usize) -> Vec<PageId> {
    let seed = cli.seed.unwrap_or_else(rand::random);
    info!("drawing {} random references with seed {}", len, seed);
    random_references(len, cli.max_page, seed)
}

fn run(cli: Cli) -> Result<()> {
    let config = build_config(cli)?;
    let capacity = config.validate()?;
    info!(
        "running {} references with {} under {:?}",
        config.references.len(),
        capacity,
        config.policies()
    );

    let engine = Engine::new().with_optimal_strategy(config.optimal_strategy);
    let results: Vec<SimulationResult> = config
        .policies()
        .iter()
        .map(|&policy| engine.run(&config.references, capacity, policy))
        .collect();

    let stdout = io::stdout();
    let mut out = stdout.lock();
    match config.output {
        OutputFormat::Summary => {
            for result in &results {
                writeln!(out, "{}", summary_line(result))?;
            }
            if results.len() > 1 {
                let comparison = Comparison::new(capacity, results);
                writeln!(out)?;
                write!(out, "{}", comparison_table(&comparison))?;
            }
        }
        OutputFormat::Table => {
            for (i, result) in results.iter().enumerate() {
                if i > 0 {
                    writeln!(out)?;
                }
                write!(out, "{}", history_table(result))?;
            }
        }
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut out, &results)?;
            writeln!(out)?;
        }
    }
    out.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::fs;

    use clap::error::ErrorKind;
    use clap::CommandFactory;
    use pagesim::Error;
    use tempfile::tempdir;

    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("pagesim").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_flags_override_config_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("sim.json");
        fs::write(
            &path,
            r#"{ "references": [1, 2, 3], "frames": 4, "policies": ["lru"], "output": "table" }"#,
        )
        .unwrap();
        let path = path.to_string_lossy().into_owned();

        let config = build_config(parse(&["-c", path.as_str(), "-r", "5 6", "-f", "2", "-p", "FIFO"]))
            .unwrap();
        assert_eq!(config.references, PageId::sequence([5, 6]));
        assert_eq!(config.frames, 2);
        assert_eq!(config.policies(), &[Policy::Fifo]);
        // Not overridden
        assert_eq!(config.output, OutputFormat::Table);

        let config = build_config(parse(&["-c", path.as_str()])).unwrap();
        assert_eq!(config.references, PageId::sequence([1, 2, 3]));
        assert_eq!(config.frames, 4);
        assert_eq!(config.policies(), &[Policy::Lru]);
    }

    #[test]
    fn test_reference_sources_conflict() {
        for args in [
            ["pagesim", "-r", "1 2", "-i", "refs.txt"],
            ["pagesim", "-r", "1 2", "--random", "5"],
            ["pagesim", "-i", "refs.txt", "--random", "5"],
        ] {
            let err = Cli::try_parse_from(args).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::ArgumentConflict);
        }
    }

    #[test]
    fn test_negative_frames_reported_as_given() {
        let config = build_config(parse(&["-r", "1 2", "-f", "-2"])).unwrap();
        assert!(matches!(config.validate(), Err(Error::InvalidCapacity(-2))));
    }

    #[test]
    fn test_unknown_policy_flag_rejected() {
        assert!(Cli::try_parse_from(["pagesim", "-p", "clock"]).is_err());
    }

    #[test]
    fn test_random_references_flag() {
        let args = ["--random", "25", "--max-page", "3", "--seed", "9"];
        let config = build_config(parse(&args)).unwrap();

        assert_eq!(config.references.len(), 25);
        assert!(config.references.iter().all(|p| (1..=3).contains(&p.0)));
        assert_eq!(build_config(parse(&args)).unwrap(), config);
    }

    #[test]
    fn test_no_references_draws_default() {
        let config = build_config(parse(&["--seed", "1"])).unwrap();

        assert_eq!(config.references.len(), DEFAULT_RANDOM_LENGTH);
        assert!(config.references.iter().all(|p| (1..=5).contains(&p.0)));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_max_page_must_be_positive() {
        assert!(Cli::try_parse_from(["pagesim", "--random", "3", "--max-page", "0"]).is_err());
    }
}
