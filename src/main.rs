use std::fmt;

use anyhow::Context;
use clap::Parser;
use serde::Serialize;
use tracing::debug;

use kata::{find_pair_sum, search, KataError, SortedSequence};

mod cli;
use cli::display::{error_line, hint_line, use_colors};
use cli::{Cli, Commands, Input, DEMO_SEQUENCE, DEMO_TARGET};

#[derive(Serialize)]
struct SearchOutput {
    index: isize,
}

impl fmt::Display for SearchOutput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.index)
    }
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let result = match cli.command {
        Some(Commands::TwoSum(input)) => run_two_sum(&input.values, input.target, cli.json),
        Some(Commands::Search {
            input,
            check_sorted,
        }) => run_search(input, check_sorted, cli.json),
        None => run_two_sum(&DEMO_SEQUENCE, DEMO_TARGET, cli.json),
    };

    if let Err(e) = result {
        eprintln!("{}", error_line(&format!("{:#}", e)));
        if let Some(KataError::Unsorted { .. }) = e.downcast_ref::<KataError>() {
            eprintln!("{}", hint_line("binary search needs non-decreasing input"));
        }
        std::process::exit(1);
    }
}

/// RUST_LOG wins; otherwise `warn`, or `debug` with --verbose.
fn init_logging(verbose: bool) {
    use tracing_subscriber::EnvFilter;

    let fallback = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));

    tracing_subscriber::fmt()
        .compact()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(use_colors())
        .with_target(false)
        .without_time()
        .init();
}

fn run_two_sum(values: &[i32], target: i32, json: bool) -> anyhow::Result<()> {
    debug!(len = values.len(), target, "two-sum");
    let pair = find_pair_sum(values, target)?;
    debug!(first = pair.first, second = pair.second, "pair found");

    println!("{}", render(&pair, json)?);
    Ok(())
}

fn run_search(input: Input, check_sorted: bool, json: bool) -> anyhow::Result<()> {
    debug!(len = input.values.len(), target = input.target, check_sorted, "search");
    let index = if check_sorted {
        SortedSequence::new(input.values)?.search(input.target)
    } else {
        search(&input.values, input.target)
    };
    debug!(index, "search finished");

    println!("{}", render(&SearchOutput { index }, json)?);
    Ok(())
}

/// One output line: JSON with --json, Display otherwise.
fn render<T: Serialize + fmt::Display>(value: &T, json: bool) -> anyhow::Result<String> {
    if json {
        serde_json::to_string(value).context("failed to encode result as JSON")
    } else {
        Ok(value.to_string())
    }
}
