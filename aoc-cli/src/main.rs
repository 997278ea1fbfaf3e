//! AOC CLI - per-day runner for the Advent of Code 2022 solvers

mod cache;
mod cli;
mod config;
mod day;
mod error;
mod executor;
mod logging;
mod output;
mod provider;
mod store;
mod verifier;

// Import aoc-solutions to link the solver plugins
use aoc_solutions as _;

use aoc_solver::RegistryBuilder;
use clap::Parser;
use cli::Args;
use config::Config;
use day::Day;
use error::CliError;
use executor::Executor;
use output::OutputFormatter;
use provider::InputProvider;

fn main() {
    logging::init();
    let args = Args::parse();

    if let Err(e) = run(args) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(args: Args) -> Result<(), CliError> {
    let config = Config::from_args(args);
    tracing::debug!(?config, "resolved configuration");

    let registry = RegistryBuilder::new().register_all_plugins()?.build();
    tracing::debug!(solvers = registry.len(), "registry built");

    let days = config
        .days
        .iter()
        .map(|&number| Day::resolve(number, &config.root))
        .collect::<Result<Vec<_>, _>>()?;

    let provider = InputProvider::new(config.year, config.session_file.clone());
    let formatter = OutputFormatter::new(config.quiet);
    let work_items = executor::collect_work_items(&days, &config.modes);
    let executor = Executor::new(&registry, &provider, &formatter, config.golf);

    // Every input is checked before the first answer is persisted
    executor.prepare(&work_items)?;

    let tally = executor.execute(&work_items)?;
    formatter.print_summary(&tally);

    Ok(())
}
