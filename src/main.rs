use clap::Parser;

use grid_search_visualizer::config::Config;
use grid_search_visualizer::error::{Result, VisualizerError};
use grid_search_visualizer::simulation::{AlgorithmKind, RunReport, Simulation};
use std::io::{self, BufRead, Write};
use tracing::warn;
use tracing_subscriber::EnvFilter;

fn main() {
    // Logs go to stderr so they never interleave with the grid animation.
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    let config = Config::parse();

    if let Err(e) = run(config) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(config: Config) -> Result<()> {
    if config.compare {
        let reports = Simulation::run_all_algorithms(config.depth_limit)?;
        Simulation::print_comparison_results(&reports);
        return Ok(());
    }

    let simulation = Simulation::new(config.clone());

    match config.algorithm {
        Some(kind) => {
            let report = simulation.run(kind, config.depth_limit)?;
            print_report(kind, &report);
            Ok(())
        }
        None => interactive(&simulation),
    }
}

fn interactive(simulation: &Simulation) -> Result<()> {
    let stdin = io::stdin();
    let mut input = stdin.lock();

    loop {
        println!("\nChoose Algorithm:");
        for (i, kind) in AlgorithmKind::ALL.iter().enumerate() {
            println!("{} → {}", i + 1, kind.label());
        }
        println!("0 → Exit");

        let Some(line) = prompt(&mut input, "Enter choice: ")? else {
            return Ok(());
        };

        let kind = match AlgorithmKind::from_menu_choice(&line) {
            Ok(Some(kind)) => kind,
            Ok(None) => return Ok(()),
            Err(e) => {
                warn!(input = %line.trim(), "rejected menu choice");
                eprintln!("{}", e);
                continue;
            }
        };

        let depth_limit = if kind == AlgorithmKind::Dls {
            let Some(line) = prompt(&mut input, "Enter depth limit: ")? else {
                return Ok(());
            };
            match parse_depth_limit(&line) {
                Ok(limit) => Some(limit),
                Err(e) => {
                    eprintln!("{}", e);
                    continue;
                }
            }
        } else {
            None
        };

        let report = simulation.run(kind, depth_limit)?;
        print_report(kind, &report);
    }
}

/// Print `message`, then read one line. `None` on end of input.
fn prompt(input: &mut impl BufRead, message: &str) -> Result<Option<String>> {
    print!("{}", message);
    io::stdout().flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line))
}

fn parse_depth_limit(line: &str) -> Result<usize> {
    let trimmed = line.trim();
    trimmed
        .parse()
        .map_err(|_| VisualizerError::InvalidDepthLimit(trimmed.to_string()))
}

fn print_report(kind: AlgorithmKind, report: &RunReport) {
    println!();
    if report.outcome.found {
        println!("Target Found!");
    } else if kind.is_depth_bounded() {
        println!("Target NOT found within depth limit");
        println!("Try a higher depth");
    } else {
        println!("Target is unreachable");
    }

    println!("\n=== FINAL RESULTS ===");
    println!("{}", report.statistics);
}
