//! Command-line front end: load an instance and run one of the solvers.

use std::path::PathBuf;

use anyhow::{bail, Context};
use clap::{Parser, Subcommand};
use log::info;
use serde::Serialize;

use u_sukp::batch::{run_trials, TrialSummary, DEFAULT_TRIALS};
use u_sukp::constructive::{greedy, randomized};
use u_sukp::io::load_instance;
use u_sukp::lns::{optimize, LnsConfig};
use u_sukp::models::SukpInstance;

#[derive(Parser, Debug)]
#[command(version, about = "Set Union Knapsack heuristics")]
struct ProgramArguments {
    #[arg(short, long, help = "instance file path")]
    instance: PathBuf,

    #[arg(long, help = "override the capacity stored in the instance")]
    capacity: Option<f64>,

    #[arg(
        long,
        help = "print a JSON report instead of a table",
        default_value = "false"
    )]
    json: bool,

    #[command(subcommand)]
    solver: Solver,
}

#[derive(Subcommand, Debug)]
enum Solver {
    /// Deterministic greedy construction
    Greedy,
    /// Randomized construction, one run per seed
    Randomized {
        #[arg(long, help = "number of seeds (1..=N)", default_value_t = DEFAULT_TRIALS)]
        seeds: u64,
    },
    /// Large neighborhood search, one run per seed
    Lns {
        #[arg(long, help = "fraction of selected elements destroyed per iteration")]
        destroy_rate: f64,

        #[arg(long, help = "destroy/repair iterations per run")]
        iterations: usize,

        #[arg(long, help = "number of seeds (1..=N)", default_value_t = DEFAULT_TRIALS)]
        seeds: u64,
    },
}

#[derive(Serialize)]
struct GreedyReport {
    profit: f64,
    weight: f64,
    selected: Vec<usize>,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let args = ProgramArguments::parse();
    info!("{:?}", &args);

    let instance = load_instance(&args.instance)
        .with_context(|| format!("loading {}", args.instance.display()))?;
    let capacity = args.capacity.unwrap_or(instance.capacity());
    if !capacity.is_finite() || capacity < 0.0 {
        bail!("capacity must be a non-negative number, got {capacity}");
    }
    info!(
        "instance {}: {} items, {} elements, capacity {}",
        args.instance.display(),
        instance.num_items(),
        instance.num_elements(),
        capacity
    );

    match args.solver {
        Solver::Greedy => run_greedy(&instance, capacity, args.json),
        Solver::Randomized { seeds } => {
            let summary = summarize(seeds, |seed| randomized(&instance, capacity, seed).1)?;
            report(&summary, args.json)
        }
        Solver::Lns {
            destroy_rate,
            iterations,
            seeds,
        } => {
            LnsConfig::default()
                .with_destroy_rate(destroy_rate)
                .validate()
                .map_err(anyhow::Error::msg)?;
            let summary = summarize(seeds, |seed| {
                optimize(&instance, capacity, seed, destroy_rate, iterations).1
            })?;
            report(&summary, args.json)
        }
    }
}

fn run_greedy(instance: &SukpInstance, capacity: f64, json: bool) -> anyhow::Result<()> {
    let (selection, profit) = greedy(instance, capacity);
    let weight: f64 = selection
        .selected_ids()
        .iter()
        .map(|&e| instance.weight(e))
        .sum();
    if json {
        let report = GreedyReport {
            profit,
            weight,
            selected: selection.selected_ids(),
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("total profit: {profit:.2}");
        println!("total weight: {weight:.2} / {capacity:.2}");
    }
    Ok(())
}

fn summarize(seeds: u64, trial: impl FnMut(u64) -> f64) -> anyhow::Result<TrialSummary> {
    match run_trials(1..=seeds, trial) {
        Some(summary) => Ok(summary),
        None => bail!("at least one seed is required"),
    }
}

fn report(summary: &TrialSummary, json: bool) -> anyhow::Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(summary)?);
        return Ok(());
    }
    println!("    seed |        profit");
    println!("---------|---------------");
    for t in &summary.trials {
        println!("{:>8} | {:>13.2}", t.seed, t.profit);
    }
    println!();
    println!(
        "best seed: {} - profit: {:.2}",
        summary.best.seed, summary.best.profit
    );
    println!("average profit: {:.2}", summary.average_profit);
    Ok(())
}
