//! Mastermind - CLI
//!
//! Plays the computer codebreaker against given, random or all secret codes.

use anyhow::{Result, anyhow};
use clap::{Parser, Subcommand};
use log::info;
use mastermind::{
    commands::{
        SolveConfig, print_test_all_statistics, random_codes, run_benchmark, run_test_all,
        solve_code,
    },
    core::Code,
    output::{print_benchmark_result, print_solve_result},
};
use rand::SeedableRng;
use rand::rngs::StdRng;

#[derive(Parser)]
#[command(
    name = "mastermind",
    about = "Mastermind codebreaker that cracks any 4-hole, 6-peg code in 12 turns",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Strategy: probe (default), random
    #[arg(short, long, global = true, default_value = "probe")]
    strategy: String,

    /// Seed for secret codes and solver draws (random if omitted)
    #[arg(long, global = true)]
    seed: Option<u64>,
}

#[derive(Subcommand)]
enum Commands {
    /// Crack a specific code, or a random one (default)
    Solve {
        /// The secret code, e.g. 2441
        code: Option<Code>,

        /// Show how many codes stay consistent after each turn
        #[arg(short, long)]
        verbose: bool,
    },

    /// Benchmark solver performance on random codes
    Benchmark {
        /// Number of random codes to test
        #[arg(short = 'n', long, default_value = "100")]
        count: usize,
    },

    /// Test solver on ALL possible codes
    TestAll {
        /// Limit number of codes to test
        #[arg(short, long)]
        limit: Option<usize>,
    },
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    let seed = cli.seed.unwrap_or_else(rand::random);
    info!("seed {seed}");

    // Default to solving a random code if no command given
    let command = cli.command.unwrap_or(Commands::Solve {
        code: None,
        verbose: false,
    });

    match command {
        Commands::Solve { code, verbose } => run_solve_command(&cli.strategy, code, verbose, seed),
        Commands::Benchmark { count } => {
            run_benchmark_command(&cli.strategy, count, seed);
            Ok(())
        }
        Commands::TestAll { limit } => {
            run_test_all_command(&cli.strategy, limit, seed);
            Ok(())
        }
    }
}

fn run_solve_command(strategy: &str, code: Option<Code>, verbose: bool, seed: u64) -> Result<()> {
    let code = code.unwrap_or_else(|| Code::random(&mut StdRng::seed_from_u64(seed)));

    let mut config = SolveConfig::new(code, seed);
    config.strategy = strategy.to_string();

    let result = solve_code(&config).map_err(|e| anyhow!(e))?;
    print_solve_result(&result, verbose);
    Ok(())
}

fn run_benchmark_command(strategy: &str, count: usize, seed: u64) {
    println!("Running benchmark on {count} random codes (seed {seed})...");

    let codes = random_codes(count, seed);
    let result = run_benchmark(strategy, &codes, seed);
    print_benchmark_result(&result);
}

fn run_test_all_command(strategy: &str, limit: Option<usize>, seed: u64) {
    println!("\n{}", "═".repeat(70));
    println!(" Comprehensive Mastermind Solver Test ");
    println!("{}", "═".repeat(70));
    println!("\nStrategy: {strategy}");
    println!("Seed: {seed}");
    println!();

    let stats = run_test_all(strategy, limit, seed);
    print_test_all_statistics(&stats);
}
