// Pocketbook CLI - thin dispatch over the ledger and the simulator
// Collects and validates user input here; the core never sees raw args

use anyhow::Result;
use chrono::{Local, NaiveDate};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::collections::HashMap;
use std::env;
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

use pocketbook::{
    append_results, coin_counts, default_storage_path, dice_counts, expected_report,
    format_results, summary_stats, PocketbookError, Transaction, TransactionStore,
};

const MAX_TRIALS: u64 = 10_000_000;
const MAX_SIDES: u32 = 100;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let argv: Vec<String> = env::args().skip(1).collect();
    let command = match argv.first() {
        Some(c) => c.as_str(),
        None => {
            usage();
            std::process::exit(2);
        }
    };
    let args = CliArgs::parse(&argv[1..])?;

    match command {
        "add" => run_add(&args)?,
        "list" => run_list(&args)?,
        "summary" => run_summary(&args)?,
        "balance" => run_balance(&args)?,
        "coin" | "dice" | "both" => run_simulation(command, &args)?,
        _ => {
            eprintln!("Unknown command: {}\n", command);
            usage();
            std::process::exit(2);
        }
    }

    Ok(())
}

fn usage() {
    eprintln!(
        "Pocketbook {} - budget ledger & randomness simulator\n",
        pocketbook::VERSION
    );
    eprintln!("Ledger commands:");
    eprintln!("  add <description> <amount> <category> [--date YYYY-MM-DD] [--storage PATH]");
    eprintln!("  list     [--storage PATH]      List all transactions");
    eprintln!("  summary  [--storage PATH]      Totals by category");
    eprintln!("  balance  [--storage PATH]      Current balance");
    eprintln!();
    eprintln!("Simulator commands:");
    eprintln!("  coin  [--trials N] [--seed N] [--out FILE]");
    eprintln!("  dice  [--trials N] [--sides N] [--seed N] [--out FILE]");
    eprintln!("  both  [--trials N] [--sides N] [--seed N] [--out FILE]");
}

// ============================================================================
// ARGUMENT PARSING
// ============================================================================

struct CliArgs {
    positional: Vec<String>,
    flags: HashMap<String, String>,
}

impl CliArgs {
    fn parse(raw: &[String]) -> Result<Self, PocketbookError> {
        let mut positional = Vec::new();
        let mut flags = HashMap::new();

        let mut iter = raw.iter();
        while let Some(arg) = iter.next() {
            if let Some(name) = arg.strip_prefix("--") {
                let value = iter.next().ok_or_else(|| {
                    PocketbookError::InvalidInput(format!("--{} requires a value", name))
                })?;
                flags.insert(name.to_string(), value.clone());
            } else {
                positional.push(arg.clone());
            }
        }

        Ok(CliArgs { positional, flags })
    }

    fn storage_path(&self) -> PathBuf {
        self.flags
            .get("storage")
            .map(PathBuf::from)
            .unwrap_or_else(default_storage_path)
    }

    fn int_flag(&self, name: &str, default: u64, min: u64, max: u64) -> Result<u64, PocketbookError> {
        let value = match self.flags.get(name) {
            Some(raw) => raw.parse::<u64>().map_err(|_| {
                PocketbookError::InvalidInput(format!("--{} must be a whole number", name))
            })?,
            None => default,
        };
        if value < min || value > max {
            return Err(PocketbookError::InvalidInput(format!(
                "--{} must be between {} and {}",
                name, min, max
            )));
        }
        Ok(value)
    }
}

// ============================================================================
// LEDGER COMMANDS
// ============================================================================

fn open_store(args: &CliArgs) -> Result<TransactionStore> {
    let mut store = TransactionStore::new(args.storage_path());
    store.load()?;
    Ok(store)
}

fn run_add(args: &CliArgs) -> Result<()> {
    if args.positional.len() != 3 {
        return Err(PocketbookError::InvalidInput(
            "add needs <description> <amount> <category>".to_string(),
        )
        .into());
    }

    let description = &args.positional[0];
    let amount: f64 = args.positional[1].parse().map_err(|_| {
        PocketbookError::InvalidInput(format!("amount {:?} is not a number", args.positional[1]))
    })?;
    if !amount.is_finite() {
        return Err(PocketbookError::InvalidInput("amount must be finite".to_string()).into());
    }
    let category = &args.positional[2];

    let posted_on = match args.flags.get("date") {
        Some(raw) => NaiveDate::parse_from_str(raw, "%Y-%m-%d").map_err(|_| {
            PocketbookError::InvalidInput(format!("date {:?} is not YYYY-MM-DD", raw))
        })?,
        None => Local::now().date_naive(),
    };

    let mut store = open_store(args)?;
    store.add(Transaction::new(description, amount, category, posted_on));
    store.save()?;
    println!("Added transaction.");
    Ok(())
}

fn run_list(args: &CliArgs) -> Result<()> {
    let store = open_store(args)?;
    for tx in store.list_transactions() {
        println!(
            "{} | {:<12} {:>8.2} | {}",
            tx.posted_on, tx.category, tx.amount, tx.description
        );
    }
    Ok(())
}

fn run_summary(args: &CliArgs) -> Result<()> {
    let store = open_store(args)?;
    let mut totals: Vec<(String, f64)> = store.summary_by_category().into_iter().collect();
    totals.sort_by(|a, b| a.0.cmp(&b.0));
    for (category, total) in totals {
        println!("{:<12} {:>8.2}", category, total);
    }
    Ok(())
}

fn run_balance(args: &CliArgs) -> Result<()> {
    let store = open_store(args)?;
    println!("Balance: {:.2}", store.balance());
    Ok(())
}

// ============================================================================
// SIMULATOR COMMANDS
// ============================================================================

fn run_simulation(mode: &str, args: &CliArgs) -> Result<()> {
    let trials = args.int_flag("trials", 1000, 1, MAX_TRIALS)?;
    let sides = args.int_flag("sides", 6, 2, MAX_SIDES as u64)? as u32;

    let mut rng = match args.flags.get("seed") {
        Some(raw) => {
            let seed = raw.parse::<u64>().map_err(|_| {
                PocketbookError::InvalidInput("--seed must be a whole number".to_string())
            })?;
            StdRng::seed_from_u64(seed)
        }
        None => StdRng::from_entropy(),
    };

    tracing::debug!(mode, trials, sides, "running simulation");

    let mut blocks = Vec::new();
    if mode == "coin" || mode == "both" {
        let counts = coin_counts(trials, &mut rng);
        blocks.push(render_block(
            "Coin Flip Results",
            &counts,
            trials,
            trials as f64 / 2.0,
        ));
    }
    if mode == "dice" || mode == "both" {
        let counts = dice_counts(trials, sides, &mut rng);
        blocks.push(render_block(
            &format!("Dice Roll Results ({}-sided)", sides),
            &counts,
            trials,
            trials as f64 / sides as f64,
        ));
    }

    let final_text = blocks.join("\n\n");
    println!("{}", final_text);

    if let Some(out) = args.flags.get("out") {
        append_results(Path::new(out), &final_text)?;
        println!("\nSaved to {}", out);
    }
    Ok(())
}

fn render_block(
    title: &str,
    counts: &pocketbook::OutcomeTable,
    trials: u64,
    expected_each: f64,
) -> String {
    let top_n = counts.len().min(3);
    format!(
        "{}\n{}\n{}",
        format_results(title, counts, trials),
        summary_stats(counts, trials),
        expected_report(counts, expected_each, trials, top_n)
    )
}
