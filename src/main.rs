mod batch;
mod field;
mod generator;
mod iban;
mod logging;
mod models;
mod notify;
mod registry;
mod util;

use batch::BatchReport;
use clap::{Parser, Subcommand};
use field::IbanField;
use generator::{generate_rows, parse_country_filter, GeneratorConfig};
use models::AccountRow;
use notify::{LogNotifier, Outcome};
use rand::Rng;
use std::fs::create_dir_all;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "iban-check")]
#[command(about = "IBAN validation toolkit", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Validate a single IBAN
    Check(CheckArgs),
    /// Validate every account in a CSV file
    Batch(BatchArgs),
    /// Generate structurally valid IBANs as batch input
    Generate(GenerateArgs),
    /// List the country registry
    Countries,
}

#[derive(Parser)]
struct CheckArgs {
    iban: String,
}

#[derive(Parser)]
struct BatchArgs {
    #[arg(long, default_value = "data/accounts.csv")]
    input: PathBuf,
}

#[derive(Parser)]
struct GenerateArgs {
    #[arg(long, default_value_t = 100)]
    count: usize,
    #[arg(long)]
    countries: Option<String>,
    #[arg(long)]
    seed: Option<u64>,
    #[arg(long, default_value = "data/accounts.csv")]
    output: PathBuf,
}

fn main() {
    if let Err(err) = run() {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    logging::init_logging("iban-check")?;
    registry::verify()?;
    let cli = Cli::parse();
    match cli.command {
        Command::Check(args) => run_check(args),
        Command::Batch(args) => run_batch(args),
        Command::Generate(args) => run_generate(args),
        Command::Countries => run_countries(),
    }
}

fn run_check(args: CheckArgs) -> Result<(), String> {
    let mut field = IbanField::new(LogNotifier);
    field.set_value(&args.iban);
    match field.outcome() {
        Outcome::NoInput => Err("no input: provide a non-empty IBAN".to_string()),
        Outcome::Valid(iban) => {
            emit_info_line(&format!(
                "valid: country={} check_digits={} bban={}",
                iban.country, iban.check_digits, iban.bban
            ));
            Ok(())
        }
        Outcome::Invalid(err) => Err(err.to_string()),
    }
}

fn run_batch(args: BatchArgs) -> Result<(), String> {
    let report = batch::validate_csv(&args.input)?;

    emit_info_line(&format!(
        "Batch: input={} rows={} valid={} invalid={} empty={}",
        args.input.display(),
        report.total_rows,
        report.valid,
        report.invalid,
        report.empty
    ));
    emit_issue_summary(&report);

    if report.has_failures() {
        return Err(format!(
            "batch failed with {} invalid account(s)",
            report.invalid
        ));
    }
    Ok(())
}

fn emit_issue_summary(report: &BatchReport) {
    let mut counts = std::collections::HashMap::new();
    for issue in &report.issues {
        *counts.entry(issue.message.as_str()).or_insert(0usize) += 1;
    }
    if counts.is_empty() {
        return;
    }

    let mut items: Vec<(&str, usize)> = counts.into_iter().collect();
    items.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));

    let max_items = 5usize;
    for (message, count) in items.iter().take(max_items) {
        emit_info_line(&format!("Batch issues: {} = {}", message, count));
    }
    if items.len() > max_items {
        emit_info_line(&format!(
            "Batch issues: {} additional issue types not shown",
            items.len() - max_items
        ));
    }
}

fn run_generate(args: GenerateArgs) -> Result<(), String> {
    let seed = args.seed.unwrap_or_else(random_seed);
    let countries = match args.countries {
        Some(value) => {
            let parsed = parse_country_filter(&value)?;
            if parsed.is_empty() {
                None
            } else {
                Some(parsed)
            }
        }
        None => None,
    };

    let config = GeneratorConfig {
        count: args.count,
        countries,
    };
    let rows = generate_rows(&config, seed)?;
    write_csv(&args.output, &rows)?;

    log::info!(
        "generated {} accounts, seed {}, output {}",
        rows.len(),
        seed,
        args.output.display()
    );

    let report = batch::validate_rows(&rows);
    if report.has_failures() {
        return Err(format!(
            "generator produced {} invalid account(s)",
            report.invalid
        ));
    }
    emit_info_line(&format!(
        "Generated {} valid accounts to {}",
        rows.len(),
        args.output.display()
    ));
    Ok(())
}

fn run_countries() -> Result<(), String> {
    for spec in registry::SPECS {
        emit_info_line(&format!(
            "{}  length={:<2} bban={}",
            spec.code,
            spec.len,
            spec.layout()
        ));
    }
    emit_info_line(&format!("{} countries registered", registry::SPECS.len()));
    Ok(())
}

fn random_seed() -> u64 {
    let mut rng = rand::rngs::OsRng;
    rng.gen()
}

fn write_csv(output: &Path, rows: &[AccountRow]) -> Result<(), String> {
    if let Some(parent) = output.parent() {
        if !parent.as_os_str().is_empty() {
            create_dir_all(parent).map_err(|err| err.to_string())?;
        }
    }
    let mut writer = csv::Writer::from_path(output).map_err(|err| err.to_string())?;
    for row in rows {
        writer.serialize(row).map_err(|err| err.to_string())?;
    }
    writer.flush().map_err(|err| err.to_string())
}

fn emit_info_line(message: &str) {
    if log::log_enabled!(log::Level::Info) {
        log::info!("{}", message);
    } else {
        println!("{message}");
    }
}
