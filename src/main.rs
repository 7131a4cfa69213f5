use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::time::Instant;

use clap::{Args, Parser, Subcommand, ValueEnum};
use rust_decimal::Decimal;
use tracing::info;
use tracing_subscriber::EnvFilter;

use amortization_engine::api::{AppState, create_router};
use amortization_engine::calculation::compute_loan;
use amortization_engine::config::ConfigLoader;
use amortization_engine::models::{CalculationResult, LoanCalculation, LoanInput};
use amortization_engine::report::{export_csv, export_file_name, render_table};

type CliResult<T> = Result<T, Box<dyn std::error::Error>>;

/// Home loan EMI and amortization schedule calculator
#[derive(Parser)]
#[command(name = "amortization-engine", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP service
    Serve {
        /// Address to listen on
        #[arg(long, default_value = "127.0.0.1:3000")]
        bind: String,
        /// Configuration directory (built-in defaults when omitted)
        #[arg(long)]
        config: Option<PathBuf>,
    },
    /// Compute a loan and print the report
    Calculate {
        #[command(flatten)]
        loan: LoanArgs,
        /// Output format
        #[arg(long, default_value = "table")]
        output: OutputFormat,
    },
    /// Compute a loan and write the CSV spreadsheet
    Export {
        #[command(flatten)]
        loan: LoanArgs,
        /// Destination file (defaults to the configured report name)
        #[arg(long)]
        out: Option<PathBuf>,
    },
}

/// Loan parameters; omitted values take the configured defaults.
#[derive(Args)]
struct LoanArgs {
    /// Amount borrowed
    #[arg(long)]
    principal: Option<Decimal>,
    /// Tenure in years
    #[arg(long)]
    tenure: Option<Decimal>,
    /// Annual interest rate in percent
    #[arg(long)]
    rate: Option<Decimal>,
    /// Configuration directory (built-in defaults when omitted)
    #[arg(long)]
    config: Option<PathBuf>,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum OutputFormat {
    Table,
    Json,
    Csv,
}

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let result = match cli.command {
        Commands::Serve { bind, config } => serve(&bind, config.as_deref()).await,
        Commands::Calculate { loan, output } => calculate(&loan, output),
        Commands::Export { loan, out } => export(&loan, out),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn load_config(path: Option<&Path>) -> CliResult<ConfigLoader> {
    let loader = match path {
        Some(path) => ConfigLoader::load(path)?,
        None => ConfigLoader::builtin()?,
    };
    Ok(loader)
}

async fn serve(bind: &str, config: Option<&Path>) -> CliResult<()> {
    let state = AppState::new(load_config(config)?);
    let listener = tokio::net::TcpListener::bind(bind).await?;
    info!(address = %listener.local_addr()?, "Listening");
    axum::serve(listener, create_router(state)).await?;
    Ok(())
}

/// Resolves the loan input against the configured defaults and limits, then computes it.
fn run_loan(args: &LoanArgs, config: &ConfigLoader) -> CliResult<(LoanCalculation, u64)> {
    let defaults = config.default_input();
    let input = LoanInput::new(
        args.principal.unwrap_or(defaults.principal),
        args.tenure.unwrap_or(defaults.tenure_years),
        args.rate.unwrap_or(defaults.annual_rate_percent),
    );
    config.validate_input(&input)?;

    let start_time = Instant::now();
    let calculation = compute_loan(&input)?;
    let duration_us = start_time.elapsed().as_micros() as u64;
    info!(
        principal = %input.principal,
        months = calculation.months,
        monthly_payment = %calculation.summary.monthly_payment,
        duration_us,
        "Calculation completed"
    );
    Ok((calculation, duration_us))
}

fn calculate(args: &LoanArgs, output: OutputFormat) -> CliResult<()> {
    let config = load_config(args.config.as_deref())?;
    let (calculation, duration_us) = run_loan(args, &config)?;

    let mut stdout = std::io::stdout().lock();
    match output {
        OutputFormat::Table => {
            writeln!(stdout, "{}", render_table(&calculation, config.report()))?;
        }
        OutputFormat::Json => {
            let result = CalculationResult::from_calculation(calculation, duration_us);
            writeln!(stdout, "{}", serde_json::to_string_pretty(&result)?)?;
        }
        OutputFormat::Csv => {
            stdout.write_all(&export_csv(&calculation, config.report())?)?;
        }
    }
    Ok(())
}

fn export(args: &LoanArgs, out: Option<PathBuf>) -> CliResult<()> {
    let config = load_config(args.config.as_deref())?;
    let (calculation, _) = run_loan(args, &config)?;

    let bytes = export_csv(&calculation, config.report())?;
    let path = out.unwrap_or_else(|| {
        PathBuf::from(export_file_name(
            calculation.input.principal,
            &config.report().export,
        ))
    });
    std::fs::write(&path, bytes)?;
    info!(path = %path.display(), "Report exported");
    Ok(())
}
