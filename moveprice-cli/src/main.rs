//! moveprice: price a moving job from a JSON request.
//!
//! ```bash
//! moveprice request.json
//! moveprice --rates tenant-rates.json --pretty < request.json
//! MOVEPRICE_LOG=debug moveprice request.json
//! ```
//!
//! Stdout carries only the JSON response. Logs go to stderr.
//!
//! Exit codes: `0` quote printed, `2` request or rates invalid (issues
//! printed as JSON), `1` IO or JSON syntax failure.

mod input;

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;
use moveprice_core::{
    validate_rates, validate_request, PricingEngine, PricingResponse, RatesConfig,
};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

const LOG_ENV: &str = "MOVEPRICE_LOG";

#[derive(Parser)]
#[command(name = "moveprice")]
#[command(version, about = "Price a moving job from a JSON request", long_about = None)]
struct Cli {
    /// Request JSON file. Reads stdin when omitted or `-`.
    request: Option<PathBuf>,

    /// Rates override JSON file. Inline `rates` in the request win.
    #[arg(long)]
    rates: Option<PathBuf>,

    /// Pretty-print the response.
    #[arg(long)]
    pretty: bool,
}

fn main() -> ExitCode {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match run(&cli) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<ExitCode> {
    let file_rates = match &cli.rates {
        Some(path) => match validate_rates(&input::read_json(Some(path))?) {
            Ok(rates) => rates,
            Err(errors) => {
                warn!(path = %path.display(), issues = errors.len(), "rates file rejected");
                emit(&PricingResponse::Invalid { errors }, cli.pretty)?;
                return Ok(ExitCode::from(2));
            }
        },
        None => RatesConfig::default(),
    };

    let request = input::read_json(cli.request.as_deref())?;
    let req = match validate_request(&request) {
        Ok(req) => req,
        Err(errors) => {
            warn!(issues = errors.len(), "request rejected");
            emit(&PricingResponse::Invalid { errors }, cli.pretty)?;
            return Ok(ExitCode::from(2));
        }
    };

    let rates = match req.rates {
        Some(inline) => file_rates.layered(inline),
        None => file_rates,
    };

    let breakdown = PricingEngine::default().price_with_rates(&req.inputs, Some(&rates));
    info!(
        crew = breakdown.recommended_crew,
        trucks = breakdown.recommended_trucks,
        total = breakdown.total,
        "quote computed"
    );
    emit(&PricingResponse::Quote(breakdown), cli.pretty)?;
    Ok(ExitCode::SUCCESS)
}

fn emit(response: &PricingResponse, pretty: bool) -> Result<()> {
    let text = if pretty {
        serde_json::to_string_pretty(response)?
    } else {
        serde_json::to_string(response)?
    };
    println!("{text}");
    Ok(())
}
