use std::fs;
use std::path::PathBuf;

use indicator_charts::api::{
    DashboardConfig, IndicatorDashboard, figures_to_json_contract_v1_pretty,
    figures_to_json_pretty,
};
use indicator_charts::core::CountrySelection;
use indicator_charts::telemetry::init_default_tracing;

#[derive(Debug, Default)]
struct CliArgs {
    config_path: Option<PathBuf>,
    contract: bool,
}

fn main() {
    let _ = init_default_tracing();
    if let Err(err) = run() {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let args = parse_args()?;
    let config = match &args.config_path {
        Some(path) => {
            let raw = fs::read_to_string(path).map_err(|err| {
                format!("failed to read config `{}`: {err}", path.display())
            })?;
            DashboardConfig::from_json_str(&raw).map_err(|err| err.to_string())?
        }
        None => DashboardConfig::default(),
    };

    let dashboard = IndicatorDashboard::with_http(config).map_err(|err| err.to_string())?;
    // Default countries; selecting others is up to the embedding host.
    let figures = dashboard.build_figures(&CountrySelection::new());

    let json = if args.contract {
        figures_to_json_contract_v1_pretty(&figures)
    } else {
        figures_to_json_pretty(&figures)
    }
    .map_err(|err| err.to_string())?;
    println!("{json}");
    Ok(())
}

fn parse_args() -> Result<CliArgs, String> {
    let mut parsed = CliArgs::default();
    let mut args = std::env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--config" => {
                let value = args
                    .next()
                    .ok_or_else(|| "missing value for --config".to_owned())?;
                parsed.config_path = Some(PathBuf::from(value));
            }
            "--contract" => parsed.contract = true,
            "--help" | "-h" => {
                print_usage();
                std::process::exit(0);
            }
            other => return Err(format!("unknown argument `{other}`")),
        }
    }
    Ok(parsed)
}

fn print_usage() {
    println!("usage: print_figures [--config <dashboard.json>] [--contract]");
}
