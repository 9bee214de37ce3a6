use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;
use wn_features::load_network;
use wn_metrics::{PriorityPolicy, calculate_metrics_with, get_faulty_assets, load_policy};
use wn_network::audit_references;

mod error;
mod render;

use error::CliResult;
use render::Format;

#[derive(Parser)]
#[command(name = "wn-cli")]
#[command(about = "Water network monitor - dashboard metrics from GIS layers", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(clap::Args)]
struct Layers {
    /// Node layer (GeoJSON, or a web-map `var x = {...};` export)
    nodes: PathBuf,
    /// Pipe layer (GeoJSON, or a web-map `var x = {...};` export)
    pipes: PathBuf,
}

#[derive(Subcommand)]
enum Commands {
    /// Load both layers and check pipe endpoint references
    Validate {
        #[command(flatten)]
        layers: Layers,
    },
    /// Print dashboard metrics
    Metrics {
        #[command(flatten)]
        layers: Layers,
        /// Priority policy YAML file (defaults: pressure 30, flow rate 1.5)
        #[arg(long)]
        policy: Option<PathBuf>,
        #[arg(long, value_enum, default_value = "text")]
        format: Format,
    },
    /// List faulty nodes and pipes
    Faults {
        #[command(flatten)]
        layers: Layers,
        #[arg(long, value_enum, default_value = "text")]
        format: Format,
    },
    /// Print the effective priority policy
    Policy {
        /// Priority policy YAML file
        #[arg(long)]
        policy: Option<PathBuf>,
    },
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    match run(Cli::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> CliResult<()> {
    match cli.command {
        Commands::Validate { layers } => cmd_validate(&layers),
        Commands::Metrics {
            layers,
            policy,
            format,
        } => cmd_metrics(&layers, policy.as_deref(), format),
        Commands::Faults { layers, format } => cmd_faults(&layers, format),
        Commands::Policy { policy } => cmd_policy(policy.as_deref()),
    }
}

fn resolve_policy(path: Option<&Path>) -> CliResult<PriorityPolicy> {
    match path {
        Some(path) => Ok(load_policy(path)?),
        None => Ok(PriorityPolicy::default()),
    }
}

fn cmd_validate(layers: &Layers) -> CliResult<()> {
    println!(
        "Validating layers: {} / {}",
        layers.nodes.display(),
        layers.pipes.display()
    );
    let network = load_network(&layers.nodes, &layers.pipes)?;
    println!(
        "✓ Mapped {} nodes and {} pipes",
        network.nodes().len(),
        network.pipes().len()
    );
    if network.is_empty() {
        tracing::warn!("both layers are empty");
    }
    let report = audit_references(&network);
    print!("{}", render::AuditText(&report));
    Ok(())
}

fn cmd_metrics(layers: &Layers, policy: Option<&Path>, format: Format) -> CliResult<()> {
    let policy = resolve_policy(policy)?;
    let network = load_network(&layers.nodes, &layers.pipes)?;
    let metrics = calculate_metrics_with(&network, &policy);
    tracing::info!(
        high_priority_issues = metrics.high_priority_issues,
        "metrics ready"
    );

    match format {
        Format::Text => print!("{}", render::MetricsText(&metrics)),
        _ => println!("{}", render::to_machine(format, &metrics)?),
    }
    Ok(())
}

fn cmd_faults(layers: &Layers, format: Format) -> CliResult<()> {
    let network = load_network(&layers.nodes, &layers.pipes)?;
    let faults = get_faulty_assets(&network);

    match format {
        Format::Text => print!("{}", render::FaultsText(&faults)),
        _ => println!("{}", render::to_machine(format, &faults)?),
    }
    Ok(())
}

fn cmd_policy(policy: Option<&Path>) -> CliResult<()> {
    let policy = resolve_policy(policy)?;
    print!("{}", serde_yaml::to_string(&policy)?);
    Ok(())
}
