use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(
    name = "cardio-sentinel",
    version,
    about = "Cardiovascular risk scoring and trend detection"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Score a single vitals snapshot (patientId + recordData)
    Analyze(RunArgs),
    /// Score a record series and detect trends (patientId + records)
    Longitudinal(RunArgs),
    Config(ConfigArgs),
}

#[derive(Debug, Args)]
pub struct RunArgs {
    #[arg(long, help = "Request JSON file")]
    pub input: PathBuf,

    #[arg(long, default_value = ".")]
    pub out: PathBuf,

    #[arg(long, help = "Config TSV to overlay on the built-in thresholds")]
    pub config: Option<PathBuf>,

    #[arg(long, default_value_t = false)]
    pub json: bool,

    #[arg(long, default_value_t = false)]
    pub tsv: bool,
}

#[derive(Debug, Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    Show(ConfigShowArgs),
}

#[derive(Debug, Args)]
pub struct ConfigShowArgs {
    #[arg(long, help = "Optional config TSV to overlay on the built-in thresholds")]
    pub config: Option<PathBuf>,
}
