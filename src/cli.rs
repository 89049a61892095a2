use crate::domain::constants::API_KEY_ENV;
use clap::{Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "oddcheck",
    version,
    about = "Operational Design Domain compliance checks for road-scene photographs"
)]
pub struct Cli {
    #[arg(long, global = true, help = "Output machine-readable JSON")]
    pub json: bool,
    #[arg(long, short, global = true, help = "Enable debug logging on stderr")]
    pub verbose: bool,
    #[arg(
        long,
        global = true,
        help = "Config file (default: ~/.config/oddcheck/config.toml)"
    )]
    pub config: Option<PathBuf>,
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Ask the ODD questions for every image in a directory and write a report
    Check {
        images_dir: Option<PathBuf>,
        #[arg(long, value_enum)]
        backend: Option<BackendKind>,
        #[arg(long, short, help = "Report path (default: compliance_report.json)")]
        output: Option<PathBuf>,
        #[arg(long)]
        model: Option<String>,
        #[arg(long, help = "Base URL of the hosted completion API")]
        api_base: Option<String>,
        #[arg(long, help = "Base URL of the local multimodal model server")]
        endpoint: Option<String>,
        #[arg(long, env = API_KEY_ENV, hide_env_values = true)]
        api_key: Option<String>,
        #[arg(long)]
        max_tokens: Option<u32>,
        #[arg(long)]
        temperature: Option<f32>,
        #[arg(long)]
        timeout_secs: Option<u64>,
        #[arg(long, value_enum, help = "Answer every question must have for compliance")]
        compliant_when: Option<ExpectedAnswer>,
    },
    /// List the ODD questions
    Questions,
    /// List the images a check would process
    Scan { images_dir: Option<PathBuf> },
    /// Print a saved compliance report
    Report { path: PathBuf },
    /// List recorded check runs
    History,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum BackendKind {
    Completion,
    Vision,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ExpectedAnswer {
    Yes,
    No,
}

impl fmt::Display for BackendKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BackendKind::Completion => write!(f, "completion"),
            BackendKind::Vision => write!(f, "vision"),
        }
    }
}

impl fmt::Display for ExpectedAnswer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExpectedAnswer::Yes => write!(f, "yes"),
            ExpectedAnswer::No => write!(f, "no"),
        }
    }
}
