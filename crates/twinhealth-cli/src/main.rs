use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use eyre::Result;
use tracing_subscriber::EnvFilter;
use twinhealth_cli::commands::{self, OutputFormat};
use twinhealth_cli::config::{self, TwinHealthConfig};
use twinhealth_export::render::ExportFormat;

#[derive(Parser)]
#[command(name = "twinhealth")]
#[command(about = "Clinical data-entry scoring and report export")]
struct Cli {
    /// Config file (defaults to the user config directory)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Score a clinical input JSON file into a ranked differential
    Diagnose {
        /// Clinical input JSON (field name -> text)
        input: PathBuf,
        #[arg(long, value_enum, default_value_t = ResultFormat::Text)]
        format: ResultFormat,
    },
    /// Write a report document
    Report {
        #[command(subcommand)]
        kind: ReportKind,
    },
    /// Classify the vitals in a patient self-report JSON file
    Vitals {
        /// Patient record JSON
        input: PathBuf,
    },
    /// Inspect or create the config file
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
enum ReportKind {
    /// Clinical assessment report
    Clinical {
        input: PathBuf,
        /// Leave out the differential diagnosis section
        #[arg(long)]
        no_diagnosis: bool,
        #[arg(long, value_enum, default_value_t = DocumentFormat::Docx)]
        format: DocumentFormat,
        /// Output path (defaults to a dated file in the output directory)
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Patient health report
    Patient {
        input: PathBuf,
        #[arg(long, value_enum, default_value_t = DocumentFormat::Docx)]
        format: DocumentFormat,
        #[arg(long)]
        out: Option<PathBuf>,
    },
}

#[derive(Subcommand)]
enum ConfigAction {
    /// Print the effective config
    Show,
    /// Write a default config file
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum ResultFormat {
    Json,
    Text,
}

#[derive(Clone, Copy, ValueEnum)]
enum DocumentFormat {
    Docx,
    Markdown,
}

impl From<ResultFormat> for OutputFormat {
    fn from(f: ResultFormat) -> Self {
        match f {
            ResultFormat::Json => OutputFormat::Json,
            ResultFormat::Text => OutputFormat::Text,
        }
    }
}

impl From<DocumentFormat> for ExportFormat {
    fn from(f: DocumentFormat) -> Self {
        match f {
            DocumentFormat::Docx => ExportFormat::Docx,
            DocumentFormat::Markdown => ExportFormat::Markdown,
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;

    // Logs go to stderr so stdout stays machine-readable.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config_path = match cli.config {
        Some(path) => path,
        None => config::default_config_path()?,
    };
    let config = config::load_config(&config_path)?;

    match cli.command {
        Commands::Diagnose { input, format } => {
            let output = commands::diagnose(&input, &config, format.into()).await?;
            println!("{output}");
        }
        Commands::Report { kind } => {
            let path = match kind {
                ReportKind::Clinical {
                    input,
                    no_diagnosis,
                    format,
                    out,
                } => {
                    commands::clinical_report(&input, &config, !no_diagnosis, format.into(), out)
                        .await?
                }
                ReportKind::Patient { input, format, out } => {
                    commands::patient_report(&input, &config, format.into(), out)?
                }
            };
            println!("{}", path.display());
        }
        Commands::Vitals { input } => {
            print!("{}", commands::vitals(&input)?);
        }
        Commands::Config { action } => match action {
            ConfigAction::Show => {
                println!("# {}", config_path.display());
                println!("{}", serde_json::to_string_pretty(&config)?);
            }
            ConfigAction::Init { force } => {
                if config_path.exists() && !force {
                    eyre::bail!(
                        "config already exists at {} (use --force to overwrite)",
                        config_path.display()
                    );
                }
                config::save_config(&config_path, &TwinHealthConfig::default())?;
                println!("{}", config_path.display());
            }
        },
    }

    Ok(())
}
