use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::Shell;
use perfreport_cli::{OutputFormat, build_config, commands};
use std::path::PathBuf;
use std::process::ExitCode;

/// Prefix for the single top-level failure message
const FAILURE_PREFIX: &str = "❌ Report generation failed:";

#[derive(Parser)]
#[command(name = "perfreport")]
#[command(author, version, about, long_about = None)]
#[command(
    about = "Generate performance reports from captured baseline, comparison, Lighthouse and bundle artifacts",
    long_about = "perfreport reads performance artifacts from storage/app under the project root \
                  and writes an executive summary, a technical report, an HTML dashboard and a \
                  JSON export to storage/app/reports. Missing artifacts are reported as unavailable."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Project root containing storage/app (defaults to the current directory)
    #[arg(long, global = true, env = "PERFREPORT_ROOT", value_name = "DIR")]
    root: Option<PathBuf>,

    /// Directory for generated reports (defaults to storage/app/reports)
    #[arg(long, global = true, env = "PERFREPORT_OUTPUT_DIR", value_name = "DIR")]
    output_dir: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate all reports (default)
    Generate,

    /// Print the KPI summary without writing reports
    Summary {
        /// Output format
        #[arg(short, long, value_enum, default_value = "pretty")]
        format: OutputFormat,
    },

    /// Generate shell completion scripts
    Completion {
        /// Target shell
        #[arg(long, value_enum)]
        shell: Shell,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Initialize logging
    init_logging(cli.verbose);

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!("{} {:#}", FAILURE_PREFIX, err);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    match cli.command.unwrap_or(Commands::Generate) {
        Commands::Generate => {
            let config = build_config(cli.root, cli.output_dir)?;
            commands::generate::execute(&config)
        }
        Commands::Summary { format } => {
            let config = build_config(cli.root, cli.output_dir)?;
            commands::summary::execute(&config, format)
        }
        Commands::Completion { shell } => commands::completion::execute(shell, &mut Cli::command()),
    }
}

fn init_logging(verbose: bool) {
    use tracing_subscriber::EnvFilter;

    let filter = if verbose {
        EnvFilter::new("perfreport=debug,perfreport_cli=debug,perfreport_core=debug")
    } else {
        EnvFilter::new("perfreport=info,perfreport_cli=warn,perfreport_core=warn")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .init();
}
