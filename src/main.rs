use clap::{Parser, Subcommand};
use colored::Colorize;
use logview_lib::commands;
use logview_lib::commands::show::LogSource;
use std::path::PathBuf;

const VERSION: &str = env!("CARGO_PKG_VERSION");

#[derive(Parser)]
#[command(name = "logview")]
#[command(about = "View the task runner service log, newest lines first")]
#[command(version = VERSION)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the log newest first, windowing long logs
    Show {
        /// Log file to read instead of the configured one
        #[arg(long, env = "LOGVIEW_FILE", conflicts_with = "stdin")]
        file: Option<PathBuf>,
        /// Read log text from stdin
        #[arg(long)]
        stdin: bool,
        /// Trailing bytes of the log to keep
        #[arg(long, conflicts_with = "full")]
        bytes: Option<usize>,
        /// Read the whole log instead of its tail
        #[arg(long)]
        full: bool,
    },

    /// Print the resolved log file path
    Path,

    /// Show or update the local config
    Config {
        /// Log file path to store
        #[arg(long)]
        log_path: Option<String>,
        /// Tail size in bytes to store
        #[arg(long)]
        tail_bytes: Option<usize>,
    },

    /// Display version information
    Version,
}

fn init_tracing() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "logview=warn,logview_lib=warn".into()),
        )
        .init();
}

fn run(command: Commands) -> anyhow::Result<()> {
    match command {
        Commands::Show {
            file,
            stdin,
            bytes,
            full,
        } => {
            let source = match (file, stdin) {
                (_, true) => LogSource::Stdin,
                (Some(path), false) => LogSource::File(path),
                (None, false) => LogSource::Resolved,
            };
            commands::show::run(source, bytes, full)
        }
        Commands::Path => commands::path::run(),
        Commands::Config {
            log_path,
            tail_bytes,
        } => commands::config::run(log_path, tail_bytes),
        Commands::Version => {
            println!("logview v{}", VERSION);
            Ok(())
        }
    }
}

fn main() {
    init_tracing();
    let cli = Cli::parse();

    if let Err(e) = run(cli.command) {
        eprintln!("{} {:#}", "Error:".red().bold(), e);
        std::process::exit(1);
    }
}
