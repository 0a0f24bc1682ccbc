//! jaxbify CLI - JAXB annotations for XMLBeans-generated sources
//!
//! Commands:
//! - `jaxbify run` - Annotate interfaces and implementations, generate adapters
//! - `jaxbify check` - Validate a configuration without touching any file

use clap::{Parser, Subcommand};
use jaxbify_core::{AnnotateError, LogLevel};
use options::{ConfigArgs, ReportFormat};
use std::process::ExitCode;

mod check;
mod options;
mod run;

#[derive(Parser)]
#[command(name = "jaxbify")]
#[command(
    author,
    version,
    about = "Add JAXB bindings to XMLBeans-generated Java sources",
    long_about = None
)]
struct Cli {
    /// Log level (trace, debug, info, warn, error, off)
    #[arg(long, global = true, default_value = "info")]
    log_level: LogLevel,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Annotate the configured directories and generate adapters
    Run {
        #[command(flatten)]
        options: ConfigArgs,

        /// Format of the summary printed when the run completes
        #[arg(long, value_enum, default_value_t = ReportFormat::Text)]
        report: ReportFormat,
    },

    /// Validate a configuration and show the packages it resolves to
    Check {
        #[command(flatten)]
        options: ConfigArgs,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    jaxbify_logging::init_logging(cli.log_level);

    let result = match &cli.command {
        Commands::Run { options, report } => run::run(options, *report),
        Commands::Check { options } => check::check(options),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {err:#}");
            let code = err
                .downcast_ref::<AnnotateError>()
                .map_or(1, AnnotateError::exit_code);
            ExitCode::from(u8::try_from(code).unwrap_or(1))
        }
    }
}
