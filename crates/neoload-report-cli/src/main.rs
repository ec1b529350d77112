// crates/neoload-report-cli/src/main.rs
// ============================================================================
// Module: NeoLoad Report CLI Entry Point
// Description: Command dispatcher for report lookup, detection, and config.
// Purpose: Run the sidebar pipeline against a workspace and artifact store.
// Dependencies: clap, neoload-report-core, neoload-report-config, serde_json.
// ============================================================================

//! ## Overview
//! The `neoload-report` binary exposes the report pipeline outside a CI host:
//! `sidebar` resolves (and patches) the report of one build, `detect` checks a
//! single file, and `config validate` checks a configuration file. All
//! user-facing strings are routed through the message catalog.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::io::Write;
use std::path::Path;
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

use clap::ArgAction;
use clap::Args;
use clap::CommandFactory;
use clap::Parser;
use clap::Subcommand;
use clap::ValueEnum;
use neoload_report_cli::artifacts::collect_artifacts;
use neoload_report_cli::summary::SidebarSummary;
use neoload_report_cli::t;
use neoload_report_config::ReportConfig;
use neoload_report_core::BuildActions;
use neoload_report_core::BuildRecord;
use neoload_report_core::LocalFileStore;
use neoload_report_core::ReportFileStore;
use neoload_report_core::ReportLocator;
use neoload_report_core::Timestamp;
use neoload_report_core::is_neoload_report;
use thiserror::Error;

// ============================================================================
// SECTION: CLI Types
// ============================================================================

/// Top-level CLI definition.
#[derive(Parser, Debug)]
#[command(name = "neoload-report", disable_help_subcommand = true, disable_version_flag = true)]
struct Cli {
    /// Print version information and exit.
    #[arg(long = "version", action = ArgAction::SetTrue, global = true)]
    show_version: bool,
    /// Selected subcommand to execute.
    #[command(subcommand)]
    command: Option<Commands>,
}

/// Supported CLI subcommands.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Resolve the sidebar link for one build.
    Sidebar(SidebarCommand),
    /// Report whether a file is a NeoLoad HTML report.
    Detect(DetectCommand),
    /// Configuration utilities.
    Config {
        /// Selected config subcommand.
        #[command(subcommand)]
        command: ConfigCommand,
    },
}

/// Config subcommands.
#[derive(Subcommand, Debug)]
enum ConfigCommand {
    /// Validate a configuration file.
    Validate(ConfigValidateCommand),
}

/// Arguments for the sidebar command.
#[derive(Args, Debug)]
struct SidebarCommand {
    /// Build workspace root holding the freshly written files.
    #[arg(long, value_name = "DIR")]
    workspace: PathBuf,
    /// Artifact store root holding the archived files.
    #[arg(long, value_name = "DIR")]
    artifacts: PathBuf,
    /// Build start time (unix milliseconds).
    #[arg(long, value_name = "UNIX_MS", allow_hyphen_values = true)]
    build_start_ms: i64,
    /// Build number used in log events.
    #[arg(long, value_name = "N", default_value_t = 1)]
    build_number: u64,
    /// Job name used in log events.
    #[arg(long, value_name = "NAME", default_value = "job")]
    job: String,
    /// Optional config file path (defaults to neoload-report.toml or env override).
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,
    /// Output format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Json)]
    format: OutputFormat,
}

/// Arguments for the detect command.
#[derive(Args, Debug)]
struct DetectCommand {
    /// File to inspect.
    #[arg(value_name = "FILE")]
    file: PathBuf,
}

/// Arguments for config validation.
#[derive(Args, Debug)]
struct ConfigValidateCommand {
    /// Optional config file path (defaults to neoload-report.toml or env override).
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,
}

/// Output formats for the sidebar summary.
#[derive(ValueEnum, Copy, Clone, Debug)]
enum OutputFormat {
    /// JSON object on one line.
    Json,
    /// Human-readable lines.
    Text,
}

// ============================================================================
// SECTION: Errors
// ============================================================================

/// CLI error wrapper for catalog messages.
#[derive(Debug, Error)]
#[error("{message}")]
struct CliError {
    /// Human-readable error message.
    message: String,
}

impl CliError {
    /// Constructs a new [`CliError`] from a catalog message.
    const fn new(message: String) -> Self {
        Self {
            message,
        }
    }
}

/// CLI result alias for fallible operations.
type CliResult<T> = Result<T, CliError>;

// ============================================================================
// SECTION: Entry Point
// ============================================================================

/// CLI entry point returning an exit code.
fn main() -> ExitCode {
    match run() {
        Ok(code) => code,
        Err(err) => emit_error(&err.to_string()),
    }
}

/// Executes the CLI command dispatcher.
fn run() -> CliResult<ExitCode> {
    let cli = Cli::parse();

    if cli.show_version {
        let version = env!("CARGO_PKG_VERSION");
        write_stdout_line(&t!("main.version", version = version))
            .map_err(|err| CliError::new(output_error("stdout", &err)))?;
        return Ok(ExitCode::SUCCESS);
    }

    let Some(command) = cli.command else {
        show_help()?;
        return Ok(ExitCode::SUCCESS);
    };

    match command {
        Commands::Sidebar(command) => command_sidebar(&command),
        Commands::Detect(command) => command_detect(&command),
        Commands::Config {
            command,
        } => command_config(command),
    }
}

/// Prints top-level help.
fn show_help() -> CliResult<()> {
    let help = Cli::command().render_help().to_string();
    write_stdout_line(help.trim_end()).map_err(|err| CliError::new(output_error("stdout", &err)))
}

// ============================================================================
// SECTION: Sidebar Command
// ============================================================================

/// Executes the `sidebar` command.
fn command_sidebar(command: &SidebarCommand) -> CliResult<ExitCode> {
    let config = ReportConfig::load_or_default(command.config.as_deref())
        .map_err(|err| CliError::new(t!("config.load_failed", error = err)))?;
    let sink =
        config.build_sink().map_err(|err| CliError::new(t!("config.sink_failed", error = err)))?;
    let artifacts = collect_artifacts(&command.artifacts).map_err(|err| {
        CliError::new(t!("sidebar.scan_failed", path = command.artifacts.display(), error = err))
    })?;
    let build = BuildRecord {
        number: command.build_number,
        job_name: command.job.clone(),
        started_at: Timestamp::from_unix_millis(command.build_start_ms),
        workspace_root: Some(command.workspace.clone()),
        artifacts,
    };
    let locator = ReportLocator::new(config.locator_config(), Arc::new(config.file_store()), sink);

    let mut actions = BuildActions::new();
    actions.attach_report_links_if_absent(&build, &locator, &config.presentation());
    let Some(links) = actions.report_links_mut() else {
        return Ok(ExitCode::FAILURE);
    };
    let summary = SidebarSummary::resolve(links).map_err(|err| {
        CliError::new(t!("sidebar.resolve_failed", build = build.number, error = err))
    })?;

    match command.format {
        OutputFormat::Json => {
            let json = serde_json::to_string(&summary)
                .map_err(|err| CliError::new(t!("sidebar.serialize_failed", error = err)))?;
            write_stdout_line(&json).map_err(|err| CliError::new(output_error("stdout", &err)))?;
        }
        OutputFormat::Text => {
            for line in summary.render_text() {
                write_stdout_line(&line)
                    .map_err(|err| CliError::new(output_error("stdout", &err)))?;
            }
        }
    }
    Ok(ExitCode::SUCCESS)
}

// ============================================================================
// SECTION: Detect Command
// ============================================================================

/// Executes the `detect` command; exits non-zero when the file is not a report.
fn command_detect(command: &DetectCommand) -> CliResult<ExitCode> {
    let content = read_report(&command.file)?;
    let path = command.file.display();
    if is_neoload_report(&content) {
        write_stdout_line(&t!("detect.report", path = path))
            .map_err(|err| CliError::new(output_error("stdout", &err)))?;
        Ok(ExitCode::SUCCESS)
    } else {
        write_stdout_line(&t!("detect.not_report", path = path))
            .map_err(|err| CliError::new(output_error("stdout", &err)))?;
        Ok(ExitCode::FAILURE)
    }
}

/// Reads a candidate file under the default size limit.
fn read_report(path: &Path) -> CliResult<String> {
    LocalFileStore::default().read_to_string(path).map_err(|err| {
        CliError::new(t!("detect.read_failed", path = path.display(), error = err))
    })
}

// ============================================================================
// SECTION: Config Commands
// ============================================================================

/// Dispatches config subcommands.
fn command_config(command: ConfigCommand) -> CliResult<ExitCode> {
    match command {
        ConfigCommand::Validate(command) => command_config_validate(&command),
    }
}

/// Executes the config validation command.
fn command_config_validate(command: &ConfigValidateCommand) -> CliResult<ExitCode> {
    let _config = ReportConfig::load(command.config.as_deref())
        .map_err(|err| CliError::new(t!("config.load_failed", error = err)))?;
    write_stdout_line(&t!("config.validate.ok"))
        .map_err(|err| CliError::new(output_error("stdout", &err)))?;
    Ok(ExitCode::SUCCESS)
}

// ============================================================================
// SECTION: Output Helpers
// ============================================================================

/// Writes a line to stdout.
fn write_stdout_line(message: &str) -> std::io::Result<()> {
    let mut stdout = std::io::stdout();
    writeln!(&mut stdout, "{message}")
}

/// Writes a line to stderr.
fn write_stderr_line(message: &str) -> std::io::Result<()> {
    let mut stderr = std::io::stderr();
    writeln!(&mut stderr, "{message}")
}

/// Formats a catalog output error message.
fn output_error(stream: &str, error: &std::io::Error) -> String {
    let stream_label = match stream {
        "stdout" => t!("output.stream.stdout"),
        "stderr" => t!("output.stream.stderr"),
        _ => t!("output.stream.unknown"),
    };
    t!("output.write_failed", stream = stream_label, error = error)
}

/// Emits an error message to stderr and returns a failure exit code.
fn emit_error(message: &str) -> ExitCode {
    let _ = write_stderr_line(message);
    ExitCode::FAILURE
}
