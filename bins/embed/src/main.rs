//! embed: append a C byte-array declaration of a binary resource to a source file.

use bytembed_cli::output::{format_size, set_color, Status};
use bytembed_core::config::{Config, LengthStyle};
use bytembed_core::error::{exit_codes, Error, Result};
use bytembed_embedder::{embed, EmbedSummary};
use bytembed_telemetry::{level_for, TelemetryConfig, Timer};
use clap::error::ErrorKind;
use clap::{Parser, ValueEnum};
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "embed")]
#[command(about = "Append a C byte-array declaration of a binary resource to a source file")]
#[command(version)]
#[command(
    after_help = "Creates `static const char SYMBOL[]` and `SYMBOL_len` from the contents of \
                  INPUT_FILE and appends them to OUTPUT_FILE."
)]
struct Cli {
    /// Identifier for the array; the length constant is named SYMBOL_len
    symbol: String,

    /// Binary resource to embed
    input_file: PathBuf,

    /// C source file to append to (created if missing)
    output_file: PathBuf,

    /// Config file path
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// How to write the length constant (overrides the config file)
    #[arg(long, value_enum)]
    length: Option<LengthArg>,

    /// Increase output verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Only log errors
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,

    /// Disable colored output
    #[arg(long)]
    no_color: bool,

    /// Log line format on stderr
    #[arg(long, value_enum, default_value = "compact")]
    log_format: LogFormat,
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
enum LogFormat {
    Compact,
    Json,
}

#[derive(Clone, Copy, ValueEnum)]
enum LengthArg {
    /// sizeof(SYMBOL)
    Sizeof,
    /// The byte count as an integer literal
    Literal,
}

impl From<LengthArg> for LengthStyle {
    fn from(arg: LengthArg) -> Self {
        match arg {
            LengthArg::Sizeof => LengthStyle::Sizeof,
            LengthArg::Literal => LengthStyle::Literal,
        }
    }
}

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            let code = match err.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => exit_codes::SUCCESS,
                _ => exit_codes::USAGE_ERROR,
            };
            let _ = err.print();
            return exit(code);
        }
    };

    if cli.no_color {
        set_color(false);
    }

    let telemetry = TelemetryConfig {
        log_level: level_for(cli.verbose, cli.quiet).to_string(),
        ansi: !cli.no_color,
        json: cli.log_format == LogFormat::Json,
    };
    if let Err(e) = bytembed_telemetry::init_with_config(telemetry) {
        Status::warning(&format!("{e:#}"));
    }

    match run(&cli) {
        Ok(summary) => {
            if cli.verbose > 0 {
                Status::success(&format!(
                    "Embedded {} as `{}` into {}",
                    format_size(summary.bytes),
                    summary.symbol,
                    summary.output.display()
                ));
            }
            exit(exit_codes::SUCCESS)
        }
        Err(err) => {
            report(&err);
            exit(err.exit_code())
        }
    }
}

fn run(cli: &Cli) -> Result<EmbedSummary> {
    let mut config = Config::load(cli.config.as_deref())?;
    if let Some(length) = cli.length {
        config.schema.embed.length = length.into();
    }
    if let Some(path) = &config.path {
        tracing::debug!(path = %path.display(), "loaded configuration");
    }

    let timer = Timer::start("embed");
    let summary = embed(
        &cli.symbol,
        &cli.input_file,
        &cli.output_file,
        &config.schema.embed,
    )?;
    timer.stop();

    Ok(summary)
}

fn report(err: &Error) {
    Status::error(&format!("Error: {}", err.message));
    if let Some(context) = &err.context {
        eprintln!("  Context: {context}");
    }
    if let Some(suggestion) = &err.suggestion {
        eprintln!("  Suggestion: {suggestion}");
    }
    if let Ok(json) = serde_json::to_string(&err.to_report()) {
        tracing::debug!(report = %json, "embed failed");
    }
}

fn exit(code: i32) -> ExitCode {
    u8::try_from(code).map_or(ExitCode::FAILURE, ExitCode::from)
}
