use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{ArgAction, Parser, Subcommand};
use glob::glob;
use gnmsg_core::message::scan_tagged_parts;
use gnmsg_core::parts::{Part, PartKind, decode_part_at};
use gnmsg_core::wire::decode_hex_bytes;
use serde::Serialize;

const INPUT_EXTENSIONS: [&str; 3] = ["hex", "txt", "log"];

#[derive(Parser, Debug)]
#[command(name = "gnmsg")]
#[command(version)]
#[command(
    about = "Decoder for tagged binary client/server messages captured as hex dumps.",
    long_about = None,
    after_help = "Examples:\n  gnmsg part int 00000000010000002a\n  gnmsg message decode capture.hex --parts region,int,bool -o report.json\n  gnmsg message scan 0100000004000000002a"
)]
struct Cli {
    /// Increase log verbosity (-v, -vv, -vvv); RUST_LOG is honoured too
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Decode a single part from a hex string.
    Part {
        /// Part kind: object, int, region, event-id, bool
        kind: PartKind,

        /// Message bytes as hex (whitespace allowed)
        hex: String,

        /// Byte offset the part starts at
        #[arg(long, default_value_t = 0)]
        offset: usize,

        /// Pretty-print JSON output
        #[arg(long)]
        pretty: bool,
    },
    /// Operations on whole messages.
    Message {
        #[command(subcommand)]
        command: MessageCommands,
    },
}

#[derive(Subcommand, Debug)]
enum MessageCommands {
    /// Decode every message of a hex-dump file and write a JSON report.
    #[command(alias = "dump")]
    Decode {
        /// Path to a hex dump (.hex, .txt or .log), one message per line
        input: PathBuf,

        /// Part kinds to apply, in order, after the message header
        #[arg(long, value_delimiter = ',', required = true)]
        parts: Vec<PartKind>,

        /// Output report path (JSON)
        #[arg(short = 'o', long, required_unless_present = "stdout")]
        report: Option<PathBuf>,

        /// Write JSON report to stdout
        #[arg(long, conflicts_with = "report")]
        stdout: bool,

        /// Pretty-print JSON output
        #[arg(long, conflicts_with = "compact")]
        pretty: bool,

        /// Compact JSON output (default)
        #[arg(long)]
        compact: bool,

        /// Suppress non-error output
        #[arg(long)]
        quiet: bool,

        /// Exit with a non-zero code if any message failed to decode
        #[arg(long)]
        strict: bool,

        /// List failed messages after decoding
        #[arg(long)]
        list_errors: bool,
    },
    /// Decode a buffer where every part is preceded by its kind tag byte.
    Scan {
        /// Buffer bytes as hex (whitespace allowed)
        hex: String,

        /// Pretty-print JSON output
        #[arg(long)]
        pretty: bool,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let quiet = matches!(
        cli.command,
        Commands::Message {
            command: MessageCommands::Decode { quiet: true, .. }
        }
    );
    init_logging(cli.verbose, quiet);

    let result = match cli.command {
        Commands::Part {
            kind,
            hex,
            offset,
            pretty,
        } => cmd_part(kind, &hex, offset, pretty),
        Commands::Message { command } => match command {
            MessageCommands::Decode {
                input,
                parts,
                report,
                stdout,
                pretty,
                compact: _,
                quiet,
                strict,
                list_errors,
            } => cmd_message_decode(
                input,
                parts,
                report,
                stdout,
                pretty,
                quiet,
                strict,
                list_errors,
            ),
            MessageCommands::Scan { hex, pretty } => cmd_message_scan(&hex, pretty),
        },
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {}", err.message);
            if let Some(hint) = err.hint {
                eprintln!("hint: {}", hint);
            }
            ExitCode::from(2)
        }
    }
}

fn init_logging(verbose: u8, quiet: bool) {
    let level = if quiet {
        log::LevelFilter::Error
    } else {
        match verbose {
            0 => log::LevelFilter::Warn,
            1 => log::LevelFilter::Info,
            2 => log::LevelFilter::Debug,
            _ => log::LevelFilter::Trace,
        }
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .format_timestamp(None)
        .init();
}

#[derive(Debug)]
struct CliError {
    message: String,
    hint: Option<String>,
}

impl CliError {
    fn new(message: impl Into<String>, hint: Option<String>) -> Self {
        Self {
            message: message.into(),
            hint,
        }
    }
}

impl std::fmt::Display for CliError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for CliError {}

impl From<anyhow::Error> for CliError {
    fn from(err: anyhow::Error) -> Self {
        CliError::new(format!("{:#}", err), None)
    }
}

#[derive(Serialize)]
struct PartOutput {
    part: Part,
    next_offset: usize,
}

#[derive(Serialize)]
struct ScanOutput {
    parts: Vec<Part>,
}

fn cmd_part(kind: PartKind, hex: &str, offset: usize, pretty: bool) -> Result<(), CliError> {
    let bytes = parse_hex_arg(hex)?;
    let (part, next_offset) = decode_part_at(kind, &bytes, offset).map_err(|err| {
        CliError::new(
            format!("cannot decode {} part at offset {}: {}", kind, offset, err),
            Some("check the part kind and that the buffer is complete".to_string()),
        )
    })?;
    println!("{}", to_json(&PartOutput { part, next_offset }, pretty)?);
    Ok(())
}

fn cmd_message_scan(hex: &str, pretty: bool) -> Result<(), CliError> {
    let bytes = parse_hex_arg(hex)?;
    let parts = scan_tagged_parts(&bytes).map_err(|err| {
        CliError::new(
            format!("cannot scan tagged parts: {}", err),
            Some(format!(
                "tags are {}",
                PartKind::ALL
                    .iter()
                    .map(|kind| format!("{}={}", kind.tag(), kind))
                    .collect::<Vec<_>>()
                    .join(", ")
            )),
        )
    })?;
    println!("{}", to_json(&ScanOutput { parts }, pretty)?);
    Ok(())
}

fn parse_hex_arg(hex: &str) -> Result<Vec<u8>, CliError> {
    decode_hex_bytes(hex).map_err(|err| {
        CliError::new(
            format!("invalid hex input: {}", err),
            Some("use two hex digits per byte, e.g. 0000002a".to_string()),
        )
    })
}

fn to_json<T: Serialize>(value: &T, pretty: bool) -> Result<String, CliError> {
    let json = if pretty {
        serde_json::to_string_pretty(value)
    } else {
        serde_json::to_string(value)
    };
    json.context("JSON serialization failed").map_err(Into::into)
}

fn cmd_message_decode(
    input: PathBuf,
    parts: Vec<PartKind>,
    report: Option<PathBuf>,
    stdout: bool,
    pretty: bool,
    quiet: bool,
    strict: bool,
    list_errors: bool,
) -> Result<(), CliError> {
    let resolved_input = resolve_input_path(&input)?;
    validate_input_file(&resolved_input)?;
    let input_abs = fs::canonicalize(&resolved_input)
        .with_context(|| format!("Failed to resolve input path: {}", resolved_input.display()))?;

    let report = if stdout {
        None
    } else {
        Some(report.ok_or_else(|| {
            CliError::new(
                "missing output path",
                Some("use -o/--report or --stdout".to_string()),
            )
        })?)
    };

    if let Some(report_path) = report.as_ref() {
        ensure_report_differs_from_input(report_path, &input_abs)?;
    }

    let rep = gnmsg_core::decode_hex_dump_file(&resolved_input, &parts)
        .context("hex dump decoding failed")?;
    let json = to_json(&rep, pretty)?;

    match report {
        None => print!("{}", json),
        Some(report) => {
            if let Some(parent) = report.parent() {
                if !parent.as_os_str().is_empty() {
                    fs::create_dir_all(parent).with_context(|| {
                        format!("Failed to create output directory: {}", parent.display())
                    })?;
                }
            }
            fs::write(&report, json)
                .with_context(|| format!("Failed to write report: {}", report.display()))?;
            if !quiet {
                eprintln!(
                    "OK: {} message(s), {} failed -> {}",
                    rep.summary.messages_total,
                    rep.summary.messages_failed,
                    report.display()
                );
            }
        }
    }

    if list_errors && !quiet {
        print_errors(&rep);
    }
    if strict && rep.summary.messages_failed > 0 {
        return Err(CliError::new(
            format!(
                "{} message(s) failed to decode",
                rep.summary.messages_failed
            ),
            Some("use --list-errors to inspect".to_string()),
        ));
    }
    Ok(())
}

fn ensure_report_differs_from_input(
    report_path: &PathBuf,
    input_abs: &PathBuf,
) -> Result<(), CliError> {
    let Some(parent) = report_path.parent() else {
        return Ok(());
    };
    let parent = if parent.as_os_str().is_empty() {
        Path::new(".")
    } else {
        parent
    };
    // A directory that does not exist yet cannot hold the input.
    if !parent.exists() {
        return Ok(());
    }
    let report_dir = fs::canonicalize(parent)
        .with_context(|| format!("Failed to resolve output path: {}", report_path.display()))?;
    let report_target = report_dir.join(
        report_path
            .file_name()
            .ok_or_else(|| anyhow::anyhow!("Invalid report path"))?,
    );
    if &report_target == input_abs {
        return Err(CliError::new(
            format!(
                "report path must differ from input: {}",
                report_path.display()
            ),
            Some("choose a different output path".to_string()),
        ));
    }
    Ok(())
}

fn print_errors(rep: &gnmsg_core::Report) {
    eprintln!("Failed messages:");
    for record in rep.messages.iter().filter(|record| record.is_failed()) {
        eprintln!(
            "  line {}: {}",
            record.line,
            record.error.as_deref().unwrap_or_default()
        );
    }
}

fn validate_input_file(input: &PathBuf) -> Result<(), CliError> {
    if !input.exists() {
        return Err(CliError::new(
            format!("input file not found: {}", input.display()),
            Some("use a .hex, .txt or .log file".to_string()),
        ));
    }
    if !input.is_file() {
        return Err(CliError::new(
            format!("input is not a file: {}", input.display()),
            Some("use a .hex, .txt or .log file".to_string()),
        ));
    }
    let ext = input
        .extension()
        .and_then(|ext| ext.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();
    if !INPUT_EXTENSIONS.contains(&ext.as_str()) {
        return Err(CliError::new(
            format!("unsupported input format '{}'", input.display()),
            Some("expected a .hex, .txt or .log file".to_string()),
        ));
    }
    Ok(())
}

fn resolve_input_path(input: &PathBuf) -> Result<PathBuf, CliError> {
    let pattern = input.to_string_lossy();
    if !is_glob_pattern(&pattern) {
        return Ok(input.clone());
    }

    let mut matches = Vec::new();
    let paths = glob(&pattern).map_err(|err| {
        CliError::new(
            format!("invalid input pattern '{}'", pattern),
            Some(format!("pattern error: {}", err.msg)),
        )
    })?;
    for entry in paths {
        let path = entry.map_err(|err| {
            CliError::new(
                format!("invalid input pattern '{}'", pattern),
                Some(format!("pattern error: {}", err)),
            )
        })?;
        if path.is_file() {
            matches.push(path);
        }
    }

    match matches.len() {
        0 => Err(CliError::new(
            format!("no files match pattern '{}'", pattern),
            Some("check the path or quote the pattern".to_string()),
        )),
        1 => Ok(matches.remove(0)),
        count => {
            let listed = matches
                .iter()
                .take(3)
                .map(|p| p.display().to_string())
                .collect::<Vec<_>>()
                .join(", ");
            let more = if count > 3 { ", ..." } else { "" };
            Err(CliError::new(
                format!(
                    "multiple files match pattern '{}' ({} matches); matches: {}{}",
                    pattern, count, listed, more
                ),
                Some("pass a single dump file, or run once per file".to_string()),
            ))
        }
    }
}

fn is_glob_pattern(input: &str) -> bool {
    input.contains('*') || input.contains('?') || input.contains('[')
}
