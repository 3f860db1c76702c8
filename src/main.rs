// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Textmap-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Textmap and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Textmap CLI entrypoint.
//!
//! Reads one diagram as JSON (from a file or stdin) and writes its canonical text form to stdout.
//! `--type-name` prints the diagram's type name instead; `--schema` prints the JSON Schema of the
//! diagram model.

use std::fs;
use std::io::{self, Read, Write};
use std::path::PathBuf;
use std::process;
use std::str::FromStr;

use clap::Parser;
use log::{debug, error, info, LevelFilter};
use thiserror::Error;

use textmap::config::{load_config, ConfigError, RenderConfig};
use textmap::model::{diagram_schema, Diagram};
use textmap::{render_with, type_name, RenderError};

const STDIN_INPUT: &str = "-";

/// Export a JSON diagram to its canonical text form
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the JSON diagram, or `-` to read stdin
    #[arg(default_value = STDIN_INPUT)]
    input: String,

    /// Print the diagram's type name instead of its text
    #[arg(long)]
    type_name: bool,

    /// Print the JSON Schema of the diagram model and exit
    #[arg(long, conflicts_with = "type_name")]
    schema: bool,

    /// Path to configuration file (TOML)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Maximum nesting depth, overriding the configuration file
    #[arg(long)]
    max_depth: Option<usize>,

    /// Log level (off, error, warn, info, debug, trace); defaults to `RUST_LOG`, then `warn`
    #[arg(long)]
    log_level: Option<String>,
}

#[derive(Debug, Error)]
enum CliError {
    #[error("failed to read {input}: {source}")]
    Input {
        input: String,
        #[source]
        source: io::Error,
    },

    #[error("failed to write output: {0}")]
    Output(#[source] io::Error),

    #[error("invalid diagram JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Render(#[from] RenderError),
}

fn resolve_config(args: &Args) -> Result<RenderConfig, CliError> {
    if let Some(max_depth) = args.max_depth {
        return Ok(RenderConfig::new(max_depth)?);
    }
    match &args.config {
        Some(path) => Ok(load_config(path)?),
        None => Ok(RenderConfig::default()),
    }
}

fn read_input(input: &str, mut stdin: impl Read) -> Result<String, CliError> {
    let result = if input == STDIN_INPUT {
        let mut source = String::new();
        stdin.read_to_string(&mut source).map(|_| source)
    } else {
        fs::read_to_string(input)
    };
    result.map_err(|source| CliError::Input { input: input.to_owned(), source })
}

fn run(args: &Args, stdin: impl Read, out: &mut impl Write) -> Result<(), CliError> {
    if args.schema {
        let schema = serde_json::to_string_pretty(&diagram_schema()?)?;
        writeln!(out, "{schema}").map_err(CliError::Output)?;
        return Ok(());
    }

    let source = read_input(&args.input, stdin)?;
    let diagram = Diagram::from_json(&source)?;
    info!(kind = type_name(&diagram); "Loaded diagram");

    if args.type_name {
        writeln!(out, "{}", type_name(&diagram)).map_err(CliError::Output)?;
        return Ok(());
    }

    let config = resolve_config(args)?;
    debug!(max_depth = config.max_depth(); "Resolved render configuration");

    // Written verbatim: whether the text ends in a newline depends on the diagram kind.
    let text = render_with(&diagram, &config)?;
    out.write_all(text.as_bytes()).map_err(CliError::Output)?;
    out.flush().map_err(CliError::Output)?;
    Ok(())
}

/// `--log-level` wins over `RUST_LOG`, which wins over the `warn` default.
fn log_level_override(log_level: Option<&str>) -> Option<LevelFilter> {
    let log_level = log_level?;
    match LevelFilter::from_str(log_level) {
        Ok(level) => Some(level),
        Err(_) => {
            eprintln!("Invalid log level: {log_level}. Using 'warn' instead.");
            Some(LevelFilter::Warn)
        }
    }
}

fn init_logger(log_level: Option<&str>) {
    let env = env_logger::Env::default().default_filter_or("warn");
    let mut builder = env_logger::Builder::from_env(env);
    if let Some(level) = log_level_override(log_level) {
        builder.filter_level(level);
    }
    builder.init();
}

fn main() {
    let args = Args::parse();
    init_logger(args.log_level.as_deref());
    debug!(args:?; "Parsed arguments");

    let stdout = io::stdout();
    if let Err(err) = run(&args, io::stdin().lock(), &mut stdout.lock()) {
        error!("{err}");
        process::exit(1);
    }
}
