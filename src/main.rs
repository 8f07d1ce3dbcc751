use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use apisnap::{
    load_declarations, KotlinParser, MissingTypePolicy, OutputFormat, ScanConfig, SurfaceRenderer,
    DEFAULT_EXTENSION,
};
use clap::{value_parser, Arg, ArgAction, ArgMatches, Command};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

fn cli() -> Command {
    Command::new("apisnap")
        .about("Print the public API surface of a Kotlin source tree")
        .arg(
            Arg::new("path")
                .help("Source file or directory to scan")
                .required(true)
                .index(1)
                .value_parser(value_parser!(PathBuf)),
        )
        .arg(
            Arg::new("extension")
                .long("extension")
                .short('e')
                .help("Extension of source files to scan")
                .default_value(DEFAULT_EXTENSION),
        )
        .arg(
            Arg::new("format")
                .long("format")
                .short('f')
                .help("Output format")
                .value_parser(["text", "json"])
                .default_value("text"),
        )
        .arg(
            Arg::new("strict-types")
                .long("strict-types")
                .help("Fail on parameters without a type annotation instead of rendering a placeholder")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .short('v')
                .help("Increase log verbosity (repeatable)")
                .action(ArgAction::Count),
        )
}

fn init_logging(verbosity: u8) {
    let default_level = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn scan_config(matches: &ArgMatches) -> ScanConfig {
    let extension = matches
        .get_one::<String>("extension")
        .map(|e| e.trim_start_matches('.').to_string())
        .unwrap_or_else(|| DEFAULT_EXTENSION.to_string());
    let missing_types = if matches.get_flag("strict-types") {
        MissingTypePolicy::Strict
    } else {
        MissingTypePolicy::Placeholder
    };
    let format = match matches.get_one::<String>("format").map(String::as_str) {
        Some("json") => OutputFormat::Json,
        _ => OutputFormat::Text,
    };

    ScanConfig {
        extension,
        missing_types,
        format,
    }
}

fn run(path: &Path, config: &ScanConfig) -> Result<()> {
    // one parser context for the whole run, shared by every parse call
    let parser = KotlinParser::new();
    let declarations = load_declarations(path, &parser, config)
        .with_context(|| format!("cannot scan {}", path.display()))?;

    let renderer = SurfaceRenderer::new(config.missing_types);
    let blocks: Box<dyn Iterator<Item = apisnap::Result<String>> + '_> = match config.format {
        OutputFormat::Text => Box::new(renderer.render_all(declarations)),
        OutputFormat::Json => Box::new(renderer.render_json(declarations)),
    };

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    let mut count = 0usize;
    for block in blocks {
        let block = block.inspect_err(|err| {
            error!(path = ?err.path(), "scan aborted");
        })?;
        writeln!(out, "{}", block)?;
        count += 1;
    }
    out.flush()?;

    info!(declarations = count, "rendered public declarations");
    Ok(())
}

fn main() -> Result<()> {
    let matches = cli().get_matches();
    init_logging(matches.get_count("verbose"));

    // clap enforces the single required positional argument
    let path = matches
        .get_one::<PathBuf>("path")
        .context("missing source path argument")?;
    let config = scan_config(&matches);

    run(path, &config)
}
