//! Command-line interface for delta-babel
//! This binary converts rich-text documents between Quill deltas, HTML, Tumblr NPF, SSML and plain text.
//!
//! Usage:
//!   delta convert `<path>` --to `<format>` [--from `<format>`] [--config `<file>`]   - Convert a file (`-` reads stdin)
//!   delta formats                                                                 - List the available formats
//!
//! Logging goes to stderr, filtered by `RUST_LOG` (default `warn`, `-v` for `debug`).

use clap::{Arg, ArgAction, ArgMatches, Command};
use delta_babel::{FormatOptions, FormatRegistry};
use delta_config::{ConfigError, DeltaConfig, Loader};
use std::io::Read;
use std::path::Path;
use tracing_subscriber::EnvFilter;

fn main() {
    let matches = Command::new("delta")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Convert rich-text documents between delta, HTML, NPF, SSML and text")
        .arg_required_else_help(true)
        .subcommand_required(true)
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .short('v')
                .help("Log debug diagnostics to stderr")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .subcommand(
            Command::new("convert")
                .about("Convert a document from one format to another")
                .arg(
                    Arg::new("path")
                        .help("Input file, or '-' for stdin")
                        .required(true)
                        .index(1),
                )
                .arg(
                    Arg::new("from")
                        .long("from")
                        .short('f')
                        .help("Input format (default: detected from the file extension)"),
                )
                .arg(
                    Arg::new("to")
                        .long("to")
                        .short('t')
                        .help("Output format (e.g., 'html', 'npf', 'ssml')")
                        .required(true),
                )
                .arg(
                    Arg::new("config")
                        .long("config")
                        .short('c')
                        .help("TOML file layered over the built-in defaults"),
                ),
        )
        .subcommand(Command::new("formats").about("List available formats"))
        .get_matches();

    init_tracing(matches.get_flag("verbose"));

    match matches.subcommand() {
        Some(("convert", sub)) => handle_convert_command(sub),
        Some(("formats", _)) => handle_formats_command(),
        _ => unreachable!("clap requires a subcommand"),
    }
}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Handle the convert command
fn handle_convert_command(matches: &ArgMatches) {
    let path = matches
        .get_one::<String>("path")
        .expect("path is required");
    let to = matches.get_one::<String>("to").expect("to is required");

    let config = load_config(matches.get_one::<String>("config")).unwrap_or_else(|e| {
        eprintln!("Configuration error: {}", e);
        std::process::exit(1);
    });
    let registry = FormatRegistry::with_options(FormatOptions::from(&config));

    let from = match matches.get_one::<String>("from") {
        Some(from) => from.clone(),
        None if path == "-" => {
            eprintln!("--from is required when reading from stdin");
            std::process::exit(1);
        }
        None => match registry.detect_format(Path::new(path)) {
            Some(format) => format.name().to_string(),
            None => {
                eprintln!("Cannot detect the format of '{}', pass --from", path);
                eprintln!("Available formats: {}", registry.list_formats().join(", "));
                std::process::exit(1);
            }
        },
    };

    let source = read_source(path).unwrap_or_else(|e| {
        eprintln!("Error reading '{}': {}", path, e);
        std::process::exit(1);
    });

    tracing::debug!(path = path.as_str(), from = from.as_str(), to = to.as_str(), "convert");
    let output = registry.convert(&source, &from, to).unwrap_or_else(|e| {
        eprintln!("Conversion error: {}", e);
        std::process::exit(1);
    });

    print!("{}", output);
}

/// Handle the formats command
fn handle_formats_command() {
    let registry = FormatRegistry::with_defaults();
    println!("Available formats:\n");

    for name in registry.list_formats() {
        let Ok(format) = registry.get(&name) else {
            continue;
        };
        let capabilities = match (format.supports_parsing(), format.supports_serialization()) {
            (true, true) => "parse, serialize",
            (true, false) => "parse",
            (false, true) => "serialize",
            (false, false) => "none",
        };
        println!("  {} ({})", name, capabilities);
        println!("    {}", format.description());
        if !format.file_extensions().is_empty() {
            println!("    extensions: {}", format.file_extensions().join(", "));
        }
        println!();
    }
}

fn load_config(path: Option<&String>) -> Result<DeltaConfig, ConfigError> {
    let mut loader = Loader::new();
    if let Some(path) = path {
        loader = loader.with_file(path);
    }
    loader.build()
}

fn read_source(path: &str) -> std::io::Result<String> {
    if path == "-" {
        let mut source = String::new();
        std::io::stdin().read_to_string(&mut source)?;
        Ok(source)
    } else {
        std::fs::read_to_string(path)
    }
}
