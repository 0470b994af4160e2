//! Command-line interface for hwk2lua
//! Transpiles an hwk script to Lua, or shows how the lexer splits it up.
//!
//! Usage:
//!   hwk2lua `<path>` [--format `<format>`] [--config `<file>`] [--output `<file>`]
//!   hwk2lua `<path>` --check                                  - Only report errors
//!   hwk2lua --list-formats                                  - List all output formats

use clap::error::ErrorKind;
use clap::{Arg, ArgAction, ArgMatches, Command};
use hwk2lua::config::{Hwk2LuaConfig, Loader};
use hwk2lua::hwk::processor::{process_file, OutputFormat};
use hwk2lua::logging;
use hwk2lua::Transpiler;
use std::path::Path;

fn main() {
    let formats = OutputFormat::all().map(|format| format.name());
    let command = Command::new("hwk2lua")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Transpile hwk keybinding scripts to Lua")
        .arg(
            Arg::new("path")
                .help("Path to the hwk script")
                .required_unless_present("list-formats")
                .index(1),
        )
        .arg(
            Arg::new("format")
                .long("format")
                .short('f')
                .help("Output format (defaults to the configured one, 'lua')")
                .value_parser(formats),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .short('c')
                .help("Configuration file layered over the defaults"),
        )
        .arg(
            Arg::new("output")
                .long("output")
                .short('o')
                .help("Write the result to this file instead of stdout"),
        )
        .arg(
            Arg::new("check")
                .long("check")
                .help("Transpile without printing anything; the exit code tells the result")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Log more (-v debug, -vv trace)")
                .action(ArgAction::Count),
        )
        .arg(
            Arg::new("list-formats")
                .long("list-formats")
                .help("List the available output formats")
                .action(ArgAction::SetTrue),
        );

    // Usage errors exit with 1, not clap's default of 2
    let matches = command.try_get_matches().unwrap_or_else(|e| match e.kind() {
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => e.exit(),
        _ => {
            let _ = e.print();
            std::process::exit(1);
        }
    });

    if matches.get_flag("list-formats") {
        handle_list_formats_command();
        return;
    }

    let config = load_config(&matches).unwrap_or_else(|e| {
        eprintln!("Configuration error: {}", e);
        std::process::exit(1);
    });

    let filter = logging::filter_for_verbosity(&config.log.filter, matches.get_count("verbose"));
    if let Err(e) = logging::init(filter) {
        eprintln!("Failed to initialise logging: {}", e);
    }

    let path = matches
        .get_one::<String>("path")
        .map(String::as_str)
        .unwrap_or_else(|| {
            eprintln!("Error: missing <path>");
            std::process::exit(1);
        });

    if matches.get_flag("check") {
        handle_check_command(path, &config);
    } else {
        let output = matches.get_one::<String>("output").map(String::as_str);
        handle_transpile_command(path, output, &config);
    }
}

/// Defaults, then the `--config` file, then command line overrides
fn load_config(matches: &ArgMatches) -> Result<Hwk2LuaConfig, config::ConfigError> {
    let mut loader = Loader::new();
    if let Some(file) = matches.get_one::<String>("config") {
        loader = loader.with_file(file);
    }
    if let Some(format) = matches.get_one::<String>("format") {
        loader = loader.set_override("output.format", format.as_str())?;
    }
    loader.build()
}

/// Handle a plain run: transpile (or list segments) and emit the result
fn handle_transpile_command(path: &str, output: Option<&str>, config: &Hwk2LuaConfig) {
    let transpiler = Transpiler::new(config.transpile.clone());
    let result = process_file(path, config.output.format, &transpiler).unwrap_or_else(|e| {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    });

    match output {
        Some(target) => {
            if let Err(e) = std::fs::write(Path::new(target), result) {
                eprintln!("Error writing {}: {}", target, e);
                std::process::exit(1);
            }
        }
        None => print!("{}", result),
    }
}

/// Handle --check: transpile and discard the output
fn handle_check_command(path: &str, config: &Hwk2LuaConfig) {
    let transpiler = Transpiler::new(config.transpile.clone());
    if let Err(e) = process_file(path, OutputFormat::Lua, &transpiler) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

/// Handle --list-formats
fn handle_list_formats_command() {
    println!("Available output formats:\n");
    for format in OutputFormat::all() {
        println!("  {}", format.name());
        println!("    {}", format.description());
    }
}
