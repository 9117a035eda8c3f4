//! Command-line interface for jsift
//! This binary extracts quoted string literals and bare numeric literals from
//! JSON-like files, one token per output line.
//!
//! Usage:
//!   jsift run [--input `<dir>`] [--output `<dir>`] [--ext `<ext>`] [--yes]  - Mirror a tree into token listings
//!   jsift tokens `<path>` [--format `<format>`]                             - Tokenize a single file to stdout

mod prompt;
mod walker;

use clap::{Arg, ArgAction, Command};
use jsift_config::{ConfigError, JsiftConfig, Loader};
use jsift_tokenizer::SourceLoader;
use walker::{TreeWalker, WalkOptions};

fn main() {
    let matches = Command::new("jsift")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Extracts quoted strings and bare numbers from JSON-like files")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(
            Command::new("run")
                .about("Mirror the input tree into one-token-per-line listings")
                .arg(
                    Arg::new("input")
                        .long("input")
                        .short('i')
                        .help("Input tree root (overrides walk.input_dir)"),
                )
                .arg(
                    Arg::new("output")
                        .long("output")
                        .short('o')
                        .help("Output tree root (overrides walk.output_dir)"),
                )
                .arg(
                    Arg::new("ext")
                        .long("ext")
                        .help("Extension for mirrored files (overrides walk.output_extension)"),
                )
                .arg(
                    Arg::new("config")
                        .long("config")
                        .short('c')
                        .help("Path to a configuration file (default: optional ./jsift.toml)"),
                )
                .arg(
                    Arg::new("yes")
                        .long("yes")
                        .short('y')
                        .help("Skip the confirmation prompt")
                        .action(ArgAction::SetTrue),
                ),
        )
        .subcommand(
            Command::new("tokens")
                .about("Tokenize a single file and print its tokens")
                .arg(Arg::new("path").help("Path to the file").required(true).index(1))
                .arg(
                    Arg::new("format")
                        .long("format")
                        .short('f')
                        .help("Output format: lines or json")
                        .default_value("lines"),
                ),
        )
        .get_matches();

    match matches.subcommand() {
        Some(("run", sub_matches)) => handle_run_command(sub_matches),
        Some(("tokens", sub_matches)) => handle_tokens_command(sub_matches),
        _ => unreachable!("a subcommand is required"),
    }
}

/// Handle the batch `run` command
fn handle_run_command(matches: &clap::ArgMatches) {
    let config = load_config(matches).unwrap_or_else(|e| {
        eprintln!("Configuration error: {}", e);
        std::process::exit(1);
    });
    let options = WalkOptions::from_config(&config);

    if !matches.get_flag("yes") {
        prompt::print_instructions(&options.input_root, &options.output_root);
        let ready = prompt::confirm().unwrap_or_else(|e| {
            eprintln!("Could not read the confirmation answer: {}", e);
            std::process::exit(1);
        });
        if !ready {
            println!("Program has ended. You may now close the program.");
            return;
        }
        println!();
    }

    match TreeWalker::new(options).run() {
        Ok(summary) => {
            println!("The program has completed successfully!");
            println!(
                "Wrote {} tokens across {} files ({} directories mirrored).",
                summary.tokens, summary.files, summary.directories
            );
        }
        Err(e) => {
            eprintln!("{}", e);
            eprintln!("Program stopped.");
            std::process::exit(1);
        }
    }
}

/// Layer defaults, the optional (or explicit) config file, and CLI flags.
fn load_config(matches: &clap::ArgMatches) -> Result<JsiftConfig, ConfigError> {
    let mut loader = match matches.get_one::<String>("config") {
        Some(path) => Loader::new().with_file(path),
        None => Loader::new().with_optional_file("jsift.toml"),
    };

    if let Some(input) = matches.get_one::<String>("input") {
        loader = loader.set_override("walk.input_dir", input.as_str())?;
    }
    if let Some(output) = matches.get_one::<String>("output") {
        loader = loader.set_override("walk.output_dir", output.as_str())?;
    }
    if let Some(ext) = matches.get_one::<String>("ext") {
        loader = loader.set_override("walk.output_extension", ext.as_str())?;
    }

    loader.build()
}

/// Handle the single-file `tokens` command
fn handle_tokens_command(matches: &clap::ArgMatches) {
    let path = matches.get_one::<String>("path").expect("path is required");
    let format = matches
        .get_one::<String>("format")
        .expect("format has a default");

    let loader = SourceLoader::from_path(path).unwrap_or_else(|e| {
        eprintln!("The input file path below couldn't be opened:");
        eprintln!("{}", path);
        eprintln!("{}", e);
        std::process::exit(1);
    });
    let tokens = loader.tokenize();

    match format.as_str() {
        "lines" => {
            for token in &tokens {
                println!("{}", token);
            }
        }
        "json" => {
            let formatted = serde_json::to_string_pretty(&tokens).unwrap_or_else(|e| {
                eprintln!("Error formatting tokens: {}", e);
                std::process::exit(1);
            });
            println!("{}", formatted);
        }
        other => {
            eprintln!("Format '{}' not supported", other);
            eprintln!("Available formats: lines, json");
            std::process::exit(1);
        }
    }
}
