//! rulec CLI entry point.

use std::env;
use std::path::PathBuf;
use std::process::ExitCode;

use rulebook_foundation::DuplicatePolicy;
use rulebook_language::InterpreterConfig;
use rulebook_runtime::{EXIT_TEMPORARY, compile_file, render_report};
use tracing_subscriber::EnvFilter;

/// CLI configuration parsed from arguments.
#[derive(Default)]
struct CliConfig {
    file: Option<PathBuf>,
    show_help: bool,
    show_version: bool,
    trace: bool,
    overwrite_duplicates: bool,
}

fn main() -> ExitCode {
    let args: Vec<String> = env::args().collect();

    let config = match parse_args(args) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("[ERROR]: {e}");
            print_usage();
            return ExitCode::from(EXIT_TEMPORARY);
        }
    };

    if config.show_help {
        print_usage();
        return ExitCode::SUCCESS;
    }

    if config.show_version {
        println!("rulec {}", env!("CARGO_PKG_VERSION"));
        return ExitCode::SUCCESS;
    }

    if config.trace {
        init_tracing();
    }

    let Some(file) = &config.file else {
        print_usage();
        return ExitCode::from(EXIT_TEMPORARY);
    };

    let policy = if config.overwrite_duplicates {
        DuplicatePolicy::Overwrite
    } else {
        DuplicatePolicy::Reject
    };
    let interpreter_config = InterpreterConfig::new().with_duplicate_rules(policy);

    match compile_file(file, interpreter_config) {
        Ok(rules) => {
            print!("{}", render_report(&rules));
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("[ERROR]: {e}");
            ExitCode::from(e.exit_code())
        }
    }
}

fn parse_args(args: Vec<String>) -> Result<CliConfig, String> {
    let mut config = CliConfig::default();

    for arg in args.into_iter().skip(1) {
        match arg.as_str() {
            "-h" | "--help" => config.show_help = true,
            "-V" | "--version" => config.show_version = true,
            "--trace" => config.trace = true,
            "--overwrite-duplicates" => config.overwrite_duplicates = true,
            arg if arg.starts_with('-') => {
                return Err(format!("unknown option: {arg}"));
            }
            path => {
                if config.file.is_some() {
                    return Err("expected exactly one rule file".to_string());
                }
                config.file = Some(PathBuf::from(path));
            }
        }
    }

    Ok(config)
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn print_usage() {
    eprintln!("Usage: rulec [OPTIONS] <rule-file>");
    eprintln!();
    eprintln!("Compile a rule file and print the resulting matchers.");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  -h, --help              Show this help");
    eprintln!("  -V, --version           Show version");
    eprintln!("      --trace             Enable debug tracing to stderr");
    eprintln!("      --overwrite-duplicates");
    eprintln!("                          Let a repeated rule name replace the earlier rule");
}
