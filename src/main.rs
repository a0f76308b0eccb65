use clap::{Parser, Subcommand};
use envars::clock::MAX_FIXED_SECS;
use envars::error::EnvarsError;
use envars::{OutputFormat, commands, logging};
use std::path::PathBuf;
use std::process;

#[derive(Parser)]
#[command(name = "envars")]
#[command(about = "Validate environment variable names and resolve variable maps")]
#[command(
    long_about = "envars checks variable names and turns KEY=VALUE pairs into the map used for {{NAME}} substitution.\n\nNOW and VALIDITY are replaced with the current Unix time and the time eight hours from now.\n\nUsage: envars [GLOBAL_OPTIONS] <COMMAND> [COMMAND_OPTIONS]\nExample: envars -o json resolve -f .env --var TOKEN=abc"
)]
#[command(version = env!("ENVARS_VERSION"))]
struct Cli {
    #[arg(
        short = 'o',
        long = "format",
        value_enum,
        default_value = "table",
        global = true,
        help = "Output format: table, json, env, or postman (default: table) (global option)"
    )]
    format: OutputFormat,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    #[command(about = "Check whether a name can be added or used for a rename")]
    Check {
        #[arg(help = "Candidate name")]
        name: String,
        #[arg(
            short = 'e',
            long = "existing",
            value_delimiter = ',',
            help = "Names already in use (repeatable or comma-separated)"
        )]
        existing: Vec<String>,
        #[arg(short = 'c', long, help = "Current name when checking a rename")]
        current: Option<String>,
    },

    #[command(about = "Resolve variables into a map with computed NOW/VALIDITY values")]
    Resolve {
        #[arg(short = 'f', long = "file", help = "Path to a .env style input file")]
        file: Option<PathBuf>,
        #[arg(
            short = 'v',
            long = "var",
            help = "KEY=VALUE pair applied after the file (repeatable)"
        )]
        vars: Vec<String>,
        #[arg(
            long,
            allow_negative_numbers = true,
            value_parser = clap::value_parser!(i64).range(-MAX_FIXED_SECS..=MAX_FIXED_SECS),
            help = "Use this Unix time in seconds instead of the system clock"
        )]
        now: Option<i64>,
        #[arg(long, help = "Reject duplicate, empty, or over-long names")]
        strict: bool,
        #[arg(
            short = 'n',
            long,
            default_value = "envars Environment",
            help = "Environment name for postman output"
        )]
        name: String,
    },
}

fn main() {
    logging::init_logging();

    let cli = Cli::parse();

    let result: Result<(), EnvarsError> = match cli.command {
        Commands::Check {
            name,
            existing,
            current,
        } => commands::check(&cli.format, &name, &existing, current.as_deref()),
        Commands::Resolve {
            file,
            vars,
            now,
            strict,
            name,
        } => commands::resolve(&cli.format, file, vars, now, strict, &name),
    };

    if let Err(e) = result {
        tracing::error!("{}", e);
        process::exit(1);
    }
}
