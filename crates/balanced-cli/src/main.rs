mod config;
mod error;
mod input;
mod report;

use std::{
    env,
    io::{self, Write},
    path::PathBuf,
    process::ExitCode,
};

use clap::Parser;
use rayon::prelude::*;

use crate::{config::Config, error::Error, input::Input, report::Summary};

/// Check that brackets are balanced
#[derive(Parser, Debug)]
#[command(name = "balanced", version, about)]
struct Args {
    /// Files or glob patterns to check (reads from stdin if none provided)
    #[arg()]
    paths: Vec<String>,

    /// Check a literal expression instead of a file (repeatable)
    #[arg(long = "expr", value_name = "EXPR")]
    exprs: Vec<String>,

    /// Read one input from stdin
    #[arg(long)]
    stdin: bool,

    /// Config file (defaults to ./balanced.toml when present)
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Print nothing, only set the exit code
    #[arg(long, short)]
    quiet: bool,

    /// Disable colored output
    #[arg(long)]
    no_color: bool,
}

fn main() -> ExitCode {
    let args = Args::parse();

    let (config, inputs) = match prepare(&args) {
        Ok(prepared) => prepared,
        Err(e) => {
            eprintln!("error: {e}");
            return ExitCode::from(2);
        }
    };
    let color = config.color && !args.no_color;

    let outcomes: Vec<(Input, Result<bool, Error>)> = inputs
        .into_par_iter()
        .map(|input| {
            let outcome = input.check();
            (input, outcome)
        })
        .collect();

    let mut stdout = io::stdout().lock();
    let mut printing = !args.quiet;
    let mut summary = Summary::default();
    for (input, outcome) in outcomes {
        match outcome {
            Ok(balanced) => {
                summary.record_verdict(balanced);
                if printing {
                    let line = report::verdict_line(&input.label(), balanced, color);
                    if let Err(e) = writeln!(stdout, "{line}") {
                        // Stop printing; verdicts still count toward the exit code.
                        printing = false;
                        if e.kind() != io::ErrorKind::BrokenPipe {
                            eprintln!("error: {e}");
                            summary.record_error();
                        }
                    }
                }
            }
            Err(e) => {
                summary.record_error();
                eprintln!("{}: {e}", input.label());
            }
        }
    }

    summary.exit_code()
}

fn prepare(args: &Args) -> Result<(Config, Vec<Input>), Error> {
    let cwd = env::current_dir()?;
    let config = Config::discover(args.config.as_deref(), &cwd)?;
    let excludes = config.exclude_patterns()?;
    let inputs = input::collect(&args.exprs, &args.paths, args.stdin, &excludes)?;
    Ok((config, inputs))
}
