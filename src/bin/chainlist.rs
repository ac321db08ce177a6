//! Runs a TOML script of list operations and prints what each one did.
//!
//! Usage: chainlist [SCRIPT.toml] [--json] [-v|-vv]
//!
//! Without a script the built-in demonstration scenario runs.

use std::path::PathBuf;
use std::process::ExitCode;

use chainlist::logger;
use chainlist::script::{Script, ScriptError};
use colored::Colorize;

#[derive(Debug, Default, PartialEq)]
struct Args {
    script: Option<PathBuf>,
    json: bool,
    verbosity: usize,
}

fn parse_args(args: &[String]) -> Result<Args, String> {
    let mut parsed = Args::default();
    for arg in args {
        match arg.as_str() {
            "--json" => parsed.json = true,
            "-v" => parsed.verbosity += 1,
            "-vv" => parsed.verbosity += 2,
            flag if flag.starts_with('-') => return Err(format!("unknown flag '{}'", flag)),
            path if parsed.script.is_none() => parsed.script = Some(PathBuf::from(path)),
            extra => return Err(format!("unexpected argument '{}'", extra)),
        }
    }
    Ok(parsed)
}

fn run(args: &Args) -> Result<bool, ScriptError> {
    let script = match &args.script {
        Some(path) => Script::load(path)?,
        None => Script::demo()?,
    };

    let level = logger::level_for_verbosity(script.logging.level_filter()?, args.verbosity);
    logger::init(level);

    let report = script.run()?;
    if args.json {
        println!("{}", report.to_json()?);
    } else {
        println!("{}", report.render());
    }
    Ok(report.failures() == 0)
}

fn main() -> ExitCode {
    let argv: Vec<String> = std::env::args().skip(1).collect();
    let args = match parse_args(&argv) {
        Ok(args) => args,
        Err(message) => {
            eprintln!("{} {}", "error:".red().bold(), message);
            eprintln!("usage: chainlist [SCRIPT.toml] [--json] [-v|-vv]");
            return ExitCode::from(2);
        }
    };

    match run(&args) {
        Ok(true) => ExitCode::SUCCESS,
        // Failed operations are part of the report, not a crash.
        Ok(false) => ExitCode::from(1),
        Err(err) => {
            eprintln!("{} {}", "error:".red().bold(), err);
            ExitCode::from(2)
        }
    }
}
