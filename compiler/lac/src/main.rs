//! LA compiler CLI.
//!
//! `lac <input-file> <output-file> [--check]`. Grounded on `oric`'s
//! hand-rolled `std::env::args()` parsing (no `clap`) and its
//! `commands::compile` shape, scaled down to SPEC_FULL §6's exactly two
//! required positionals plus one optional flag (DESIGN.md Open Question 2).

mod error;
mod pipeline;
mod tracing_setup;

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use error::CompileError;
use pipeline::Outcome;

fn main() -> ExitCode {
    tracing_setup::init();

    let args: Vec<String> = std::env::args().collect();
    let Some((input, output, force_check)) = parse_args(&args[1..]) else {
        print_usage();
        return ExitCode::FAILURE;
    };

    match run(&input, &output, force_check) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{err}");
            ExitCode::FAILURE
        }
    }
}

fn parse_args(args: &[String]) -> Option<(PathBuf, PathBuf, bool)> {
    let mut positional = Vec::new();
    let mut force_check = false;
    for arg in args {
        if arg == "--check" {
            force_check = true;
        } else {
            positional.push(arg.clone());
        }
    }
    match positional.as_slice() {
        [input, output] => Some((PathBuf::from(input), PathBuf::from(output), force_check)),
        _ => None,
    }
}

fn print_usage() {
    eprintln!("Usage: lac <input-file> <output-file> [--check]");
}

#[tracing::instrument(skip_all, fields(input = %input.display()))]
fn run(input: &Path, output: &Path, force_check: bool) -> Result<(), CompileError> {
    let source = std::fs::read_to_string(input).map_err(|source| CompileError::ReadInput {
        path: input.to_path_buf(),
        source,
    })?;

    let outcome = pipeline::compile(&source, force_check);
    let text = match &outcome {
        Outcome::Code(code) => code,
        Outcome::Report(report) => report,
    };

    std::fs::write(output, text).map_err(|source| CompileError::WriteOutput {
        path: output.to_path_buf(),
        source,
    })?;

    match outcome {
        Outcome::Code(_) => println!("Generated: {}", output.display()),
        Outcome::Report(_) => println!("Wrote diagnostic report: {}", output.display()),
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn parses_the_two_required_positionals() {
        let args = vec!["in.la".to_string(), "out.c".to_string()];
        let (input, output, force_check) = parse_args(&args).expect("should parse");
        assert_eq!(input, PathBuf::from("in.la"));
        assert_eq!(output, PathBuf::from("out.c"));
        assert!(!force_check);
    }

    #[test]
    fn check_flag_is_recognized_in_either_position() {
        let args = vec!["--check".to_string(), "in.la".to_string(), "out.txt".to_string()];
        let (_, _, force_check) = parse_args(&args).expect("should parse");
        assert!(force_check);
    }

    #[test]
    fn missing_positional_is_rejected() {
        let args = vec!["--check".to_string(), "in.la".to_string()];
        assert!(parse_args(&args).is_none());
    }
}
