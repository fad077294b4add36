use std::io;

use anyhow::Context;
use clap::{Parser, Subcommand};
use clap_verbosity_flag::Verbosity;
use log::debug;
use radix_calculator::error::EvalError;
use radix_calculator::evaluator::{evaluate_in_base, evaluate_with_base_prefix};

/// Evaluates one line of infix arithmetic in the numeral base of your choice
#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
struct Arguments {
    #[clap(subcommand)]
    mode: Mode,

    #[clap(flatten)]
    verbose: Verbosity,
}

#[derive(Subcommand, Debug)]
enum Mode {
    /// Evaluate an expression with base-10 numerals
    Base10 {
        /// The expression to evaluate; read from stdin when omitted
        expression: Option<String>,
    },
    /// Evaluate an expression with base-32 numerals
    Base32 {
        /// The expression to evaluate; read from stdin when omitted
        expression: Option<String>,
    },
    /// Evaluate a line that declares its own base, like "b16 FF+1"
    BaseN {
        /// The base marker and expression; read from stdin when omitted
        line: Option<String>,
    },
}

fn main() {
    std::process::exit(run_cli());
}

fn run_cli() -> i32 {
    let arguments = Arguments::parse();
    env_logger::Builder::new()
        .filter_level(arguments.verbose.log_level_filter())
        .init();
    debug!("arguments: {arguments:?}");

    match arguments.mode {
        Mode::Base10 { expression } => run_fixed_base(expression, 10),
        Mode::Base32 { expression } => run_fixed_base(expression, 32),
        Mode::BaseN { line } => run_declared_base(line),
    }
}

fn run_fixed_base(argument: Option<String>, base: u32) -> i32 {
    let line = match input_line(argument) {
        Ok(line) => line,
        Err(error) => {
            eprintln!("error: {error:#}");
            return 2;
        }
    };
    report(evaluate_in_base(&line, base))
}

fn run_declared_base(argument: Option<String>) -> i32 {
    let line = match input_line(argument) {
        Ok(line) => line,
        Err(error) => {
            eprintln!("error: {error:#}");
            return 2;
        }
    };
    report(evaluate_with_base_prefix(&line))
}

/// The expression argument when one was given, otherwise one line read
/// from stdin.
fn input_line(argument: Option<String>) -> anyhow::Result<String> {
    match argument {
        Some(expression) => Ok(expression),
        None => {
            let mut line = String::new();
            io::stdin()
                .read_line(&mut line)
                .context("failed to read an expression from stdin")?;
            Ok(line)
        }
    }
}

/// Prints the result line on success, or maps the error to its exit code.
/// Nothing reaches stdout on a failed evaluation.
fn report(result: Result<String, EvalError>) -> i32 {
    match result {
        Ok(value) => {
            println!("{value}");
            0
        }
        Err(error) => {
            eprintln!("error: {error}");
            exit_code(&error)
        }
    }
}

fn exit_code(error: &EvalError) -> i32 {
    match error {
        EvalError::Overflow => 100,
        EvalError::DivideByZero => 101,
        EvalError::InvalidInput(_) => 102,
        EvalError::NegativeExponent => 103,
        EvalError::ResourceExhausted(_) => 104,
    }
}
