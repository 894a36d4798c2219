//! # polyrun
//!
//! polyrun parses, checks and runs programs written in a small polynomial
//! definition language. A program declares polynomials, lists statements
//! that evaluate them, and names the tasks to perform:
//!
//! ```text
//! TASKS 2 5
//! POLY
//!     F = x^2 + 1;
//!     G(x, y) = x y + 2 (x - y)^2;
//! EXECUTE
//!     INPUT a;
//!     INPUT b;
//!     c = G(F(a), b);
//!     OUTPUT c;
//! INPUTS 1 2
//! ```

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
)]
#![allow(clippy::missing_errors_doc, clippy::module_name_repetitions)]

use std::io::{self, Write};

use crate::{
    error::Error,
    interpreter::{
        analysis::{uninitialized::find_uninitialized_reads, useless::find_useless_assignments},
        config::Config,
        evaluator::execute::execute,
        parser::core::parse_program,
        program::Program,
        task::Task,
    },
};

/// Defines the structure of parsed programs.
///
/// This module declares the polynomial AST (term lists, terms, monomials and
/// primaries), the container that owns it, polynomial declarations, call
/// expressions and statements.
///
/// # Responsibilities
/// - Defines the types the parser builds and the evaluator walks.
/// - Attaches source lines to nodes for error and warning reports.
pub mod ast;
/// Provides unified error types for parsing, checking and execution.
///
/// # Responsibilities
/// - Defines error enums for all failure modes (lexer, parser, validator,
///   evaluator).
/// - Attaches line numbers and detailed messages for context.
/// - Formats the reports printed for syntax and semantic errors.
pub mod error;
/// Orchestrates the entire process of checking and running a program.
///
/// This module ties together lexing, parsing, validation, evaluation and
/// analysis.
pub mod interpreter;
/// General utilities for numeric conversion and arithmetic.
pub mod util;

/// Parses, checks and runs a program, writing everything it prints to `out`.
///
/// The program is parsed completely first. If the semantic validator found
/// anything, the highest-priority category is returned as an error and no
/// task runs. Otherwise the requested tasks run in task-number order.
///
/// # Errors
/// - [`Error::Parse`] for the first syntax error.
/// - [`Error::Semantic`] if the program has semantic errors.
/// - [`Error::Runtime`] if execution runs out of inputs or recurses too deep.
///
/// # Examples
/// ```
/// use polyrun::{interpreter::config::Config, run};
///
/// let source = "TASKS 2 POLY F = x + 2; EXECUTE INPUT a; b = F(a); OUTPUT b; INPUTS 5";
/// let mut out = Vec::new();
/// run(source, &Config::default(), &mut out).unwrap();
/// assert_eq!(String::from_utf8(out).unwrap(), "7\n");
///
/// // `y` is not a parameter of `F`.
/// let source = "TASKS 2 POLY F(x) = x + y; EXECUTE a = F(1); INPUTS 1";
/// let error = run(source, &Config::default(), &mut Vec::new()).unwrap_err();
/// assert_eq!(error.to_string(), "Semantic Error Code 2: 1");
/// ```
pub fn run(source: &str, config: &Config, out: &mut impl Write) -> Result<(), Error> {
    let program = parse_program(source, config)?;
    program.diagnostics.check()?;
    run_tasks(&program, config, out)
}

/// Runs the tasks a checked program requested.
///
/// Tasks run in task-number order:
/// - 2 executes the program,
/// - 3 and 4 print the two warning reports,
/// - 5 prints `name: degree` for each polynomial.
///
/// Tasks 1 and 6 print nothing.
///
/// # Errors
/// Returns execution failures and output errors.
pub fn run_tasks(program: &Program, config: &Config, out: &mut impl Write) -> Result<(), Error> {
    for task in program.tasks.iter() {
        log::info!("running {task}");
        match task {
            Task::Check | Task::Reserved => {},
            Task::Execute => {
                execute(program, config, out)?;
            },
            Task::UninitializedWarnings => {
                let warning = find_uninitialized_reads(&program.statements, program.memory.len());
                writeln!(out, "{warning}")?;
            },
            Task::UselessAssignmentWarnings => {
                writeln!(out, "{}", find_useless_assignments(&program.statements))?;
            },
            Task::Degrees => {
                for (name, degree) in program.degrees() {
                    writeln!(out, "{name}: {degree}")?;
                }
            },
        }
    }
    Ok(())
}

/// Prints a failed run's error the way the command line does.
///
/// Syntax and semantic reports are part of the program's output and go to
/// `out`. If writing them there fails, they go to `err` instead, together
/// with the write failure. Every other error goes to `err`. For syntax
/// errors the detailed message is also logged, since the report itself is
/// fixed.
///
/// # Errors
/// Returns the error from `err` if nothing could be written at all.
///
/// # Examples
/// ```
/// use polyrun::{interpreter::config::Config, report, run};
///
/// let error = run("TASKS 1 POLY", &Config::default(), &mut Vec::new()).unwrap_err();
/// let (mut out, mut err) = (Vec::new(), Vec::new());
/// report(&error, &mut out, &mut err).unwrap();
/// assert_eq!(String::from_utf8(out).unwrap(), "SYNTAX ERROR !!!!!&%!!\n");
/// assert!(err.is_empty());
/// ```
pub fn report(error: &Error, out: &mut impl Write, err: &mut impl Write) -> io::Result<()> {
    match error {
        Error::Parse(_) | Error::Semantic(_) => {
            if let Error::Parse(detail) = error {
                log::error!("{detail}");
            }
            if let Err(e) = writeln!(out, "{error}").and_then(|()| out.flush()) {
                writeln!(err, "{error}")?;
                writeln!(err, "Failed to write output: {e}")?;
            }
            Ok(())
        },
        _ => writeln!(err, "{error}"),
    }
}
