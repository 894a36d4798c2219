use std::io::Write;

use crate::{
    ast::Statement,
    error::{Error, RuntimeError},
    interpreter::{config::Config, evaluator::core::Evaluator, memory::Memory, program::Program},
};

/// Runs the EXECUTE section of a program.
///
/// Statements run once each, in source order, against a fresh copy of the
/// program's memory layout with every slot zeroed:
/// - `INPUT` stores the next unused input value,
/// - `OUTPUT` writes the variable's value and a newline to `out`,
/// - an assignment evaluates its call and stores the result.
///
/// Because execution never touches `program`, running it twice yields the
/// same output.
///
/// # Returns
/// The memory store as it stands after the last statement.
///
/// # Errors
/// - `InputExhausted` if an `INPUT` runs with no values left. Output written
///   by earlier statements stays written.
/// - `DepthLimitExceeded` from the evaluator.
/// - An I/O error if writing to `out` fails.
pub fn execute(program: &Program, config: &Config, out: &mut impl Write) -> Result<Memory, Error> {
    let evaluator = Evaluator::new(program, config);
    let mut memory = program.memory.clone();
    memory.reset();
    let mut inputs = program.inputs.iter().copied();

    for statement in &program.statements {
        match statement {
            Statement::Input { name, slot, line } => {
                let value = inputs.next()
                                  .ok_or_else(|| RuntimeError::InputExhausted { name: name.clone(),
                                                                                line: *line, })?;
                memory.set(*slot, value);
            },
            Statement::Output { slot, .. } => writeln!(out, "{}", memory.get(*slot))?,
            Statement::Assign { slot, call, .. } => {
                let value = evaluator.evaluate(call, &memory)?;
                memory.set(*slot, value);
            },
        }
    }

    Ok(memory)
}
