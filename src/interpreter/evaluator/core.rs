use std::collections::HashMap;

use indexmap::IndexMap;

use crate::{
    ast::{Argument, Ast, CallExpr, PolynomialDeclaration},
    error::RuntimeError,
    interpreter::{config::Config, memory::Memory, program::Program},
};

/// Result type used by the evaluator.
///
/// Evaluation of a validated program cannot fail except by exceeding the
/// configured depth limit, which is reported as a `RuntimeError`.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// Evaluates polynomial calls against a program's declarations.
///
/// The evaluator only reads the program. Variable values come from the
/// [`Memory`] passed to [`Evaluator::evaluate`], so the same evaluator can be
/// used with different stores.
///
/// Every name is resolved leniently: an undeclared polynomial, a missing
/// argument or a variable that is not a parameter all evaluate to 0. The
/// semantic validator rejects such programs before they are executed.
pub struct Evaluator<'p> {
    pub(in crate::interpreter::evaluator) ast: &'p Ast,
    polynomials: &'p IndexMap<String, PolynomialDeclaration>,
    max_depth: usize,
}

/// Parameter values for the body being evaluated.
pub(in crate::interpreter::evaluator) struct Frame<'a> {
    /// Parameter name to argument value.
    pub bindings: HashMap<&'a str, i64>,
    /// Line of the call that created the frame.
    pub line:     usize,
}

impl<'p> Evaluator<'p> {
    /// Creates an evaluator over the declarations of `program`.
    #[must_use]
    pub const fn new(program: &'p Program, config: &Config) -> Self {
        Self { ast:         &program.ast,
               polynomials: &program.polynomials,
               max_depth:   config.max_depth, }
    }

    /// Evaluates a call with variable arguments read from `memory`.
    ///
    /// Arguments are evaluated left to right, bound to the callee's
    /// parameters by position, and the callee's body is walked.
    ///
    /// # Errors
    /// `DepthLimitExceeded` if nested calls and parentheses go deeper than
    /// the configured limit.
    ///
    /// # Examples
    /// ```
    /// use polyrun::interpreter::{config::Config, evaluator::core::Evaluator,
    ///                            parser::core::parse_program};
    ///
    /// let source = "TASKS 1 POLY F = x + 2; EXECUTE a = F(F(3)); INPUTS 1";
    /// let config = Config::default();
    /// let program = parse_program(source, &config).unwrap();
    ///
    /// let polyrun::ast::Statement::Assign { call, .. } = &program.statements[0] else {
    ///     unreachable!()
    /// };
    /// let evaluator = Evaluator::new(&program, &config);
    /// assert_eq!(evaluator.evaluate(call, &program.memory).unwrap(), 7);
    /// ```
    pub fn evaluate(&self, call: &CallExpr, memory: &Memory) -> EvalResult<i64> {
        self.eval_call(call, memory, 0)
    }

    /// Fails once `depth` goes past the configured limit. Top-level calls run at
    /// depth 0.
    pub(in crate::interpreter::evaluator) fn guard(&self,
                                                         depth: usize,
                                                         line: usize)
                                                         -> EvalResult<()> {
        if depth > self.max_depth {
            return Err(RuntimeError::DepthLimitExceeded { limit: self.max_depth,
                                                          line });
        }
        Ok(())
    }

    fn eval_call(&self, call: &CallExpr, memory: &Memory, depth: usize) -> EvalResult<i64> {
        self.guard(depth, call.line)?;

        let values = call.arguments
                         .iter()
                         .map(|argument| match argument {
                             Argument::Number(value) => Ok(*value),
                             Argument::Variable { slot, .. } => Ok(memory.get(*slot)),
                             Argument::Call(nested) => self.eval_call(nested, memory, depth + 1),
                         })
                         .collect::<EvalResult<Vec<_>>>()?;

        let Some(declaration) = self.polynomials.get(&call.name) else {
            log::trace!("line {}: call to undeclared {} evaluates to 0", call.line, call.name);
            return Ok(0);
        };

        let bindings = declaration.header
                                  .parameters
                                  .iter()
                                  .enumerate()
                                  .map(|(i, name)| (name.as_str(), values.get(i).copied().unwrap_or(0)))
                                  .collect::<HashMap<_, _>>();

        let frame = Frame { bindings,
                            line: call.line };
        self.eval_term_list(declaration.body, &frame, depth)
    }
}
