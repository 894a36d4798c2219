/// Dataflow analyses over the statement list.
///
/// Detects assignments that read variables before anything defined them,
/// and assignments whose value is never used. Both reuse the call traversal
/// from the AST.
pub mod analysis;
/// Run settings.
///
/// Holds the depth limit shared by the parser and the evaluator.
pub mod config;
/// The evaluator module computes the value of polynomial calls.
///
/// The evaluator walks a call's arguments and the callee's AST against a
/// memory store, and drives the execution of the EXECUTE section.
///
/// # Responsibilities
/// - Evaluates calls, nested calls and parenthesized sub-expressions.
/// - Runs `INPUT`, `OUTPUT` and assignment statements in order.
/// - Bounds recursion depth with a clear error.
pub mod evaluator;
/// The lexer module tokenizes source code for further parsing.
///
/// The lexer reads the raw source text and produces a stream of tokens, each
/// corresponding to a keyword, identifier, number or punctuation mark. This
/// is the first stage of interpretation.
///
/// # Responsibilities
/// - Converts the input character stream into tokens with kind, text and
///   line.
/// - Converts numeric literals to integers.
/// - Reports lexical errors for invalid or out-of-range input.
pub mod lexer;
/// The variable store.
///
/// Maps variable names to slots and slots to integer values.
pub mod memory;
/// The parser module builds the program from tokens.
///
/// The parser processes the token stream produced by the lexer, constructs
/// the AST of every polynomial, the statement list and the memory layout, and
/// feeds the semantic validator as it goes.
///
/// # Responsibilities
/// - Recognizes the grammar, failing on the first syntax error.
/// - Computes polynomial degrees in the same pass.
/// - Records semantic errors without stopping.
pub mod parser;
/// The parsed form of one program.
pub mod program;
/// Semantic error accumulation and reporting.
pub mod semantic;
/// Task selection.
///
/// Maps the numbers of the TASKS section to the actions they request.
pub mod task;
