/// Core evaluation logic.
///
/// Contains the [`core::Evaluator`], argument binding and the depth guard.
pub mod core;

/// Execution of the EXECUTE section.
///
/// Runs statements in order against a memory store.
pub mod execute;

/// Evaluation of polynomial bodies.
///
/// Walks term lists, terms, monomials and primaries.
pub mod polynomial;
