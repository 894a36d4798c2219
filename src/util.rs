/// Integer conversion and arithmetic helpers.
///
/// This module provides checked conversions for numeric literals and the
/// overflow-safe power operation used by the evaluator.
///
/// Conversions return a `Result` that is `Ok` only if the value fits the
/// target type exactly.
pub mod num;
