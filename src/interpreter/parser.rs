/// Parser state, shared helpers and the program entry point.
///
/// Contains [`core::parse_program`], the [`core::Parser`] type, token
/// matching and the TASKS and INPUTS sections.
pub mod core;

/// Polynomial declarations.
///
/// Parses the POLY section: headers, term lists, terms, monomials and
/// primaries. Builds the AST and computes each polynomial's degree in the
/// same pass.
pub mod polynomial;

/// EXECUTE section statements.
///
/// Parses `INPUT`, `OUTPUT` and assignment statements together with the
/// polynomial calls on their right-hand side.
pub mod statement;

/// Utility functions for the parser.
///
/// Provides list helpers shared by several grammar rules.
pub mod utils;
