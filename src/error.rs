/// Parsing errors.
///
/// Defines all error types that can occur during lexing and parsing of source
/// code. Parse errors are fatal: the first one aborts the run before any task
/// executes.
pub mod parse_error;
/// Runtime errors.
///
/// Contains the errors that can be raised while executing a program: running
/// out of input values, or recursing deeper than the configured limit.
pub mod runtime_error;
/// Semantic errors.
///
/// Holds the report produced when the semantic validator found at least one
/// problem in an otherwise well-formed program.
pub mod semantic_error;

pub use parse_error::ParseError;
pub use runtime_error::RuntimeError;
pub use semantic_error::{SemanticError, SemanticErrorKind};

/// The message printed for every syntax error.
pub const SYNTAX_ERROR_MESSAGE: &str = "SYNTAX ERROR !!!!!&%!!";

#[derive(Debug)]
/// Any failure that ends a run.
pub enum Error {
    /// The program text is not well-formed.
    Parse(ParseError),
    /// The program parsed, but the validator recorded errors.
    Semantic(SemanticError),
    /// Execution failed.
    Runtime(RuntimeError),
    /// Writing program output failed.
    Io(std::io::Error),
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Parse(_) => f.write_str(SYNTAX_ERROR_MESSAGE),
            Self::Semantic(e) => write!(f, "{e}"),
            Self::Runtime(e) => write!(f, "{e}"),
            Self::Io(e) => write!(f, "Failed to write output: {e}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Parse(e) => Some(e),
            Self::Semantic(e) => Some(e),
            Self::Runtime(e) => Some(e),
            Self::Io(e) => Some(e),
        }
    }
}

impl From<ParseError> for Error {
    fn from(value: ParseError) -> Self {
        Self::Parse(value)
    }
}

impl From<SemanticError> for Error {
    fn from(value: SemanticError) -> Self {
        Self::Semantic(value)
    }
}

impl From<RuntimeError> for Error {
    fn from(value: RuntimeError) -> Self {
        Self::Runtime(value)
    }
}

impl From<std::io::Error> for Error {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}
