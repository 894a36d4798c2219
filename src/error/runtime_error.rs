#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur while a program executes.
pub enum RuntimeError {
    /// An `INPUT` statement ran after every input value was consumed.
    InputExhausted {
        /// The variable the statement tried to read into.
        name: String,
        /// The source line where the error occurred.
        line: usize,
    },
    /// Evaluation recursed deeper than the configured limit.
    DepthLimitExceeded {
        /// The configured maximum depth.
        limit: usize,
        /// The source line of the call being evaluated.
        line:  usize,
    },
}

impl std::fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InputExhausted { name, line } => write!(f,
                                                          "Error on line {line}: No input value left for '{name}'."),
            Self::DepthLimitExceeded { limit, line } => write!(f,
                                                               "Error on line {line}: Evaluation is nested deeper than the limit of {limit}."),
        }
    }
}

impl std::error::Error for RuntimeError {}
