#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur during lexing or parsing.
pub enum ParseError {
    /// Found a token other than the one the grammar requires.
    UnexpectedToken {
        /// The token encountered.
        token:    String,
        /// What the parser was looking for.
        expected: String,
        /// The source line where the error occurred.
        line:     usize,
    },
    /// The lexer met a character that starts no token.
    UnexpectedCharacter {
        /// The offending text.
        text: String,
        /// The source line where the error occurred.
        line: usize,
    },
    /// A numeric literal was too large to be represented safely.
    LiteralTooLarge {
        /// The literal as written.
        literal: String,
        /// The source line where the error occurred.
        line:    usize,
    },
    /// A task number outside `1..=6` was listed in the TASKS section.
    InvalidTask {
        /// The task number as written.
        number: i64,
        /// The source line where the error occurred.
        line:   usize,
    },
    /// Parentheses or nested calls exceed the configured depth.
    NestingTooDeep {
        /// The configured maximum depth.
        limit: usize,
        /// The source line where the error occurred.
        line:  usize,
    },
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnexpectedToken { token, expected, line } => write!(f,
                                                                      "Error on line {line}: Expected {expected}, found {token}."),

            Self::UnexpectedCharacter { text, line } => {
                write!(f, "Error on line {line}: Unexpected character: {text}.")
            },

            Self::LiteralTooLarge { literal, line } => {
                write!(f, "Error on line {line}: Literal {literal} is too large.")
            },

            Self::InvalidTask { number, line } => write!(f,
                                                         "Error on line {line}: Task {number} does not exist. Tasks are numbered 1 to 6."),

            Self::NestingTooDeep { limit, line } => write!(f,
                                                           "Error on line {line}: Nesting is deeper than the limit of {limit}."),
        }
    }
}

impl std::error::Error for ParseError {}
