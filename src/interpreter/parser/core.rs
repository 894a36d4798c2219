use crate::{
    error::ParseError,
    interpreter::{
        config::Config,
        lexer::{Token, TokenKind, TokenStream},
        program::Program,
        task::Task,
    },
};

pub type ParseResult<T> = Result<T, ParseError>;

/// Parses a complete program.
///
/// This is the entry point of the grammar engine. It lexes `source`, then
/// descends through the four sections and finally requires the end of input.
/// Semantic findings are collected in [`Program::diagnostics`] and are not
/// reported here.
///
/// Grammar: `program := tasks_section poly_section execute_section
/// inputs_section EOF`
///
/// # Errors
/// Returns the first syntax error met; nothing after it is parsed.
///
/// # Examples
/// ```
/// use polyrun::interpreter::{config::Config, parser::core::parse_program};
///
/// let source = "TASKS 2 POLY F = x^2 + 1; EXECUTE INPUT a; b = F(a); OUTPUT b; INPUTS 3";
/// let program = parse_program(source, &Config::default()).unwrap();
/// assert_eq!(program.statements.len(), 3);
/// assert_eq!(program.polynomial("F").map(|p| p.degree), Some(2));
///
/// assert!(parse_program("TASKS 2 POLY F = ;", &Config::default()).is_err());
/// ```
pub fn parse_program(source: &str, config: &Config) -> ParseResult<Program> {
    let tokens = TokenStream::tokenize(source)?;
    let mut parser = Parser::new(tokens, config);

    parser.parse_tasks_section()?;
    parser.parse_poly_section()?;
    parser.parse_execute_section()?;
    parser.parse_inputs_section()?;
    parser.expect(TokenKind::EndOfFile)?;

    log::debug!("parsed {} polynomials and {} statements",
                parser.program.polynomials.len(),
                parser.program.statements.len());

    Ok(parser.program)
}

/// Recursive-descent parser state.
///
/// Each grammar rule is a method; the methods are spread over the
/// `polynomial` and `statement` modules. The parser fills a [`Program`] as it
/// goes and records semantic findings without stopping.
pub struct Parser<'c> {
    pub(in crate::interpreter::parser) tokens:     TokenStream,
    pub(in crate::interpreter::parser) program:    Program,
    pub(in crate::interpreter::parser) config:     &'c Config,
    /// Parameters of the polynomial whose body is being parsed.
    pub(in crate::interpreter::parser) parameters: Vec<String>,
    depth:                                         usize,
}

impl<'c> Parser<'c> {
    /// Creates a parser over an already lexed stream.
    #[must_use]
    pub fn new(tokens: TokenStream, config: &'c Config) -> Self {
        Self { tokens,
               program: Program::default(),
               config,
               parameters: Vec::new(),
               depth: 0 }
    }

    /// Returns `true` if the `k`-th unread token has the given kind.
    ///
    /// Number tokens match regardless of their value.
    pub(in crate::interpreter::parser) fn at(&self, k: usize, kind: TokenKind) -> bool {
        match (self.tokens.peek(k).kind, kind) {
            (TokenKind::Num(_), TokenKind::Num(_)) => true,
            (found, expected) => found == expected,
        }
    }

    /// Consumes the next token, which must have the given kind.
    ///
    /// # Errors
    /// `UnexpectedToken` if the next token is of any other kind.
    pub(in crate::interpreter::parser) fn expect(&mut self, kind: TokenKind) -> ParseResult<Token> {
        if self.at(1, kind) {
            Ok(self.tokens.next())
        } else {
            Err(self.unexpected(kind.describe()))
        }
    }

    /// Consumes a number token and returns its value and line.
    ///
    /// # Errors
    /// `UnexpectedToken` if the next token is not a number.
    pub(in crate::interpreter::parser) fn expect_number(&mut self) -> ParseResult<(i64, usize)> {
        let token = self.tokens.peek(1);
        let TokenKind::Num(value) = token.kind else {
            return Err(self.unexpected(TokenKind::Num(0).describe()));
        };
        let line = token.line;
        self.tokens.next();
        Ok((value, line))
    }

    /// Builds an error describing the next token.
    pub(in crate::interpreter::parser) fn unexpected(&self, expected: &str) -> ParseError {
        let found = self.tokens.peek(1);
        let token = if found.lexeme.is_empty() {
            found.kind.describe().to_string()
        } else {
            format!("'{}'", found.lexeme)
        };
        ParseError::UnexpectedToken { token,
                                      expected: expected.to_string(),
                                      line: found.line }
    }

    /// Enters one level of parentheses or call nesting.
    ///
    /// # Errors
    /// `NestingTooDeep` once the configured depth is exceeded.
    pub(in crate::interpreter::parser) fn enter(&mut self, line: usize) -> ParseResult<()> {
        if self.depth >= self.config.max_depth {
            return Err(ParseError::NestingTooDeep { limit: self.config.max_depth,
                                                    line });
        }
        self.depth += 1;
        Ok(())
    }

    /// Leaves a level entered with [`Self::enter`].
    pub(in crate::interpreter::parser) fn leave(&mut self) {
        self.depth -= 1;
    }

    /// Parses the TASKS section.
    ///
    /// Grammar: `tasks_section := TASKS NUM+`
    ///
    /// # Errors
    /// `InvalidTask` for a number outside `1..=6`.
    fn parse_tasks_section(&mut self) -> ParseResult<()> {
        self.expect(TokenKind::Tasks)?;
        for (number, line) in self.parse_number_list()? {
            let task = Task::from_number(number).ok_or(ParseError::InvalidTask { number, line })?;
            self.program.tasks.insert(task);
        }
        log::debug!("requested tasks: {:?}", self.program.tasks.iter().collect::<Vec<_>>());
        Ok(())
    }

    /// Parses the INPUTS section.
    ///
    /// Grammar: `inputs_section := INPUTS NUM+`
    fn parse_inputs_section(&mut self) -> ParseResult<()> {
        self.expect(TokenKind::Inputs)?;
        self.program.inputs = self.parse_number_list()?
                                  .into_iter()
                                  .map(|(value, _)| value)
                                  .collect();
        Ok(())
    }
}
