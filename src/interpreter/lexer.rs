use logos::Logos;

use crate::{error::ParseError, interpreter::parser::core::ParseResult};

/// Classifies a lexical token in the source input.
///
/// A token is a minimal but meaningful unit of text produced by the lexer.
/// This enum defines all recognized token kinds of the polynomial language.
#[derive(Logos, Debug, PartialEq, Eq, Clone, Copy)]
#[logos(extras = LexerExtras)]
pub enum TokenKind {
    /// `TASKS`
    #[token("TASKS")]
    Tasks,
    /// `POLY`
    #[token("POLY")]
    Poly,
    /// `EXECUTE`
    #[token("EXECUTE")]
    Execute,
    /// `INPUTS`
    #[token("INPUTS")]
    Inputs,
    /// `INPUT`
    #[token("INPUT")]
    Input,
    /// `OUTPUT`
    #[token("OUTPUT")]
    Output,
    /// Identifier tokens; polynomial, parameter or variable names such as `F`
    /// or `x1`.
    #[regex(r"[a-zA-Z][a-zA-Z0-9]*")]
    Id,
    /// Integer literal tokens, such as `42`.
    #[regex(r"[0-9]+", parse_integer)]
    Num(i64),
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// `,`
    #[token(",")]
    Comma,
    /// `=`
    #[token("=")]
    Equal,
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `^`
    #[token("^")]
    Power,
    /// `;`
    #[token(";")]
    Semicolon,
    /// End of the token stream. Never produced by the lexer itself.
    EndOfFile,

    /// Line breaks; counted, then skipped.
    #[token("\n", |lex| {
        lex.extras.line += 1;
        logos::Skip
    })]
    NewLine,
    /// Spaces, tabs and feeds.
    #[regex(r"[ \t\r\f]+", logos::skip)]
    Ignored,
}

impl TokenKind {
    /// A short human readable description, used in error messages.
    #[must_use]
    pub const fn describe(self) -> &'static str {
        match self {
            Self::Tasks => "'TASKS'",
            Self::Poly => "'POLY'",
            Self::Execute => "'EXECUTE'",
            Self::Inputs => "'INPUTS'",
            Self::Input => "'INPUT'",
            Self::Output => "'OUTPUT'",
            Self::Id => "identifier",
            Self::Num(_) => "number",
            Self::LParen => "'('",
            Self::RParen => "')'",
            Self::Comma => "','",
            Self::Equal => "'='",
            Self::Plus => "'+'",
            Self::Minus => "'-'",
            Self::Power => "'^'",
            Self::Semicolon => "';'",
            Self::EndOfFile => "end of input",
            Self::NewLine | Self::Ignored => "whitespace",
        }
    }
}

/// Additional information carried by the lexer during tokenization.
///
/// Tracks the current line number for error reporting and diagnostics.
#[derive(Default)]
pub struct LexerExtras {
    /// The current line number in the source being tokenized.
    pub line: usize,
}

/// A classified token together with its text and source line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    /// What kind of token this is.
    pub kind:   TokenKind,
    /// The exact source text of the token.
    pub lexeme: String,
    /// The 1-based line the token starts on.
    pub line:   usize,
}

/// A fully lexed program with 1-based lookahead.
///
/// The stream always ends in a single [`TokenKind::EndOfFile`] token. Reading
/// or peeking past the end keeps yielding that token, so the parser never has
/// to deal with a missing token.
#[derive(Debug, Clone)]
pub struct TokenStream {
    tokens:   Vec<Token>,
    position: usize,
}

impl TokenStream {
    /// Lexes `source` completely.
    ///
    /// # Errors
    /// - `LiteralTooLarge` if a number does not fit in an `i64`.
    /// - `UnexpectedCharacter` for text that starts no token.
    ///
    /// # Examples
    /// ```
    /// use polyrun::interpreter::lexer::{TokenKind, TokenStream};
    ///
    /// let mut stream = TokenStream::tokenize("POLY F = x;").unwrap();
    /// assert_eq!(stream.peek(2).kind, TokenKind::Id);
    /// assert_eq!(stream.next().kind, TokenKind::Poly);
    /// ```
    pub fn tokenize(source: &str) -> ParseResult<Self> {
        let mut lexer = TokenKind::lexer_with_extras(source, LexerExtras { line: 1 });
        let mut tokens = Vec::new();

        while let Some(kind) = lexer.next() {
            let line = lexer.extras.line;
            let text = lexer.slice();
            match kind {
                Ok(kind) => tokens.push(Token { kind,
                                                lexeme: text.to_string(),
                                                line }),
                Err(()) if text.bytes().all(|b| b.is_ascii_digit()) => {
                    return Err(ParseError::LiteralTooLarge { literal: text.to_string(),
                                                             line });
                },
                Err(()) => {
                    return Err(ParseError::UnexpectedCharacter { text: text.to_string(),
                                                                 line });
                },
            }
        }

        tokens.push(Token { kind:   TokenKind::EndOfFile,
                            lexeme: String::new(),
                            line:   lexer.extras.line, });

        Ok(Self { tokens, position: 0 })
    }

    /// Returns the `k`-th unread token without consuming anything.
    ///
    /// `peek(1)` is the token the next call to [`Self::next`] returns.
    #[must_use]
    pub fn peek(&self, k: usize) -> &Token {
        let index = (self.position + k.saturating_sub(1)).min(self.tokens.len() - 1);
        &self.tokens[index]
    }

    /// Consumes and returns the next token.
    #[allow(clippy::should_implement_trait)]
    pub fn next(&mut self) -> Token {
        let token = self.peek(1).clone();
        if self.position < self.tokens.len() - 1 {
            self.position += 1;
        }
        token
    }
}

/// Parses an integer literal from the current token slice.
///
/// # Returns
/// - `Some(i64)`: The parsed value if it fits.
/// - `None`: If the literal is out of range; the lexer then reports an error.
fn parse_integer(lex: &logos::Lexer<TokenKind>) -> Option<i64> {
    lex.slice().parse().ok()
}
