use crate::{
    ast::{Argument, CallExpr, Statement},
    error::SemanticErrorKind,
    interpreter::{
        lexer::TokenKind,
        parser::core::{ParseResult, Parser},
    },
};

impl Parser<'_> {
    /// Parses the EXECUTE section.
    ///
    /// Grammar: `execute_section := EXECUTE statement+`
    pub(in crate::interpreter::parser) fn parse_execute_section(&mut self) -> ParseResult<()> {
        self.expect(TokenKind::Execute)?;
        loop {
            let statement = self.parse_statement()?;
            self.program.statements.push(statement);
            if !(self.at(1, TokenKind::Input)
                 || self.at(1, TokenKind::Output)
                 || self.at(1, TokenKind::Id))
            {
                break;
            }
        }
        Ok(())
    }

    /// Parses a single statement.
    ///
    /// A statement may be one of:
    /// - `INPUT name;`
    /// - `OUTPUT name;`
    /// - `name = call;`
    ///
    /// Every variable named here gets a memory slot right away, so slot
    /// numbering does not depend on which tasks run.
    ///
    /// # Returns
    /// A parsed [`Statement`] node.
    fn parse_statement(&mut self) -> ParseResult<Statement> {
        if self.at(1, TokenKind::Input) || self.at(1, TokenKind::Output) {
            let keyword = self.tokens.next();
            let (name, line) = self.parse_identifier()?;
            self.expect(TokenKind::Semicolon)?;

            let slot = self.program.memory.allocate(&name);
            return Ok(if keyword.kind == TokenKind::Input {
                          Statement::Input { name, slot, line }
                      } else {
                          Statement::Output { name, slot, line }
                      });
        }

        if self.at(1, TokenKind::Id) {
            return self.parse_assignment();
        }

        Err(self.unexpected("a statement"))
    }

    /// Parses an assignment statement.
    ///
    /// Grammar: `assign := ID "=" call ";"`
    fn parse_assignment(&mut self) -> ParseResult<Statement> {
        let (name, line) = self.parse_identifier()?;
        let slot = self.program.memory.allocate(&name);

        self.expect(TokenKind::Equal)?;
        let call = self.parse_call()?;
        self.expect(TokenKind::Semicolon)?;

        Ok(Statement::Assign { name,
                               slot,
                               call,
                               line })
    }

    /// Parses a polynomial call and checks it against the declarations.
    ///
    /// An undeclared callee is recorded as an undefined polynomial; a
    /// declared one whose parameter count differs from the number of
    /// arguments is recorded as a wrong argument count.
    ///
    /// Grammar: `call := ID "(" argument ("," argument)* ")"`
    pub(in crate::interpreter::parser) fn parse_call(&mut self) -> ParseResult<CallExpr> {
        let (name, line) = self.parse_identifier()?;

        let declared = self.program
                           .polynomial(&name)
                           .map(|p| p.header.parameters.len());
        if declared.is_none() {
            self.program
                .diagnostics
                .record(SemanticErrorKind::UndefinedPolynomial, line);
        }

        self.expect(TokenKind::LParen)?;
        let arguments = self.parse_comma_separated(Self::parse_argument)?;
        self.expect(TokenKind::RParen)?;

        if declared.is_some_and(|count| count != arguments.len()) {
            self.program
                .diagnostics
                .record(SemanticErrorKind::WrongArgumentCount, line);
        }

        Ok(CallExpr { name,
                      arguments,
                      line })
    }

    /// Parses one call argument.
    ///
    /// An identifier followed by `(` starts a nested call; any other
    /// identifier is a variable and gets a memory slot.
    ///
    /// Grammar: `argument := NUM | ID | call`
    fn parse_argument(&mut self) -> ParseResult<Argument> {
        if self.at(1, TokenKind::Num(0)) {
            return Ok(Argument::Number(self.expect_number()?.0));
        }

        if self.at(1, TokenKind::Id) && self.at(2, TokenKind::LParen) {
            let line = self.tokens.peek(1).line;
            self.enter(line)?;
            let call = self.parse_call()?;
            self.leave();
            return Ok(Argument::Call(call));
        }

        if self.at(1, TokenKind::Id) {
            let (name, _) = self.parse_identifier()?;
            let slot = self.program.memory.allocate(&name);
            return Ok(Argument::Variable { name, slot });
        }

        Err(self.unexpected("an argument"))
    }
}
