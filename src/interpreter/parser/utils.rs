use crate::interpreter::{
    lexer::TokenKind,
    parser::core::{ParseResult, Parser},
};

impl Parser<'_> {
    /// Parses a comma-separated list of items.
    ///
    /// This utility is shared by parameter lists and call argument lists.
    /// It calls `parse_item` once, then again after every comma. The list
    /// ends at the first token that is not a comma; the caller consumes the
    /// closing token.
    ///
    /// Grammar (simplified): `list := item ("," item)*`
    ///
    /// # Parameters
    /// - `parse_item`: Function used to parse each list element.
    ///
    /// # Returns
    /// A vector holding at least one parsed item.
    ///
    /// # Errors
    /// Propagates the first error raised by `parse_item`.
    pub(in crate::interpreter::parser) fn parse_comma_separated<T>(
        &mut self,
        mut parse_item: impl FnMut(&mut Self) -> ParseResult<T>)
        -> ParseResult<Vec<T>> {
        let mut items = vec![parse_item(self)?];
        while self.at(1, TokenKind::Comma) {
            self.tokens.next();
            items.push(parse_item(self)?);
        }
        Ok(items)
    }

    /// Parses a plain identifier and returns its name and line.
    ///
    /// # Errors
    /// `UnexpectedToken` if the next token is not an identifier.
    pub(in crate::interpreter::parser) fn parse_identifier(&mut self)
                                                           -> ParseResult<(String, usize)> {
        let token = self.expect(TokenKind::Id)?;
        Ok((token.lexeme, token.line))
    }

    /// Parses one or more numbers, as used by the TASKS and INPUTS sections.
    ///
    /// Grammar: `num_list := NUM+`
    ///
    /// # Returns
    /// Each value paired with its line.
    pub(in crate::interpreter::parser) fn parse_number_list(&mut self)
                                                            -> ParseResult<Vec<(i64, usize)>> {
        let mut numbers = vec![self.expect_number()?];
        while self.at(1, TokenKind::Num(0)) {
            numbers.push(self.expect_number()?);
        }
        Ok(numbers)
    }
}
