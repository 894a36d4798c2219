use crate::{
    ast::{AddOperator, Monomial, PolynomialDeclaration, PolynomialHeader, Primary, Term, TermList,
          TermListId},
    error::{ParseError, SemanticErrorKind},
    interpreter::{
        lexer::TokenKind,
        parser::core::{ParseResult, Parser},
    },
    util::num::literal_to_u32,
};

/// Parameter list used when a header does not spell one out.
const DEFAULT_PARAMETER: &str = "x";

impl Parser<'_> {
    /// Parses the POLY section.
    ///
    /// Grammar: `poly_section := POLY poly_decl+`
    pub(in crate::interpreter::parser) fn parse_poly_section(&mut self) -> ParseResult<()> {
        self.expect(TokenKind::Poly)?;
        self.parse_poly_decl()?;
        while self.at(1, TokenKind::Id) {
            self.parse_poly_decl()?;
        }
        Ok(())
    }

    /// Parses one polynomial declaration and registers it.
    ///
    /// The first declaration of a name is kept. A later declaration of the
    /// same name is still parsed and checked, but only its line survives, as
    /// a duplicate-declaration error.
    ///
    /// Grammar: `poly_decl := poly_header "=" term_list ";"`
    fn parse_poly_decl(&mut self) -> ParseResult<()> {
        let header = self.parse_poly_header()?;
        self.expect(TokenKind::Equal)?;

        self.parameters.clone_from(&header.parameters);
        let (body, degree) = self.parse_term_list()?;
        self.parameters.clear();

        self.expect(TokenKind::Semicolon)?;

        if self.program.polynomials.contains_key(&header.name) {
            self.program
                .diagnostics
                .record(SemanticErrorKind::DuplicateDeclaration, header.line);
        } else {
            log::trace!("declared {}{:?} with degree {degree}", header.name, header.parameters);
            self.program
                .polynomials
                .insert(header.name.clone(), PolynomialDeclaration { header, body, degree });
        }
        Ok(())
    }

    /// Parses a polynomial header.
    ///
    /// Grammar: `poly_header := ID [ "(" ID ("," ID)* ")" ]`
    ///
    /// A header without a parameter list takes the single parameter `x`.
    fn parse_poly_header(&mut self) -> ParseResult<PolynomialHeader> {
        let (name, line) = self.parse_identifier()?;

        let parameters = if self.at(1, TokenKind::LParen) {
            self.tokens.next();
            let parameters = self.parse_comma_separated(|p| p.parse_identifier().map(|(n, _)| n))?;
            self.expect(TokenKind::RParen)?;
            parameters
        } else {
            vec![DEFAULT_PARAMETER.to_string()]
        };

        Ok(PolynomialHeader { name,
                              line,
                              parameters })
    }

    /// Parses a signed sum of terms and stores it in the AST.
    ///
    /// The degree of a sum is the largest degree among its terms; signs and
    /// coefficients play no part.
    ///
    /// Grammar: `term_list := term (("+" | "-") term)*`
    ///
    /// # Returns
    /// The handle of the stored term list and its degree.
    pub(in crate::interpreter::parser) fn parse_term_list(&mut self)
                                                          -> ParseResult<(TermListId, u64)> {
        let (first, mut degree) = self.parse_term()?;
        let mut term_list = TermList::new(first);

        loop {
            let op = if self.at(1, TokenKind::Plus) {
                AddOperator::Plus
            } else if self.at(1, TokenKind::Minus) {
                AddOperator::Minus
            } else {
                break;
            };
            self.tokens.next();

            let (term, term_degree) = self.parse_term()?;
            degree = degree.max(term_degree);
            term_list.rest.push((op, term));
        }

        Ok((self.program.ast.push(term_list), degree))
    }

    /// Parses a term: an optional coefficient followed by monomials.
    ///
    /// The degree of a term is the sum of its monomials' degrees, so a bare
    /// coefficient has degree 0.
    ///
    /// Grammar: `term := NUM monomial* | monomial+`
    fn parse_term(&mut self) -> ParseResult<(Term, u64)> {
        let coefficient = if self.at(1, TokenKind::Num(0)) {
            self.expect_number()?.0
        } else if self.starts_monomial() {
            1
        } else {
            return Err(self.unexpected("a term"));
        };

        let mut monomials = Vec::new();
        let mut degree: u64 = 0;
        while self.starts_monomial() {
            let (monomial, monomial_degree) = self.parse_monomial()?;
            degree = degree.saturating_add(monomial_degree);
            monomials.push(monomial);
        }

        Ok((Term { coefficient,
                   monomials },
            degree))
    }

    fn starts_monomial(&self) -> bool {
        self.at(1, TokenKind::Id) || self.at(1, TokenKind::LParen)
    }

    /// Parses a primary with an optional exponent.
    ///
    /// Grammar: `monomial := primary ["^" NUM]`
    fn parse_monomial(&mut self) -> ParseResult<(Monomial, u64)> {
        let (primary, degree) = self.parse_primary()?;

        let exponent = if self.at(1, TokenKind::Power) {
            self.tokens.next();
            let literal = self.tokens.peek(1).lexeme.clone();
            let (value, line) = self.expect_number()?;
            literal_to_u32(value, ParseError::LiteralTooLarge { literal, line })?
        } else {
            1
        };

        Ok((Monomial { primary, exponent }, degree.saturating_mul(u64::from(exponent))))
    }

    /// Parses a parameter reference or a parenthesized term list.
    ///
    /// A name that is not a parameter of the polynomial being declared is
    /// recorded as an invalid monomial name; parsing carries on.
    ///
    /// Grammar: `primary := ID | "(" term_list ")"`
    fn parse_primary(&mut self) -> ParseResult<(Primary, u64)> {
        if self.at(1, TokenKind::LParen) {
            let open = self.tokens.next();
            self.enter(open.line)?;
            let (inner, degree) = self.parse_term_list()?;
            self.leave();
            self.expect(TokenKind::RParen)?;
            return Ok((Primary::Parenthesized(inner), degree));
        }

        let (name, line) = self.parse_identifier()?;
        if !self.parameters.is_empty() && !self.parameters.contains(&name) {
            self.program
                .diagnostics
                .record(SemanticErrorKind::InvalidMonomialName, line);
        }
        Ok((Primary::Variable { name, line }, 1))
    }
}
