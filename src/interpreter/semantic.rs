use crate::error::{SemanticError, SemanticErrorKind};

/// Collects semantic errors while the parser runs.
///
/// The parser records findings as it meets them; nothing here interrupts
/// parsing. Once the whole program has been read, [`Self::check`] decides
/// whether anything must be reported.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SemanticValidator {
    duplicate_declarations: Vec<usize>,
    invalid_monomial_names: Vec<usize>,
    undefined_polynomials:  Vec<usize>,
    wrong_argument_counts:  Vec<usize>,
}

impl SemanticValidator {
    /// Creates a validator with no findings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records an error of the given kind at `line`.
    pub fn record(&mut self, kind: SemanticErrorKind, line: usize) {
        log::debug!("semantic error code {} on line {line}", kind.code());
        self.lines_mut(kind).push(line);
    }

    /// The lines recorded for `kind`, in the order they were found.
    #[must_use]
    pub fn lines(&self, kind: SemanticErrorKind) -> &[usize] {
        match kind {
            SemanticErrorKind::DuplicateDeclaration => &self.duplicate_declarations,
            SemanticErrorKind::InvalidMonomialName => &self.invalid_monomial_names,
            SemanticErrorKind::UndefinedPolynomial => &self.undefined_polynomials,
            SemanticErrorKind::WrongArgumentCount => &self.wrong_argument_counts,
        }
    }

    fn lines_mut(&mut self, kind: SemanticErrorKind) -> &mut Vec<usize> {
        match kind {
            SemanticErrorKind::DuplicateDeclaration => &mut self.duplicate_declarations,
            SemanticErrorKind::InvalidMonomialName => &mut self.invalid_monomial_names,
            SemanticErrorKind::UndefinedPolynomial => &mut self.undefined_polynomials,
            SemanticErrorKind::WrongArgumentCount => &mut self.wrong_argument_counts,
        }
    }

    /// Reports the highest-priority non-empty category.
    ///
    /// Categories are checked in code order (1 to 4). Lines are sorted
    /// ascending; repeated lines are kept.
    ///
    /// # Errors
    /// Returns a [`SemanticError`] for the first category holding any line.
    ///
    /// # Examples
    /// ```
    /// use polyrun::{error::SemanticErrorKind, interpreter::semantic::SemanticValidator};
    ///
    /// let mut validator = SemanticValidator::new();
    /// validator.record(SemanticErrorKind::WrongArgumentCount, 9);
    /// validator.record(SemanticErrorKind::InvalidMonomialName, 4);
    /// validator.record(SemanticErrorKind::InvalidMonomialName, 2);
    ///
    /// let error = validator.check().unwrap_err();
    /// assert_eq!(error.to_string(), "Semantic Error Code 2: 2 4");
    /// ```
    pub fn check(&self) -> Result<(), SemanticError> {
        for kind in SemanticErrorKind::ALL {
            let lines = self.lines(kind);
            if !lines.is_empty() {
                let mut lines = lines.to_vec();
                lines.sort_unstable();
                return Err(SemanticError { kind, lines });
            }
        }
        Ok(())
    }
}
