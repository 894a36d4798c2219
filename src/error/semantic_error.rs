/// The four categories the semantic validator tracks.
///
/// The declaration order is also the reporting priority: when several
/// categories hold errors, only the first non-empty one is reported.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum SemanticErrorKind {
    /// A polynomial name was declared more than once.
    DuplicateDeclaration,
    /// A polynomial body used a variable that is not one of its parameters.
    InvalidMonomialName,
    /// A call named a polynomial that was never declared.
    UndefinedPolynomial,
    /// A call passed a different number of arguments than declared.
    WrongArgumentCount,
}

impl SemanticErrorKind {
    /// All categories in reporting order.
    pub const ALL: [Self; 4] = [Self::DuplicateDeclaration,
                                Self::InvalidMonomialName,
                                Self::UndefinedPolynomial,
                                Self::WrongArgumentCount];

    /// The numeric code printed in reports.
    #[must_use]
    pub const fn code(self) -> u8 {
        match self {
            Self::DuplicateDeclaration => 1,
            Self::InvalidMonomialName => 2,
            Self::UndefinedPolynomial => 3,
            Self::WrongArgumentCount => 4,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// The highest-priority category of semantic errors found in a program.
pub struct SemanticError {
    /// Which category is being reported.
    pub kind:  SemanticErrorKind,
    /// The offending source lines, sorted ascending.
    pub lines: Vec<usize>,
}

impl std::fmt::Display for SemanticError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Semantic Error Code {}:", self.kind.code())?;
        for line in &self.lines {
            write!(f, " {line}")?;
        }
        Ok(())
    }
}

impl std::error::Error for SemanticError {}
