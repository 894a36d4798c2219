/// Handle to a [`TermList`] stored in an [`Ast`].
///
/// Handles are only meaningful for the container that produced them.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct TermListId(usize);

/// Owns every term list of every polynomial body in a program.
///
/// Nested parenthesized sub-expressions refer to their inner term list by
/// [`TermListId`] instead of owning it, so the whole tree lives in one flat
/// vector and is dropped at once.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Ast {
    term_lists: Vec<TermList>,
}

impl Ast {
    /// Stores a term list and returns its handle.
    pub fn push(&mut self, term_list: TermList) -> TermListId {
        self.term_lists.push(term_list);
        TermListId(self.term_lists.len() - 1)
    }

    /// Returns the term list behind `id`.
    ///
    /// # Panics
    /// Panics if `id` was produced by a different container.
    #[must_use]
    pub fn get(&self, id: TermListId) -> &TermList {
        &self.term_lists[id.0]
    }
}

/// The connective between two terms of a term list.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum AddOperator {
    /// `+`
    Plus,
    /// `-`
    Minus,
}

/// A signed sum of terms: the body of a polynomial, or the inside of a pair
/// of parentheses.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TermList {
    /// The leading term, which has no connective.
    pub first: Term,
    /// Every following term with the operator written before it.
    pub rest:  Vec<(AddOperator, Term)>,
}

impl TermList {
    /// Creates a term list holding a single term.
    #[must_use]
    pub const fn new(first: Term) -> Self {
        Self { first,
               rest: Vec::new() }
    }
}

/// A coefficient multiplied by a product of monomials.
///
/// `3 x^2 y` is a term with coefficient 3 and two monomials. An empty
/// monomial list means the term is just its coefficient.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Term {
    /// The leading integer factor; 1 when none is written.
    pub coefficient: i64,
    /// The factors that follow the coefficient.
    pub monomials:   Vec<Monomial>,
}

/// A primary raised to a non-negative integer power.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Monomial {
    /// The base.
    pub primary:  Primary,
    /// The power; 1 when no `^` is written.
    pub exponent: u32,
}

/// The base of a monomial.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Primary {
    /// A parameter of the enclosing polynomial.
    Variable {
        /// Name of the parameter.
        name: String,
        /// Line number in the source code.
        line: usize,
    },
    /// A term list in parentheses.
    Parenthesized(TermListId),
}

/// Name, location and parameters of a polynomial declaration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PolynomialHeader {
    /// The polynomial's name.
    pub name:       String,
    /// Line of the name token.
    pub line:       usize,
    /// Parameter names in declaration order; `["x"]` when no list is written.
    pub parameters: Vec<String>,
}

/// A declared polynomial: header, body and total degree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PolynomialDeclaration {
    /// The declaration's header.
    pub header: PolynomialHeader,
    /// Root of the body in the program's [`Ast`].
    pub body:   TermListId,
    /// The total degree of the body.
    pub degree: u64,
}

/// One polynomial invocation, such as `F(x, 3, G(y))`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CallExpr {
    /// Name of the polynomial being called.
    pub name:      String,
    /// Arguments to the call, in source order.
    pub arguments: Vec<Argument>,
    /// Line of the polynomial name.
    pub line:      usize,
}

/// A single argument of a [`CallExpr`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Argument {
    /// An integer literal.
    Number(i64),
    /// A program variable, read from memory when the call is evaluated.
    Variable {
        /// Name of the variable.
        name: String,
        /// Its memory slot.
        slot: usize,
    },
    /// Another polynomial call whose result is the argument.
    Call(CallExpr),
}

impl CallExpr {
    /// Visits the slot of every variable argument, recursing into nested
    /// calls, in left-to-right order.
    ///
    /// Nested calls contribute only their own variable arguments; the value
    /// a nested call produces is not a variable read.
    pub fn for_each_variable(&self, visit: &mut impl FnMut(usize)) {
        for argument in &self.arguments {
            match argument {
                Argument::Number(_) => {},
                Argument::Variable { slot, .. } => visit(*slot),
                Argument::Call(call) => call.for_each_variable(visit),
            }
        }
    }

    /// Returns `true` if the call reads `slot`, directly or through a nested
    /// call's arguments.
    #[must_use]
    pub fn reads(&self, slot: usize) -> bool {
        self.arguments.iter().any(|argument| match argument {
                                 Argument::Number(_) => false,
                                 Argument::Variable { slot: s, .. } => *s == slot,
                                 Argument::Call(call) => call.reads(slot),
                             })
    }
}

/// A statement of the EXECUTE section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Statement {
    /// `INPUT name;`
    Input {
        /// Variable receiving the value.
        name: String,
        /// Its memory slot.
        slot: usize,
        /// Line number in the source code.
        line: usize,
    },
    /// `OUTPUT name;`
    Output {
        /// Variable to print.
        name: String,
        /// Its memory slot.
        slot: usize,
        /// Line number in the source code.
        line: usize,
    },
    /// `name = F(...);`
    Assign {
        /// Variable receiving the result.
        name: String,
        /// Its memory slot.
        slot: usize,
        /// The call producing the value.
        call: CallExpr,
        /// Line number in the source code.
        line: usize,
    },
}

impl Statement {
    /// The line the statement starts on.
    #[must_use]
    pub const fn line(&self) -> usize {
        match self {
            Self::Input { line, .. } | Self::Output { line, .. } | Self::Assign { line, .. } => {
                *line
            },
        }
    }
}
