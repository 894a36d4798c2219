use indexmap::IndexMap;

use crate::{
    ast::{Ast, PolynomialDeclaration, Statement},
    interpreter::{memory::Memory, semantic::SemanticValidator, task::TaskSet},
};

/// Everything the parser learned about one program.
///
/// A `Program` is the context object for a single run: the AST container,
/// the declarations, the statement list and the memory store all live here
/// and nowhere else, so two runs never share state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Program {
    /// Tasks listed in the TASKS section.
    pub tasks:        TaskSet,
    /// Storage for every polynomial body.
    pub ast:          Ast,
    /// Declarations of record keyed by name, in declaration order.
    pub polynomials:  IndexMap<String, PolynomialDeclaration>,
    /// The EXECUTE section, in source order.
    pub statements:   Vec<Statement>,
    /// The INPUTS section.
    pub inputs:       Vec<i64>,
    /// Variable slots, allocated while parsing.
    pub memory:       Memory,
    /// Semantic findings gathered while parsing.
    pub diagnostics:  SemanticValidator,
}

impl Program {
    /// Looks up a declaration of record by name.
    #[must_use]
    pub fn polynomial(&self, name: &str) -> Option<&PolynomialDeclaration> {
        self.polynomials.get(name)
    }

    /// Name and degree of every declaration of record, in declaration order.
    pub fn degrees(&self) -> impl Iterator<Item = (&str, u64)> {
        self.polynomials.values().map(|p| (p.header.name.as_str(), p.degree))
    }
}
