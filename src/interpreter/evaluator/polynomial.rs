use crate::{
    ast::{AddOperator, Monomial, Primary, Term, TermListId},
    interpreter::evaluator::core::{EvalResult, Evaluator, Frame},
    util::num::wrapping_power,
};

impl Evaluator<'_> {
    /// Evaluates a term list left to right, applying each term's sign.
    ///
    /// Arithmetic wraps on overflow.
    pub(in crate::interpreter::evaluator) fn eval_term_list(&self,
                                                            id: TermListId,
                                                            frame: &Frame<'_>,
                                                            depth: usize)
                                                            -> EvalResult<i64> {
        let term_list = self.ast.get(id);
        let mut total = self.eval_term(&term_list.first, frame, depth)?;

        for (op, term) in &term_list.rest {
            let value = self.eval_term(term, frame, depth)?;
            total = match op {
                AddOperator::Plus => total.wrapping_add(value),
                AddOperator::Minus => total.wrapping_sub(value),
            };
        }
        Ok(total)
    }

    /// Evaluates `coefficient × monomial₁ × monomial₂ × …`.
    fn eval_term(&self, term: &Term, frame: &Frame<'_>, depth: usize) -> EvalResult<i64> {
        term.monomials.iter().try_fold(term.coefficient, |product, monomial| {
                                 Ok(product.wrapping_mul(self.eval_monomial(monomial, frame, depth)?))
                             })
    }

    fn eval_monomial(&self,
                     monomial: &Monomial,
                     frame: &Frame<'_>,
                     depth: usize)
                     -> EvalResult<i64> {
        let base = self.eval_primary(&monomial.primary, frame, depth)?;
        Ok(wrapping_power(base, monomial.exponent))
    }

    /// Evaluates a parameter reference or a parenthesized sub-expression.
    ///
    /// A name with no binding evaluates to 0.
    fn eval_primary(&self, primary: &Primary, frame: &Frame<'_>, depth: usize) -> EvalResult<i64> {
        match primary {
            Primary::Variable { name, .. } => {
                Ok(frame.bindings.get(name.as_str()).copied().unwrap_or(0))
            },
            Primary::Parenthesized(inner) => {
                self.guard(depth + 1, frame.line)?;
                self.eval_term_list(*inner, frame, depth + 1)
            },
        }
    }
}
