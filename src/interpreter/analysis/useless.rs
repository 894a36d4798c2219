use crate::{
    ast::Statement,
    interpreter::analysis::{Warning, WarningKind},
};

/// What a later statement means for an earlier assignment's value.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
enum Fate {
    /// The value is read.
    Used,
    /// The variable is redefined before any read.
    Overwritten,
    /// The statement does not involve the variable.
    Untouched,
}

/// Finds assignments whose value is never used.
///
/// For each assignment, the statements after it are scanned until one of
/// them decides the value's fate:
/// - an assignment whose call reads the variable, directly or through a
///   nested call's arguments, uses it (even if it also redefines it),
/// - an `OUTPUT` of the variable uses it,
/// - an `INPUT` of the variable, or an assignment to it that does not read
///   it, overwrites it.
///
/// Assignments that are overwritten, or that reach the end of the program
/// undecided, are reported.
#[must_use]
pub fn find_useless_assignments(statements: &[Statement]) -> Warning {
    let lines = statements.iter()
                          .enumerate()
                          .filter_map(|(i, statement)| match statement {
                              Statement::Assign { slot, line, .. } => {
                                  let used = statements[i + 1..].iter()
                                                                .map(|later| fate(later, *slot))
                                                                .find(|f| *f != Fate::Untouched)
                                                                == Some(Fate::Used);
                                  (!used).then_some(*line)
                              },
                              _ => None,
                          })
                          .collect();

    Warning::new(WarningKind::UselessAssignment, lines)
}

fn fate(statement: &Statement, slot: usize) -> Fate {
    match statement {
        Statement::Assign { call, .. } if call.reads(slot) => Fate::Used,
        Statement::Output { slot: s, .. } if *s == slot => Fate::Used,
        Statement::Assign { slot: s, .. } | Statement::Input { slot: s, .. } if *s == slot => {
            Fate::Overwritten
        },
        _ => Fate::Untouched,
    }
}
