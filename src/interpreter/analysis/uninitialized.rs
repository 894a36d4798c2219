use crate::{
    ast::Statement,
    interpreter::analysis::{Warning, WarningKind},
};

/// Finds assignments that read variables nobody has defined yet.
///
/// Walks the statements once. `INPUT` defines its variable. An assignment
/// first checks every variable argument of its call, nested calls included,
/// and reports its own line once for each one still undefined; only then
/// does it define its target. `OUTPUT` is not checked.
///
/// `slots` is the number of allocated memory slots.
#[must_use]
pub fn find_uninitialized_reads(statements: &[Statement], slots: usize) -> Warning {
    let mut defined = vec![false; slots];
    let mut lines = Vec::new();

    for statement in statements {
        match statement {
            Statement::Input { slot, .. } => mark(&mut defined, *slot),
            Statement::Output { .. } => {},
            Statement::Assign { slot, call, line, .. } => {
                call.for_each_variable(&mut |read| {
                        if !defined.get(read).copied().unwrap_or(false) {
                            lines.push(*line);
                        }
                    });
                mark(&mut defined, *slot);
            },
        }
    }

    Warning::new(WarningKind::UninitializedRead, lines)
}

fn mark(defined: &mut Vec<bool>, slot: usize) {
    if slot >= defined.len() {
        defined.resize(slot + 1, false);
    }
    defined[slot] = true;
}
