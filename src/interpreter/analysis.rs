/// Reads of variables that were never given a value.
///
/// A single forward scan that reports Warning Code 1.
pub mod uninitialized;

/// Assignments whose value is never used.
///
/// Reports Warning Code 2.
pub mod useless;

use std::fmt;

/// Which dataflow warning a report belongs to.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum WarningKind {
    /// An assignment reads a variable before any statement defined it.
    UninitializedRead,
    /// An assignment's value is overwritten or never read.
    UselessAssignment,
}

impl WarningKind {
    /// The numeric code printed in reports.
    #[must_use]
    pub const fn code(self) -> u8 {
        match self {
            Self::UninitializedRead => 1,
            Self::UselessAssignment => 2,
        }
    }
}

/// The result of one dataflow analysis.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Warning {
    /// Which analysis produced the report.
    pub kind:  WarningKind,
    /// Offending lines, sorted ascending. May be empty.
    pub lines: Vec<usize>,
}

impl Warning {
    /// Creates a report, sorting `lines`.
    #[must_use]
    pub fn new(kind: WarningKind, mut lines: Vec<usize>) -> Self {
        lines.sort_unstable();
        Self { kind, lines }
    }
}

impl fmt::Display for Warning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Warning Code {}:", self.kind.code())?;
        for line in &self.lines {
            write!(f, " {line}")?;
        }
        Ok(())
    }
}
