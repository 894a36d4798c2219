use std::fmt;

/// One of the actions a program can request in its TASKS section.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Task {
    /// Task 1: syntax and semantic checking. Always performed.
    Check,
    /// Task 2: run the EXECUTE section.
    Execute,
    /// Task 3: report reads of uninitialized variables.
    UninitializedWarnings,
    /// Task 4: report assignments whose value is never used.
    UselessAssignmentWarnings,
    /// Task 5: print the degree of every polynomial.
    Degrees,
    /// Task 6: accepted, no action.
    Reserved,
}

impl Task {
    /// Every task in number order.
    pub const ALL: [Self; 6] = [Self::Check,
                                Self::Execute,
                                Self::UninitializedWarnings,
                                Self::UselessAssignmentWarnings,
                                Self::Degrees,
                                Self::Reserved];

    /// Maps a task number from the TASKS section to its task.
    ///
    /// # Examples
    /// ```
    /// use polyrun::interpreter::task::Task;
    ///
    /// assert_eq!(Task::from_number(2), Some(Task::Execute));
    /// assert_eq!(Task::from_number(7), None);
    /// ```
    #[must_use]
    pub fn from_number(number: i64) -> Option<Self> {
        usize::try_from(number).ok()
                               .and_then(|n| n.checked_sub(1))
                               .and_then(|i| Self::ALL.get(i).copied())
    }

    /// The task's number as written in programs.
    #[must_use]
    pub const fn number(self) -> u8 {
        match self {
            Self::Check => 1,
            Self::Execute => 2,
            Self::UninitializedWarnings => 3,
            Self::UselessAssignmentWarnings => 4,
            Self::Degrees => 5,
            Self::Reserved => 6,
        }
    }

    const fn bit(self) -> u8 {
        1 << self.number()
    }
}

impl fmt::Display for Task {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "task {}", self.number())
    }
}

/// The set of tasks a program requested.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub struct TaskSet(u8);

impl TaskSet {
    /// Adds a task; adding it twice has no further effect.
    pub const fn insert(&mut self, task: Task) {
        self.0 |= task.bit();
    }

    /// Returns `true` if the task was requested.
    #[must_use]
    pub const fn contains(self, task: Task) -> bool {
        self.0 & task.bit() != 0
    }

    /// Iterates over the requested tasks in number order.
    pub fn iter(self) -> impl Iterator<Item = Task> {
        Task::ALL.into_iter().filter(move |task| self.contains(*task))
    }
}
