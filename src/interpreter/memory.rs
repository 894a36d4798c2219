//! Variable storage for executing programs.
//!
//! Every program variable gets a stable slot the first time the parser sees
//! it. Slots are handed out in first-encounter order starting at 0, and each
//! slot holds one integer value that starts at 0.

use indexmap::{IndexMap, map::Entry};

/// A flat, slot-addressed integer store keyed by variable name.
///
/// # Examples
/// ```
/// use polyrun::interpreter::memory::Memory;
///
/// let mut memory = Memory::new();
/// let a = memory.allocate("a");
/// let b = memory.allocate("b");
/// assert_eq!((a, b), (0, 1));
/// assert_eq!(memory.allocate("a"), a);
///
/// memory.set(b, 42);
/// assert_eq!(memory.get(b), 42);
/// assert_eq!(memory.get(a), 0);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Memory {
    slots: IndexMap<String, i64>,
}

impl Memory {
    /// Creates a store with no variables.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the slot of `name`, allocating a zeroed one if the name is
    /// new.
    pub fn allocate(&mut self, name: &str) -> usize {
        match self.slots.entry(name.to_string()) {
            Entry::Occupied(o) => o.index(),
            Entry::Vacant(v) => {
                let index = v.index();
                v.insert(0);
                index
            },
        }
    }

    /// Looks up the slot of an already allocated name.
    #[must_use]
    pub fn slot(&self, name: &str) -> Option<usize> {
        self.slots.get_index_of(name)
    }

    /// Reads a slot. Unallocated slots read as 0.
    #[must_use]
    pub fn get(&self, slot: usize) -> i64 {
        self.slots.get_index(slot).map_or(0, |(_, value)| *value)
    }

    /// Writes a slot. Writes to unallocated slots are ignored.
    pub fn set(&mut self, slot: usize, value: i64) {
        if let Some((_, stored)) = self.slots.get_index_mut(slot) {
            *stored = value;
        }
    }

    /// Zeroes every slot but keeps the name to slot mapping.
    pub fn reset(&mut self) {
        self.slots.values_mut().for_each(|value| *value = 0);
    }

    /// Number of allocated slots.
    #[must_use]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Returns `true` if no variable has been allocated.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }
}
