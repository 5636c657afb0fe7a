//! # Grid
//!
//! The authoritative, ordered set of scheduled programs. Insertion order is
//! significant: merges pair a program with the one scheduled after it.

use crate::identity::ProgramId;
use crate::program::ProgramHandle;

/// Ordered collection of active programs. Membership is by handle identity.
#[derive(Debug, Default)]
pub struct Grid {
    programs: Vec<ProgramHandle>,
}

impl Grid {
    /// An empty grid.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a program at the end of the schedule.
    pub fn add(&mut self, program: ProgramHandle) {
        self.programs.push(program);
    }

    /// Remove a program. Returns whether it was scheduled.
    pub fn remove(&mut self, program: &ProgramHandle) -> bool {
        match self.position(program) {
            Some(index) => {
                self.programs.remove(index);
                true
            }
            None => false,
        }
    }

    /// Whether `program` is scheduled.
    pub fn contains(&self, program: &ProgramHandle) -> bool {
        self.position(program).is_some()
    }

    /// Index of `program` in schedule order.
    pub fn position(&self, program: &ProgramHandle) -> Option<usize> {
        self.programs.iter().position(|p| p.ptr_eq(program))
    }

    /// The program at `index` in schedule order.
    pub fn get(&self, index: usize) -> Option<&ProgramHandle> {
        self.programs.get(index)
    }

    /// The program scheduled after `program`, wrapping to the first one.
    ///
    /// In a single-program grid this is `program` itself.
    pub fn successor(&self, program: &ProgramHandle) -> Option<&ProgramHandle> {
        let index = self.position(program)?;
        self.programs.get((index + 1) % self.programs.len())
    }

    /// Look a program up by id.
    pub fn find(&self, id: ProgramId) -> Option<&ProgramHandle> {
        self.programs.iter().find(|p| p.id() == id)
    }

    /// Scheduled programs in order.
    pub fn programs(&self) -> &[ProgramHandle] {
        &self.programs
    }

    /// Iterate in schedule order.
    pub fn iter(&self) -> std::slice::Iter<'_, ProgramHandle> {
        self.programs.iter()
    }

    /// Number of scheduled programs.
    pub fn len(&self) -> usize {
        self.programs.len()
    }

    /// Whether nothing is scheduled.
    pub fn is_empty(&self) -> bool {
        self.programs.is_empty()
    }

    /// Titles in schedule order.
    pub fn titles(&self) -> Vec<String> {
        self.programs.iter().map(ProgramHandle::title).collect()
    }
}

impl<'a> IntoIterator for &'a Grid {
    type Item = &'a ProgramHandle;
    type IntoIter = std::slice::Iter<'a, ProgramHandle>;

    fn into_iter(self) -> Self::IntoIter {
        self.programs.iter()
    }
}
