//! Mechanical, reusable side-effecting operations.
//!
//! Ops validate the fields they are handed, allocate ids, and read or write
//! one store at a time. Anything that touches more than one collection in
//! sequence (the college cascade, orphan purges) belongs in `workflow`.

pub mod directory;
pub mod field;
pub mod log;
pub mod submission;

///
/// Mutation
///
/// Outcome of an update or delete addressed by id. Callers at the public
/// surface report success either way; the distinction is kept for logging
/// and tests.
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Mutation {
    Applied,
    NoMatch,
}

impl Mutation {
    #[must_use]
    pub const fn matched(self) -> bool {
        matches!(self, Self::Applied)
    }
}

impl From<bool> for Mutation {
    fn from(matched: bool) -> Self {
        if matched { Self::Applied } else { Self::NoMatch }
    }
}
