//! Odometer-style counters. A value is a string of digits stored least
//! significant first, and incrementing it adds one to the first digit,
//! carrying into later digits on overflow.
pub mod digits;
pub mod file_name;
pub mod note_sequence;

pub use file_name::{FileName, increment_name};
pub use note_sequence::{Note, NoteSequence, SEMIQUAVERS_IN_16_BARS_OF_4_4};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error("not enough notes in sequence (it is empty)")]
    EmptySequence,
    #[error("fully wrapped around all notes")]
    Exhausted,
    #[error("out of range symbol {symbol:?} in file name {name:?}")]
    InvalidSymbol { name: String, symbol: char },
    #[error("file name must have at least one symbol")]
    EmptyName,
    #[error("{given} initial notes given but the sequence has {len} notes")]
    TooManyInitialNotes { given: usize, len: usize },
}

impl Error {
    /// The note sequence wrapped back to all zeros. This is how a complete
    /// enumeration ends rather than a failure.
    pub fn is_exhausted(&self) -> bool {
        matches!(self, Self::Exhausted)
    }
}
