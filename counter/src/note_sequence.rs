use crate::{
    Error,
    digits::{self, Byte, Growth, Rollover},
};
use std::fmt::Display;

/// A MIDI note number. Values above 127 are allowed and are left to the
/// renderer to interpret.
pub type Note = u8;

/// 4 semiquavers per beat, 4 beats per bar, 16 bars.
pub const SEMIQUAVERS_IN_16_BARS_OF_4_4: usize = 4 * 4 * 16;

/// A fixed-length sequence of notes treated as a little-endian base-256
/// number. The first note is the least significant digit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoteSequence {
    notes: Vec<Note>,
}

impl NoteSequence {
    /// A sequence of `len` zeros.
    pub fn new(len: usize) -> Self {
        Self {
            notes: vec![0; len],
        }
    }

    /// A sequence of `len` notes where note `i` starts at `initial[i]` and any
    /// remaining notes start at zero.
    pub fn with_initial(len: usize, initial: &[Note]) -> Result<Self, Error> {
        if initial.len() > len {
            return Err(Error::TooManyInitialNotes {
                given: initial.len(),
                len,
            });
        }
        let mut sequence = Self::new(len);
        sequence.notes[..initial.len()].copy_from_slice(initial);
        Ok(sequence)
    }

    pub fn notes(&self) -> &[Note] {
        &self.notes
    }

    pub fn len(&self) -> usize {
        self.notes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }

    /// The most significant note.
    pub fn last(&self) -> Option<Note> {
        self.notes.last().copied()
    }

    /// True if the first `n` notes (or all notes if there are fewer) are at
    /// their maximum, ie. the next increment will carry at least `n` places.
    pub fn lowest_digits_saturated(&self, n: usize) -> bool {
        self.notes.iter().take(n).all(|&note| note == Note::MAX)
    }

    /// Adds one to the sequence. Returns `Error::Exhausted` when every note
    /// wraps around to zero, which happens exactly once per full enumeration
    /// of the sequence's values. The sequence is left as all zeros in that
    /// case.
    pub fn increment(&mut self) -> Result<(), Error> {
        if self.notes.is_empty() {
            return Err(Error::EmptySequence);
        }
        match digits::increment::<Byte>(&mut self.notes, Growth::Fixed) {
            Ok(Rollover::Stopped) => Ok(()),
            Ok(Rollover::Wrapped | Rollover::Grew) => Err(Error::Exhausted),
            Err(never) => match never {},
        }
    }
}

impl Default for NoteSequence {
    fn default() -> Self {
        Self::new(SEMIQUAVERS_IN_16_BARS_OF_4_4)
    }
}

impl Display for NoteSequence {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut first = true;
        for note in &self.notes {
            if first {
                first = false;
            } else {
                write!(f, " ")?;
            }
            write!(f, "{}", note)?;
        }
        Ok(())
    }
}
