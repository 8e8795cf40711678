//! Enumerates every sequence of notes of a given length, writing each to its
//! own midi file. The notes and the file name are advanced together, so each
//! file name always corresponds to the same sequence for a given starting
//! point. Files which already exist are skipped, which makes it safe to stop
//! the process and run it again later.
use anyhow::Context;
use semiquaver_counter::{
    Error as CounterError, FileName, Note, NoteSequence,
    SEMIQUAVERS_IN_16_BARS_OF_4_4,
};
use semiquaver_midi_file::RenderSettings;
use std::{
    fs,
    path::{Path, PathBuf},
};

pub const DEFAULT_OUTPUT_DIR: &str = "music/all_semiquavers";

const EXTENSION: &str = "mid";

/// Progress is logged whenever this many of the least significant notes are at
/// their maximum.
const PROGRESS_DIGITS: usize = 2;

/// When to stop enumerating.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Until {
    /// Stop after the sequence of all 255s has been written.
    #[default]
    Exhausted,
    /// Stop as soon as the most significant note reaches 255, without writing
    /// that sequence.
    LastNoteMax,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub output_dir: PathBuf,
    pub length: usize,
    /// Starting values of the lowest notes. The remaining notes start at 0.
    pub initial_notes: Vec<Note>,
    pub start_name: FileName,
    pub until: Until,
    pub render: RenderSettings,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            length: SEMIQUAVERS_IN_16_BARS_OF_4_4,
            initial_notes: Vec::new(),
            start_name: FileName::default(),
            until: Until::default(),
            render: RenderSettings::default(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Summary {
    pub written: u64,
    pub skipped: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Continue,
    Finished,
}

pub struct Enumerator {
    output_dir: PathBuf,
    notes: NoteSequence,
    file_name: FileName,
    until: Until,
    render: RenderSettings,
    summary: Summary,
    finished: bool,
}

impl Enumerator {
    pub fn new(config: Config) -> anyhow::Result<Self> {
        let notes =
            NoteSequence::with_initial(config.length, &config.initial_notes)
                .context("Problem interpreting initial notes")?;
        if notes.is_empty() {
            return Err(CounterError::EmptySequence)
                .context("Problem interpreting note sequence length");
        }
        Ok(Self {
            output_dir: config.output_dir,
            notes,
            file_name: config.start_name,
            until: config.until,
            render: config.render,
            summary: Summary::default(),
            finished: false,
        })
    }

    pub fn notes(&self) -> &NoteSequence {
        &self.notes
    }

    pub fn file_name(&self) -> &FileName {
        &self.file_name
    }

    pub fn summary(&self) -> Summary {
        self.summary
    }

    /// Where the current note sequence is written.
    pub fn current_path(&self) -> PathBuf {
        self.output_dir
            .join(format!("{}.{}", self.file_name, EXTENSION))
    }

    /// Writes the current sequence unless its file already exists, then
    /// advances the notes and file name. Once this returns `Step::Finished`
    /// every later call does nothing.
    pub fn step(&mut self) -> anyhow::Result<Step> {
        if self.finished {
            return Ok(Step::Finished);
        }
        if self.until == Until::LastNoteMax
            && self.notes.last() == Some(Note::MAX)
        {
            self.finished = true;
            return Ok(Step::Finished);
        }
        let path = self.current_path();
        let log_progress = self.notes.lowest_digits_saturated(PROGRESS_DIGITS);
        let exists = path.try_exists().with_context(|| {
            format!("Could not check for existing file {}", path.display())
        })?;
        if exists {
            self.summary.skipped += 1;
            if log_progress {
                log::info!("Skipped: {}", self.notes);
            }
        } else {
            semiquaver_midi_file::render_with(
                &path,
                self.notes.notes(),
                &self.render,
            )?;
            self.summary.written += 1;
            if log_progress {
                log::info!("Processed: {}", self.notes);
            }
        }
        match self.notes.increment() {
            Ok(()) => (),
            Err(e) if e.is_exhausted() => {
                log::info!("Every note sequence has been enumerated");
                self.finished = true;
                return Ok(Step::Finished);
            }
            Err(e) => return Err(e).context("Problem incrementing notes"),
        }
        self.file_name
            .increment()
            .context("Problem iterating filename")?;
        Ok(Step::Continue)
    }

    /// Creates the output directory if necessary and steps until finished.
    pub fn run(mut self) -> anyhow::Result<Summary> {
        prepare_output_dir(&self.output_dir)?;
        log::info!(
            "Enumerating {} notes into {} starting at {}",
            self.notes.len(),
            self.output_dir.display(),
            self.current_path().display(),
        );
        while self.step()? == Step::Continue {}
        Ok(self.summary)
    }
}

/// Creates `dir` and any missing parents. Succeeds if `dir` already exists.
pub fn prepare_output_dir(dir: &Path) -> anyhow::Result<()> {
    fs::create_dir_all(dir).with_context(|| {
        format!("Something went wrong creating directory {}", dir.display())
    })
}
