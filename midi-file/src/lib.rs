use anyhow::Context;
use midly::{
    Format, Header, MetaMessage, MidiMessage, Smf, Timing, TrackEvent,
    TrackEventKind,
    num::{u4, u7},
};
use std::path::Path;

/// Velocity of every note. Midi data bytes are 7 bits so this is the loudest
/// possible note.
pub const DEFAULT_VELOCITY: u8 = 127;

/// Length of each note in ticks. At `TICKS_PER_BEAT` this is a semiquaver.
pub const DEFAULT_TICK_DURATION: u32 = 120;

pub const DEFAULT_CHANNEL: u8 = 1;

pub const TICKS_PER_BEAT: u16 = 480;

/// Silence after the final note so that players don't cut it off.
pub const TRAILING_SILENCE_TICKS: u32 = 1200;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderSettings {
    pub tick_duration: u32,
    /// Only the low 4 bits are used.
    pub channel: u8,
    pub velocity: u8,
    pub ticks_per_beat: u16,
    pub trailing_silence: u32,
}

impl RenderSettings {
    pub fn new(tick_duration: u32, channel: u8) -> Self {
        Self {
            tick_duration,
            channel,
            ..Default::default()
        }
    }

    fn channel(&self) -> u4 {
        (self.channel & 0x0F).into()
    }
}

impl Default for RenderSettings {
    fn default() -> Self {
        Self {
            tick_duration: DEFAULT_TICK_DURATION,
            channel: DEFAULT_CHANNEL,
            velocity: DEFAULT_VELOCITY,
            ticks_per_beat: TICKS_PER_BEAT,
            trailing_silence: TRAILING_SILENCE_TICKS,
        }
    }
}

/// Midi data bytes are 7 bits. Larger values keep their low 7 bits.
fn data_byte(value: u8) -> u7 {
    (value & 0x7F).into()
}

pub struct MidiFile {
    smf: Smf<'static>,
}

impl MidiFile {
    /// A single-track file which plays each note in turn for
    /// `settings.tick_duration` ticks.
    pub fn from_notes(notes: &[u8], settings: &RenderSettings) -> Self {
        let channel = settings.channel();
        let vel = data_byte(settings.velocity.min(DEFAULT_VELOCITY));
        let mut track = Vec::with_capacity(notes.len() * 2 + 1);
        for &note in notes {
            let key = data_byte(note);
            track.push(TrackEvent {
                delta: 0u32.into(),
                kind: TrackEventKind::Midi {
                    channel,
                    message: MidiMessage::NoteOn { key, vel },
                },
            });
            track.push(TrackEvent {
                delta: settings.tick_duration.into(),
                kind: TrackEventKind::Midi {
                    channel,
                    message: MidiMessage::NoteOff { key, vel: 0u8.into() },
                },
            });
        }
        track.push(TrackEvent {
            delta: settings.trailing_silence.into(),
            kind: TrackEventKind::Meta(MetaMessage::EndOfTrack),
        });
        let mut smf = Smf::new(Header::new(
            Format::Parallel,
            Timing::Metrical(settings.ticks_per_beat.into()),
        ));
        smf.tracks.push(track);
        Self { smf }
    }

    /// Creates or truncates the file at `path`. The file is closed before this
    /// returns.
    pub fn write(&self, path: impl AsRef<Path>) -> anyhow::Result<()> {
        let path = path.as_ref();
        self.smf.save(path).with_context(|| {
            format!("Could not write SMF file {}", path.display())
        })
    }
}

/// Read access for checking what will be written.
#[cfg(test)]
impl MidiFile {
    fn format(&self) -> Format {
        self.smf.header.format
    }

    fn num_tracks(&self) -> usize {
        self.smf.tracks.len()
    }

    fn events(
        &self,
        track_index: usize,
    ) -> anyhow::Result<&[TrackEvent<'static>]> {
        if let Some(events) = self.smf.tracks.get(track_index) {
            Ok(events.as_slice())
        } else {
            anyhow::bail!(
                "Track index {} is out of range (there are {} tracks)",
                track_index,
                self.num_tracks()
            )
        }
    }
}

/// Writes `notes` to a midi file at `path` with the default velocity and
/// trailing silence.
pub fn render(
    path: impl AsRef<Path>,
    notes: &[u8],
    tick_duration: u32,
    channel: u8,
) -> anyhow::Result<()> {
    render_with(path, notes, &RenderSettings::new(tick_duration, channel))
}

pub fn render_with(
    path: impl AsRef<Path>,
    notes: &[u8],
    settings: &RenderSettings,
) -> anyhow::Result<()> {
    let path = path.as_ref();
    MidiFile::from_notes(notes, settings).write(path)?;
    log::debug!("Wrote {} notes to {}", notes.len(), path.display());
    Ok(())
}
