use clap::{Parser, ValueEnum};
use semiquaver_counter::{FileName, Note, SEMIQUAVERS_IN_16_BARS_OF_4_4};
use semiquaver_enumerate::{Config, DEFAULT_OUTPUT_DIR, Enumerator, Until};
use semiquaver_midi_file::{
    DEFAULT_CHANNEL, DEFAULT_TICK_DURATION, RenderSettings,
};
use std::path::PathBuf;

#[derive(Clone, Copy, ValueEnum)]
enum UntilArg {
    /// Stop after every sequence of notes has been written
    Exhausted,
    /// Stop when the last note reaches 255
    LastNoteMax,
}

impl From<UntilArg> for Until {
    fn from(until: UntilArg) -> Self {
        match until {
            UntilArg::Exhausted => Until::Exhausted,
            UntilArg::LastNoteMax => Until::LastNoteMax,
        }
    }
}

#[derive(Parser)]
#[command(name = "semiquaver_enumerate")]
#[command(
    about = "Write every possible sequence of semiquavers to its own midi file, skipping files which already exist"
)]
struct Cli {
    /// Starting value of each note, first note first
    notes: Vec<Note>,
    #[arg(short, long, default_value = DEFAULT_OUTPUT_DIR)]
    output_dir: PathBuf,
    #[arg(short, long, default_value_t = SEMIQUAVERS_IN_16_BARS_OF_4_4)]
    length: usize,
    #[arg(long, default_value_t = DEFAULT_TICK_DURATION)]
    tick_duration: u32,
    #[arg(
        long,
        default_value_t = DEFAULT_CHANNEL,
        value_parser = clap::value_parser!(u8).range(0..16)
    )]
    channel: u8,
    /// Name of the file for the starting notes (without extension)
    #[arg(long, default_value_t = FileName::default())]
    start_name: FileName,
    #[arg(long, value_enum, default_value_t = UntilArg::Exhausted)]
    until: UntilArg,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    log::info!("Checking starting point from args");
    let config = Config {
        output_dir: cli.output_dir,
        length: cli.length,
        initial_notes: cli.notes,
        start_name: cli.start_name,
        until: cli.until.into(),
        render: RenderSettings::new(cli.tick_duration, cli.channel),
    };
    let summary = Enumerator::new(config)?.run()?;
    log::info!(
        "Wrote {} files ({} already existed)",
        summary.written,
        summary.skipped
    );
    Ok(())
}
