use clap::Parser;
use semiquaver_midi_file::{RenderSettings, render_with};
use std::path::PathBuf;

#[derive(Parser, Debug)]
struct Args {
    #[arg(short, long, default_value = "music/chromatic_walk.mid")]
    output: PathBuf,
    #[arg(long, default_value_t = 0)]
    start: u8,
    #[arg(long, default_value_t = 500)]
    steps: usize,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();
    if let Some(parent) = args.output.parent() {
        semiquaver_enumerate::prepare_output_dir(parent)?;
    }
    let notes = (0..args.steps)
        .map(|i| args.start.wrapping_add(i as u8))
        .collect::<Vec<_>>();
    render_with(&args.output, &notes, &RenderSettings::default())?;
    log::info!("Wrote {} notes to {}", notes.len(), args.output.display());
    Ok(())
}
