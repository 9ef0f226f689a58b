use std::path::PathBuf;
use std::process;

use clap::Parser;

use framestitch_core::pipeline::build_video_use_case::{BuildOutcome, BuildVideoUseCase};
use framestitch_core::shared::constants::{MAX_FPS, MIN_FPS};
use framestitch_core::video::infrastructure::ffmpeg_writer::FfmpegWriter;
use framestitch_core::video::infrastructure::image_file_reader::ImageFileReader;

/// Build a video from a folder of still images.
///
/// Images are taken in numeric-aware filename order, one frame each.
#[derive(Parser)]
#[command(name = "img2vid")]
struct Cli {
    /// Folder containing the image sequence (.jpg, .jpeg, .png).
    input_dir: PathBuf,

    /// Output video file (expected to end in .mp4).
    output: PathBuf,

    /// Playback frame rate in frames per second.
    #[arg(long, default_value = "30")]
    fps: u32,
}

fn main() {
    env_logger::init();

    if let Err(e) = run() {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    validate(&cli)?;

    let mut use_case = BuildVideoUseCase::new(
        Box::new(ImageFileReader::new()),
        Box::new(FfmpegWriter::new()),
    );

    match use_case.execute(&cli.input_dir, &cli.output, cli.fps)? {
        BuildOutcome::NoImages => {
            println!(
                "No images (.jpg, .jpeg, .png) found in {}.",
                cli.input_dir.display()
            );
        }
        BuildOutcome::Written { frames } => {
            log::info!("Output written to {}", cli.output.display());
            println!(
                "Video '{}' has been created ({frames} frames at {} fps).",
                cli.output.display(),
                cli.fps
            );
        }
    }

    Ok(())
}

fn validate(cli: &Cli) -> Result<(), Box<dyn std::error::Error>> {
    if !cli.input_dir.is_dir() {
        return Err(format!("Input folder not found: {}", cli.input_dir.display()).into());
    }
    if !(MIN_FPS..=MAX_FPS).contains(&cli.fps) {
        return Err(format!(
            "Frame rate must be between {MIN_FPS} and {MAX_FPS}, got {}",
            cli.fps
        )
        .into());
    }
    Ok(())
}
