use std::path::PathBuf;
use std::process;

use clap::Parser;

use framestitch_core::pipeline::extract_frames_use_case::ExtractFramesUseCase;
use framestitch_core::pipeline::probe_video_use_case::ProbeVideoUseCase;
use framestitch_core::video::infrastructure::ffmpeg_reader::FfmpegReader;
use framestitch_core::video::infrastructure::image_file_writer::ImageFileWriter;

/// Extract every frame of a video into numbered JPEG files.
///
/// Frames land in the output folder as frame_0001.jpg, frame_0002.jpg, ...
/// The folder is created if it does not exist.
#[derive(Parser)]
#[command(name = "vid2img")]
struct Cli {
    /// Input video file.
    input: PathBuf,

    /// Folder to write the extracted frames into.
    output_dir: PathBuf,

    /// Print the video's metadata report before extracting.
    #[arg(long)]
    info: bool,
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

    if !cli.input.is_file() {
        return Err(format!("Input video not found: {}", cli.input.display()).into());
    }

    if cli.info {
        let mut probe = ProbeVideoUseCase::new(Box::new(FfmpegReader::new()));
        println!("{}", probe.execute(&cli.input)?);
        println!();
    }

    let mut use_case = ExtractFramesUseCase::new(
        Box::new(FfmpegReader::new()),
        Box::new(ImageFileWriter::new()),
    );
    let count = use_case.execute(&cli.input, &cli.output_dir)?;

    log::info!("Frames written to {}", cli.output_dir.display());
    println!(
        "{count} images have been extracted and saved to '{}'.",
        cli.output_dir.display()
    );

    Ok(())
}
