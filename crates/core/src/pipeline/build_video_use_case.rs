use std::path::{Path, PathBuf};

use crate::pipeline::error::ConvertError;
use crate::pipeline::sequence_scanner::scan_sequence;
use crate::shared::frame::Frame;
use crate::shared::video_metadata::VideoMetadata;
use crate::video::domain::image_reader::ImageReader;
use crate::video::domain::video_writer::VideoWriter;

/// What a build run did. An empty input folder is a reportable no-op,
/// not a failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BuildOutcome {
    /// No qualifying images in the input folder; nothing was written.
    NoImages,
    /// A video with this many frames was written.
    Written { frames: usize },
}

/// Image-sequence → video pipeline: scan → sort → decode → append → close.
///
/// The first image's dimensions fix the sink resolution; any later image
/// with different dimensions aborts the run. On abort the sink is closed
/// and a truncated output file may remain at the output path.
pub struct BuildVideoUseCase {
    image_reader: Box<dyn ImageReader>,
    video_writer: Box<dyn VideoWriter>,
}

impl BuildVideoUseCase {
    pub fn new(image_reader: Box<dyn ImageReader>, video_writer: Box<dyn VideoWriter>) -> Self {
        Self {
            image_reader,
            video_writer,
        }
    }

    pub fn execute(
        &mut self,
        input_dir: &Path,
        output_path: &Path,
        fps: u32,
    ) -> Result<BuildOutcome, ConvertError> {
        let files = scan_sequence(input_dir)?;
        if files.is_empty() {
            log::info!("No images found in {}", input_dir.display());
            return Ok(BuildOutcome::NoImages);
        }

        let first = self
            .image_reader
            .read(&files[0], 0)
            .map_err(|e| ConvertError::Decode {
                path: files[0].clone(),
                reason: e.to_string(),
            })?;
        let (width, height) = first.dimensions();

        let metadata = VideoMetadata {
            width,
            height,
            fps: fps as f64,
            total_frames: files.len(),
            codec: "mpeg4".to_string(),
            source_path: None,
        };

        self.video_writer
            .open(output_path, &metadata)
            .map_err(|e| ConvertError::SinkOpen {
                path: output_path.to_path_buf(),
                reason: e.to_string(),
            })?;

        if let Err(e) = self.append_all(&files, first, width, height) {
            // Abort path: release the encoder, keep the original error.
            let _ = self.video_writer.close();
            return Err(e);
        }

        self.video_writer.close().map_err(|e| ConvertError::Encode {
            index: files.len(),
            reason: e.to_string(),
        })?;

        log::info!(
            "Wrote {} frames at {fps} fps to {}",
            files.len(),
            output_path.display()
        );
        Ok(BuildOutcome::Written {
            frames: files.len(),
        })
    }

    fn append_all(
        &mut self,
        files: &[PathBuf],
        first: Frame,
        width: u32,
        height: u32,
    ) -> Result<(), ConvertError> {
        self.append(&files[0], first, width, height)?;

        for (index, path) in files.iter().enumerate().skip(1) {
            let frame =
                self.image_reader
                    .read(path, index)
                    .map_err(|e| ConvertError::Decode {
                        path: path.clone(),
                        reason: e.to_string(),
                    })?;
            self.append(path, frame, width, height)?;
        }
        Ok(())
    }

    fn append(
        &mut self,
        path: &Path,
        frame: Frame,
        width: u32,
        height: u32,
    ) -> Result<(), ConvertError> {
        if frame.dimensions() != (width, height) {
            return Err(ConvertError::DimensionMismatch {
                path: path.to_path_buf(),
                expected_width: width,
                expected_height: height,
                actual_width: frame.width(),
                actual_height: frame.height(),
            });
        }
        self.video_writer
            .write(&frame)
            .map_err(|e| ConvertError::Encode {
                index: frame.index(),
                reason: e.to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::frame::Frame;
    use std::path::PathBuf;
    use std::sync::{Arc, Mutex};

    // --- Stubs ---

    /// Returns a fixed-size frame for any path, recording read order.
    struct StubImageReader {
        width: u32,
        height: u32,
        reads: Arc<Mutex<Vec<PathBuf>>>,
        fail_on: Option<String>,
        odd_size_on: Option<String>,
    }

    impl StubImageReader {
        fn new(width: u32, height: u32) -> Self {
            Self {
                width,
                height,
                reads: Arc::new(Mutex::new(Vec::new())),
                fail_on: None,
                odd_size_on: None,
            }
        }
    }

    impl ImageReader for StubImageReader {
        fn read(&self, path: &Path, index: usize) -> Result<Frame, Box<dyn std::error::Error>> {
            let name = path.file_name().unwrap().to_string_lossy().to_string();
            if self.fail_on.as_deref() == Some(name.as_str()) {
                return Err("stub decode failure".into());
            }
            self.reads.lock().unwrap().push(path.to_path_buf());

            let (w, h) = if self.odd_size_on.as_deref() == Some(name.as_str()) {
                (self.width * 2, self.height)
            } else {
                (self.width, self.height)
            };
            Ok(Frame::new(vec![0; (w * h * 3) as usize], w, h, 3, index))
        }
    }

    #[derive(Default)]
    struct WriterLog {
        opened_with: Option<VideoMetadata>,
        written: usize,
        closed: bool,
    }

    struct RecordingVideoWriter {
        log: Arc<Mutex<WriterLog>>,
    }

    impl RecordingVideoWriter {
        fn new() -> Self {
            Self {
                log: Arc::new(Mutex::new(WriterLog::default())),
            }
        }
    }

    impl VideoWriter for RecordingVideoWriter {
        fn open(
            &mut self,
            _path: &Path,
            metadata: &VideoMetadata,
        ) -> Result<(), Box<dyn std::error::Error>> {
            self.log.lock().unwrap().opened_with = Some(metadata.clone());
            Ok(())
        }

        fn write(&mut self, _frame: &Frame) -> Result<(), Box<dyn std::error::Error>> {
            self.log.lock().unwrap().written += 1;
            Ok(())
        }

        fn close(&mut self) -> Result<(), Box<dyn std::error::Error>> {
            self.log.lock().unwrap().closed = true;
            Ok(())
        }
    }

    // --- Helpers ---

    fn touch(dir: &Path, name: &str) {
        std::fs::write(dir.join(name), b"x").unwrap();
    }

    fn file_names(paths: &[PathBuf]) -> Vec<String> {
        paths
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().to_string())
            .collect()
    }

    // --- Tests ---

    #[test]
    fn test_empty_folder_is_no_images_and_writer_untouched() {
        let dir = tempfile::tempdir().unwrap();
        let writer = RecordingVideoWriter::new();
        let log = writer.log.clone();

        let mut uc = BuildVideoUseCase::new(
            Box::new(StubImageReader::new(100, 50)),
            Box::new(writer),
        );
        let outcome = uc
            .execute(dir.path(), Path::new("out.mp4"), 30)
            .unwrap();

        assert_eq!(outcome, BuildOutcome::NoImages);
        assert!(log.lock().unwrap().opened_with.is_none());
    }

    #[test]
    fn test_frames_appended_in_sorted_order() {
        let dir = tempfile::tempdir().unwrap();
        touch(dir.path(), "b.jpg");
        touch(dir.path(), "a.jpg");
        touch(dir.path(), "c.jpg");

        let reader = StubImageReader::new(100, 50);
        let reads = reader.reads.clone();
        let writer = RecordingVideoWriter::new();
        let log = writer.log.clone();

        let mut uc = BuildVideoUseCase::new(Box::new(reader), Box::new(writer));
        let outcome = uc
            .execute(dir.path(), Path::new("out.mp4"), 30)
            .unwrap();

        assert_eq!(outcome, BuildOutcome::Written { frames: 3 });
        assert_eq!(
            file_names(&reads.lock().unwrap()),
            vec!["a.jpg", "b.jpg", "c.jpg"]
        );
        assert_eq!(log.lock().unwrap().written, 3);
        assert!(log.lock().unwrap().closed);
    }

    #[test]
    fn test_sink_resolution_and_fps_come_from_first_image() {
        let dir = tempfile::tempdir().unwrap();
        touch(dir.path(), "only.jpg");

        let writer = RecordingVideoWriter::new();
        let log = writer.log.clone();

        let mut uc = BuildVideoUseCase::new(
            Box::new(StubImageReader::new(320, 240)),
            Box::new(writer),
        );
        uc.execute(dir.path(), Path::new("out.mp4"), 24).unwrap();

        let log = log.lock().unwrap();
        let meta = log.opened_with.as_ref().unwrap();
        assert_eq!(meta.width, 320);
        assert_eq!(meta.height, 240);
        assert_eq!(meta.fps, 24.0);
        assert_eq!(meta.total_frames, 1);
    }

    #[test]
    fn test_non_image_files_are_skipped() {
        let dir = tempfile::tempdir().unwrap();
        touch(dir.path(), "a.jpg");
        touch(dir.path(), "notes.txt");
        touch(dir.path(), "clip.mp4");

        let writer = RecordingVideoWriter::new();
        let log = writer.log.clone();

        let mut uc = BuildVideoUseCase::new(
            Box::new(StubImageReader::new(100, 50)),
            Box::new(writer),
        );
        uc.execute(dir.path(), Path::new("out.mp4"), 30).unwrap();

        assert_eq!(log.lock().unwrap().written, 1);
    }

    #[test]
    fn test_later_decode_failure_aborts_and_closes_sink() {
        let dir = tempfile::tempdir().unwrap();
        touch(dir.path(), "a.jpg");
        touch(dir.path(), "b.jpg");

        let mut reader = StubImageReader::new(100, 50);
        reader.fail_on = Some("b.jpg".to_string());
        let writer = RecordingVideoWriter::new();
        let log = writer.log.clone();

        let mut uc = BuildVideoUseCase::new(Box::new(reader), Box::new(writer));
        let err = uc
            .execute(dir.path(), Path::new("out.mp4"), 30)
            .unwrap_err();

        assert!(matches!(err, ConvertError::Decode { .. }));
        let log = log.lock().unwrap();
        assert_eq!(log.written, 1);
        assert!(log.closed, "sink must be released on the abort path");
    }

    #[test]
    fn test_dimension_mismatch_aborts_and_closes_sink() {
        let dir = tempfile::tempdir().unwrap();
        touch(dir.path(), "a.jpg");
        touch(dir.path(), "b.jpg");

        let mut reader = StubImageReader::new(100, 50);
        reader.odd_size_on = Some("b.jpg".to_string());
        let writer = RecordingVideoWriter::new();
        let log = writer.log.clone();

        let mut uc = BuildVideoUseCase::new(Box::new(reader), Box::new(writer));
        let err = uc
            .execute(dir.path(), Path::new("out.mp4"), 30)
            .unwrap_err();

        assert!(matches!(err, ConvertError::DimensionMismatch { .. }));
        assert!(log.lock().unwrap().closed);
    }

    #[test]
    fn test_missing_input_folder_is_io_error() {
        let writer = RecordingVideoWriter::new();
        let mut uc = BuildVideoUseCase::new(
            Box::new(StubImageReader::new(100, 50)),
            Box::new(writer),
        );
        let err = uc
            .execute(Path::new("/nonexistent/folder"), Path::new("out.mp4"), 30)
            .unwrap_err();
        assert!(matches!(err, ConvertError::Io(_)));
    }
}
