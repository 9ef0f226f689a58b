use std::path::{Path, PathBuf};

use crate::pipeline::error::ConvertError;
use crate::shared::constants::{FRAME_FILE_PREFIX, FRAME_NUMBER_ORIGIN, FRAME_NUMBER_WIDTH};
use crate::video::domain::image_writer::ImageWriter;
use crate::video::domain::video_reader::VideoReader;

/// Video → image-sequence pipeline: open → create folder → decode each
/// frame → write numbered JPEG → close.
///
/// Extraction is 1:1 with the source's native frame count. A mid-stream
/// failure aborts with the error reported; the reader is released on
/// every exit path.
pub struct ExtractFramesUseCase {
    reader: Box<dyn VideoReader>,
    image_writer: Box<dyn ImageWriter>,
}

/// Name of the `n`-th extracted frame: `frame_0001.jpg` for n = 1.
pub fn frame_file_name(n: usize) -> String {
    let width = FRAME_NUMBER_WIDTH;
    format!("{FRAME_FILE_PREFIX}{n:0width$}.jpg")
}

impl ExtractFramesUseCase {
    pub fn new(reader: Box<dyn VideoReader>, image_writer: Box<dyn ImageWriter>) -> Self {
        Self {
            reader,
            image_writer,
        }
    }

    /// Returns the number of frames written into `output_dir`.
    pub fn execute(
        &mut self,
        input_video: &Path,
        output_dir: &Path,
    ) -> Result<usize, ConvertError> {
        // Open before touching the filesystem, so an unreadable video
        // creates no folder and no images.
        self.reader
            .open(input_video)
            .map_err(|e| ConvertError::OpenFailure {
                path: input_video.to_path_buf(),
                reason: e.to_string(),
            })?;

        if let Err(e) = std::fs::create_dir_all(output_dir) {
            self.reader.close();
            return Err(e.into());
        }

        let mut count = 0usize;
        let mut failure: Option<ConvertError> = None;

        for item in self.reader.frames() {
            let frame = match item {
                Ok(frame) => frame,
                Err(e) => {
                    failure = Some(ConvertError::Decode {
                        path: input_video.to_path_buf(),
                        reason: e.to_string(),
                    });
                    break;
                }
            };

            let path: PathBuf = output_dir.join(frame_file_name(FRAME_NUMBER_ORIGIN + count));
            if let Err(e) = self.image_writer.write(&path, &frame) {
                failure = Some(ConvertError::Encode {
                    index: frame.index(),
                    reason: e.to_string(),
                });
                break;
            }
            count += 1;
        }

        self.reader.close();

        match failure {
            Some(e) => Err(e),
            None => {
                log::info!(
                    "Extracted {count} frames from {} into {}",
                    input_video.display(),
                    output_dir.display()
                );
                Ok(count)
            }
        }
    }
}
