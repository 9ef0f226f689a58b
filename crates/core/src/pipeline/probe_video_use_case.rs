use std::fmt;
use std::path::Path;

use crate::pipeline::error::ConvertError;
use crate::shared::video_metadata::VideoMetadata;
use crate::video::domain::video_reader::VideoReader;

/// Stream metadata plus the on-disk byte size, as shown to the user.
#[derive(Clone, Debug, PartialEq)]
pub struct VideoProbe {
    pub metadata: VideoMetadata,
    pub file_size: u64,
}

impl VideoProbe {
    /// Derived duration; `None` when the stream reports no frame rate.
    pub fn duration_secs(&self) -> Option<f64> {
        self.metadata.duration_secs()
    }
}

impl fmt::Display for VideoProbe {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Framerate: {:.2} fps", self.metadata.fps)?;
        writeln!(
            f,
            "Resolution: {}x{}",
            self.metadata.width, self.metadata.height
        )?;
        writeln!(f, "Frames: {}", self.metadata.total_frames)?;
        match self.duration_secs() {
            Some(secs) => writeln!(f, "Duration: {secs:.2} seconds")?,
            None => writeln!(f, "Duration: unknown")?,
        }
        write!(f, "Size: {:.2} MB", self.file_size as f64 / (1024.0 * 1024.0))
    }
}

/// Opens a video read-only, reports its properties, and releases the
/// handle. No other side effects.
pub struct ProbeVideoUseCase {
    reader: Box<dyn VideoReader>,
}

impl ProbeVideoUseCase {
    pub fn new(reader: Box<dyn VideoReader>) -> Self {
        Self { reader }
    }

    pub fn execute(&mut self, path: &Path) -> Result<VideoProbe, ConvertError> {
        let metadata = self
            .reader
            .open(path)
            .map_err(|e| ConvertError::OpenFailure {
                path: path.to_path_buf(),
                reason: e.to_string(),
            })?;
        self.reader.close();

        let file_size = std::fs::metadata(path)?.len();

        Ok(VideoProbe {
            metadata,
            file_size,
        })
    }
}
