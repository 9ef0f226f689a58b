use std::path::PathBuf;

#[derive(Clone, Debug, PartialEq)]
pub struct VideoMetadata {
    pub width: u32,
    pub height: u32,
    pub fps: f64,
    pub total_frames: usize,
    pub codec: String,
    pub source_path: Option<PathBuf>,
}

impl VideoMetadata {
    /// Playback duration in seconds, derived as `total_frames / fps`.
    ///
    /// Returns `None` when the frame rate is zero or negative (still
    /// images and malformed streams report fps = 0), so duration never
    /// divides by zero.
    pub fn duration_secs(&self) -> Option<f64> {
        if self.fps > 0.0 {
            Some(self.total_frames as f64 / self.fps)
        } else {
            None
        }
    }
}
