/// Still-image extensions that qualify for sequence building,
/// compared case-insensitively.
pub const IMAGE_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png"];

/// Extracted frames are named `frame_0001.jpg`, `frame_0002.jpg`, ...
pub const FRAME_FILE_PREFIX: &str = "frame_";

/// Zero-padding width of the extracted-frame counter.
pub const FRAME_NUMBER_WIDTH: usize = 4;

/// Extracted-frame numbering starts at 1, not 0.
pub const FRAME_NUMBER_ORIGIN: usize = 1;

/// Valid frame-rate range for building videos.
pub const MIN_FPS: u32 = 1;
pub const MAX_FPS: u32 = 60;
