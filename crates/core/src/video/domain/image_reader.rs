use std::path::Path;

use crate::shared::frame::Frame;

/// Decodes a single still-image file into a [`Frame`].
pub trait ImageReader: Send {
    /// Reads the image at `path`, assigning `index` as the frame's
    /// position in the sequence being built.
    fn read(&self, path: &Path, index: usize) -> Result<Frame, Box<dyn std::error::Error>>;
}
