//! Image-sequence/video conversion core.
//!
//! The `video` module holds the reader/writer traits and their
//! ffmpeg/image-crate implementations; `pipeline` holds the three
//! use cases (build video, extract frames, probe metadata) that the
//! CLI and desktop shells delegate to.

pub mod pipeline;
pub mod shared;
pub mod video;
