pub mod build_video_use_case;
pub mod error;
pub mod extract_frames_use_case;
pub mod probe_video_use_case;
pub mod sequence_scanner;
