pub mod feedback_line;
pub mod file_row;
