pub mod appearance_tab;
pub mod create_tab;
pub mod extract_tab;
