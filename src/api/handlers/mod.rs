pub mod health;
pub mod process_data;
pub mod root;
