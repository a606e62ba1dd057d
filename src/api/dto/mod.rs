pub mod process_data;
