pub mod csv_writer;
pub mod json_store;
