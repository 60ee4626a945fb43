pub mod movie;
pub mod table;
