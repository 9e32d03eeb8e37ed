pub mod dataset;
pub mod table;
