pub mod dataset;
pub mod error;
pub mod query;
pub mod table;
