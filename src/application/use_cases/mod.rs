pub mod classifier;
pub mod highlight;
pub mod joiner;
pub mod normalizer;
pub mod parser;
pub mod table_builder;
