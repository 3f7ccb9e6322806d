pub mod config;
pub mod pxweb;
pub mod query_store;
