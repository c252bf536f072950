pub mod config;
pub mod errors;
pub mod staging;
pub mod types;
