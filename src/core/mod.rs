pub mod config;
pub mod error;
pub mod executor;
pub mod loader;
pub mod sql;
