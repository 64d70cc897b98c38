pub mod config;
pub mod errors;
pub mod launch;
pub mod runner;
pub mod table;
pub mod types;
