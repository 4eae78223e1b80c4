pub mod error;
pub mod plugin;
pub mod types;
