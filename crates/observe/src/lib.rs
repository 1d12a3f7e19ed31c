//! Initialization logic for logging, shared by the binaries of this
//! workspace, plus a panic hook that reports through `tracing`.
pub mod config;
pub mod panic_hook;
pub mod tracing;

pub use config::Config;
