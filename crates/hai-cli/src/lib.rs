//! CLI library components for the HAI risk map shell.

pub mod cli;
pub mod commands;
pub mod logging;
pub mod summary;
