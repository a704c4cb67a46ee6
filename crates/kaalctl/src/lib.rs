//! KAAL control library - CLI pieces exposed for testing.

pub mod cli;
pub mod client;
pub mod commands;
pub mod errors;
pub mod output;
