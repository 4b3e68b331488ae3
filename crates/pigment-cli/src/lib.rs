//! CLI interface for pigment.

pub mod bootstrap;
pub mod commands;
pub mod handlers;
pub mod parser;

pub use commands::{Commands, ServeArgs};
pub use parser::Cli;
