//! Command handlers: one module per subcommand.

pub mod models;
pub mod serve;
