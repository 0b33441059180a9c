mod args;
mod commands;
pub mod config;
mod handlers;
mod output;
pub mod types;

pub use args::{BillsCommand, Cli, Commands};
pub use commands::run;
