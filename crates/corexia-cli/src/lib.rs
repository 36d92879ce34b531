mod args;
mod commands;
pub mod context;
mod handlers;
pub mod presentation;
pub mod schemas;
mod tui;

pub use args::{Cli, Commands, ConfigCommand, ListArgs, OrderArg, OutputFormat, ResourceCommand};
pub use commands::run;
