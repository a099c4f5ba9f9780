/// CLI argument parsing and command handling - Gateway
mod args;
mod commands;

pub use args::{Cli, Commands, OutputFormat};
pub use commands::{handle_command, print_section, show_version};
