pub mod args;
pub mod commands;

pub use args::{Cli, Commands, ExtractArgs};
pub use commands::{run, RunStatus};
