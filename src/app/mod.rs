pub mod console;
pub mod runner;

pub use console::{read_commands, spawn_console_reader};
pub use runner::{run, RunOptions};
