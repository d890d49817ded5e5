mod commands;

pub use commands::{extract, Cli};
