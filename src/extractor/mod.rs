pub mod parser;
pub mod walker;

pub use parser::{ParsedFile, Parser};
pub use walker::FileWalker;
