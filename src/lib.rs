pub mod cli;
pub mod download;
pub mod records;
pub mod writer;
pub mod zones;

pub use cli::{Cli, Commands};
