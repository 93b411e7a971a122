//! Command-line interface module.

mod args;
pub mod build;
pub mod init;
pub mod render;

pub use args::{BuildArgs, Cli, Commands, HeadArgs};
