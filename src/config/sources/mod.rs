//! Configuration sources, lowest precedence first: home file, local file, environment.

pub mod config_file;
pub mod environment;
