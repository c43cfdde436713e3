//! CLI library for testing purposes

pub mod config;
pub mod generate;
pub mod path_glob;
pub mod run_log;
pub mod stats;
pub mod validate;
pub mod validation;

pub use config::Config;
pub use generate::{GenerateOptions, run_generate_command};
pub use ifslang::Codec;
pub use validate::{run_validate_command, validate_inputs};
