#[cfg(feature = "cli")]
pub mod cli;
pub mod env_file;
pub mod toml_config;

#[cfg(feature = "cli")]
pub use cli::CliConfig;
pub use env_file::Credentials;
pub use toml_config::Settings;
