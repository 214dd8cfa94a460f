pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::CliConfig;

pub use crate::adapters::http::{router, AppState};
pub use crate::adapters::loader::load_dataset;
pub use crate::config::toml_config::TomlConfig;
pub use crate::core::engine::SalesEngine;
pub use crate::utils::error::{Result, SalesError};
