pub mod config;
pub mod core;
pub mod domain;
pub mod export;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::{cli::LocalStorage, CliConfig};

pub use config::catalog::Catalog;
pub use crate::core::engine::{AdvisoryEngine, AdvisoryRequest};
pub use utils::error::{AdvisorError, Result};
