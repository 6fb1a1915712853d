pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use crate::config::{catalog, cli::LocalStorage, CliConfig};
pub use crate::core::{engine::ProvisionEngine, stripe::StripeClient};
pub use crate::utils::error::{ProvisionError, Result};
