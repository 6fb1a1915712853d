pub mod catalog;
pub mod cli;

use crate::domain::ports::ConfigProvider;
use crate::utils::error::{ProvisionError, Result};
use crate::utils::validation::{self, Validate};
use clap::Parser;
use serde::{Deserialize, Serialize};

/// Default value of `--secret-key`. The run refuses to start until the
/// operator replaces it with a real key.
pub const PLACEHOLDER_SECRET_KEY: &str = "sk_test_YOUR_SECRET_KEY_HERE";

pub const DEFAULT_API_BASE: &str = "https://api.stripe.com";
pub const DEFAULT_SUCCESS_URL: &str = "https://ssenge.github.io/doc/success.html";

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "trt-payment-links")]
#[command(about = "Provision Stripe payment links for the TRT treatment catalog")]
pub struct CliConfig {
    /// Stripe secret key (get it from https://dashboard.stripe.com/test/apikeys)
    #[arg(long, default_value = PLACEHOLDER_SECRET_KEY)]
    pub secret_key: String,

    #[arg(long, default_value = DEFAULT_API_BASE)]
    pub api_base: String,

    /// Directory the generated snippet file is written to
    #[arg(long, default_value = ".")]
    pub output_path: String,

    /// Checkout completion redirect target
    #[arg(long, default_value = DEFAULT_SUCCESS_URL)]
    pub success_url: String,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl ConfigProvider for CliConfig {
    fn api_base(&self) -> &str {
        &self.api_base
    }

    fn secret_key(&self) -> &str {
        &self.secret_key
    }

    fn output_path(&self) -> &str {
        &self.output_path
    }

    fn success_url(&self) -> &str {
        &self.success_url
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_url("api_base", &self.api_base)?;
        validation::validate_url("success_url", &self.success_url)?;
        validation::validate_path("output_path", &self.output_path)?;

        if self.secret_key == PLACEHOLDER_SECRET_KEY {
            return Err(ProvisionError::InvalidConfigValueError {
                field: "secret_key".to_string(),
                value: self.secret_key.clone(),
                reason: "replace the placeholder with your actual Stripe secret key"
                    .to_string(),
            });
        }

        validation::validate_secret_key("secret_key", &self.secret_key)?;

        Ok(())
    }
}
