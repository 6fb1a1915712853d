use clap::Parser;
use trt_payment_links::utils::{logger, validation::Validate};
use trt_payment_links::{catalog, CliConfig, LocalStorage, ProvisionEngine, StripeClient};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting trt-payment-links CLI");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        eprintln!("❌ {}", e);
        eprintln!("💡 Get your secret key from: https://dashboard.stripe.com/test/apikeys");
        std::process::exit(1);
    }

    let provider = StripeClient::new(config.api_base.clone(), config.secret_key.clone());
    let storage = LocalStorage::new(config.output_path.clone());
    let engine = ProvisionEngine::new(catalog::builtin(), provider, storage, config);

    match engine.run().await {
        Ok(output_file) => {
            tracing::info!("✅ Provisioning run completed");
            println!("\n💾 Code also saved to: {}", output_file);
        }
        Err(e) => {
            tracing::error!("❌ Provisioning run failed: {}", e);
            eprintln!("❌ {}", e);
            std::process::exit(1);
        }
    }

    Ok(())
}
