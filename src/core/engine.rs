use crate::core::output;
use crate::domain::model::{ProvisionFailure, ProvisionReport, ProvisionedLink, Treatment};
use crate::domain::ports::{ConfigProvider, PaymentProvider, Storage};
use crate::utils::error::Result;

/// Runs the whole provisioning pass: one product, price, and payment link
/// per catalog entry, then console and file output.
pub struct ProvisionEngine<P: PaymentProvider, S: Storage, C: ConfigProvider> {
    catalog: Vec<Treatment>,
    provider: P,
    storage: S,
    config: C,
}

impl<P: PaymentProvider, S: Storage, C: ConfigProvider> ProvisionEngine<P, S, C> {
    pub fn new(catalog: Vec<Treatment>, provider: P, storage: S, config: C) -> Self {
        Self {
            catalog,
            provider,
            storage,
            config,
        }
    }

    /// Provisions every entry, prints the copy-paste snippet and summary,
    /// and writes the flat output file. Returns the output file path.
    pub async fn run(&self) -> Result<String> {
        let run_id = format!("provision_{}", chrono::Utc::now().format("%Y%m%d_%H%M%S"));
        tracing::info!("🚀 Starting payment link provisioning (run: {})", run_id);

        println!("🚀 Creating Payment Links for TRT treatments...\n");

        let report = self.provision_all().await;

        if report.is_complete() {
            println!("🎉 All Payment Links created successfully!\n");
        } else {
            println!(
                "⚠️ Created {} of {} Payment Links ({} failed)\n",
                report.links.len(),
                self.catalog.len(),
                report.failures.len()
            );
        }

        println!("📋 Copy these URLs to your treatments.js file:\n");
        println!("{}", output::render_snippet(&self.catalog, &report));

        println!("\n📝 Summary:");
        for line in output::summary_lines(&self.catalog, &report) {
            println!("{}", line);
        }

        let file_content = output::render_file(&self.catalog, &report);
        self.storage
            .write_file(output::OUTPUT_FILE_NAME, file_content.as_bytes())
            .await?;

        let output_file = format!(
            "{}/{}",
            self.config.output_path(),
            output::OUTPUT_FILE_NAME
        );
        tracing::info!("💾 Snippet written to: {}", output_file);

        Ok(output_file)
    }

    /// Sequential loop over the catalog. A failing entry is recorded and
    /// skipped; the remaining entries are still processed.
    pub async fn provision_all(&self) -> ProvisionReport {
        let mut report = ProvisionReport::default();

        for treatment in &self.catalog {
            println!("Creating Payment Link for: {}", treatment.name);

            match self.provision_one(treatment).await {
                Ok(link) => {
                    println!("✅ Payment Link created: {}", link.url);
                    println!("---\n");
                    report.links.push(link);
                }
                Err(e) => {
                    tracing::error!(
                        "❌ Error creating Payment Link for {}: {}",
                        treatment.name,
                        e
                    );
                    println!("❌ Error creating Payment Link for {}: {}\n", treatment.name, e);
                    report.failures.push(ProvisionFailure {
                        treatment_id: treatment.id.clone(),
                        message: e.to_string(),
                    });
                }
            }
        }

        report
    }

    /// The three dependent creation calls for one entry.
    async fn provision_one(&self, treatment: &Treatment) -> Result<ProvisionedLink> {
        let product = self.provider.create_product(treatment).await?;
        println!("✅ Product created: {}", product.id);

        let price = self.provider.create_price(treatment, &product.id).await?;
        println!("✅ Price created: {}", price.id);

        let redirect_url = treatment.redirect_url(self.config.success_url());
        let link = self
            .provider
            .create_payment_link(treatment, &price.id, &redirect_url)
            .await?;

        Ok(ProvisionedLink {
            treatment_id: treatment.id.clone(),
            product_id: product.id,
            price_id: price.id,
            url: link.url,
        })
    }
}
