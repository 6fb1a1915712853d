use crate::config::catalog::{CURRENCY, METADATA_SOURCE};
use crate::domain::model::{CreatedPaymentLink, CreatedPrice, CreatedProduct, Treatment};
use crate::domain::ports::PaymentProvider;
use crate::utils::error::{ProvisionError, Result};
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::Deserialize;

/// Countries the hosted checkout is allowed to ship to.
pub const ALLOWED_SHIPPING_COUNTRIES: [&str; 10] =
    ["DE", "AT", "CH", "NL", "BE", "LU", "FR", "IT", "ES", "PT"];

/// Thin client of the Stripe REST API. Requests are form-encoded POSTs with
/// bearer auth; the base URL is injectable so tests can point at a mock
/// server.
pub struct StripeClient {
    client: Client,
    api_base: String,
    secret_key: String,
}

#[derive(Debug, Deserialize)]
struct StripeErrorEnvelope {
    error: StripeErrorBody,
}

#[derive(Debug, Deserialize)]
struct StripeErrorBody {
    message: Option<String>,
    #[serde(rename = "type")]
    kind: Option<String>,
}

impl StripeClient {
    pub fn new(api_base: String, secret_key: String) -> Self {
        Self {
            client: Client::new(),
            api_base,
            secret_key,
        }
    }

    async fn post_form<T: DeserializeOwned>(
        &self,
        path: &str,
        operation: &'static str,
        form: &[(String, String)],
    ) -> Result<T> {
        let url = format!("{}{}", self.api_base, path);
        tracing::debug!("POST {} ({} form fields)", url, form.len());

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.secret_key)
            .form(form)
            .send()
            .await?;

        let status = response.status();
        tracing::debug!("{} response status: {}", operation, status);

        let body = response.text().await?;
        if status.is_success() {
            Ok(serde_json::from_str(&body)?)
        } else {
            Err(ProvisionError::StripeApiError {
                operation,
                status: status.as_u16(),
                message: Self::error_message(&body),
            })
        }
    }

    fn error_message(body: &str) -> String {
        match serde_json::from_str::<StripeErrorEnvelope>(body) {
            Ok(envelope) => {
                let kind = envelope
                    .error
                    .kind
                    .unwrap_or_else(|| "api_error".to_string());
                let message = envelope
                    .error
                    .message
                    .unwrap_or_else(|| "no error message provided".to_string());
                format!("{}: {}", kind, message)
            }
            // Not the Stripe error envelope, surface the raw body
            Err(_) => body.trim().to_string(),
        }
    }
}

impl PaymentProvider for StripeClient {
    async fn create_product(&self, treatment: &Treatment) -> Result<CreatedProduct> {
        let mut form = vec![
            ("name".to_string(), treatment.name.clone()),
            ("description".to_string(), treatment.description.clone()),
        ];
        for (index, image) in treatment.images.iter().enumerate() {
            form.push((format!("images[{}]", index), image.clone()));
        }
        form.push(("metadata[treatment_id]".to_string(), treatment.id.clone()));
        form.push(("metadata[source]".to_string(), METADATA_SOURCE.to_string()));

        self.post_form("/v1/products", "product creation", &form).await
    }

    async fn create_price(&self, treatment: &Treatment, product_id: &str) -> Result<CreatedPrice> {
        let form = vec![
            ("currency".to_string(), CURRENCY.to_string()),
            ("unit_amount".to_string(), treatment.unit_amount.to_string()),
            ("product".to_string(), product_id.to_string()),
            ("metadata[treatment_id]".to_string(), treatment.id.clone()),
        ];

        self.post_form("/v1/prices", "price creation", &form).await
    }

    async fn create_payment_link(
        &self,
        treatment: &Treatment,
        price_id: &str,
        redirect_url: &str,
    ) -> Result<CreatedPaymentLink> {
        let mut form = vec![
            ("line_items[0][price]".to_string(), price_id.to_string()),
            ("line_items[0][quantity]".to_string(), "1".to_string()),
            ("after_completion[type]".to_string(), "redirect".to_string()),
            (
                "after_completion[redirect][url]".to_string(),
                redirect_url.to_string(),
            ),
            ("automatic_tax[enabled]".to_string(), "true".to_string()),
            (
                "billing_address_collection".to_string(),
                "required".to_string(),
            ),
        ];
        for (index, country) in ALLOWED_SHIPPING_COUNTRIES.iter().enumerate() {
            form.push((
                format!("shipping_address_collection[allowed_countries][{}]", index),
                country.to_string(),
            ));
        }
        form.push(("metadata[treatment_id]".to_string(), treatment.id.clone()));
        form.push(("metadata[source]".to_string(), METADATA_SOURCE.to_string()));

        self.post_form("/v1/payment_links", "payment link creation", &form)
            .await
    }
}
