use serde::{Deserialize, Serialize};

/// How often the customer is billed. Shown verbatim in the generated
/// front-end snippet ("month" / "3-month").
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BillingInterval {
    #[serde(rename = "month")]
    Month,
    #[serde(rename = "3-month")]
    ThreeMonth,
}

impl BillingInterval {
    pub fn as_str(&self) -> &'static str {
        match self {
            BillingInterval::Month => "month",
            BillingInterval::ThreeMonth => "3-month",
        }
    }
}

impl std::fmt::Display for BillingInterval {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One entry of the fixed treatment catalog.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Treatment {
    pub id: String,
    pub name: String,
    /// Price in minor-currency units (euro cents).
    pub unit_amount: i64,
    pub description: String,
    pub images: Vec<String>,
    pub interval: BillingInterval,
}

impl Treatment {
    pub fn amount_eur(&self) -> f64 {
        self.unit_amount as f64 / 100.0
    }

    /// Redirect target for the hosted checkout, carrying the treatment
    /// context back to the front-end as query parameters.
    pub fn redirect_url(&self, success_url: &str) -> String {
        format!(
            "{}?treatment={}&amount={:.2}&product={}",
            success_url,
            self.id,
            self.amount_eur(),
            self.name.replace(' ', "+")
        )
    }
}

/// Product object returned by the provider.
#[derive(Debug, Clone, Deserialize)]
pub struct CreatedProduct {
    pub id: String,
}

/// Price object returned by the provider.
#[derive(Debug, Clone, Deserialize)]
pub struct CreatedPrice {
    pub id: String,
}

/// Payment link object returned by the provider.
#[derive(Debug, Clone, Deserialize)]
pub struct CreatedPaymentLink {
    pub id: String,
    pub url: String,
}

/// Successful provisioning outcome for one catalog entry.
#[derive(Debug, Clone)]
pub struct ProvisionedLink {
    pub treatment_id: String,
    pub product_id: String,
    pub price_id: String,
    pub url: String,
}

/// Failed provisioning outcome for one catalog entry.
#[derive(Debug, Clone)]
pub struct ProvisionFailure {
    pub treatment_id: String,
    pub message: String,
}

/// Result of one provisioning run, discarded after output.
#[derive(Debug, Clone, Default)]
pub struct ProvisionReport {
    pub links: Vec<ProvisionedLink>,
    pub failures: Vec<ProvisionFailure>,
}

impl ProvisionReport {
    pub fn url_for(&self, treatment_id: &str) -> Option<&str> {
        self.links
            .iter()
            .find(|link| link.treatment_id == treatment_id)
            .map(|link| link.url.as_str())
    }

    pub fn is_complete(&self) -> bool {
        self.failures.is_empty()
    }
}
