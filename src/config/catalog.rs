use crate::domain::model::{BillingInterval, Treatment};

/// Every price in the catalog is quoted in euros.
pub const CURRENCY: &str = "eur";

/// Metadata tag attached to every created product and payment link so the
/// objects are recognizable in the provider dashboard.
pub const METADATA_SOURCE: &str = "trt_treatments";

/// The fixed treatment catalog matching the front-end, in output order.
pub fn builtin() -> Vec<Treatment> {
    vec![
        Treatment {
            id: "testo-gel".to_string(),
            name: "Testosterone Gel".to_string(),
            unit_amount: 8900,
            description: "Daily topical application with steady hormone levels throughout the day. Perfect for those who prefer non-invasive treatment.".to_string(),
            images: vec![
                "https://via.placeholder.com/400x300/3B82F6/FFFFFF?text=Testosterone+Gel".to_string(),
            ],
            interval: BillingInterval::Month,
        },
        Treatment {
            id: "injections".to_string(),
            name: "Testosterone Injections".to_string(),
            unit_amount: 12900,
            description: "Weekly intramuscular injections. Most effective method with peak hormone optimization. Includes all supplies and detailed instructions.".to_string(),
            images: vec![
                "https://via.placeholder.com/400x300/10B981/FFFFFF?text=Testosterone+Injections".to_string(),
            ],
            interval: BillingInterval::Month,
        },
        Treatment {
            id: "patches".to_string(),
            name: "Testosterone Patches".to_string(),
            unit_amount: 10900,
            description: "Daily transdermal patches. Convenient and discreet with consistent hormone delivery. Simply apply and forget.".to_string(),
            images: vec![
                "https://via.placeholder.com/400x300/8B5CF6/FFFFFF?text=Testosterone+Patches".to_string(),
            ],
            interval: BillingInterval::Month,
        },
        Treatment {
            id: "pellets".to_string(),
            name: "Testosterone Pellets".to_string(),
            unit_amount: 29900,
            description: "Long-lasting subcutaneous pellets. Inserted once every 3-4 months for ultimate convenience. No daily routine required.".to_string(),
            images: vec![
                "https://via.placeholder.com/400x300/F59E0B/FFFFFF?text=Testosterone+Pellets".to_string(),
            ],
            interval: BillingInterval::ThreeMonth,
        },
        Treatment {
            id: "nasal-gel".to_string(),
            name: "Testosterone Nasal Gel".to_string(),
            unit_amount: 14900,
            description: "Innovative nasal application. Fast absorption with no skin transfer risk. Perfect for those with sensitive skin or active lifestyles.".to_string(),
            images: vec![
                "https://via.placeholder.com/400x300/06B6D4/FFFFFF?text=Testosterone+Nasal+Gel".to_string(),
            ],
            interval: BillingInterval::Month,
        },
        Treatment {
            id: "custom".to_string(),
            name: "Custom Compound".to_string(),
            unit_amount: 18900,
            description: "Personalized testosterone formulation. Tailored to your specific needs and preferences based on your assessment and lab results.".to_string(),
            images: vec![
                "https://via.placeholder.com/400x300/6366F1/FFFFFF?text=Custom+Compound".to_string(),
            ],
            interval: BillingInterval::Month,
        },
    ]
}
