use crate::config::catalog::CURRENCY;
use crate::domain::model::{ProvisionReport, Treatment};

/// Substituted for the payment link of entries that failed to provision.
pub const ERROR_LINK_MARKER: &str = "ERROR_CREATING_LINK";

pub const OUTPUT_FILE_NAME: &str = "payment_links_output.txt";

const FILE_HEADER: &str = "// Generated Payment Links for TRT Treatments";

/// Renders the object literal pasted into the front-end's treatments.js,
/// entries in catalog order.
pub fn render_snippet(catalog: &[Treatment], report: &ProvisionReport) -> String {
    let mut lines = vec!["const TREATMENTS = {".to_string()];

    for treatment in catalog {
        let url = report.url_for(&treatment.id).unwrap_or(ERROR_LINK_MARKER);

        lines.push(format!("    '{}': {{", treatment.id));
        lines.push(format!("        name: '{}',", treatment.name));
        lines.push(format!("        price: {},", treatment.unit_amount));
        lines.push(format!("        currency: '{}',", CURRENCY));
        lines.push(format!("        description: '{}',", treatment.description));
        lines.push(format!("        interval: '{}',", treatment.interval));
        lines.push(format!("        paymentLink: '{}'", url));
        lines.push("    },".to_string());
    }

    lines.push("};".to_string());
    lines.join("\n")
}

/// Full content of the flat output file.
pub fn render_file(catalog: &[Treatment], report: &ProvisionReport) -> String {
    format!("{}\n{}\n", FILE_HEADER, render_snippet(catalog, report))
}

/// One human-readable line per successfully created link.
pub fn summary_lines(catalog: &[Treatment], report: &ProvisionReport) -> Vec<String> {
    catalog
        .iter()
        .filter_map(|treatment| {
            report.url_for(&treatment.id).map(|url| {
                format!(
                    "{}: €{:.2} - {}",
                    treatment.name,
                    treatment.amount_eur(),
                    url
                )
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::{BillingInterval, ProvisionFailure, ProvisionedLink};

    fn two_entry_catalog() -> Vec<Treatment> {
        vec![
            Treatment {
                id: "pellets".to_string(),
                name: "Testosterone Pellets".to_string(),
                unit_amount: 29900,
                description: "Long-lasting subcutaneous pellets.".to_string(),
                images: vec![],
                interval: BillingInterval::ThreeMonth,
            },
            Treatment {
                id: "custom".to_string(),
                name: "Custom Compound".to_string(),
                unit_amount: 18900,
                description: "Personalized testosterone formulation.".to_string(),
                images: vec![],
                interval: BillingInterval::Month,
            },
        ]
    }

    fn report_with_pellets_link() -> ProvisionReport {
        ProvisionReport {
            links: vec![ProvisionedLink {
                treatment_id: "pellets".to_string(),
                product_id: "prod_1".to_string(),
                price_id: "price_1".to_string(),
                url: "https://buy.stripe.com/test_pellets".to_string(),
            }],
            failures: vec![ProvisionFailure {
                treatment_id: "custom".to_string(),
                message: "boom".to_string(),
            }],
        }
    }

    #[test]
    fn test_snippet_renders_entries_in_catalog_order() {
        let snippet = render_snippet(&two_entry_catalog(), &report_with_pellets_link());

        let expected = "\
const TREATMENTS = {
    'pellets': {
        name: 'Testosterone Pellets',
        price: 29900,
        currency: 'eur',
        description: 'Long-lasting subcutaneous pellets.',
        interval: '3-month',
        paymentLink: 'https://buy.stripe.com/test_pellets'
    },
    'custom': {
        name: 'Custom Compound',
        price: 18900,
        currency: 'eur',
        description: 'Personalized testosterone formulation.',
        interval: 'month',
        paymentLink: 'ERROR_CREATING_LINK'
    },
};";

        assert_eq!(snippet, expected);
    }

    #[test]
    fn test_file_content_has_header_and_trailing_newline() {
        let content = render_file(&two_entry_catalog(), &report_with_pellets_link());

        assert!(content.starts_with("// Generated Payment Links for TRT Treatments\n"));
        assert!(content.ends_with("};\n"));
    }

    #[test]
    fn test_summary_lists_only_created_links() {
        let lines = summary_lines(&two_entry_catalog(), &report_with_pellets_link());

        assert_eq!(
            lines,
            vec!["Testosterone Pellets: €299.00 - https://buy.stripe.com/test_pellets"]
        );
    }

    #[test]
    fn test_empty_report_renders_error_markers_only() {
        let snippet = render_snippet(&two_entry_catalog(), &ProvisionReport::default());
        assert_eq!(snippet.matches(ERROR_LINK_MARKER).count(), 2);
    }
}
