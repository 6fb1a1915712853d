use crate::domain::model::{CreatedPaymentLink, CreatedPrice, CreatedProduct, Treatment};
use crate::utils::error::Result;

pub trait Storage: Send + Sync {
    fn write_file(
        &self,
        path: &str,
        data: &[u8],
    ) -> impl std::future::Future<Output = Result<()>> + Send;
}

pub trait ConfigProvider: Send + Sync {
    fn api_base(&self) -> &str;
    fn secret_key(&self) -> &str;
    fn output_path(&self) -> &str;
    fn success_url(&self) -> &str;
}

/// The three dependent creation operations against the payment provider.
pub trait PaymentProvider: Send + Sync {
    fn create_product(
        &self,
        treatment: &Treatment,
    ) -> impl std::future::Future<Output = Result<CreatedProduct>> + Send;

    fn create_price(
        &self,
        treatment: &Treatment,
        product_id: &str,
    ) -> impl std::future::Future<Output = Result<CreatedPrice>> + Send;

    fn create_payment_link(
        &self,
        treatment: &Treatment,
        price_id: &str,
        redirect_url: &str,
    ) -> impl std::future::Future<Output = Result<CreatedPaymentLink>> + Send;
}
