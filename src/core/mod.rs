pub mod engine;
pub mod output;
pub mod stripe;

pub use crate::domain::model::{ProvisionReport, Treatment};
pub use crate::domain::ports::{ConfigProvider, PaymentProvider, Storage};
pub use crate::utils::error::Result;
