pub mod model;
pub mod ports;

pub use model::{ProvisionReport, Treatment};
pub use ports::{ConfigProvider, PaymentProvider, Storage};
