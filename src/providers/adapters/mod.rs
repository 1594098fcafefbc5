//! Provider adapters
//! One concrete adapter per remote provider family

pub mod factory;
pub mod nvidia;
pub mod traits;

pub use factory::{get_provider_adapter, is_provider_supported, supported_providers};
pub use nvidia::NvidiaProvider;
pub use traits::{ModelRequest, ProviderAdapter};
