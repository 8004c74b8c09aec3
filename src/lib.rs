pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use crate::adapters::datadog::{DatadogClient, DatadogClientBuilder};
pub use crate::config::Credentials;
pub use crate::core::app::{execute, run};
pub use crate::core::lister::ServiceLister;
pub use crate::domain::model::{ServiceEnvelope, ServiceListResponse, ServiceRecord};
pub use crate::utils::error::{ListerError, Result};
