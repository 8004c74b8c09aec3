pub mod app;
pub mod lister;

pub use crate::domain::model::{ServiceEnvelope, ServiceListResponse, ServiceRecord};
pub use crate::domain::ports::ServiceCatalog;
pub use crate::utils::error::Result;
