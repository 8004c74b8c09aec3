use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// One APM service as returned by Datadog. Opaque; key order is kept as received.
pub type ServiceRecord = Map<String, Value>;

/// Conversion of a raw vendor element into a plain mapping. Elements that
/// cannot be represented as a mapping return `None`.
pub trait ToServiceRecord {
    fn to_service_record(&self) -> Option<ServiceRecord>;
}

impl ToServiceRecord for Value {
    fn to_service_record(&self) -> Option<ServiceRecord> {
        match self {
            Value::Object(obj) => Some(obj.clone()),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ServiceListResponse {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl ServiceListResponse {
    pub fn entries(&self) -> Option<&[Value]> {
        match &self.data {
            Some(Value::Array(items)) => Some(items.as_slice()),
            _ => None,
        }
    }

    /// Raw representation used in diagnostics.
    pub fn raw(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| format!("{:?}", self))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ServiceEnvelope {
    pub services: Vec<ServiceRecord>,
}
