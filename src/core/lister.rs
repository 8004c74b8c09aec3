use crate::domain::model::{ServiceEnvelope, ServiceListResponse, ToServiceRecord};
use crate::domain::ports::{ServiceCatalog, ALL_ENVIRONMENTS};
use crate::utils::error::Result;
use std::io::Write;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ShapeReport {
    pub envelope: ServiceEnvelope,
    pub skipped: usize,
    pub missing_data: bool,
}

pub struct ServiceLister<C: ServiceCatalog> {
    catalog: C,
}

impl<C: ServiceCatalog> ServiceLister<C> {
    pub fn new(catalog: C) -> Self {
        Self { catalog }
    }

    /// Exactly one call to the catalog; no pagination is followed.
    pub async fn extract(&self) -> Result<ServiceListResponse> {
        tracing::info!("Fetching APM services (env filter '{}')", ALL_ENVIRONMENTS);
        self.catalog.list_services(ALL_ENVIRONMENTS).await
    }

    pub async fn fetch(&self) -> Result<ServiceEnvelope> {
        let response = self.extract().await?;
        let report = shape_response(&response);
        if report.missing_data || report.skipped > 0 {
            tracing::warn!(
                "Degraded response: missing data list = {}, dropped entries = {}",
                report.missing_data,
                report.skipped
            );
        }
        tracing::info!("Retrieved {} services", report.envelope.services.len());
        Ok(report.envelope)
    }
}

/// Converts the vendor response into the output envelope. A missing or
/// non-array `data` yields an empty list; unconvertible entries are dropped.
pub fn shape_response(response: &ServiceListResponse) -> ShapeReport {
    let Some(entries) = response.entries() else {
        tracing::warn!("Response has no 'data' list; emitting an empty service list");
        tracing::warn!("Raw response: {}", response.raw());
        return ShapeReport {
            missing_data: true,
            ..ShapeReport::default()
        };
    };

    let mut services = Vec::with_capacity(entries.len());
    let mut skipped = 0;
    for (index, entry) in entries.iter().enumerate() {
        match entry.to_service_record() {
            Some(record) => services.push(record),
            None => {
                skipped += 1;
                tracing::warn!(
                    "Skipping service entry {} that is not an object: {}",
                    index,
                    entry
                );
            }
        }
    }

    ShapeReport {
        envelope: ServiceEnvelope { services },
        skipped,
        missing_data: false,
    }
}

/// Pretty JSON with 2-space indentation and a trailing newline.
pub fn render(envelope: &ServiceEnvelope) -> Result<String> {
    let mut json = serde_json::to_string_pretty(envelope)?;
    json.push('\n');
    Ok(json)
}

/// Single write of the whole document.
pub fn load<W: Write>(envelope: &ServiceEnvelope, out: &mut W) -> Result<()> {
    let json = render(envelope)?;
    out.write_all(json.as_bytes())?;
    out.flush()?;
    Ok(())
}
