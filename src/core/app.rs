use crate::adapters::datadog::DatadogClient;
use crate::config::Credentials;
use crate::core::lister::{load, ServiceLister};
use crate::domain::ports::ServiceCatalog;
use crate::utils::error::{ErrorCategory, ListerError};
use std::io::Write;

pub const EXIT_SUCCESS: u8 = 0;
pub const EXIT_FAILURE: u8 = 1;

/// Reads credentials through `lookup`, lists services from Datadog and writes
/// the envelope to `out`. Returns the process exit code.
pub async fn run<F, O, E>(lookup: F, out: &mut O, err: &mut E) -> u8
where
    F: Fn(&str) -> Option<String>,
    O: Write,
    E: Write,
{
    let credentials = match Credentials::from_lookup(lookup) {
        Ok(credentials) => credentials,
        Err(e) => return report_error(&e, err),
    };
    tracing::debug!("Loaded credentials: {:?}", credentials);

    let client = match DatadogClient::builder(&credentials).build() {
        Ok(client) => client,
        Err(e) => return report_error(&e, err),
    };
    tracing::info!("Using Datadog API at {}", client.base_url());

    execute(client, out, err).await
}

/// Runs the list-shape-emit procedure against any catalog. The catalog is
/// consumed and dropped before this returns.
pub async fn execute<C, O, E>(catalog: C, out: &mut O, err: &mut E) -> u8
where
    C: ServiceCatalog,
    O: Write,
    E: Write,
{
    let lister = ServiceLister::new(catalog);
    let result = match lister.fetch().await {
        Ok(envelope) => load(&envelope, out),
        Err(e) => Err(e),
    };
    drop(lister);

    match result {
        Ok(()) => EXIT_SUCCESS,
        Err(e) => report_error(&e, err),
    }
}

fn report_error<E: Write>(error: &ListerError, err: &mut E) -> u8 {
    tracing::debug!("Failure ({:?}): {:?}", error.category(), error);

    match error.category() {
        ErrorCategory::ConfigurationMissing => {
            let _ = writeln!(err, "Error: {}", error);
        }
        ErrorCategory::VendorApiFailure => {
            let _ = writeln!(err, "Datadog API Error: {}", error);
            if let Some(details) = error.api_error_details() {
                let _ = writeln!(err, "Error details: {}", details);
            }
        }
        ErrorCategory::UnexpectedFailure => {
            let _ = writeln!(err, "An unexpected error occurred: {}", error);
        }
    }

    EXIT_FAILURE
}
