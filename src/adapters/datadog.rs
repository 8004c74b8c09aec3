use crate::config::Credentials;
use crate::domain::model::ServiceListResponse;
use crate::domain::ports::ServiceCatalog;
use crate::utils::error::{ListerError, Result};
use crate::utils::validation::validate_url;
use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue, ACCEPT};
use reqwest::{Client, Response};
use url::Url;

pub const API_KEY_HEADER: &str = "dd-api-key";
pub const APP_KEY_HEADER: &str = "dd-application-key";
pub const SERVICES_PATH: [&str; 4] = ["api", "v2", "apm", "services"];
pub const FILTER_ENV_PARAM: &str = "filter[env]";

const DEFAULT_USER_AGENT: &str = concat!("dd-service-lister/", env!("CARGO_PKG_VERSION"));

pub struct DatadogClientBuilder {
    base_url: String,
    api_key: String,
    app_key: String,
    user_agent: String,
}

impl DatadogClientBuilder {
    pub fn new(credentials: &Credentials) -> Self {
        Self {
            base_url: credentials.api_base_url(),
            api_key: credentials.api_key.clone(),
            app_key: credentials.app_key.clone(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }

    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    pub fn build(self) -> Result<DatadogClient> {
        let base_url = validate_url("base_url", &self.base_url)?;

        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        headers.insert(
            HeaderName::from_static(API_KEY_HEADER),
            auth_header("api_key", &self.api_key)?,
        );
        headers.insert(
            HeaderName::from_static(APP_KEY_HEADER),
            auth_header("app_key", &self.app_key)?,
        );

        let http = Client::builder()
            .default_headers(headers)
            .user_agent(self.user_agent)
            .build()?;

        Ok(DatadogClient { base_url, http })
    }
}

fn auth_header(field: &str, value: &str) -> Result<HeaderValue> {
    let mut header = HeaderValue::from_str(value).map_err(|_| ListerError::InvalidConfig {
        field: field.to_string(),
        reason: "contains characters not allowed in an HTTP header".to_string(),
    })?;
    header.set_sensitive(true);
    Ok(header)
}

/// Datadog APM API client. Dropping it releases its connection pool.
pub struct DatadogClient {
    base_url: Url,
    http: Client,
}

impl DatadogClient {
    pub fn builder(credentials: &Credentials) -> DatadogClientBuilder {
        DatadogClientBuilder::new(credentials)
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    fn services_url(&self, filter_env: &str) -> Result<Url> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| ListerError::InvalidConfig {
                field: "base_url".to_string(),
                reason: format!("cannot be used as a base: {}", self.base_url),
            })?
            .pop_if_empty()
            .extend(SERVICES_PATH);
        url.set_fragment(None);
        url.query_pairs_mut()
            .clear()
            .append_pair(FILTER_ENV_PARAM, filter_env);
        Ok(url)
    }

    async fn parse_error<T>(resp: Response) -> Result<T> {
        let status = resp.status();
        let body = resp.text().await.unwrap_or_default();
        Err(ListerError::Api {
            status: status.as_u16(),
            reason: status.canonical_reason().unwrap_or("Unknown").to_string(),
            body,
        })
    }
}

#[async_trait]
impl ServiceCatalog for DatadogClient {
    async fn list_services(&self, filter_env: &str) -> Result<ServiceListResponse> {
        let url = self.services_url(filter_env)?;
        tracing::debug!("GET {}", url);

        let resp = self.http.get(url).send().await?;
        tracing::debug!("Datadog response status: {}", resp.status());

        if resp.status().is_success() {
            Ok(resp.json::<ServiceListResponse>().await?)
        } else {
            Self::parse_error(resp).await
        }
    }
}
