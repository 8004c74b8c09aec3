use crate::utils::error::Result;
use crate::utils::validation::validate_required_env;
use std::fmt;

pub const API_KEY_VAR: &str = "DD_API_KEY";
pub const APP_KEY_VAR: &str = "DD_APP_KEY";
pub const SITE_VAR: &str = "DD_SITE";

/// Datadog credentials for one run.
#[derive(Clone)]
pub struct Credentials {
    pub api_key: String,
    pub app_key: String,
    pub site: String,
}

impl Credentials {
    /// Reads the three variables in a fixed order; the first missing or empty
    /// one is the error. Values are otherwise taken as given.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_key = validate_required_env(API_KEY_VAR, lookup(API_KEY_VAR))?;
        let app_key = validate_required_env(APP_KEY_VAR, lookup(APP_KEY_VAR))?;
        let site = validate_required_env(SITE_VAR, lookup(SITE_VAR))?;

        Ok(Self {
            api_key,
            app_key,
            site,
        })
    }

    pub fn api_base_url(&self) -> String {
        format!("https://api.{}", self.site)
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("api_key", &"<redacted>")
            .field("app_key", &"<redacted>")
            .field("site", &self.site)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::error::ListerError;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| vars.get(name).cloned()
    }

    fn missing_name(result: Result<Credentials>) -> &'static str {
        match result {
            Err(ListerError::MissingEnv { name }) => name,
            other => panic!("expected MissingEnv, got {:?}", other),
        }
    }

    #[test]
    fn test_all_present() {
        let creds = Credentials::from_lookup(lookup_from(&[
            ("DD_API_KEY", "api"),
            ("DD_APP_KEY", "app"),
            ("DD_SITE", "us3.datadoghq.com"),
        ]))
        .unwrap();

        assert_eq!(creds.api_key, "api");
        assert_eq!(creds.app_key, "app");
        assert_eq!(creds.api_base_url(), "https://api.us3.datadoghq.com");
    }

    #[test]
    fn test_first_missing_wins() {
        assert_eq!(missing_name(Credentials::from_lookup(lookup_from(&[]))), "DD_API_KEY");
        assert_eq!(
            missing_name(Credentials::from_lookup(lookup_from(&[("DD_SITE", "datadoghq.com")]))),
            "DD_API_KEY"
        );
        assert_eq!(
            missing_name(Credentials::from_lookup(lookup_from(&[
                ("DD_API_KEY", "api"),
                ("DD_SITE", "datadoghq.com"),
            ]))),
            "DD_APP_KEY"
        );
        assert_eq!(
            missing_name(Credentials::from_lookup(lookup_from(&[
                ("DD_API_KEY", "api"),
                ("DD_APP_KEY", "app"),
            ]))),
            "DD_SITE"
        );
    }

    #[test]
    fn test_empty_counts_as_missing() {
        assert_eq!(
            missing_name(Credentials::from_lookup(lookup_from(&[
                ("DD_API_KEY", "api"),
                ("DD_APP_KEY", ""),
                ("DD_SITE", "datadoghq.com"),
            ]))),
            "DD_APP_KEY"
        );
    }

    #[test]
    fn test_only_presence_is_checked() {
        let creds = Credentials::from_lookup(lookup_from(&[
            ("DD_API_KEY", "api"),
            ("DD_APP_KEY", "app"),
            ("DD_SITE", "https://datadoghq.com"),
        ]))
        .unwrap();
        assert_eq!(creds.site, "https://datadoghq.com");
    }

    #[test]
    fn test_debug_redacts_keys() {
        let creds = Credentials {
            api_key: "secret-api".to_string(),
            app_key: "secret-app".to_string(),
            site: "datadoghq.com".to_string(),
        };
        let debug = format!("{:?}", creds);
        assert!(!debug.contains("secret"));
        assert!(debug.contains("datadoghq.com"));
    }
}
