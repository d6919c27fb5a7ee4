use std::collections::HashMap;

#[cfg(feature = "with-serde")]
use serde::{Deserialize, Serialize};

/// Per-environment rule flags. Both are required: a missing flag is a
/// configuration error for whoever loads the map, not for this crate.
#[cfg_attr(feature = "with-serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RuleFlags {
    pub allow_disposable_emails: bool,
    pub allow_plus_addressing: bool,
}

/// One environment's entry in the configuration map.
///
/// JSON shape (with `with-serde`): `rules`, `disposableDomains`,
/// `mergeDisposableDomains`, `trustedDomains`.
#[cfg_attr(feature = "with-serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "with-serde", serde(rename_all = "camelCase"))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnvironmentConfig {
    pub rules: RuleFlags,
    #[cfg_attr(feature = "with-serde", serde(default))]
    pub disposable_domains: Option<Vec<String>>,
    #[cfg_attr(feature = "with-serde", serde(default))]
    pub merge_disposable_domains: Option<bool>,
    #[cfg_attr(feature = "with-serde", serde(default))]
    pub trusted_domains: Option<Vec<String>>,
}

impl EnvironmentConfig {
    pub fn new(rules: RuleFlags) -> Self {
        Self {
            rules,
            disposable_domains: None,
            merge_disposable_domains: None,
            trusted_domains: None,
        }
    }

    /// Effective merge flag: un custom list se fusionne avec la liste
    /// embarquée sauf refus explicite.
    pub fn merge_disposable_domains(&self) -> bool {
        self.merge_disposable_domains.unwrap_or(true)
    }
}

/// Environment name -> configuration. Keys are arbitrary strings, not a
/// closed enum.
pub type ConfigMap = HashMap<String, EnvironmentConfig>;

#[cfg(test)]
mod tests {
    use super::*;

    fn flags() -> RuleFlags {
        RuleFlags {
            allow_disposable_emails: false,
            allow_plus_addressing: true,
        }
    }

    #[test]
    fn merge_defaults_to_true() {
        let env = EnvironmentConfig::new(flags());
        assert!(env.merge_disposable_domains());
    }

    #[test]
    fn merge_explicit_false_wins() {
        let mut env = EnvironmentConfig::new(flags());
        env.merge_disposable_domains = Some(false);
        assert!(!env.merge_disposable_domains());
    }

    #[cfg(feature = "with-serde")]
    #[test]
    fn deserializes_camel_case_fields() {
        let env: EnvironmentConfig = serde_json::from_str(
            r#"{
                "rules": { "allow_disposable_emails": false, "allow_plus_addressing": true },
                "disposableDomains": ["x.com"],
                "mergeDisposableDomains": false,
                "trustedDomains": ["corp.example"]
            }"#,
        )
        .expect("valid config");
        assert_eq!(env.disposable_domains.as_deref(), Some(&["x.com".to_string()][..]));
        assert_eq!(env.merge_disposable_domains, Some(false));
        assert_eq!(
            env.trusted_domains.as_deref(),
            Some(&["corp.example".to_string()][..])
        );
    }

    #[cfg(feature = "with-serde")]
    #[test]
    fn optional_fields_default_to_none() {
        let env: EnvironmentConfig = serde_json::from_str(
            r#"{ "rules": { "allow_disposable_emails": true, "allow_plus_addressing": true } }"#,
        )
        .expect("valid config");
        assert!(env.disposable_domains.is_none());
        assert!(env.merge_disposable_domains.is_none());
        assert!(env.trusted_domains.is_none());
    }
}
