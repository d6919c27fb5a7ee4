//! Admission decision engine.
//!
//! An [`AdmissionEngine`] is built once per environment from a [`ConfigMap`]
//! and then queried any number of times through [`AdmissionEngine::validate_email`].
//! State is read-only after construction, so sharing an engine across threads
//! needs no locking; rule changes mean building a new engine.

mod domains;
mod types;

pub use types::{RejectionReason, Verdict};

use std::collections::HashSet;

use crate::config::{ConfigError, ConfigMap, EnvironmentConfig, resolve_environment};
use domains::{disposable_set, trusted_set};

#[derive(Debug, Clone)]
pub struct AdmissionEngine {
    allow_disposable_emails: bool,
    allow_plus_addressing: bool,
    disposable_domains: HashSet<String>,
    trusted: Option<HashSet<String>>,
}

impl AdmissionEngine {
    /// Resolve `environment` in `config` and build the engine. Fails with
    /// [`ConfigError::UnknownEnvironment`] when the name has no entry; the
    /// map is not retained.
    pub fn from_config(environment: &str, config: &ConfigMap) -> Result<Self, ConfigError> {
        let env = resolve_environment(environment, config)?;
        Ok(Self::from_environment(env))
    }

    /// Build the engine from an already-resolved environment entry.
    pub fn from_environment(env: &EnvironmentConfig) -> Self {
        let disposable_domains = disposable_set(
            env.disposable_domains.as_deref(),
            env.merge_disposable_domains(),
        );
        let trusted = trusted_set(env.trusted_domains.as_deref());

        #[cfg(feature = "with-tracing")]
        tracing::debug!(
            disposable_domains = disposable_domains.len(),
            trusted = trusted.as_ref().map(HashSet::len),
            allow_disposable_emails = env.rules.allow_disposable_emails,
            allow_plus_addressing = env.rules.allow_plus_addressing,
            "admission engine built"
        );

        Self {
            allow_disposable_emails: env.rules.allow_disposable_emails,
            allow_plus_addressing: env.rules.allow_plus_addressing,
            disposable_domains,
            trusted,
        }
    }

    /// Decide whether `email` may be admitted. Total over any string input;
    /// malformed input is a reported outcome, never a panic.
    ///
    /// Check order is fixed: format, trusted override, disposable domain,
    /// plus addressing. The split is at the *last* `@`, so
    /// `user@domain@com` is judged against the domain `com` — contractual,
    /// do not "fix".
    pub fn validate_email(&self, email: &str) -> Verdict {
        let normalized = email.trim().to_lowercase();

        let Some((local, domain)) = normalized.rsplit_once('@') else {
            return Verdict::fail(RejectionReason::InvalidFormat);
        };
        if local.is_empty() || domain.is_empty() {
            return Verdict::fail(RejectionReason::InvalidFormat);
        }

        // escape hatch: known-good senders bypass every blocking rule
        if let Some(trusted) = &self.trusted {
            if trusted.contains(normalized.as_str()) || trusted.contains(domain) {
                return Verdict::pass();
            }
        }

        // domain reputation outranks local-part shape
        if !self.allow_disposable_emails && self.disposable_domains.contains(domain) {
            #[cfg(feature = "with-tracing")]
            tracing::trace!(domain, "disposable domain rejected");
            return Verdict::fail(RejectionReason::DisposableBlocked);
        }

        if !self.allow_plus_addressing && local.contains('+') {
            return Verdict::fail(RejectionReason::PlusAddressingBlocked);
        }

        Verdict::pass()
    }
}

#[cfg(test)]
mod tests;
