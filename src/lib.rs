#![forbid(unsafe_code)]
//! mailadmit_lib — admission filter for email addresses.
//!
//! Build an [`AdmissionEngine`] once for a named environment, then call
//! [`AdmissionEngine::validate_email`] per address. Rejections carry one of
//! three fixed reason strings (format, disposable domain, plus addressing);
//! a per-environment trusted allowlist bypasses the blocking rules.

pub mod admission;
pub mod config;

pub use admission::{AdmissionEngine, RejectionReason, Verdict};
pub use config::{ConfigError, ConfigMap, EnvironmentConfig, RuleFlags, resolve_environment};
