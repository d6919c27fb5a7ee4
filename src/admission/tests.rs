use super::{AdmissionEngine, RejectionReason, Verdict};
use crate::config::{ConfigMap, EnvironmentConfig, RuleFlags};

use proptest::prelude::*;

fn env(allow_disposable: bool, allow_plus: bool) -> EnvironmentConfig {
    EnvironmentConfig::new(RuleFlags {
        allow_disposable_emails: allow_disposable,
        allow_plus_addressing: allow_plus,
    })
}

fn engine(allow_disposable: bool, allow_plus: bool) -> AdmissionEngine {
    AdmissionEngine::from_environment(&env(allow_disposable, allow_plus))
}

fn rejected(verdict: Verdict, reason: RejectionReason) {
    assert!(!verdict.success);
    assert_eq!(verdict.error, Some(reason));
}

#[test]
fn from_config_resolves_environment() {
    let mut map = ConfigMap::new();
    map.insert("production".to_string(), env(false, true));

    let engine = AdmissionEngine::from_config("production", &map).expect("present");
    assert!(engine.validate_email("alice@example.com").is_pass());
}

#[test]
fn from_config_fails_for_unknown_environment() {
    let map = ConfigMap::new();
    let err = AdmissionEngine::from_config("production", &map).expect_err("absent");
    assert_eq!(err.to_string(), "unknown environment: production");
}

#[test]
fn blocks_disposable_domain() {
    let verdict = engine(false, true).validate_email("user@10minutemail.com");
    rejected(verdict, RejectionReason::DisposableBlocked);
    assert_eq!(
        verdict.error_message(),
        Some("Disposable email addresses are not allowed")
    );
}

#[test]
fn accepts_plus_address_when_allowed() {
    let verdict = engine(false, true).validate_email("User+Tag@Gmail.com");
    assert!(verdict.is_pass());
    assert_eq!(verdict.error, None);
}

#[test]
fn blocks_plus_address_when_disallowed() {
    let verdict = engine(true, false).validate_email("+user@gmail.com");
    rejected(verdict, RejectionReason::PlusAddressingBlocked);
}

#[test]
fn plus_anywhere_in_local_part_counts() {
    let e = engine(true, false);
    for addr in ["a+b@x.com", "ab+@x.com", "+ab@x.com", "a++b@x.com"] {
        rejected(e.validate_email(addr), RejectionReason::PlusAddressingBlocked);
    }
}

#[test]
fn invalid_format_without_at() {
    let e = engine(false, false);
    for addr in ["", "   ", "plainstring", "no-at-sign.com", "ünïcode"] {
        rejected(e.validate_email(addr), RejectionReason::InvalidFormat);
    }
}

#[test]
fn invalid_format_empty_local_or_domain() {
    let e = engine(true, true);
    rejected(e.validate_email("@example.com"), RejectionReason::InvalidFormat);
    rejected(e.validate_email("user@"), RejectionReason::InvalidFormat);
    rejected(e.validate_email("@"), RejectionReason::InvalidFormat);
}

#[test]
fn splits_at_last_at_sign() {
    // "user@domain@com" -> local "user@domain", domain "com": both non-empty,
    // so the format check passes and "com" is not disposable.
    let verdict = engine(false, false).validate_email("user@domain@com");
    assert!(verdict.is_pass());

    // trailing '@' still means empty domain, whatever came before
    rejected(
        engine(false, false).validate_email("user@domain@"),
        RejectionReason::InvalidFormat,
    );
}

#[test]
fn trims_surrounding_whitespace() {
    assert!(engine(false, true).validate_email("  alice@example.com \n").is_pass());
}

#[test]
fn disposable_check_is_case_insensitive() {
    rejected(
        engine(false, true).validate_email("User@10MinuteMail.COM"),
        RejectionReason::DisposableBlocked,
    );
}

#[test]
fn trusted_domain_overrides_disposable_block() {
    let mut config = env(false, false);
    config.trusted_domains = Some(vec!["tempmail.org".to_string()]);
    let engine = AdmissionEngine::from_environment(&config);

    let verdict = engine.validate_email("user@tempmail.org");
    assert!(verdict.is_pass());
    assert_eq!(verdict.error, None);
}

#[test]
fn trusted_full_address_overrides_plus_block() {
    let mut config = env(true, false);
    config.trusted_domains = Some(vec!["ops+alerts@corp.example".to_string()]);
    let engine = AdmissionEngine::from_environment(&config);

    assert!(engine.validate_email("Ops+Alerts@Corp.Example").is_pass());
    // same domain without the full-address entry still hits the plus rule
    rejected(
        engine.validate_email("other+x@corp.example"),
        RejectionReason::PlusAddressingBlocked,
    );
}

#[test]
fn empty_trusted_list_allowlists_nothing() {
    let mut config = env(false, true);
    config.trusted_domains = Some(vec![]);
    let engine = AdmissionEngine::from_environment(&config);
    rejected(
        engine.validate_email("user@10minutemail.com"),
        RejectionReason::DisposableBlocked,
    );
}

#[test]
fn disposable_outranks_plus_addressing() {
    // both rules would fire; only the domain reason is reported
    let verdict = engine(false, false).validate_email("user+tag@10minutemail.com");
    rejected(verdict, RejectionReason::DisposableBlocked);
}

#[test]
fn allow_disposable_flag_disables_domain_check() {
    assert!(engine(true, true).validate_email("user@10minutemail.com").is_pass());
}

#[test]
fn custom_list_merge_semantics() {
    let mut config = env(false, true);
    config.disposable_domains = Some(vec!["x.com".to_string()]);

    // merge (default): custom and builtin both blocked
    let merged = AdmissionEngine::from_environment(&config);
    rejected(
        merged.validate_email("user@x.com"),
        RejectionReason::DisposableBlocked,
    );
    rejected(
        merged.validate_email("user@10minutemail.com"),
        RejectionReason::DisposableBlocked,
    );

    // merge disabled: custom list alone
    config.merge_disposable_domains = Some(false);
    let replaced = AdmissionEngine::from_environment(&config);
    rejected(
        replaced.validate_email("user@x.com"),
        RejectionReason::DisposableBlocked,
    );
    assert!(replaced.validate_email("user@10minutemail.com").is_pass());
}

proptest! {
    #[test]
    fn validation_is_idempotent(input in ".{0,64}") {
        let e = engine(false, false);
        prop_assert_eq!(e.validate_email(&input), e.validate_email(&input));
    }

    #[test]
    fn verdict_is_unchanged_by_ascii_casing(input in "[a-zA-Z0-9+.@]{0,40}") {
        let e = engine(false, false);
        prop_assert_eq!(
            e.validate_email(&input),
            e.validate_email(&input.to_uppercase())
        );
    }

    #[test]
    fn never_panics_and_reason_matches_success(input in "\\PC{0,80}") {
        let verdict = engine(false, false).validate_email(&input);
        prop_assert_eq!(verdict.success, verdict.error.is_none());
    }
}
