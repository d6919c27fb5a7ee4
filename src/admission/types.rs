use thiserror::Error;

/// Why an address was rejected. The display strings are a compatibility
/// contract with existing consumers and must not change.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum RejectionReason {
    #[error("Invalid email format")]
    InvalidFormat,
    #[error("Disposable email addresses are not allowed")]
    DisposableBlocked,
    #[error("Plus addressing is not allowed")]
    PlusAddressingBlocked,
}

impl RejectionReason {
    pub const fn message(self) -> &'static str {
        match self {
            Self::InvalidFormat => "Invalid email format",
            Self::DisposableBlocked => "Disposable email addresses are not allowed",
            Self::PlusAddressingBlocked => "Plus addressing is not allowed",
        }
    }
}

#[cfg(feature = "with-serde")]
impl serde::Serialize for RejectionReason {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.message())
    }
}

/// Outcome of a single admission check: `{ success, error }` where `error`
/// carries exactly one reason on failure and is absent (`null` in JSON) on
/// success.
#[cfg_attr(feature = "with-serde", derive(serde::Serialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Verdict {
    pub success: bool,
    pub error: Option<RejectionReason>,
}

impl Verdict {
    pub(crate) const fn pass() -> Self {
        Self {
            success: true,
            error: None,
        }
    }

    pub(crate) const fn fail(reason: RejectionReason) -> Self {
        Self {
            success: false,
            error: Some(reason),
        }
    }

    pub fn is_pass(&self) -> bool {
        self.success
    }

    /// The exact reason literal, when rejected.
    pub fn error_message(&self) -> Option<&'static str> {
        self.error.map(RejectionReason::message)
    }
}
