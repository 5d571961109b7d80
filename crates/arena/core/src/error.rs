//! Common error infrastructure for arena-core.
//!
//! Domain-specific errors (`MealError`, `BattleError`) live next to the
//! operations that raise them. This module provides the shared severity
//! classification and the trait that ties them together.

/// Severity level of an error, used for categorization and recovery strategies.
///
/// Errors are classified by their recoverability and expected handling:
/// - **Recoverable**: the caller can fix the situation and try again (e.g. clear the arena)
/// - **Validation**: invalid input that should be rejected without retry
/// - **Internal**: a collaborator failed part-way through an operation
/// - **Fatal**: unrecoverable, state can no longer be trusted
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorSeverity {
    /// Recoverable error - retry after changing arena state.
    ///
    /// Examples: arena already full, not enough combatants yet
    Recoverable,

    /// Validation error - invalid input, should not retry without changes.
    ///
    /// Examples: empty meal name, non-positive price
    Validation,

    /// Internal error - a collaborator failed mid-operation.
    ///
    /// Examples: statistics sink rejected an outcome after the winner was picked
    Internal,

    /// Fatal error - cannot continue.
    Fatal,
}

impl ErrorSeverity {
    /// Returns a human-readable description of this severity level.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Recoverable => "recoverable",
            Self::Validation => "validation",
            Self::Internal => "internal",
            Self::Fatal => "fatal",
        }
    }

    /// Returns true if this error is potentially recoverable.
    pub const fn is_recoverable(&self) -> bool {
        matches!(self, Self::Recoverable)
    }

    /// Returns true if this error indicates a partially applied operation.
    pub const fn is_internal(&self) -> bool {
        matches!(self, Self::Internal)
    }

    /// Returns true if this error is fatal.
    pub const fn is_fatal(&self) -> bool {
        matches!(self, Self::Fatal)
    }
}

/// Common trait for all arena-core errors.
///
/// # Implementation Guidelines
///
/// - All error enums should implement this trait
/// - Use `#[derive(thiserror::Error)]` for Display/Error impl
/// - Classify severity based on recoverability, not impact
pub trait ArenaError: core::fmt::Display + core::fmt::Debug {
    /// Returns the severity level of this error.
    fn severity(&self) -> ErrorSeverity;

    /// Returns a static string identifier for this error variant.
    ///
    /// Stable across releases, suitable for logs and assertions.
    fn error_code(&self) -> &'static str {
        core::any::type_name::<Self>()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn severity_labels_are_stable() {
        assert_eq!(ErrorSeverity::Recoverable.as_str(), "recoverable");
        assert_eq!(ErrorSeverity::Validation.as_str(), "validation");
        assert_eq!(ErrorSeverity::Internal.as_str(), "internal");
        assert_eq!(ErrorSeverity::Fatal.as_str(), "fatal");
    }

    #[test]
    fn severity_predicates() {
        assert!(ErrorSeverity::Recoverable.is_recoverable());
        assert!(!ErrorSeverity::Validation.is_recoverable());
        assert!(ErrorSeverity::Internal.is_internal());
        assert!(ErrorSeverity::Fatal.is_fatal());
    }
}
