//! Error taxonomy for the script framework.
//!
//! Only two things can go wrong inside this crate: the registry is configured
//! incorrectly at startup, or the host dispatches hooks out of lifecycle order.
//! Everything a behavior observes at resolution time (missing debuffs, missed
//! hits, absent modifiers) is data, not an error.

use crate::context::LifecycleStage;
use crate::types::SpellId;

/// Severity level of an error, used for categorization and recovery strategies.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorSeverity {
    /// Temporary condition; the caller may retry or pick another path.
    Recoverable,

    /// Invalid input that should be rejected without retry.
    Validation,

    /// Host or behavior bug; should be investigated.
    Internal,

    /// Startup cannot continue.
    Fatal,
}

impl ErrorSeverity {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Recoverable => "recoverable",
            Self::Validation => "validation",
            Self::Internal => "internal",
            Self::Fatal => "fatal",
        }
    }

    pub const fn is_fatal(&self) -> bool {
        matches!(self, Self::Fatal)
    }
}

/// Common trait for all errors raised by the framework.
pub trait ScriptFault: core::fmt::Display + core::fmt::Debug {
    fn severity(&self) -> ErrorSeverity;

    /// Stable identifier for this error variant.
    fn error_code(&self) -> &'static str;
}

/// Configuration errors raised while building the script registry.
///
/// All of these abort initialization; nothing is silently overwritten.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum RegistryError {
    /// An ability identifier was bound to a second behavior.
    #[error("{0} already has a script bound")]
    DuplicateRegistration(SpellId),

    /// Two behaviors were added to the catalog under the same name.
    #[error("script name '{0}' registered twice")]
    DuplicateScriptName(String),

    /// A binding references a script name the catalog does not know.
    #[error("{spell} is bound to unknown script '{script}'")]
    UnknownScript { spell: SpellId, script: String },
}

impl ScriptFault for RegistryError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Fatal
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::DuplicateRegistration(_) => "REGISTRY_DUPLICATE_REGISTRATION",
            Self::DuplicateScriptName(_) => "REGISTRY_DUPLICATE_SCRIPT_NAME",
            Self::UnknownScript { .. } => "REGISTRY_UNKNOWN_SCRIPT",
        }
    }
}

/// Errors returned when the host drives a cast's hooks incorrectly.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum DispatchError {
    /// A lifecycle stage was dispatched at or before the last dispatched stage.
    #[error("{spell}: {stage:?} dispatched after {after:?}")]
    OutOfOrder {
        spell: SpellId,
        stage: LifecycleStage,
        after: LifecycleStage,
    },
}

impl ScriptFault for DispatchError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Internal
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::OutOfOrder { .. } => "DISPATCH_OUT_OF_ORDER",
        }
    }
}

/// Reasons the casting subsystem refused an internally generated application.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CastFailure {
    #[error("{0} is not a known ability")]
    UnknownSpell(SpellId),

    #[error("caster cannot act")]
    CasterUnavailable,

    #[error("no valid target")]
    BadTarget,

    #[error("not enough resources")]
    NoPower,

    #[error("cast refused: {0}")]
    Refused(String),
}

impl ScriptFault for CastFailure {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::UnknownSpell(_) => ErrorSeverity::Internal,
            Self::CasterUnavailable | Self::BadTarget | Self::NoPower => {
                ErrorSeverity::Recoverable
            }
            Self::Refused(_) => ErrorSeverity::Validation,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::UnknownSpell(_) => "CAST_UNKNOWN_SPELL",
            Self::CasterUnavailable => "CAST_CASTER_UNAVAILABLE",
            Self::BadTarget => "CAST_BAD_TARGET",
            Self::NoPower => "CAST_NO_POWER",
            Self::Refused(_) => "CAST_REFUSED",
        }
    }
}
