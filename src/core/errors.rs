/*!
 * Error Types
 * Closed-handle sentinel and delegate pass-through with thiserror, miette, and serde support
 */

use miette::Diagnostic;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type for every handle operation
pub type AdsiResult<T> = Result<T, AdsiError>;

/// Error reported by a wrapped directory interface
///
/// Carries the HRESULT-style status code and message exactly as the
/// interface produced them. This layer never inspects or rewrites either.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Diagnostic)]
#[error("directory interface error 0x{code:08X}: {message}")]
#[diagnostic(code(adsi::delegate))]
pub struct DelegateError {
    pub code: i32,
    pub message: String,
}

impl DelegateError {
    /// Unspecified failure (`E_FAIL`)
    pub const E_FAIL: i32 = 0x8000_4005_u32 as i32;
    /// The ADs path could not be parsed (`E_ADS_BAD_PATHNAME`)
    pub const E_ADS_BAD_PATHNAME: i32 = 0x8000_5000_u32 as i32;
    /// The property is not set on the object (`E_ADS_PROPERTY_NOT_FOUND`)
    pub const E_ADS_PROPERTY_NOT_FOUND: i32 = 0x8000_500D_u32 as i32;

    #[inline]
    pub fn new(code: i32, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    /// The interface's status code
    #[inline]
    pub fn hresult(&self) -> i32 {
        self.code
    }

    #[inline]
    pub fn message(&self) -> &str {
        &self.message
    }
}

/// Unified error type for handles, the runtime bridge, and value conversion
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Diagnostic)]
#[serde(tag = "error_type", content = "details", rename_all = "snake_case")]
pub enum AdsiError {
    #[error("handle is closed")]
    #[diagnostic(
        code(adsi::closed),
        help("The handle was released with close(). Open a new handle to keep reading.")
    )]
    Closed,

    #[error(transparent)]
    #[diagnostic(transparent)]
    Delegate(#[from] DelegateError),

    #[error("type mismatch: expected {expected}, found {found}")]
    #[diagnostic(
        code(adsi::type_mismatch),
        help("The attribute holds a different variant type. Read it with get() and match on it.")
    )]
    TypeMismatch { expected: String, found: String },

    #[error("runtime bridge error: {0}")]
    #[diagnostic(
        code(adsi::runtime),
        help("The COM runtime could not be initialized for this process.")
    )]
    Runtime(String),
}

impl AdsiError {
    #[inline]
    pub fn is_closed(&self) -> bool {
        matches!(self, AdsiError::Closed)
    }

    /// The delegate's own error, if this is a pass-through failure
    #[inline]
    pub fn delegate(&self) -> Option<&DelegateError> {
        match self {
            AdsiError::Delegate(err) => Some(err),
            _ => None,
        }
    }

    pub(crate) fn type_mismatch(expected: &str, found: &str) -> Self {
        AdsiError::TypeMismatch {
            expected: expected.to_string(),
            found: found.to_string(),
        }
    }
}
