//! Status and confirmation messages.

use std::fmt;

/// A short status line for operations that produce no snapshot.
///
/// Used for notices such as "no plan selected" so every code path still
/// renders something through the same markdown pipeline.
pub struct OperationStatus {
    message: String,
    success: bool,
}

impl OperationStatus {
    /// Creates a success status message.
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            success: true,
        }
    }

    /// Creates a failure or notice status message.
    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            success: false,
        }
    }
}

impl fmt::Display for OperationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.success {
            writeln!(f, "✓ {}", self.message)
        } else {
            writeln!(f, "✗ {}", self.message)
        }
    }
}
