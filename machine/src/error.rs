//! Unified machine error.

use stecker_kernel::error::{ConfigurationError, EncodingError};

/// Error returned by encode and trace calls, which can fail either because
/// the machine is not ready or because the input is bad.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MachineError {
    #[error(transparent)]
    Configuration(#[from] ConfigurationError),

    #[error(transparent)]
    Encoding(#[from] EncodingError),
}
