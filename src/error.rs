//! Error types

extern crate alloc;
use alloc::string::String;

/// Failure to parse an [`Algorithm`](crate::Algorithm) from its name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseAlgorithmError {
    #[error("unknown search algorithm `{0}` (expected boyer-moore, kmp or rabin-karp)")]
    Unknown(String),
}
