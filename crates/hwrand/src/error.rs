//! Error types for entropy acquisition.
//!
//! There is exactly one failure kind: the underlying primitive could not
//! produce a value. The OS accessor surfaces it when the platform call
//! returns a non-success status; the instruction accessor surfaces it when
//! the hardware reports no value was ready within the attempt bound.

pub type Result<T> = core::result::Result<T, EntropyError>;

/// Unified error type for entropy acquisition.
///
/// On failure the destination buffer's contents are unspecified and must not
/// be treated as entropy.
#[derive(Clone, thiserror::Error, Debug, PartialEq, Eq)]
#[non_exhaustive]
pub enum EntropyError {
    /// The source could not produce a value on this request.
    #[error("entropy source unavailable: {source_name}")]
    Unavailable {
        /// Which provider failed (`"system"`, `"rdrand"`, `"rdseed"`).
        source_name: &'static str,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_names_the_failed_source() {
        let err = EntropyError::Unavailable {
            source_name: "rdrand",
        };
        assert_eq!(err.to_string(), "entropy source unavailable: rdrand");
    }
}
