use crate::{EntropyError, EntropySource, Result};

/// An [`EntropySource`] backed by the operating system's preferred
/// cryptographic random number generator.
///
/// The request is delegated to the platform boundary via `getrandom`:
/// `getrandom(2)` on Linux, `SecRandomCopyBytes` on Apple platforms,
/// `BCryptGenRandom` with the system-preferred flag on Windows. Arbitrary
/// buffer lengths are supported.
///
/// A single call is issued per request; a non-success status from the OS is
/// reported as [`EntropyError::Unavailable`] and any retry policy belongs to
/// the caller.
///
/// This type is a zero-sized handle and does not store generator state; it
/// may be freely copied and used across threads.
#[derive(Default, Clone, Copy, Debug)]
pub struct SystemRandom;

impl EntropySource for SystemRandom {
    fn fill(&self, dest: &mut [u8]) -> Result<()> {
        getrandom::fill(dest).map_err(|_e| {
            #[cfg(feature = "tracing")]
            tracing::debug!(error = %_e, "system rng returned a non-success status");
            EntropyError::Unavailable {
                source_name: "system",
            }
        })
    }
}
