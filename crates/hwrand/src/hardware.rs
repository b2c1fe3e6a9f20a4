use crate::{EntropyError, EntropySource, Result};
use core::arch::x86_64::{_rdrand64_step, _rdseed64_step};

/// Number of attempts per 64-bit word before [`HardwareRandom::fill`]
/// reports failure. Transient exhaustion is expected for both instructions,
/// so a single attempt is too strict for buffer fills.
pub const DEFAULT_ATTEMPTS: usize = 10;

/// Which on-die generator instruction to issue.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum HwInstruction {
    /// `RDRAND`: output of the processor's DRBG, reseeded from the on-die
    /// entropy source.
    #[default]
    Rdrand,
    /// `RDSEED`: conditioned samples taken directly from the on-die entropy
    /// source. Exhausts more readily than `RDRAND` under contention.
    Rdseed,
}

impl HwInstruction {
    /// Whether the running CPU advertises this instruction.
    pub fn is_supported(self) -> bool {
        match self {
            Self::Rdrand => is_x86_feature_detected!("rdrand"),
            Self::Rdseed => is_x86_feature_detected!("rdseed"),
        }
    }

    /// Name used in diagnostics and error reporting.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Rdrand => "rdrand",
            Self::Rdseed => "rdseed",
        }
    }

    /// Issues the instruction once. Returns 1 if `word` now holds a valid
    /// value, 0 if the generator had nothing ready.
    ///
    /// # Safety
    ///
    /// The caller must have verified [`Self::is_supported`] on the running
    /// CPU; issuing the instruction on a CPU without the feature is
    /// undefined.
    unsafe fn step(self, word: &mut u64) -> i32 {
        unsafe {
            match self {
                Self::Rdrand => _rdrand64_step(word),
                Self::Rdseed => _rdseed64_step(word),
            }
        }
    }
}

/// An [`EntropySource`] that reads 64-bit words straight from the CPU's
/// random number instructions.
///
/// The instruction is selected at construction time. [`Self::try_word`]
/// issues exactly one instruction and surfaces a not-ready generator
/// immediately; [`EntropySource::fill`] retries each word up to the
/// configured attempt bound before giving up, since a failed attempt is
/// conventionally transient. Buffers longer than 8 bytes are composed from
/// successive words; the final word is truncated for lengths that are not a
/// multiple of the native word size.
///
/// Calls from independent threads share no state; the instruction itself is
/// safe to issue concurrently.
#[derive(Clone, Copy, Debug)]
pub struct HardwareRandom {
    instruction: HwInstruction,
    attempts: usize,
}

impl Default for HardwareRandom {
    fn default() -> Self {
        Self::new(HwInstruction::default())
    }
}

impl HardwareRandom {
    /// Creates a provider for `instruction` with [`DEFAULT_ATTEMPTS`].
    pub fn new(instruction: HwInstruction) -> Self {
        Self::with_attempts(instruction, DEFAULT_ATTEMPTS)
    }

    /// Creates a provider with an explicit per-word attempt bound.
    ///
    /// Values below 1 are treated as 1: every word is attempted at least
    /// once.
    pub fn with_attempts(instruction: HwInstruction, attempts: usize) -> Self {
        Self {
            instruction,
            attempts: attempts.max(1),
        }
    }

    /// The instruction this provider issues.
    pub fn instruction(&self) -> HwInstruction {
        self.instruction
    }

    /// Whether the running CPU advertises the configured instruction.
    pub fn is_supported(&self) -> bool {
        self.instruction.is_supported()
    }

    /// Issues exactly one instruction.
    ///
    /// Returns the word when the hardware reports its generator was ready,
    /// or [`EntropyError::Unavailable`] when it was not. No retry is
    /// performed here.
    pub fn try_word(&self) -> Result<u64> {
        if !self.is_supported() {
            return Err(self.unavailable());
        }
        let mut word = 0u64;
        // SAFETY: feature presence checked above.
        if unsafe { self.instruction.step(&mut word) } == 1 {
            Ok(word)
        } else {
            Err(self.unavailable())
        }
    }

    fn next_word(&self) -> Result<u64> {
        if !self.is_supported() {
            return Err(self.unavailable());
        }
        let mut word = 0u64;
        for _ in 0..self.attempts {
            // SAFETY: feature presence checked above.
            if unsafe { self.instruction.step(&mut word) } == 1 {
                return Ok(word);
            }
            core::hint::spin_loop();
        }
        #[cfg(feature = "tracing")]
        tracing::debug!(
            instruction = self.instruction.as_str(),
            attempts = self.attempts,
            "attempt bound exhausted without a valid word"
        );
        Err(self.unavailable())
    }

    fn unavailable(&self) -> EntropyError {
        EntropyError::Unavailable {
            source_name: self.instruction.as_str(),
        }
    }
}

impl EntropySource for HardwareRandom {
    fn fill(&self, dest: &mut [u8]) -> Result<()> {
        for chunk in dest.chunks_mut(8) {
            let bytes = self.next_word()?.to_be_bytes();
            chunk.copy_from_slice(&bytes[..chunk.len()]);
        }
        Ok(())
    }

    fn next_u64(&self) -> Result<u64> {
        self.next_word()
    }
}
