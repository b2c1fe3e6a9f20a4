use anyhow::bail;
use clap::{Parser, ValueEnum};

/// Upper bound on a single sample request, enforced to keep one invocation
/// from pinning the entropy source or allocating unbounded memory.
pub const MAX_SAMPLE_BYTES: usize = 1024 * 1024;

/// Runtime configuration for the `hwrand` binary.
///
/// The entropy source is selected here rather than hardcoded per program, so
/// the same binary covers the OS-preferred generator and both x86_64
/// instructions. All values are parsed from CLI arguments or environment
/// variables, with defaults matching the classic 64-bit sample.
#[derive(Parser, Debug, Clone)]
#[command(
    name = "hwrand",
    version,
    about = "Acquire hardware- or OS-sourced random bytes and print them as hex"
)]
pub struct CliArgs {
    /// Entropy source to query.
    ///
    /// `system` asks the operating system's preferred cryptographic
    /// generator. `rdrand` and `rdseed` issue the corresponding CPU
    /// instruction directly and require an x86_64 host.
    ///
    /// Environment variable: `HWRAND_SOURCE`
    #[arg(long, env = "HWRAND_SOURCE", value_enum, default_value_t = SourceKind::System)]
    pub source: SourceKind,

    /// Number of random bytes to acquire.
    ///
    /// The system source supports arbitrary lengths. The instruction sources
    /// produce native 64-bit words and compose them for longer requests.
    ///
    /// Environment variable: `HWRAND_BYTES`
    #[arg(long, env = "HWRAND_BYTES", default_value_t = 8)]
    pub bytes: usize,

    /// Attempts per 64-bit word before an instruction source reports
    /// failure.
    ///
    /// A not-ready generator is expected transient behavior for RDRAND and
    /// RDSEED, so single words are retried up to this bound. Ignored by the
    /// system source, which issues exactly one OS call.
    ///
    /// Environment variable: `HWRAND_ATTEMPTS`
    #[arg(long, env = "HWRAND_ATTEMPTS", default_value_t = 10)]
    pub attempts: usize,
}

/// The provider behind one acquisition.
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum SourceKind {
    /// The OS-preferred cryptographic generator.
    System,
    /// The CPU's DRBG output instruction.
    Rdrand,
    /// The CPU's conditioned entropy sample instruction.
    Rdseed,
}

impl SourceKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::System => "system",
            Self::Rdrand => "rdrand",
            Self::Rdseed => "rdseed",
        }
    }
}

// clap renders the default through `Display`, so this must match the
// `ValueEnum` spelling.
impl std::fmt::Display for SourceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub source: SourceKind,
    pub bytes: usize,
    pub attempts: usize,
}

impl TryFrom<CliArgs> for Config {
    type Error = anyhow::Error;

    fn try_from(args: CliArgs) -> Result<Self, Self::Error> {
        if args.bytes == 0 {
            bail!("HWRAND_BYTES must be greater than 0");
        }

        if args.bytes > MAX_SAMPLE_BYTES {
            bail!(
                "HWRAND_BYTES ({}) exceeds the maximum sample size (max = {})",
                args.bytes,
                MAX_SAMPLE_BYTES
            );
        }

        if args.attempts == 0 {
            bail!("HWRAND_ATTEMPTS must be greater than 0");
        }

        #[cfg(not(target_arch = "x86_64"))]
        if matches!(args.source, SourceKind::Rdrand | SourceKind::Rdseed) {
            bail!(
                "HWRAND_SOURCE '{}' requires an x86_64 host",
                args.source.as_str()
            );
        }

        Ok(Self {
            source: args.source,
            bytes: args.bytes,
            attempts: args.attempts,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    fn parse(argv: &[&str]) -> CliArgs {
        CliArgs::parse_from([&["hwrand"], argv].concat())
    }

    #[test]
    fn defaults_describe_one_64_bit_sample() {
        let config = Config::try_from(parse(&[])).unwrap();
        assert_eq!(config.source, SourceKind::System);
        assert_eq!(config.bytes, 8);
        assert_eq!(config.attempts, 10);
    }

    #[test]
    fn source_names_round_trip() {
        for (name, kind) in [
            ("system", SourceKind::System),
            ("rdrand", SourceKind::Rdrand),
            ("rdseed", SourceKind::Rdseed),
        ] {
            let args = parse(&["--source", name]);
            assert_eq!(args.source, kind);
            assert_eq!(kind.as_str(), name);
        }
    }

    #[test]
    fn rejects_zero_bytes() {
        assert!(Config::try_from(parse(&["--bytes", "0"])).is_err());
    }

    #[test]
    fn rejects_oversized_samples() {
        let argv = ["--bytes", "1048577"];
        assert!(Config::try_from(parse(&argv)).is_err());
    }

    #[test]
    fn rejects_zero_attempts() {
        assert!(Config::try_from(parse(&["--attempts", "0"])).is_err());
    }
}
