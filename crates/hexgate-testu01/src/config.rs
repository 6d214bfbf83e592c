use core::num::NonZeroUsize;

use anyhow::bail;
use clap::{ArgGroup, Parser};
use hexgate::{AdapterConfig, DEFAULT_NAME, MAX_CAPACITY};

use crate::harness::Battery;

const LONG_ABOUT: &str = "\
Simulates a random number generator by reading generated numbers from stdin.

Each generated 32-bit number must be written to stdin as exactly 8 hex digits
(big-endian, upper or lower case) with no separator between numbers. Line
breaks are ignored.

Make sure to run the tests twice: once with and once without --reverse-bits,
since many tests only look at the most significant bits.";

#[cfg(not(feature = "testu01"))]
const NOT_LINKED: &str = "\
Note: this binary was built without the `testu01` feature and cannot run any
battery. Rebuild with `cargo build --features testu01`.";

/// Runtime configuration for the `hexgate-testu01` binary.
///
/// All values are parsed from CLI arguments or environment variables (a
/// `.env` file is loaded first).
#[derive(Parser, Debug, Clone)]
#[command(
    name = "hexgate-testu01",
    version,
    about = "Runs TestU01 batteries on hex-encoded 32-bit words read from stdin",
    long_about = LONG_ABOUT,
    group(ArgGroup::new("battery").args(["small_crush", "crush", "big_crush"]))
)]
#[cfg_attr(not(feature = "testu01"), command(after_help = NOT_LINKED))]
pub struct CliArgs {
    /// Name of the random number generator, used in the final report.
    ///
    /// Environment variable: `RNG_NAME`
    #[arg(long, env = "RNG_NAME", default_value_t = String::from(DEFAULT_NAME))]
    pub name: String,

    /// Run the SmallCrush battery.
    #[arg(short = 's', long)]
    pub small_crush: bool,

    /// Run the Crush battery (default).
    #[arg(short = 'c', long)]
    pub crush: bool,

    /// Run the BigCrush battery.
    #[arg(short = 'b', long)]
    pub big_crush: bool,

    /// Reverse the bits of each decoded 32-bit integer (bit 0 is swapped with
    /// bit 31, bit 1 with bit 30, ...).
    ///
    /// Environment variable: `REVERSE_BITS`
    #[arg(short = 'r', long, env = "REVERSE_BITS", default_value_t = false)]
    pub reverse_bits: bool,

    /// Number of words decoded per read from stdin (at most 16777216).
    ///
    /// Environment variable: `BUFFER_WORDS`
    #[arg(long, env = "BUFFER_WORDS", default_value_t = 256)]
    pub buffer_words: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GatewayConfig {
    pub name: String,
    pub battery: Battery,
    pub reverse_bits: bool,
    pub buffer_words: NonZeroUsize,
}

impl GatewayConfig {
    pub fn adapter_config(&self) -> AdapterConfig {
        AdapterConfig::new(self.name.clone())
            .with_reverse_bits(self.reverse_bits)
            .with_capacity(self.buffer_words)
    }
}

impl TryFrom<CliArgs> for GatewayConfig {
    type Error = anyhow::Error;

    fn try_from(args: CliArgs) -> Result<Self, Self::Error> {
        let Some(buffer_words) = NonZeroUsize::new(args.buffer_words) else {
            bail!("BUFFER_WORDS must be greater than 0");
        };
        if buffer_words.get() > MAX_CAPACITY {
            bail!("BUFFER_WORDS must be at most {MAX_CAPACITY}, got {buffer_words}");
        }

        if args.name.contains('\0') {
            bail!("RNG_NAME must not contain NUL bytes");
        }

        let battery = if args.small_crush {
            Battery::SmallCrush
        } else if args.big_crush {
            Battery::BigCrush
        } else {
            Battery::Crush
        };

        Ok(Self {
            name: args.name,
            battery,
            reverse_bits: args.reverse_bits,
            buffer_words,
        })
    }
}
