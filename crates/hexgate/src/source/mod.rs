mod config;
mod interface;
#[cfg(feature = "rand")]
mod rng;
mod stream;

pub use config::*;
pub use interface::*;
pub use stream::*;
