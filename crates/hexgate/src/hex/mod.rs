mod bits;
mod codec;
mod error;

pub use bits::*;
pub use codec::*;
pub use error::*;
