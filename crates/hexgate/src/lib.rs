#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg))]

mod error;
mod fatal;
#[cfg(feature = "ffi")]
pub mod ffi;
mod hex;
mod source;

pub use crate::error::*;
pub use crate::fatal::*;
pub use crate::hex::*;
pub use crate::source::*;
