//! # solpack
//!
//! Solidity tight packing (`abi.encodePacked`) and the digests computed over it.
//!
//! ```
//! use solpack::{keccak256_packed, Value};
//! use alloy_primitives::Address;
//!
//! let hash = keccak256_packed(
//!     &["address", "uint256", "string"],
//!     &[Address::ZERO.into(), 1u8.into(), Value::from("hello")],
//! )?;
//! # let _ = hash;
//! # Ok::<_, solpack::Error>(())
//! ```

#![cfg_attr(not(test), warn(unused_crate_dependencies))]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[macro_use]
extern crate tracing;

pub mod coerce;
pub mod decode;
pub mod utf8;

mod encode;
mod error;
mod hash;
mod pack;
mod ty;
mod value;

pub use coerce::{coerce_value, parse_signature};
pub use decode::{decode_packed, decode_packed_typed};
pub use encode::{encode_packed, encode_packed_hex, encode_packed_typed};
pub use error::{Error, ErrorKind, Result};
pub use hash::{HashKind, digest, digest_typed, digest_with, keccak256_packed, sha256_packed};
pub use pack::{Context, pack, pack_value};
pub use ty::{PackedType, WORD_SIZE};
pub use utf8::{NormalizationForm, to_utf8_bytes};
pub use value::Value;
