//! Digests over packed buffers.

use crate::{Error, PackedType, Result, Value, encode_packed, encode_packed_typed};
use alloy_primitives::{B256, keccak256};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::{fmt, str::FromStr};

/// A named digest algorithm.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HashKind {
    /// Keccak-256, as used by Solidity's `keccak256`.
    #[default]
    Keccak256,
    /// SHA-256, as used by Solidity's `sha256`.
    Sha256,
}

impl HashKind {
    /// Hashes `data` with this algorithm.
    pub fn hash(self, data: &[u8]) -> B256 {
        match self {
            Self::Keccak256 => keccak256(data),
            Self::Sha256 => B256::new(Sha256::digest(data).into()),
        }
    }

    /// Returns the lowercase name used in configuration and on the command line.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Keccak256 => "keccak256",
            Self::Sha256 => "sha256",
        }
    }
}

impl fmt::Display for HashKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for HashKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "keccak256" | "keccak" | "keccak-256" => Ok(Self::Keccak256),
            "sha256" | "sha-256" => Ok(Self::Sha256),
            _ => Err(Error::unsupported(format!("unknown hash function {s:?}"))),
        }
    }
}

/// Packs `values` and feeds the buffer to `hasher`.
///
/// This lets callers plug in any digest without the packer knowing about it.
pub fn digest_with<S, F, O>(hasher: F, types: &[S], values: &[Value]) -> Result<O>
where
    S: AsRef<str>,
    F: FnOnce(&[u8]) -> O,
{
    encode_packed(types, values).map(|packed| hasher(&packed))
}

/// Packs `values` and hashes the buffer with `kind`.
pub fn digest<S: AsRef<str>>(kind: HashKind, types: &[S], values: &[Value]) -> Result<B256> {
    let hash = digest_with(|data| kind.hash(data), types, values)?;
    trace!(target: "solpack::hash", %kind, %hash, "digest");
    Ok(hash)
}

/// Same as [`digest`] with already parsed types.
pub fn digest_typed(kind: HashKind, types: &[PackedType], values: &[Value]) -> Result<B256> {
    let hash = kind.hash(&encode_packed_typed(types, values)?);
    trace!(target: "solpack::hash", %kind, %hash, "digest");
    Ok(hash)
}

/// Solidity's `keccak256(abi.encodePacked(...))`.
pub fn keccak256_packed<S: AsRef<str>>(types: &[S], values: &[Value]) -> Result<B256> {
    digest(HashKind::Keccak256, types, values)
}

/// Solidity's `sha256(abi.encodePacked(...))`.
pub fn sha256_packed<S: AsRef<str>>(types: &[S], values: &[Value]) -> Result<B256> {
    digest(HashKind::Sha256, types, values)
}
