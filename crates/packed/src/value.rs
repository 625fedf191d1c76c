use alloy_primitives::{Address, Bytes, FixedBytes, I256, U256};
use std::fmt;

/// A value to be packed against a [`PackedType`](crate::PackedType).
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Value {
    /// A 20-byte address, for `address`.
    Address(Address),
    /// A boolean, for `bool`.
    Bool(bool),
    /// An unsigned integer, for `uintN` and non-negative `intN` values.
    Uint(U256),
    /// A signed integer, for `intN` and non-negative `uintN` values.
    Int(I256),
    /// Raw bytes, for `bytes` and `bytesN`.
    Bytes(Bytes),
    /// Text, for `string`.
    String(String),
    /// Text as raw UTF-16 code units, for `string`. May contain unpaired surrogates.
    Utf16(Vec<u16>),
    /// A sequence of values, for `T[K]` and `T[]`.
    Array(Vec<Self>),
}

impl Value {
    /// Creates an array value from anything convertible into values.
    pub fn array<I, T>(values: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<Self>,
    {
        Self::Array(values.into_iter().map(Into::into).collect())
    }

    /// Returns a short name of the variant, used in error messages.
    pub const fn kind_name(&self) -> &'static str {
        match self {
            Self::Address(_) => "address",
            Self::Bool(_) => "bool",
            Self::Uint(_) => "unsigned integer",
            Self::Int(_) => "signed integer",
            Self::Bytes(_) => "bytes",
            Self::String(_) | Self::Utf16(_) => "string",
            Self::Array(_) => "array",
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Address(address) => address.fmt(f),
            Self::Bool(b) => b.fmt(f),
            Self::Uint(n) => n.fmt(f),
            Self::Int(n) => n.fmt(f),
            Self::Bytes(bytes) => bytes.fmt(f),
            Self::String(s) => write!(f, "{s:?}"),
            Self::Utf16(units) => write!(f, "{:?}", String::from_utf16_lossy(units)),
            Self::Array(values) => {
                f.write_str("[")?;
                for (i, value) in values.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    value.fmt(f)?;
                }
                f.write_str("]")
            }
        }
    }
}

impl From<Address> for Value {
    fn from(value: Address) -> Self {
        Self::Address(value)
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<U256> for Value {
    fn from(value: U256) -> Self {
        Self::Uint(value)
    }
}

impl From<I256> for Value {
    fn from(value: I256) -> Self {
        Self::Int(value)
    }
}

impl From<Bytes> for Value {
    fn from(value: Bytes) -> Self {
        Self::Bytes(value)
    }
}

impl From<Vec<u8>> for Value {
    fn from(value: Vec<u8>) -> Self {
        Self::Bytes(value.into())
    }
}

impl From<&[u8]> for Value {
    fn from(value: &[u8]) -> Self {
        Self::Bytes(Bytes::copy_from_slice(value))
    }
}

impl<const N: usize> From<[u8; N]> for Value {
    fn from(value: [u8; N]) -> Self {
        Self::Bytes(Bytes::copy_from_slice(&value))
    }
}

impl<const N: usize> From<FixedBytes<N>> for Value {
    fn from(value: FixedBytes<N>) -> Self {
        Self::Bytes(Bytes::copy_from_slice(value.as_slice()))
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Self::String(value.to_string())
    }
}

impl From<Vec<Self>> for Value {
    fn from(value: Vec<Self>) -> Self {
        Self::Array(value)
    }
}

macro_rules! impl_from_unsigned {
    ($($t:ty),*) => {
        $(
            impl From<$t> for Value {
                fn from(value: $t) -> Self {
                    Self::Uint(U256::from(value))
                }
            }
        )*
    };
}

macro_rules! impl_from_signed {
    ($($t:ty),*) => {
        $(
            impl From<$t> for Value {
                fn from(value: $t) -> Self {
                    Self::Int(i256_from_i128(value.into()))
                }
            }
        )*
    };
}

impl_from_unsigned!(u8, u16, u32, u64, u128, usize);
impl_from_signed!(i8, i16, i32, i64, i128);

/// Two's complement widening of an `i128`.
fn i256_from_i128(value: i128) -> I256 {
    let abs = U256::from(value.unsigned_abs());
    I256::from_raw(if value < 0 { U256::ZERO.wrapping_sub(abs) } else { abs })
}
