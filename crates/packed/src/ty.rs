//! Type descriptors understood by the packer.

use crate::{Error, Result};
use std::{fmt, str::FromStr};

/// Width of an array slot in the packed encoding.
pub const WORD_SIZE: usize = 32;

/// A parsed Solidity type descriptor.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum PackedType {
    /// `address`
    Address,
    /// `string`
    String,
    /// `bytes`
    Bytes,
    /// `bool`
    Bool,
    /// `uintN` / `intN`
    Int {
        /// Width in bits, a multiple of 8 in `8..=256`.
        bits: usize,
        /// Whether the type is `intN` rather than `uintN`.
        signed: bool,
    },
    /// `bytesN`, with `N` in `1..=32`.
    FixedBytes(usize),
    /// `T[K]` or `T[]`
    Array {
        /// The element type.
        element: Box<Self>,
        /// The declared element count, `None` for `T[]`.
        len: Option<usize>,
    },
}

impl FromStr for PackedType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl fmt::Display for PackedType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Address => f.write_str("address"),
            Self::String => f.write_str("string"),
            Self::Bytes => f.write_str("bytes"),
            Self::Bool => f.write_str("bool"),
            Self::Int { bits, signed: true } => write!(f, "int{bits}"),
            Self::Int { bits, signed: false } => write!(f, "uint{bits}"),
            Self::FixedBytes(size) => write!(f, "bytes{size}"),
            Self::Array { element, len: Some(len) } => write!(f, "{element}[{len}]"),
            Self::Array { element, len: None } => write!(f, "{element}[]"),
        }
    }
}

impl PackedType {
    /// Parses a type descriptor such as `uint256`, `bytes4` or `address[3]`.
    ///
    /// Literal names are matched first, then the integer shape, the fixed-bytes shape and
    /// finally the array shape. Bare `uint` and `int` are 256 bits wide.
    pub fn parse(s: &str) -> Result<Self> {
        match s {
            "address" => return Ok(Self::Address),
            "string" => return Ok(Self::String),
            "bytes" => return Ok(Self::Bytes),
            "bool" => return Ok(Self::Bool),
            _ => {}
        }

        if let Some((signed, digits)) = int_shape(s) {
            return Self::parse_int(s, signed, digits);
        }

        if let Some(digits) = s.strip_prefix("bytes").filter(|d| is_digits(d)) {
            return Self::parse_fixed_bytes(s, digits);
        }

        if let Some((base, digits)) = array_shape(s) {
            let len = if digits.is_empty() {
                None
            } else {
                let len = digits
                    .parse()
                    .map_err(|_| Error::invalid_type(s, format!("invalid array length {digits}")))?;
                Some(len)
            };
            let element = Self::parse(base).map_err(|err| match err {
                Error::UnknownType(_) => Error::UnknownType(s.to_string()),
                err => err,
            })?;
            return Ok(Self::Array { element: Box::new(element), len });
        }

        Err(Error::UnknownType(s.to_string()))
    }

    fn parse_int(s: &str, signed: bool, digits: &str) -> Result<Self> {
        let bits = if digits.is_empty() {
            256
        } else {
            digits.parse().map_err(|_| Error::invalid_type(s, "invalid number type"))?
        };
        if bits == 0 || bits % 8 != 0 || bits > 256 {
            return Err(Error::invalid_type(s, "invalid number type"));
        }
        Ok(Self::Int { bits, signed })
    }

    fn parse_fixed_bytes(s: &str, digits: &str) -> Result<Self> {
        let size: usize = digits.parse().map_err(|_| Error::invalid_type(s, "invalid bytes type"))?;
        // `bytes05` and friends are not canonical Solidity names.
        if size.to_string() != digits || size == 0 || size > WORD_SIZE {
            return Err(Error::invalid_type(s, "invalid bytes type"));
        }
        Ok(Self::FixedBytes(size))
    }

    /// Returns `true` if the encoded length depends on the value rather than the type.
    pub fn is_dynamic(&self) -> bool {
        match self {
            Self::String | Self::Bytes => true,
            Self::Array { element, len } => len.is_none() || element.is_dynamic(),
            Self::Address | Self::Bool | Self::Int { .. } | Self::FixedBytes(_) => false,
        }
    }

    /// Returns the number of bytes the type occupies when packed in `ctx`.
    ///
    /// Returns `None` if the type is dynamic or if its declared array lengths describe more
    /// bytes than fit in a `usize`.
    pub fn packed_size(&self, ctx: crate::Context) -> Option<usize> {
        if ctx.is_array_element() && !self.is_dynamic() && !self.is_array() {
            return Some(WORD_SIZE);
        }
        match self {
            Self::Address => Some(20),
            Self::Bool => Some(1),
            Self::Int { bits, .. } => Some(bits / 8),
            Self::FixedBytes(size) => Some(*size),
            Self::Array { element, len: Some(len) } => {
                element.packed_size(crate::Context::ArrayElement)?.checked_mul(*len)
            }
            Self::String | Self::Bytes | Self::Array { len: None, .. } => None,
        }
    }

    /// Returns `true` for `T[K]` and `T[]`.
    pub const fn is_array(&self) -> bool {
        matches!(self, Self::Array { .. })
    }
}

/// Splits `(u)int<digits>` into signedness and the (possibly empty) width digits.
fn int_shape(s: &str) -> Option<(bool, &str)> {
    let (signed, digits) = match s.strip_prefix("uint") {
        Some(digits) => (false, digits),
        None => (true, s.strip_prefix("int")?),
    };
    is_digits(digits).then_some((signed, digits))
}

/// Splits `<base>[<digits>]` at the last opening bracket.
fn array_shape(s: &str) -> Option<(&str, &str)> {
    let inner = s.strip_suffix(']')?;
    let open = inner.rfind('[')?;
    let digits = &inner[open + 1..];
    is_digits(digits).then_some((&inner[..open], digits))
}

fn is_digits(s: &str) -> bool {
    s.bytes().all(|b| b.is_ascii_digit())
}
