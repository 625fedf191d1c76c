//! Type-directed packing of a single value.

use crate::{
    Error, PackedType, Result, Value, WORD_SIZE,
    utf8::{self, NormalizationForm},
};
use alloy_primitives::{I256, U256};

/// Where a value is being packed.
///
/// Solidity widens every element of an array to a full word, which is not the case for the
/// same type packed on its own.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Context {
    /// A top-level element of the packed list.
    #[default]
    TopLevel,
    /// An element of a `T[K]` or `T[]` value.
    ArrayElement,
}

impl Context {
    /// Returns `true` for [`Context::ArrayElement`].
    pub const fn is_array_element(self) -> bool {
        matches!(self, Self::ArrayElement)
    }
}

/// Packs a single value as `ty` at the top level.
pub fn pack(ty: &PackedType, value: &Value) -> Result<Vec<u8>> {
    let mut out = Vec::new();
    pack_value(ty, value, Context::TopLevel, &mut out)?;
    Ok(out)
}

/// Appends the packed encoding of `value` as `ty` in `ctx` to `out`.
///
/// On error `out` may contain a partial encoding.
pub fn pack_value(ty: &PackedType, value: &Value, ctx: Context, out: &mut Vec<u8>) -> Result<()> {
    match ty {
        PackedType::Address => {
            let Value::Address(address) = value else { return Err(mismatch(ty, value)) };
            if ctx.is_array_element() {
                out.extend_from_slice(&[0; WORD_SIZE - 20]);
            }
            out.extend_from_slice(address.as_slice());
        }
        PackedType::String => match value {
            Value::String(s) => out.extend(utf8::to_utf8_bytes(s)?),
            Value::Utf16(units) => {
                out.extend(utf8::encode_utf16(units.iter().copied(), NormalizationForm::Current)?)
            }
            _ => return Err(mismatch(ty, value)),
        },
        PackedType::Bytes => {
            let Value::Bytes(bytes) = value else { return Err(mismatch(ty, value)) };
            out.extend_from_slice(bytes);
        }
        PackedType::Bool => {
            let &Value::Bool(b) = value else { return Err(mismatch(ty, value)) };
            if ctx.is_array_element() {
                out.extend_from_slice(&[0; WORD_SIZE - 1]);
            }
            out.push(b as u8);
        }
        &PackedType::Int { bits, signed } => {
            let word = int_word(ty, value, bits, signed)?;
            let size = if ctx.is_array_element() { WORD_SIZE } else { bits / 8 };
            out.extend_from_slice(&word[WORD_SIZE - size..]);
        }
        &PackedType::FixedBytes(size) => {
            let Value::Bytes(bytes) = value else { return Err(mismatch(ty, value)) };
            if bytes.len() != size {
                return Err(Error::invalid_value(
                    ty,
                    format!("expected {size} bytes, got {}", bytes.len()),
                ));
            }
            out.extend_from_slice(bytes);
            if ctx.is_array_element() {
                out.resize(out.len() + WORD_SIZE - size, 0);
            }
        }
        PackedType::Array { element, len } => {
            let Value::Array(values) = value else { return Err(mismatch(ty, value)) };
            if let Some(len) = *len
                && len != values.len()
            {
                return Err(Error::invalid_value(
                    ty,
                    format!("expected {len} elements, got {}", values.len()),
                ));
            }
            for (i, value) in values.iter().enumerate() {
                pack_value(element, value, Context::ArrayElement, out)
                    .map_err(|err| err.at(i, element.to_string()))?;
            }
        }
    }
    Ok(())
}

/// Returns the 256-bit two's complement word of an integer value, after checking that it fits
/// in the declared width.
fn int_word(ty: &PackedType, value: &Value, bits: usize, signed: bool) -> Result<[u8; WORD_SIZE]> {
    let (fits, raw) = match *value {
        Value::Uint(n) => (n.bit_len() <= if signed { bits - 1 } else { bits }, n),
        Value::Int(n) if signed => (fits_signed(n, bits), n.into_raw()),
        Value::Int(n) => (!n.is_negative() && n.into_raw().bit_len() <= bits, n.into_raw()),
        _ => return Err(mismatch(ty, value)),
    };
    if !fits {
        return Err(Error::invalid_value(ty, format!("{value} is out of range")));
    }
    Ok(raw.to_be_bytes::<WORD_SIZE>())
}

/// Returns `true` if `n` is representable as a `bits`-wide two's complement integer, that is
/// if everything above bit `bits - 1` is a copy of the sign bit.
pub(crate) fn fits_signed(n: I256, bits: usize) -> bool {
    if bits >= 256 {
        return true;
    }
    let high = n.into_raw() >> (bits - 1);
    high.is_zero() || high == U256::MAX >> (bits - 1)
}

fn mismatch(ty: &PackedType, value: &Value) -> Error {
    Error::invalid_value(ty, format!("expected {}, got {}", expected(ty), value.kind_name()))
}

const fn expected(ty: &PackedType) -> &'static str {
    match ty {
        PackedType::Address => "an address",
        PackedType::String => "a string",
        PackedType::Bytes | PackedType::FixedBytes(_) => "bytes",
        PackedType::Bool => "a bool",
        PackedType::Int { .. } => "an integer",
        PackedType::Array { .. } => "an array",
    }
}
