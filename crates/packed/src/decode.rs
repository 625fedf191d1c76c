//! Unpacking of statically sized packed buffers.
//!
//! The packed encoding does not record the length of dynamic values, so only lists made
//! exclusively of static types can be unpacked. Anything else is rejected with
//! [`Error::UnsupportedOperation`].

use crate::{Context, Error, PackedType, Result, Value, WORD_SIZE, pack::fits_signed};
use alloy_primitives::{Address, Bytes, I256, U256};

const PACKED_DATA: &str = "packed data";

/// Unpacks `data` according to the parallel list of static type descriptors.
pub fn decode_packed<S: AsRef<str>>(types: &[S], data: &[u8]) -> Result<Vec<Value>> {
    let types = types
        .iter()
        .enumerate()
        .map(|(index, ty)| PackedType::parse(ty.as_ref()).map_err(|err| err.at(index, ty.as_ref())))
        .collect::<Result<Vec<_>>>()?;
    decode_packed_typed(&types, data)
}

/// Same as [`decode_packed`] with already parsed types.
pub fn decode_packed_typed(types: &[PackedType], data: &[u8]) -> Result<Vec<Value>> {
    let mut expected = 0usize;
    for (index, ty) in types.iter().enumerate() {
        let size = static_size(ty).map_err(|err| err.at(index, ty.to_string()))?;
        expected = expected.checked_add(size).ok_or_else(|| {
            Error::invalid_value(PACKED_DATA, "total size of the types overflows")
        })?;
    }
    if data.len() != expected {
        return Err(Error::invalid_value(
            PACKED_DATA,
            format!("expected {expected} bytes, got {}", data.len()),
        ));
    }

    let mut data = data;
    types
        .iter()
        .enumerate()
        .map(|(index, ty)| {
            decode_value(ty, &mut data, Context::TopLevel)
                .map_err(|err| err.at(index, ty.to_string()))
        })
        .collect()
}

fn static_size(ty: &PackedType) -> Result<usize> {
    if ty.is_dynamic() {
        return Err(Error::unsupported(format!(
            "cannot unpack dynamic type {ty}, its length is not encoded"
        )));
    }
    ty.packed_size(Context::TopLevel)
        .ok_or_else(|| Error::invalid_type(ty.to_string(), "packed size overflows"))
}

fn decode_value(ty: &PackedType, data: &mut &[u8], ctx: Context) -> Result<Value> {
    if let PackedType::Array { element, len } = ty {
        let len = len.ok_or_else(|| Error::unsupported(format!("cannot unpack {ty}")))?;
        return (0..len)
            .map(|i| {
                decode_value(element, data, Context::ArrayElement)
                    .map_err(|err| err.at(i, element.to_string()))
            })
            .collect::<Result<Vec<_>>>()
            .map(Value::Array);
    }

    let size = ty
        .packed_size(ctx)
        .ok_or_else(|| Error::unsupported(format!("cannot unpack dynamic type {ty}")))?;
    let (field, rest) = data
        .split_at_checked(size)
        .ok_or_else(|| Error::invalid_value(PACKED_DATA, "unexpected end of data"))?;
    *data = rest;

    match *ty {
        PackedType::Address => {
            let (padding, address) = field.split_at(size - 20);
            check_zero(ty, padding)?;
            Ok(Value::Address(Address::from_slice(address)))
        }
        PackedType::Bool => {
            let (padding, byte) = field.split_at(size - 1);
            check_zero(ty, padding)?;
            match byte[0] {
                0 => Ok(Value::Bool(false)),
                1 => Ok(Value::Bool(true)),
                b => Err(Error::invalid_value(ty, format!("invalid bool byte {b:#04x}"))),
            }
        }
        PackedType::Int { bits, signed } => {
            let negative = signed && field[0] & 0x80 != 0;
            let mut word = if negative { [0xff; WORD_SIZE] } else { [0; WORD_SIZE] };
            word[WORD_SIZE - size..].copy_from_slice(field);
            let raw = U256::from_be_bytes(word);
            let out_of_range = || Error::invalid_value(ty, format!("{raw:#x} is out of range"));
            if signed {
                let n = I256::from_raw(raw);
                fits_signed(n, bits).then_some(Value::Int(n)).ok_or_else(out_of_range)
            } else {
                (raw.bit_len() <= bits).then_some(Value::Uint(raw)).ok_or_else(out_of_range)
            }
        }
        PackedType::FixedBytes(len) => {
            let (bytes, padding) = field.split_at(len);
            check_zero(ty, padding)?;
            Ok(Value::Bytes(Bytes::copy_from_slice(bytes)))
        }
        PackedType::String | PackedType::Bytes | PackedType::Array { .. } => {
            Err(Error::unsupported(format!("cannot unpack dynamic type {ty}")))
        }
    }
}

fn check_zero(ty: &PackedType, padding: &[u8]) -> Result<()> {
    if padding.iter().any(|b| *b != 0) {
        return Err(Error::invalid_value(ty, "non-zero padding"));
    }
    Ok(())
}
