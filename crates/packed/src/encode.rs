//! Packing of whole type/value lists.

use crate::{Context, Error, PackedType, Result, Value, pack::pack_value};
use alloy_primitives::hex;

/// Packs `values` against the parallel list of type descriptors, like Solidity's
/// `abi.encodePacked`.
///
/// # Examples
///
/// ```
/// use solpack::{encode_packed, Value};
///
/// let values: [Value; 3] = [255u8.into(), true.into(), false.into()];
/// let packed = encode_packed(&["uint8", "bool", "bool"], &values)?;
/// assert_eq!(packed, [0xff, 0x01, 0x00]);
/// # Ok::<_, solpack::Error>(())
/// ```
pub fn encode_packed<S: AsRef<str>>(types: &[S], values: &[Value]) -> Result<Vec<u8>> {
    check_lengths(types.len(), values.len())?;
    let mut out = Vec::new();
    for (index, (ty, value)) in types.iter().zip(values).enumerate() {
        let ty = ty.as_ref();
        PackedType::parse(ty)
            .and_then(|parsed| pack_element(&parsed, value, &mut out))
            .map_err(|err| err.at(index, ty))?;
    }
    trace!(target: "solpack::encode", elements = types.len(), len = out.len(), "packed");
    Ok(out)
}

/// Same as [`encode_packed`] with already parsed types.
pub fn encode_packed_typed(types: &[PackedType], values: &[Value]) -> Result<Vec<u8>> {
    check_lengths(types.len(), values.len())?;
    let mut out = Vec::new();
    for (index, (ty, value)) in types.iter().zip(values).enumerate() {
        pack_element(ty, value, &mut out).map_err(|err| err.at(index, ty.to_string()))?;
    }
    Ok(out)
}

/// Same as [`encode_packed`], returning the `0x`-prefixed hex encoding of the buffer.
pub fn encode_packed_hex<S: AsRef<str>>(types: &[S], values: &[Value]) -> Result<String> {
    encode_packed(types, values).map(hex::encode_prefixed)
}

fn pack_element(ty: &PackedType, value: &Value, out: &mut Vec<u8>) -> Result<()> {
    let start = out.len();
    pack_value(ty, value, Context::TopLevel, out)?;
    trace!(target: "solpack::encode", %ty, len = out.len() - start, "packed element");
    Ok(())
}

fn check_lengths(types: usize, values: usize) -> Result<()> {
    if types != values {
        return Err(Error::MismatchedLengths { types, values });
    }
    Ok(())
}
