//! Conversion of textual arguments into [`Value`]s.

use crate::{Error, PackedType, Result, Value, pack::fits_signed};
use alloy_primitives::{Address, I256, Sign, U256, hex};
use std::str::FromStr;

/// Parses a list of type descriptors from a tuple `(uint8,bool)`, a bare list `uint8,bool`
/// or a function signature `f(uint8 a, bool b)`. Parameter names are ignored.
pub fn parse_signature(sig: &str) -> Result<Vec<PackedType>> {
    let sig = sig.trim();
    let params = match (sig.find('('), sig.rfind(')')) {
        (Some(open), Some(close)) if open < close => &sig[open + 1..close],
        (None, None) => sig,
        _ => return Err(Error::UnknownType(sig.to_string())),
    };
    if params.contains('(') {
        return Err(Error::unsupported(format!("tuple types are not supported: {sig}")));
    }
    if params.trim().is_empty() {
        return Ok(Vec::new());
    }
    params
        .split(',')
        .map(|param| {
            let ty = param.split_whitespace().next().unwrap_or_default();
            PackedType::parse(ty)
        })
        .collect()
}

/// Converts `s` into a value for `ty`.
///
/// Numbers are decimal or `0x` hex, bytes and addresses are hex, arrays use the
/// `[a, b, ...]` literal syntax, and strings are taken as is. Inside array literals strings
/// may be double quoted.
pub fn coerce_value(ty: &PackedType, s: &str) -> Result<Value> {
    coerce(ty, s, false)
}

fn coerce(ty: &PackedType, s: &str, nested: bool) -> Result<Value> {
    let invalid = |reason: String| Error::invalid_value(ty, reason);
    match ty {
        PackedType::Address => Address::from_str(s.trim())
            .map(Value::Address)
            .map_err(|e| invalid(format!("invalid address {s:?}: {e}"))),
        PackedType::Bool => match s.trim() {
            "true" => Ok(Value::Bool(true)),
            "false" => Ok(Value::Bool(false)),
            other => Err(invalid(format!("invalid bool {other:?}"))),
        },
        &PackedType::Int { bits, signed } => {
            let s = s.trim();
            let (sign, digits) = match s.strip_prefix('-') {
                Some(digits) if signed => (Sign::Negative, digits),
                _ => (Sign::Positive, s),
            };
            let abs = U256::from_str(digits)
                .map_err(|e| invalid(format!("invalid number {s:?}: {e}")))?;
            let value = if signed {
                I256::checked_from_sign_and_abs(sign, abs)
                    .filter(|n| fits_signed(*n, bits))
                    .map(Value::Int)
            } else {
                (abs.bit_len() <= bits).then_some(Value::Uint(abs))
            };
            value.ok_or_else(|| invalid(format!("{s} is out of range")))
        }
        PackedType::Bytes | PackedType::FixedBytes(_) => hex::decode(s.trim())
            .map(|bytes| Value::Bytes(bytes.into()))
            .map_err(|e| invalid(format!("invalid hex {s:?}: {e}"))),
        PackedType::String if nested => Ok(Value::String(unquote(s.trim()))),
        PackedType::String => Ok(Value::String(s.to_string())),
        PackedType::Array { element, .. } => {
            let inner = s
                .trim()
                .strip_prefix('[')
                .and_then(|s| s.strip_suffix(']'))
                .ok_or_else(|| invalid(format!("expected an array literal, got {s:?}")))?;
            split_top_level(inner)
                .map_err(invalid)?
                .into_iter()
                .map(|item| coerce(element, item, true))
                .collect::<Result<Vec<_>>>()
                .map(Value::Array)
        }
    }
}

/// Splits an array literal body at commas that are neither nested in brackets nor quoted.
fn split_top_level(s: &str) -> Result<Vec<&str>, String> {
    if s.trim().is_empty() {
        return Ok(Vec::new());
    }
    let mut items = Vec::new();
    let mut depth = 0usize;
    let mut quoted = false;
    let mut escaped = false;
    let mut start = 0;
    for (i, c) in s.char_indices() {
        if quoted {
            match c {
                _ if escaped => escaped = false,
                '\\' => escaped = true,
                '"' => quoted = false,
                _ => {}
            }
            continue;
        }
        match c {
            '"' => quoted = true,
            '[' => depth += 1,
            ']' => depth = depth.checked_sub(1).ok_or("unbalanced brackets")?,
            ',' if depth == 0 => {
                items.push(&s[start..i]);
                start = i + 1;
            }
            _ => {}
        }
    }
    if quoted || depth != 0 {
        return Err("unterminated array literal".to_string());
    }
    items.push(&s[start..]);
    Ok(items)
}

fn unquote(s: &str) -> String {
    match s.strip_prefix('"').and_then(|s| s.strip_suffix('"')) {
        Some(inner) => inner.replace("\\\"", "\"").replace("\\\\", "\\"),
        None => s.to_string(),
    }
}
