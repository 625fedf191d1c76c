//! Known encodings, cross-checked against Solidity and `cast abi-encode --packed`.

use alloy_primitives::{Address, address, b256, hex};
use similar_asserts::assert_eq;
use solpack::{
    ErrorKind, Value, coerce_value, encode_packed, encode_packed_hex, encode_packed_typed,
    keccak256_packed, parse_signature,
};

fn encode_args(sig: &str, args: &[&str]) -> String {
    let types = parse_signature(sig).unwrap();
    let values: Vec<Value> =
        types.iter().zip(args).map(|(ty, arg)| coerce_value(ty, arg).unwrap()).collect();
    hex::encode_prefixed(encode_packed_typed(&types, &values).unwrap())
}

// <https://docs.soliditylang.org/en/latest/abi-spec.html#non-standard-packed-mode>
#[test]
fn solidity_docs_example() {
    crate::init_tracing();
    let packed = encode_packed_hex(
        &["int16", "bytes1", "uint16", "string"],
        &[Value::from(-1i16), Value::from([0x42u8]), Value::from(0x03u16), "Hello, world!".into()],
    )
    .unwrap();
    assert_eq!(packed, "0xffff42000348656c6c6f2c20776f726c6421");
}

#[test]
fn dynamic_array_of_uint128_then_uint64() {
    assert_eq!(
        encode_args("(uint128[] a, uint64 b)", &["[100, 300]", "200"]),
        "0x0000000000000000000000000000000000000000000000000000000000000064000000000000000000000000000000000000000000000000000000000000012c00000000000000c8"
    );
}

#[test]
fn address_then_string() {
    assert_eq!(
        encode_args(
            "foo(address a, string b)",
            &["0x8dbd1b711dc621e1404633da156fcc779e1c6f3e", "hello world"]
        ),
        "0x8dbd1b711dc621e1404633da156fcc779e1c6f3e68656c6c6f20776f726c64"
    );
}

#[test]
fn address_array_is_word_aligned() {
    let a = address!("0x8dbd1b711dc621e1404633da156fcc779e1c6f3e");
    let b = Address::repeat_byte(0xee);
    let packed = encode_packed(&["address[2]"], &[Value::array([a, b])]).unwrap();
    assert_eq!(packed.len(), 64);
    assert_eq!(
        hex::encode(&packed),
        "0000000000000000000000008dbd1b711dc621e1404633da156fcc779e1c6f3e\
         000000000000000000000000eeeeeeeeeeeeeeeeeeeeeeeeeeeeeeeeeeeeeeee"
    );
}

#[test]
fn bytes2_inside_and_outside_arrays() {
    let value = Value::from([0xabu8, 0xcd]);
    assert_eq!(encode_packed(&["bytes2"], &[value.clone()]).unwrap(), [0xab, 0xcd]);
    assert_eq!(
        encode_packed_hex(&["bytes2[1]"], &[Value::Array(vec![value])]).unwrap(),
        "0xabcd000000000000000000000000000000000000000000000000000000000000"
    );
}

#[test]
fn signed_array_elements_are_sign_extended() {
    assert_eq!(
        encode_packed_hex(&["int8[2]"], &[Value::array([-1i8, 1])]).unwrap(),
        "0xffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffff\
         0000000000000000000000000000000000000000000000000000000000000001"
    );
}

#[test]
fn mixed_bytes_and_strings_hash() {
    // keccak256(abi.encodePacked("hello", " ", "world"))
    assert_eq!(
        keccak256_packed(
            &["string", "string", "bytes"],
            &["hello".into(), " ".into(), Value::from(&b"world"[..])]
        )
        .unwrap(),
        b256!("0x47173285a8d7341e5e972fc677286384f802f8ef42a5ec5f03bbfa254cb01fad")
    );
}

#[test]
fn known_error_classes() {
    let cases: [(&str, Value, ErrorKind); 6] = [
        ("uint8", 256u16.into(), ErrorKind::InvalidValue),
        ("uint9", 1u8.into(), ErrorKind::InvalidType),
        ("bytes33", vec![0u8; 33].into(), ErrorKind::InvalidType),
        ("bytes4", vec![0u8; 3].into(), ErrorKind::InvalidValue),
        ("fixed128x18", 1u8.into(), ErrorKind::UnknownType),
        ("string", Value::Utf16(vec![0xd800]), ErrorKind::InvalidEncoding),
    ];
    for (ty, value, kind) in cases {
        let err = encode_packed(&[ty], &[value]).unwrap_err();
        assert_eq!(err.kind(), kind, "{ty}: {err}");
        assert_eq!(err.index(), Some(0));
    }
}
