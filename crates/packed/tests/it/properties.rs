use alloy_primitives::{Address, U256};
use proptest::prelude::*;
use solpack::{Context, PackedType, Value, WORD_SIZE, encode_packed, pack_value, to_utf8_bytes};

fn int_type() -> impl Strategy<Value = PackedType> {
    (1usize..=32, any::<bool>())
        .prop_map(|(bytes, signed)| PackedType::Int { bits: bytes * 8, signed })
}

proptest! {
    #[test]
    fn unsigned_width_matches_declaration(bytes in 1usize..=32, raw in any::<[u8; 32]>()) {
        let bits = bytes * 8;
        // Keep only as many low bytes as the type can hold.
        let mut word = [0u8; 32];
        word[32 - bytes..].copy_from_slice(&raw[32 - bytes..]);
        let ty = PackedType::Int { bits, signed: false };
        let value = Value::Uint(U256::from_be_bytes(word));

        let mut top = Vec::new();
        pack_value(&ty, &value, Context::TopLevel, &mut top).unwrap();
        prop_assert_eq!(top.len(), bytes);
        prop_assert_eq!(&top[..], &word[32 - bytes..]);

        let mut nested = Vec::new();
        pack_value(&ty, &value, Context::ArrayElement, &mut nested).unwrap();
        prop_assert_eq!(nested, word.to_vec());
    }

    #[test]
    fn sizes_match_packed_size(ty in int_type(), n in 0u8..=127) {
        let value = Value::from(n);
        for ctx in [Context::TopLevel, Context::ArrayElement] {
            let mut out = Vec::new();
            pack_value(&ty, &value, ctx, &mut out).unwrap();
            prop_assert_eq!(Some(out.len()), ty.packed_size(ctx));
        }
        prop_assert_eq!(ty.packed_size(Context::ArrayElement), Some(WORD_SIZE));
    }

    #[test]
    fn strings_pack_to_their_utf8(s in any::<String>()) {
        let packed = encode_packed(&["string"], &[Value::from(s.as_str())]).unwrap();
        prop_assert_eq!(&packed, &to_utf8_bytes(&s).unwrap());
        prop_assert_eq!(packed, s.into_bytes());
    }

    #[test]
    fn concatenation_of_parts(
        a in any::<u64>(),
        b in any::<bool>(),
        c in proptest::collection::vec(any::<u8>(), 0..64),
    ) {
        let whole =
            encode_packed(&["uint64", "bool", "bytes"], &[a.into(), b.into(), c.clone().into()])
                .unwrap();
        let mut parts = encode_packed(&["uint64"], &[a.into()]).unwrap();
        parts.extend(encode_packed(&["bool"], &[b.into()]).unwrap());
        parts.extend(encode_packed(&["bytes"], &[c.into()]).unwrap());
        prop_assert_eq!(whole, parts);
    }
}

#[test]
fn deterministic_across_threads() {
    crate::init_tracing();
    let types = ["address[2]", "int24", "string", "bytes7", "bool[]"];
    let values = [
        Value::array([Address::repeat_byte(1), Address::ZERO]),
        Value::from(-70_000i32),
        Value::from("déjà vu 🦀"),
        Value::from([7u8; 7]),
        Value::array([true, false, true]),
    ];
    let expected = encode_packed(&types, &values).unwrap();
    assert_eq!(encode_packed(&types, &values).unwrap(), expected);

    std::thread::scope(|s| {
        let handles: Vec<_> =
            (0..8).map(|_| s.spawn(|| encode_packed(&types, &values).unwrap())).collect();
        for handle in handles {
            assert_eq!(handle.join().unwrap(), expected);
        }
    });
}
