use snapbox::{cmd::Command, str};
use std::path::Path;

/// Returns a `solpack` command isolated from the caller's environment and run in `dir`.
fn solpack(dir: &Path) -> Command {
    Command::new(env!("CARGO_BIN_EXE_solpack"))
        .current_dir(dir)
        .env_remove("RUST_LOG")
        .env_remove("SOLPACK_DEBUG")
        .env_remove("SOLPACK_PROFILE")
        .env_remove("SOLPACK_HASH")
        .env_remove("SOLPACK_HEX_PREFIX")
}

#[test]
fn pack_solidity_docs_example() {
    let dir = tempfile::tempdir().unwrap();
    solpack(dir.path())
        .args(["pack", "(int16,bytes1,uint16,string)", "-1", "0x42", "3", "Hello, world!"])
        .assert()
        .success()
        .stdout_eq(str![[r#"
0xffff42000348656c6c6f2c20776f726c6421

"#]]);
}

#[test]
fn pack_arrays_are_padded() {
    let dir = tempfile::tempdir().unwrap();
    solpack(dir.path())
        .args(["pack", "f(bool[] flags, bytes2 tag)", "[true, false]", "0xabcd"])
        .assert()
        .success()
        .stdout_eq(str![[r#"
0x00000000000000000000000000000000000000000000000000000000000000010000000000000000000000000000000000000000000000000000000000000000abcd

"#]]);
}

#[test]
fn hash_defaults_to_keccak() {
    let dir = tempfile::tempdir().unwrap();
    solpack(dir.path())
        .args(["hash", "(string)", "hello world"])
        .assert()
        .success()
        .stdout_eq(str![[r#"
0x47173285a8d7341e5e972fc677286384f802f8ef42a5ec5f03bbfa254cb01fad

"#]]);
}

#[test]
fn hash_with_sha256() {
    let dir = tempfile::tempdir().unwrap();
    solpack(dir.path())
        .args(["hash", "--hash", "sha256", "(string)", "abc"])
        .assert()
        .success()
        .stdout_eq(str![[r#"
0xba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad

"#]]);
}

#[test]
fn utf8_bytes() {
    let dir = tempfile::tempdir().unwrap();
    solpack(dir.path())
        .args(["utf8", "a€😀"])
        .assert()
        .success()
        .stdout_eq(str![[r#"
0x61e282acf09f9880

"#]]);
}

#[test]
fn utf8_normalization_is_unsupported() {
    let dir = tempfile::tempdir().unwrap();
    solpack(dir.path()).args(["utf8", "--form", "NFC", "é"]).assert().failure();
}

#[test]
fn unpack_static_values() {
    let dir = tempfile::tempdir().unwrap();
    solpack(dir.path())
        .args(["unpack", "(uint8,bool,int16)", "0xff01fed4"])
        .assert()
        .success()
        .stdout_eq(str![[r#"
255
true
-300

"#]]);
}

#[test]
fn unpack_rejects_dynamic_types() {
    let dir = tempfile::tempdir().unwrap();
    solpack(dir.path())
        .args(["unpack", "(string)", "0x6869"])
        .assert()
        .failure()
        .stderr_eq(str![[r#"
Error: element 0 (string): unsupported operation: cannot unpack dynamic type string, its length is not encoded

"#]]);
}

#[test]
fn overflow_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    solpack(dir.path())
        .args(["pack", "(uint8)", "256"])
        .assert()
        .failure()
        .stderr_eq(str![[r#"
Error: invalid argument #0 for uint8
  caused by: invalid value for uint8: 256 is out of range

"#]]);
}

#[test]
fn reads_config_file() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(
        dir.path().join("solpack.toml"),
        "[profile.default]\nhash = \"sha256\"\nhex_prefix = false\n",
    )
    .unwrap();
    solpack(dir.path())
        .args(["hash", "(string)", "abc"])
        .assert()
        .success()
        .stdout_eq(str![[r#"
ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad

"#]]);

    // the flag wins over the file
    solpack(dir.path())
        .args(["hash", "--hash", "keccak256", "(string)", "hello world"])
        .assert()
        .success()
        .stdout_eq(str![[r#"
47173285a8d7341e5e972fc677286384f802f8ef42a5ec5f03bbfa254cb01fad

"#]]);
}

#[test]
fn selects_profile_from_env() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(
        dir.path().join("solpack.toml"),
        "[profile.default]\nhex_prefix = true\n\n[profile.raw]\nhex_prefix = false\n",
    )
    .unwrap();
    solpack(dir.path())
        .env("SOLPACK_PROFILE", "raw")
        .args(["pack", "(uint16)", "258"])
        .assert()
        .success()
        .stdout_eq(str![[r#"
0102

"#]]);
}
