use crate::{
    handler,
    opts::{Solpack, SolpackSubcommand},
    utils::{self, format_hex},
};
use alloy_primitives::hex;
use clap::Parser;
use eyre::{Result, WrapErr};
use solpack::{
    PackedType, Value, coerce_value, decode_packed_typed, digest_typed, encode_packed_typed,
    parse_signature, utf8::encode_utf16,
};
use solpack_config::Config;

/// Run the `solpack` command-line interface.
pub fn run() -> Result<()> {
    setup();
    run_command(Solpack::parse())
}

/// Setup the global logger and error hooks.
pub fn setup() {
    handler::install();
    utils::subscriber();
}

/// Run the subcommand.
pub fn run_command(args: Solpack) -> Result<()> {
    let config = Config::load()?;
    match args.cmd {
        SolpackSubcommand::Pack { sig, args } => {
            let (types, values) = parse_args(&sig, &args)?;
            let packed = encode_packed_typed(&types, &values)?;
            println!("{}", format_hex(packed, config.hex_prefix));
        }
        SolpackSubcommand::Hash { hash, sig, args } => {
            let kind = hash.unwrap_or(config.hash);
            let (types, values) = parse_args(&sig, &args)?;
            let hash = digest_typed(kind, &types, &values)?;
            println!("{}", format_hex(hash, config.hex_prefix));
        }
        SolpackSubcommand::Utf8 { text, form } => {
            let bytes = encode_utf16(text.encode_utf16(), form.unwrap_or_default())?;
            println!("{}", format_hex(bytes, config.hex_prefix));
        }
        SolpackSubcommand::Unpack { sig, data } => {
            let types =
                parse_signature(&sig).wrap_err_with(|| format!("invalid signature {sig:?}"))?;
            let data = hex::decode(data.trim()).wrap_err("invalid packed data")?;
            for value in decode_packed_typed(&types, &data)? {
                println!("{value}");
            }
        }
    }
    Ok(())
}

/// Parses `sig` and coerces every argument to the type at the same position.
pub fn parse_args(sig: &str, args: &[String]) -> Result<(Vec<PackedType>, Vec<Value>)> {
    let types = parse_signature(sig).wrap_err_with(|| format!("invalid signature {sig:?}"))?;
    if types.len() != args.len() {
        return Err(solpack::Error::MismatchedLengths { types: types.len(), values: args.len() })
            .wrap_err_with(|| format!("wrong number of arguments for {sig:?}"));
    }
    let values = types
        .iter()
        .zip(args)
        .enumerate()
        .map(|(i, (ty, arg))| {
            coerce_value(ty, arg).wrap_err_with(|| format!("invalid argument #{i} for {ty}"))
        })
        .collect::<Result<Vec<_>>>()?;
    trace!(target: "solpack::cli", %sig, args = values.len(), "parsed arguments");
    Ok((types, values))
}
