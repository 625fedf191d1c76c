use clap::{Parser, Subcommand};
use solpack::{HashKind, NormalizationForm};

/// Tightly pack and hash values the way Solidity's `abi.encodePacked` does.
#[derive(Parser)]
#[command(
    name = "solpack",
    version,
    after_help = "Signatures are tuples `(uint8,bool)`, comma lists `uint8,bool` \
                  or functions `f(uint8 a, bool b)`.",
    next_display_order = None,
)]
pub struct Solpack {
    #[command(subcommand)]
    pub cmd: SolpackSubcommand,
}

#[derive(Subcommand)]
pub enum SolpackSubcommand {
    /// Tightly pack the given arguments, like `abi.encodePacked`.
    #[command(visible_aliases = &["encode", "p"])]
    Pack {
        /// The types of the arguments.
        sig: String,

        /// The arguments to pack.
        #[arg(allow_hyphen_values = true)]
        args: Vec<String>,
    },

    /// Hash the tightly packed arguments, like `keccak256(abi.encodePacked(...))`.
    #[command(visible_alias = "h")]
    Hash {
        /// The digest to use. Defaults to the configured one.
        #[arg(long, value_name = "HASH")]
        hash: Option<HashKind>,

        /// The types of the arguments.
        sig: String,

        /// The arguments to hash.
        #[arg(allow_hyphen_values = true)]
        args: Vec<String>,
    },

    /// Print the UTF-8 bytes of the given text.
    #[command(visible_alias = "u8")]
    Utf8 {
        /// The text to encode.
        text: String,

        /// The Unicode normalization form to apply first.
        #[arg(long, value_name = "FORM")]
        form: Option<NormalizationForm>,
    },

    /// Unpack a buffer of statically sized values, one per line.
    #[command(visible_alias = "decode")]
    Unpack {
        /// The types of the packed values.
        sig: String,

        /// The hex encoded packed data.
        data: String,
    },
}
