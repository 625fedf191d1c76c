use alloy_primitives::hex;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

/// Initializes a tracing Subscriber for logging.
///
/// Events go to stderr so that stdout only carries command output.
pub fn subscriber() {
    let _ = FmtSubscriber::builder()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .try_init();
}

/// Hex encodes `bytes`, with a `0x` prefix if `prefix` is set.
pub fn format_hex(bytes: impl AsRef<[u8]>, prefix: bool) -> String {
    if prefix { hex::encode_prefixed(bytes) } else { hex::encode(bytes) }
}
