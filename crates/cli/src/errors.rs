//! Rendering of error chains for the terminal.

use eyre::Chain;
use std::error::Error;

/// Displays a chain of errors in a single line.
pub fn display_chain(error: &(dyn Error + 'static)) -> String {
    dedup_chain(error).join("; ")
}

/// Returns one line per distinct cause of `error`, outermost first.
///
/// A packing error is collapsed into a single line, prefixed with the elements it happened in:
/// `element 0 (uint8[2]), element 1 (uint8): invalid value for uint8: 256 is out of range`.
pub fn dedup_chain(error: &(dyn Error + 'static)) -> Vec<String> {
    let mut causes = Vec::new();
    for cause in Chain::new(error) {
        if let Some(err) = cause.downcast_ref::<solpack::Error>() {
            causes.push(locate(err));
            // the rest of the chain is the element wrappers and their root
            break;
        }
        causes.push(cause.to_string().trim().to_string());
    }
    // `msg1: msg2; msg2` -> `msg1: msg2`
    causes.dedup_by(|b, a| a.contains(b.as_str()));
    causes
}

fn locate(err: &solpack::Error) -> String {
    let path = err
        .path()
        .map(|(index, ty)| format!("element {index} ({ty})"))
        .collect::<Vec<_>>()
        .join(", ");
    let root = err.root().to_string();
    if path.is_empty() { root } else { format!("{path}: {root}") }
}
