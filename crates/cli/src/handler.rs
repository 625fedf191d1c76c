use crate::errors::{dedup_chain, display_chain};
use eyre::EyreHandler;
use itertools::Itertools;
use std::{error::Error, fmt, panic::Location};

/// The `eyre` handler used by `solpack`.
pub enum Handler {
    /// One line for the error, followed by one `caused by` line per distinct cause.
    ///
    /// Packing failures are reported with the elements they happened in, outermost first.
    Concise,
    /// Defers entirely to another handler, usually the `color-eyre` one.
    Verbose(Box<dyn EyreHandler>),
}

impl Default for Handler {
    fn default() -> Self {
        Self::Concise
    }
}

impl EyreHandler for Handler {
    fn display(&self, error: &(dyn Error + 'static), f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&display_chain(error))
    }

    fn debug(&self, error: &(dyn Error + 'static), f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Self::Verbose(handler) = self {
            return handler.debug(error, f);
        }
        if f.alternate() {
            return fmt::Debug::fmt(error, f);
        }

        let causes = dedup_chain(error);
        let Some((error, causes)) = causes.split_first() else { return Ok(()) };
        let causes =
            causes.iter().format_with("", |cause, f| f(&format_args!("\n  caused by: {cause}")));
        write!(f, "{error}{causes}")
    }

    fn track_caller(&mut self, location: &'static Location<'static>) {
        if let Self::Verbose(handler) = self {
            handler.track_caller(location);
        }
    }
}

/// Installs the solpack [`eyre`] and [`panic`](mod@std::panic) hooks as the global ones.
///
/// The concise handler is used unless `SOLPACK_DEBUG` is set, in which case errors are
/// reported by `color-eyre` with their full chain. Panics always go through `color-eyre`.
pub fn install() {
    let panic_section =
        "This is a bug. Consider reporting it at https://github.com/solpack-rs/solpack";
    let (panic_hook, debug_hook) =
        color_eyre::config::HookBuilder::default().panic_section(panic_section).into_hooks();
    panic_hook.install();
    let debug_hook = debug_hook.into_eyre_hook();
    let verbose = std::env::var_os("SOLPACK_DEBUG").is_some();
    if let Err(e) = eyre::set_hook(Box::new(move |e| {
        Box::new(if verbose { Handler::Verbose(debug_hook(e)) } else { Handler::Concise })
    })) {
        debug!("failed to install eyre error hook: {e}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use eyre::WrapErr;

    struct Render<'a>(&'a Handler, &'a (dyn Error + 'static));

    impl fmt::Debug for Render<'_> {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            self.0.debug(self.1, f)
        }
    }

    impl fmt::Display for Render<'_> {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            self.0.display(self.1, f)
        }
    }

    #[test]
    fn concise_lists_causes() {
        let ty = "uint8".parse().unwrap();
        let err = solpack::coerce_value(&ty, "256").unwrap_err();
        let report = eyre::Report::from(err).wrap_err("invalid argument #0 for uint8");
        let render = Render(&Handler::Concise, report.as_ref());
        assert_eq!(
            format!("{render:?}"),
            "invalid argument #0 for uint8\n  \
             caused by: invalid value for uint8: 256 is out of range"
        );
        assert_eq!(
            render.to_string(),
            "invalid argument #0 for uint8; invalid value for uint8: 256 is out of range"
        );
    }

    #[test]
    fn concise_locates_packing_errors() {
        let err = solpack::decode_packed(&["string"], &[]).unwrap_err();
        let report = eyre::Report::from(err);
        let render = Render(&Handler::Concise, report.as_ref());
        assert_eq!(
            format!("{render:?}"),
            "element 0 (string): unsupported operation: cannot unpack dynamic type string, \
             its length is not encoded"
        );
    }
}
