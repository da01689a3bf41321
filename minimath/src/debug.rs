//! Debug tracing
//!
//! Set `MINIMATH_DEBUG` to trace operand dispatch, parse failures and
//! constant initialization on stderr. Only compiled into debug builds.

/// Environment variable that switches tracing on.
pub const DEBUG_ENV_VAR: &str = "MINIMATH_DEBUG";

/// Check if debug logging is enabled via `MINIMATH_DEBUG` env var.
#[cfg(debug_assertions)]
pub(crate) fn debug_enabled() -> bool {
    use std::sync::OnceLock;
    static ENABLED: OnceLock<bool> = OnceLock::new();
    *ENABLED.get_or_init(|| std::env::var(DEBUG_ENV_VAR).is_ok())
}

/// Emit debug logs in debug builds without relying on `eprintln!`.
#[cfg(debug_assertions)]
pub(crate) fn debug_log(args: std::fmt::Arguments<'_>) {
    use std::io::Write;
    let _ = writeln!(std::io::stderr(), "{args}");
}
