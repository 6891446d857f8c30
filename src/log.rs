//! Conditional logging macros.
//!
//! When the `tracing` feature is enabled, these re-export `tracing` macros.
//! When disabled, they expand to no-ops for zero runtime overhead.
//!
//! Events emitted by the crate:
//!
//! - `debug` "template added" (`template`, `index`) when a store accepts a template
//! - `trace` "template searched" (`template`, `distance`) per template compared
//! - `debug` "recognized" (`template`, `score`, `distance`) for the winning match
//! - `warn` when a template was normalized with a different sample count or
//!   square size (`template`, `expected`, `found`)

#[cfg(feature = "tracing")]
pub use tracing::{debug, trace, warn};

#[cfg(not(feature = "tracing"))]
#[macro_export]
macro_rules! debug {
    ($($arg:tt)*) => {};
}

#[cfg(not(feature = "tracing"))]
#[macro_export]
macro_rules! trace {
    ($($arg:tt)*) => {};
}

#[cfg(not(feature = "tracing"))]
#[macro_export]
macro_rules! warn {
    ($($arg:tt)*) => {};
}

#[cfg(not(feature = "tracing"))]
pub use crate::{debug, trace, warn};
