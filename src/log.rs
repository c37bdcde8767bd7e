//! Internal logging shims.
//!
//! Forward to `defmt` when the `defmt` feature is enabled and expand to nothing
//! otherwise, so call sites never need their own `cfg` attributes.

#[cfg(feature = "defmt")]
macro_rules! log_trace {
    ($($arg:tt)*) => { ::defmt::trace!($($arg)*) };
}

#[cfg(not(feature = "defmt"))]
macro_rules! log_trace {
    ($($arg:tt)*) => {{}};
}

#[cfg(feature = "defmt")]
macro_rules! log_debug {
    ($($arg:tt)*) => { ::defmt::debug!($($arg)*) };
}

#[cfg(not(feature = "defmt"))]
macro_rules! log_debug {
    ($($arg:tt)*) => {{}};
}

#[cfg(feature = "defmt")]
macro_rules! log_warn {
    ($($arg:tt)*) => { ::defmt::warn!($($arg)*) };
}

#[cfg(not(feature = "defmt"))]
macro_rules! log_warn {
    ($($arg:tt)*) => {{}};
}

pub(crate) use {log_debug, log_trace, log_warn};
