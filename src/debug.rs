//! Macros for tracing where errors originate.
//!
//! Since the errors produced by the codecs are deliberately small, it can be
//! hard to tell which check in a deeply nested schema rejected the data. To
//! remedy this, every place that initially produces an error wraps it in the
//! `xerr!()` macro which logs the source location via the `log` facade
//! before resolving into whatever the enclosed expression resolves to:
//!
//! ```rust,ignore
//! if foo {
//!     xerr!(Err(Error::InvalidEncoding("foo")))
//! }
//! ```
//!
//! or, with an early return:
//!
//! ```rust,ignore
//! if foo {
//!     xerr!(return Err(Error::InvalidEncoding("foo")));
//! }
//! ```
//!
//! With the `extra-debug` feature enabled the location is logged at warning
//! level instead of debug level.

#[cfg(feature = "extra-debug")]
macro_rules! xerr {
    ($test:expr) => {{
        log::warn!(
            "--- EXTRA DEBUG --- error raised at {}:{}", file!(), line!()
        );
        $test
    }}
}

#[cfg(not(feature = "extra-debug"))]
macro_rules! xerr {
    ($test:expr) => {{
        log::debug!("error raised at {}:{}", file!(), line!());
        $test
    }}
}
