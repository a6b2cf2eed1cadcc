//! Internal logging macros.
//!
//! Everything here forwards to the [`log`](https://docs.rs/log) facade when the `log` feature is
//! enabled and expands to nothing otherwise.

macro_rules! re_debug {
	($($arg:tt)+) => {
		#[cfg(feature = "log")]
		log::debug!($($arg)+);
	};
}

macro_rules! re_trace {
	($($arg:tt)+) => {
		#[cfg(feature = "log")]
		log::trace!($($arg)+);
	};
}
