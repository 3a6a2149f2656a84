#![allow(unused, reason = "logger")]

// without the `log` feature the arguments are still type checked and marked as used,
// but nothing is formatted

macro_rules! debug {
    ($($tt:tt)*) => {
        #[cfg(feature = "log")]
        ::log::debug!($($tt)*);
        #[cfg(not(feature = "log"))]
        let _ = || { let _ = ::std::format!($($tt)*); };
    };
}

macro_rules! warning {
    ($($tt:tt)*) => {
        #[cfg(feature = "log")]
        ::log::warn!($($tt)*);
        #[cfg(not(feature = "log"))]
        let _ = || { let _ = ::std::format!($($tt)*); };
    };
}

pub(crate) use {debug, warning};
