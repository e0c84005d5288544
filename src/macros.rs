//! Logging shims
//!
//! Forward to the `log` facade when the `log` feature is enabled and compile
//! to nothing otherwise. Only cold paths (merges) log.

#[cfg(feature = "log")]
macro_rules! trace {
    ($($arg:tt)+) => {
        log::trace!(target: "streamvar", $($arg)+)
    };
}

#[cfg(not(feature = "log"))]
macro_rules! trace {
    ($($arg:tt)+) => {
        if false {
            let _ = format_args!($($arg)+);
        }
    };
}

#[cfg(feature = "log")]
macro_rules! warn {
    ($($arg:tt)+) => {
        log::warn!(target: "streamvar", $($arg)+)
    };
}

#[cfg(not(feature = "log"))]
macro_rules! warn {
    ($($arg:tt)+) => {
        if false {
            let _ = format_args!($($arg)+);
        }
    };
}
