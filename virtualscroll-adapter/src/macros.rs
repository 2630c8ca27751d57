#[cfg(feature = "tracing")]
macro_rules! va_trace {
    ($($tt:tt)*) => {
        tracing::trace!(target: "virtualscroll_adapter", $($tt)*)
    };
}

#[cfg(not(feature = "tracing"))]
macro_rules! va_trace {
    ($($tt:tt)*) => {};
}

#[cfg(feature = "tracing")]
macro_rules! va_debug {
    ($($tt:tt)*) => {
        tracing::debug!(target: "virtualscroll_adapter", $($tt)*)
    };
}

#[cfg(not(feature = "tracing"))]
macro_rules! va_debug {
    ($($tt:tt)*) => {};
}
