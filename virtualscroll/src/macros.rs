#[cfg(feature = "tracing")]
macro_rules! vs_trace {
    ($($tt:tt)*) => {
        tracing::trace!(target: "virtualscroll", $($tt)*)
    };
}

#[cfg(not(feature = "tracing"))]
macro_rules! vs_trace {
    ($($tt:tt)*) => {};
}

#[cfg(feature = "tracing")]
macro_rules! vs_debug {
    ($($tt:tt)*) => {
        tracing::debug!(target: "virtualscroll", $($tt)*)
    };
}

#[cfg(not(feature = "tracing"))]
macro_rules! vs_debug {
    ($($tt:tt)*) => {};
}
