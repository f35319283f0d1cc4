// Hard assertions: checked in release builds too, and reported as
// `Error::Internal` through the enclosing function's `Result` instead of
// panicking.

/// Return `Err(Error::Internal("cond"))` from the enclosing function when
/// `cond` is false.
#[macro_export]
macro_rules! assert_hard {
    ($cond:expr $(,)?) => {
        if !($cond) {
            $crate::__tracing::error!(condition = stringify!($cond), "hard assertion failed");
            return ::core::result::Result::Err($crate::Error::Internal(
                stringify!($cond).to_string(),
            )
            .into());
        }
    };
}

/// Like [`assert_hard!`], with a formatted explanation appended:
/// `"not <cond>:  <message>"`.
#[macro_export]
macro_rules! assert_hard_msg {
    ($cond:expr, $($arg:tt)+) => {
        if !($cond) {
            let message = format!("not {}:  {}", stringify!($cond), format_args!($($arg)+));
            $crate::__tracing::error!(%message, "hard assertion failed");
            return ::core::result::Result::Err($crate::Error::Internal(message).into());
        }
    };
}
