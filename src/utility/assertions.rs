/*!
 * Error Assertions
 *
 * Assert that an operation fails with a specific error type and message.
 */

use std::any::type_name;
use std::fmt::{Debug, Display};

/// Run `operation` and assert it fails with an `E` whose message is `message`
///
/// Panics at the caller's location when the operation succeeds, fails with a
/// different error type, or fails with a different message. Errors wrapped in
/// `anyhow` context are still matched against their root type.
#[track_caller]
pub fn expect_err_with_message<T, E, F>(operation: F, message: &str)
where
    F: FnOnce() -> anyhow::Result<T>,
    E: Display + Debug + Send + Sync + 'static,
{
    let err = match operation() {
        Ok(_) => panic!(
            "expected {} with message {:?}, but the operation succeeded",
            type_name::<E>(),
            message
        ),
        Err(err) => err,
    };

    match err.downcast_ref::<E>() {
        Some(typed) => assert_eq!(
            typed.to_string(),
            message,
            "{} raised with an unexpected message",
            type_name::<E>()
        ),
        None => panic!("expected {}, got a different error: {err:#}", type_name::<E>()),
    }
}

/// Assert that a `Result`-valued expression fails with a given error type and message
///
/// ```
/// use proxy_test_common::expect_err_with_message;
///
/// expect_err_with_message!(
///     "abc".parse::<u32>(),
///     std::num::ParseIntError,
///     "invalid digit found in string"
/// );
/// ```
#[macro_export]
macro_rules! expect_err_with_message {
    ($operation:expr, $error:ty, $message:expr $(,)?) => {
        $crate::utility::assertions::expect_err_with_message::<_, $error, _>(
            || ($operation).map_err(::core::convert::Into::<$crate::anyhow::Error>::into),
            $message,
        )
    };
}
