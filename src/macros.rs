//! Early-return macros for functions producing an [`Outcome`](crate::Outcome).
//!
//! Each macro evaluates a fallible expression and either yields its success
//! payload to the surrounding code or returns a failure from the enclosing
//! function on the spot. The failure crosses the boundary through `Into`, so
//! the caller's error type only has to be buildable from the callee's.
//!
//! All of them expand to a plain `return`, which means they return from the
//! innermost function or closure, never from just a block.

use std::fmt;

use errno::errno;

/// Unwraps a success or returns the failure from the enclosing function.
///
/// ```
/// use outcome::{unwrap_or_return, Outcome};
///
/// fn add_one(input: Outcome<i32, String>) -> Outcome<i32, String> {
///     let value = unwrap_or_return!(input);
///     Outcome::success(value + 1)
/// }
///
/// assert_eq!(add_one(Outcome::success(5)), 6);
/// assert_eq!(add_one(Outcome::failure("boo")), outcome::fail("boo"));
/// ```
#[macro_export]
macro_rules! unwrap_or_return {
    ($outcome:expr) => {
        match $outcome {
            $crate::Outcome::Success(value) => value,
            $crate::Outcome::Failure(error) => return $crate::Outcome::failure(error),
        }
    };
}

/// Binds the success payload to a fresh `let`, or returns the failure from
/// the enclosing function. The binding may carry an explicit type.
///
/// ```
/// use outcome::{assign_or_return, Outcome};
///
/// fn double(input: Outcome<i32, String>) -> Outcome<i32, String> {
///     assign_or_return!(value: i32, input);
///     Outcome::success(value * 2)
/// }
///
/// assert_eq!(double(Outcome::success(4)), 8);
/// assert!(double(Outcome::failure("boo")).is_failure());
/// ```
#[macro_export]
macro_rules! assign_or_return {
    ($name:ident : $ty:ty, $outcome:expr) => {
        let $name: $ty = $crate::unwrap_or_return!($outcome);
    };
    ($name:ident, $outcome:expr) => {
        let $name = $crate::unwrap_or_return!($outcome);
    };
}

/// Yields a pointer if it is non-null, or returns `error` as a failure from
/// the enclosing function. The error expression is only evaluated for a null
/// pointer.
///
/// ```
/// use outcome::{non_null_or_return, Outcome};
///
/// fn first_byte(data: *const u8) -> Outcome<u8, String> {
///     let pointer = non_null_or_return!(data, "null buffer");
///     Outcome::success(unsafe { *pointer })
/// }
///
/// let bytes = [7u8, 8];
/// assert_eq!(first_byte(bytes.as_ptr()), 7);
/// assert_eq!(first_byte(std::ptr::null()), outcome::fail("null buffer"));
/// ```
#[macro_export]
macro_rules! non_null_or_return {
    ($pointer:expr, $error:expr) => {{
        let pointer = $pointer;
        if pointer.is_null() {
            return $crate::Outcome::failure($error);
        }
        pointer
    }};
}

/// Unwraps a present option, or returns `error` as a failure from the
/// enclosing function. The error expression is only evaluated for an absent
/// option.
///
/// ```
/// use outcome::{present_or_return, Outcome};
///
/// fn first_word(line: &str) -> Outcome<&str, String> {
///     let word = present_or_return!(line.split_whitespace().next(), "empty line");
///     Outcome::success(word)
/// }
///
/// assert_eq!(first_word("lift off"), "lift");
/// assert!(first_word("   ").is_failure());
/// ```
#[macro_export]
macro_rules! present_or_return {
    ($option:expr, $error:expr) => {
        match $option {
            ::core::option::Option::Some(value) => value,
            ::core::option::Option::None => return $crate::Outcome::failure($error),
        }
    };
}

/// Returns a failure built from a formatted message with the calling
/// thread's current OS error appended, as
/// `"<message> (errno=<code>, <description>)"`.
///
/// ```
/// use outcome::{bail_errno, Outcome, Unit};
///
/// fn reject(reason: &str) -> Outcome<Unit, String> {
///     bail_errno!("rejected: {}", reason);
/// }
///
/// let error = reject("drive 3 missing").take_error();
/// assert!(error.starts_with("rejected: drive 3 missing (errno="));
/// ```
#[macro_export]
macro_rules! bail_errno {
    ($($message:tt)*) => {
        return $crate::Outcome::failure($crate::macros::errno_message(
            ::core::format_args!($($message)*),
        ))
    };
}

#[doc(hidden)]
pub fn errno_message(message: fmt::Arguments<'_>) -> String {
    let err = errno();
    format!("{} (errno={}, {})", message, err.0, err)
}
