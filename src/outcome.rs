use std::fmt;

/// Move-only container holding either the value of a finished computation or
/// the error that stopped it.
///
/// An `Outcome` is always exactly one of the two. There is no empty state and
/// no way to observe a consumed one, since every consuming accessor takes the
/// container by value and the borrow checker rules out reuse.
///
/// ```
/// use outcome::Outcome;
///
/// fn halve(n: i32) -> Outcome<i32, String> {
///     if n % 2 == 0 {
///         Outcome::success(n / 2)
///     } else {
///         Outcome::failure(format!("{} is odd", n))
///     }
/// }
///
/// assert_eq!(halve(6), 3);
/// assert!(halve(7).is_failure());
/// ```
#[must_use = "this outcome may hold a failure, which must be inspected or propagated"]
#[derive(Debug, PartialEq, Eq)]
pub enum Outcome<T, E> {
    Success(T),
    Failure(E),
}

/// Success payload for operations that produce nothing but can still fail.
pub type Unit = ();

/// Error wrapper produced by [`fail`].
///
/// Wrapping the error makes return sites unambiguous even when a function
/// uses the same type for values and errors, and it converts into any
/// [`Outcome`] whose error side can be built from the wrapped payload.
#[must_use = "this wrapped error does nothing until turned into an outcome"]
#[derive(Debug, PartialEq, Eq)]
pub struct Fail<E>(pub E);

/// Wraps an error so it can be returned from a function producing an
/// [`Outcome`], whatever that function's success type is.
///
/// ```
/// use outcome::{fail, Outcome};
///
/// fn checked_div(num: i32, den: i32) -> Outcome<i32, String> {
///     if den == 0 {
///         return fail("division by zero").into();
///     }
///     Outcome::success(num / den)
/// }
///
/// assert_eq!(checked_div(9, 3), 3);
/// assert_eq!(checked_div(9, 0), fail("division by zero"));
/// ```
pub fn fail<E>(error: E) -> Fail<E> {
    Fail(error)
}

impl<T, E, E2> From<Fail<E2>> for Outcome<T, E>
where
    E2: Into<E>,
{
    fn from(wrapped: Fail<E2>) -> Self {
        Outcome::Failure(wrapped.0.into())
    }
}

impl<T, E> Outcome<T, E> {
    /// Builds a success, converting the argument into the stored value type.
    pub fn success(value: impl Into<T>) -> Self {
        Outcome::Success(value.into())
    }

    /// Builds a failure, converting the argument into the stored error type.
    pub fn failure(error: impl Into<E>) -> Self {
        Outcome::Failure(error.into())
    }

    #[must_use]
    pub fn is_success(&self) -> bool {
        match self {
            Outcome::Success(_) => true,
            Outcome::Failure(_) => false,
        }
    }

    #[must_use]
    pub fn is_failure(&self) -> bool {
        !self.is_success()
    }

    /// Borrows the held value.
    ///
    /// # Panics
    ///
    /// Panics if the outcome is a failure.
    #[must_use]
    pub fn value(&self) -> &T {
        match self {
            Outcome::Success(value) => value,
            Outcome::Failure(_) => panic!("value() called on a failure outcome"),
        }
    }

    /// Mutably borrows the held value.
    ///
    /// # Panics
    ///
    /// Panics if the outcome is a failure.
    pub fn value_mut(&mut self) -> &mut T {
        match self {
            Outcome::Success(value) => value,
            Outcome::Failure(_) => panic!("value_mut() called on a failure outcome"),
        }
    }

    /// Borrows the held error.
    ///
    /// # Panics
    ///
    /// Panics if the outcome is a success.
    #[must_use]
    pub fn error(&self) -> &E {
        match self {
            Outcome::Success(_) => panic!("error() called on a success outcome"),
            Outcome::Failure(error) => error,
        }
    }

    /// Mutably borrows the held error.
    ///
    /// # Panics
    ///
    /// Panics if the outcome is a success.
    pub fn error_mut(&mut self) -> &mut E {
        match self {
            Outcome::Success(_) => panic!("error_mut() called on a success outcome"),
            Outcome::Failure(error) => error,
        }
    }

    /// Consumes the outcome and moves the value out.
    ///
    /// # Panics
    ///
    /// Panics if the outcome is a failure.
    #[must_use]
    pub fn take_value(self) -> T {
        match self {
            Outcome::Success(value) => value,
            Outcome::Failure(_) => panic!("take_value() called on a failure outcome"),
        }
    }

    /// Consumes the outcome and moves the error out.
    ///
    /// # Panics
    ///
    /// Panics if the outcome is a success.
    #[must_use]
    pub fn take_error(self) -> E {
        match self {
            Outcome::Success(_) => panic!("take_error() called on a success outcome"),
            Outcome::Failure(error) => error,
        }
    }

    /// Consumes the outcome, moving the value out or falling back to
    /// `default` on failure. The held error is dropped.
    #[must_use]
    pub fn take_value_or(self, default: T) -> T {
        match self {
            Outcome::Success(value) => value,
            Outcome::Failure(_) => default,
        }
    }

    /// Consumes the outcome and moves the value out, panicking with `message`
    /// and the formatted error if it is a failure.
    pub fn expect(self, message: &str) -> T
    where
        E: fmt::Debug,
    {
        match self {
            Outcome::Success(value) => value,
            Outcome::Failure(error) => panic!("{}: {:?}", message, error),
        }
    }

    /// Applies an infallible transform to the value, passing a failure
    /// through untouched. To chain a step that can itself fail, use
    /// [`bind`](Outcome::bind).
    ///
    /// ```
    /// use outcome::Outcome;
    ///
    /// let doubled = Outcome::<i32, String>::success(21).map(|n| n * 2);
    /// assert_eq!(doubled, 42);
    /// ```
    pub fn map<R>(self, transform: impl FnOnce(T) -> R) -> Outcome<R, E> {
        match self {
            Outcome::Success(value) => Outcome::Success(transform(value)),
            Outcome::Failure(error) => Outcome::Failure(error),
        }
    }

    /// Chains a fallible step onto a success, passing a failure through
    /// untouched.
    pub fn bind<R>(self, next: impl FnOnce(T) -> Outcome<R, E>) -> Outcome<R, E> {
        match self {
            Outcome::Success(value) => next(value),
            Outcome::Failure(error) => Outcome::Failure(error),
        }
    }

    /// Moves the outcome into one with wider value and error types.
    ///
    /// The common case is upcasting an owned handle, for example
    /// `Outcome<Box<Circle>, E>` into `Outcome<Box<dyn Shape>, E>` once a
    /// conversion between the handles exists.
    pub fn convert<T2, E2>(self) -> Outcome<T2, E2>
    where
        T: Into<T2>,
        E: Into<E2>,
    {
        match self {
            Outcome::Success(value) => Outcome::Success(value.into()),
            Outcome::Failure(error) => Outcome::Failure(error.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{DropTally, Token};

    #[test]
    fn test_constructors() {
        let good: Outcome<i32, String> = Outcome::success(7);
        assert!(good.is_success());
        assert!(!good.is_failure());

        let bad: Outcome<i32, String> = Outcome::failure("went wrong");
        assert!(bad.is_failure());
        assert!(!bad.is_success());
    }

    #[test]
    fn test_constructor_conversions() {
        let widened: Outcome<i64, String> = Outcome::success(7i32);
        assert_eq!(widened.take_value(), 7i64);

        let owned: Outcome<i32, String> = Outcome::failure("borrowed text");
        assert_eq!(owned.take_error(), "borrowed text".to_string());
    }

    #[test]
    fn test_borrowing_accessors() {
        let good: Outcome<String, Unit> = Outcome::success("payload");
        assert_eq!(good.value(), "payload");

        let bad: Outcome<Unit, String> = Outcome::failure("reason");
        assert_eq!(bad.error(), "reason");
    }

    #[test]
    fn test_mutable_accessors() {
        let mut good: Outcome<i32, String> = Outcome::success(1);
        *good.value_mut() += 9;
        assert_eq!(good.take_value(), 10);

        let mut bad: Outcome<i32, String> = Outcome::failure("attempt 1");
        bad.error_mut().push_str(", attempt 2");
        assert_eq!(bad.take_error(), "attempt 1, attempt 2");
    }

    #[test]
    #[should_panic(expected = "value() called on a failure outcome")]
    fn test_value_panics_on_failure() {
        let bad: Outcome<i32, String> = Outcome::failure("nope");
        let _ = bad.value();
    }

    #[test]
    #[should_panic(expected = "error() called on a success outcome")]
    fn test_error_panics_on_success() {
        let good: Outcome<i32, String> = Outcome::success(1);
        let _ = good.error();
    }

    #[test]
    #[should_panic(expected = "take_value() called on a failure outcome")]
    fn test_take_value_panics_on_failure() {
        let bad: Outcome<i32, String> = Outcome::failure("nope");
        let _ = bad.take_value();
    }

    #[test]
    #[should_panic(expected = "take_error() called on a success outcome")]
    fn test_take_error_panics_on_success() {
        let good: Outcome<i32, String> = Outcome::success(1);
        let _ = good.take_error();
    }

    #[test]
    fn test_take_value_or() {
        let good: Outcome<i32, String> = Outcome::success(5);
        assert_eq!(good.take_value_or(-1), 5);

        let bad: Outcome<i32, String> = Outcome::failure("missing");
        assert_eq!(bad.take_value_or(-1), -1);
    }

    #[test]
    fn test_take_value_or_drops_the_error() {
        let tally = DropTally::new();
        let bad: Outcome<i32, Token> = Outcome::failure(tally.token(0));
        assert_eq!(bad.take_value_or(3), 3);
        assert_eq!(tally.drops(), 1);
    }

    #[test]
    fn test_expect() {
        let good: Outcome<i32, String> = Outcome::success(11);
        assert_eq!(good.expect("value should be present"), 11);
    }

    #[test]
    #[should_panic(expected = "config should parse: \"bad port\"")]
    fn test_expect_panics_with_the_error() {
        let bad: Outcome<i32, String> = Outcome::failure("bad port");
        let _ = bad.expect("config should parse");
    }

    #[test]
    fn test_map() {
        let good: Outcome<i32, String> = Outcome::success(4);
        assert_eq!(good.map(|n| n.to_string()).take_value(), "4");

        let bad: Outcome<i32, String> = Outcome::failure("stop");
        assert_eq!(bad.map(|n| n.to_string()).take_error(), "stop");
    }

    #[test]
    fn test_bind() {
        let recip = |n: i32| -> Outcome<i32, String> {
            if n == 0 {
                Outcome::failure("zero has no reciprocal")
            } else {
                Outcome::success(100 / n)
            }
        };

        let good: Outcome<i32, String> = Outcome::success(4);
        assert_eq!(good.bind(recip), 25);

        let trapped: Outcome<i32, String> = Outcome::success(0);
        assert_eq!(trapped.bind(recip).take_error(), "zero has no reciprocal");

        let bad: Outcome<i32, String> = Outcome::failure("stop");
        assert_eq!(bad.bind(recip).take_error(), "stop");
    }

    #[test]
    fn test_convert() {
        let good: Outcome<i32, &str> = Outcome::success(3);
        let wide: Outcome<i64, String> = good.convert();
        assert_eq!(wide.take_value(), 3i64);

        let bad: Outcome<i32, &str> = Outcome::failure("too narrow");
        let wide: Outcome<i64, String> = bad.convert();
        assert_eq!(wide.take_error(), "too narrow");
    }

    #[test]
    fn test_fail_fits_any_value_type() {
        let as_int: Outcome<i32, String> = fail("broken").into();
        assert_eq!(as_int.take_error(), "broken");

        let as_unit: Outcome<Unit, String> = fail("broken").into();
        assert_eq!(as_unit.take_error(), "broken");
    }

    #[test]
    fn test_same_value_and_error_type() {
        let good: Outcome<i32, i32> = Outcome::success(42);
        let bad: Outcome<i32, i32> = fail(42).into();

        assert!(good.is_success());
        assert!(bad.is_failure());
        assert_ne!(good, bad);
    }

    #[test]
    fn test_payload_drops_exactly_once() {
        let tally = DropTally::new();
        {
            let held: Outcome<Token, String> = Outcome::success(tally.token(1));
            assert_eq!(held.value().value, 1);
            assert_eq!(tally.drops(), 0);
        }
        assert_eq!(tally.drops(), 1);

        let moved = Outcome::<Token, String>::success(tally.token(2)).take_value();
        assert_eq!(moved.value, 2);
        assert_eq!(tally.drops(), 1);
        drop(moved);
        assert_eq!(tally.drops(), 2);
    }
}
