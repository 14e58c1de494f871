//! Mixed-type equality for [`Outcome`].
//!
//! A success compares equal to its bare value and a failure to its wrapped
//! error, in either order. A blanket `PartialEq<T> for Outcome<T, E>` would
//! overlap the wrapped-error impls whenever `T` is itself a [`Fail`], so the
//! bare-value side is generated per concrete value type instead.

use crate::outcome::{Fail, Outcome};

impl<T, E, E2> PartialEq<Fail<E2>> for Outcome<T, E>
where
    E: PartialEq<E2>,
{
    fn eq(&self, other: &Fail<E2>) -> bool {
        match self {
            Outcome::Success(_) => false,
            Outcome::Failure(error) => error == &other.0,
        }
    }
}

impl<T, E, E2> PartialEq<Outcome<T, E>> for Fail<E2>
where
    E2: PartialEq<E>,
{
    fn eq(&self, other: &Outcome<T, E>) -> bool {
        match other {
            Outcome::Success(_) => false,
            Outcome::Failure(error) => &self.0 == error,
        }
    }
}

macro_rules! implement_value_eq {
    ($($value:ty),* $(,)?) => {
        $(
            impl<E> PartialEq<$value> for Outcome<$value, E> {
                fn eq(&self, other: &$value) -> bool {
                    match self {
                        Outcome::Success(value) => value == other,
                        Outcome::Failure(_) => false,
                    }
                }
            }

            impl<E> PartialEq<Outcome<$value, E>> for $value {
                fn eq(&self, other: &Outcome<$value, E>) -> bool {
                    match other {
                        Outcome::Success(value) => self == value,
                        Outcome::Failure(_) => false,
                    }
                }
            }
        )*
    };
}

implement_value_eq!(
    i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64, bool, char, String,
);

impl<'a, E> PartialEq<&'a str> for Outcome<&'a str, E> {
    fn eq(&self, other: &&'a str) -> bool {
        match self {
            Outcome::Success(value) => value == other,
            Outcome::Failure(_) => false,
        }
    }
}

impl<'a, E> PartialEq<Outcome<&'a str, E>> for &'a str {
    fn eq(&self, other: &Outcome<&'a str, E>) -> bool {
        match other {
            Outcome::Success(value) => self == value,
            Outcome::Failure(_) => false,
        }
    }
}

impl<'a, E> PartialEq<&'a str> for Outcome<String, E> {
    fn eq(&self, other: &&'a str) -> bool {
        match self {
            Outcome::Success(value) => value == other,
            Outcome::Failure(_) => false,
        }
    }
}

impl<'a, E> PartialEq<Outcome<String, E>> for &'a str {
    fn eq(&self, other: &Outcome<String, E>) -> bool {
        match other {
            Outcome::Success(value) => self == value,
            Outcome::Failure(_) => false,
        }
    }
}
