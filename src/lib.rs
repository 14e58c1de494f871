//! Move-only success-or-failure containers with early-return propagation.
//!
//! [`Outcome`] plays the role of [`std::result::Result`] for pipelines where
//! consuming a result must also spend it: every extracting accessor takes the
//! container by value, so a payload can be moved out exactly once and a
//! failure can never be silently revisited. The companion macros give
//! fallible functions the shape of straight-line code, returning the failure
//! from the enclosing function the moment one shows up.
//!
//! ```
//! use outcome::{assign_or_return, Outcome};
//!
//! fn parse_port(raw: &str) -> Outcome<u16, String> {
//!     match raw.parse::<u16>() {
//!         Ok(port) => Outcome::success(port),
//!         Err(_) => Outcome::failure(format!("'{}' is not a port", raw)),
//!     }
//! }
//!
//! fn port_with_offset(raw: &str, offset: u16) -> Outcome<u16, String> {
//!     assign_or_return!(port: u16, parse_port(raw));
//!     Outcome::success(port + offset)
//! }
//!
//! assert_eq!(port_with_offset("8000", 80), 8080);
//! assert!(port_with_offset("eighty", 80).is_failure());
//! ```
//!
//! Failures cross function boundaries through `Into`, so a callee's error
//! type only has to convert into the caller's. For returning an error without
//! spelling out the whole container type, wrap it with [`fail`].

pub mod compare;
pub mod macros;
pub mod outcome;
pub mod testing;

pub use self::outcome::{fail, Fail, Outcome, Unit};
