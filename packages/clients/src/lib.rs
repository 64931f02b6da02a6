//! Shared client library for the Scooter API types and HTTP client.
//!
//! Types are always available, while HTTP client code is gated behind the
//! `client` feature flag.
//!
//! ## Use of `#[non_exhaustive]`
//!
//! We use `#[non_exhaustive]` on response structs so that users read their
//! fields but construct them only through deserialization. Request payloads
//! (couriers, credentials, queries) are constructed with builders or the
//! `with_*`/`without_*` methods, which always return a new value: fixtures
//! are never mutated in place, so one scenario's negative variant cannot leak
//! into another.

pub mod scooter;

/// The latest Scooter client version.
#[cfg(feature = "client")]
pub type Scooter = scooter::v1::Client;

/// Scooter v1 client.
#[cfg(feature = "client")]
pub type ScooterV1 = scooter::v1::Client;
