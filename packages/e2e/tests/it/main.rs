//! End-to-end tests for the Scooter API.
//!
//! Each test sets up its own [`e2e::TestEnv`]: against the service named by
//! `SCOOTER_API_URL` when it is set, or against a private in-process fake
//! otherwise. Couriers created inside a scenario are deleted when it ends.

mod client;
mod courier;
mod orders;
mod smoke;
