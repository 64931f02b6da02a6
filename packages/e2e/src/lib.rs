//! End-to-end suite for the Scooter courier-delivery API.
//!
//! The pieces a scenario is built from:
//! - [`fixture`] generates valid and deliberately invalid couriers.
//! - [`TestEnv`] holds the configured API client, standing up a
//!   [`FakeService`] when no live environment is configured.
//! - [`Scenario`] runs one scenario and deletes whatever couriers it created
//!   once the body finishes, whether it passed, failed, or panicked.
//!
//! The suite itself lives in `tests/it`.

pub mod config;
pub mod env;
pub mod fake;
pub mod fixture;
pub mod scenario;
pub mod smoke;

pub use config::Config;
pub use env::TestEnv;
pub use fake::FakeService;
pub use scenario::Scenario;
