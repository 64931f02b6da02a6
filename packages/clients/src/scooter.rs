//! Scooter courier-delivery API.

pub mod v1;
