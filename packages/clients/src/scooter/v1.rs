//! Scooter v1 API types and client.
//!
//! Endpoints are addressed relative to the API root (for example
//! `https://qa-scooter.praktikum-services.ru/api/v1/`):
//!
//! | Operation | Method | Path           |
//! |-----------|--------|----------------|
//! | create    | POST   | `courier`      |
//! | login     | POST   | `courier/login`|
//! | delete    | DELETE | `courier/{id}` |
//! | list      | GET    | `orders`       |

pub mod courier;
pub mod message;
pub mod order;
pub mod response;

#[cfg(feature = "client")]
mod client;

#[cfg(feature = "client")]
pub use client::{Client, CourierClient, OrderClient};

pub use courier::{Courier, CourierCredentials, CourierId};
pub use order::{Order, OrderList, OrderListQuery, PageInfo};
pub use response::{ApiResponse, Outcome};
