//! Courier endpoints.

mod create;
mod login;
