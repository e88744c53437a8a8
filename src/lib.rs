//! rosterd - a self-hostable student records service
//!
//! REST backend over a single-table record store, with a typed client and
//! CLI front end.

pub mod api;
pub mod cli;
pub mod client;
pub mod config;
pub mod model;
pub mod observability;
pub mod store;
pub mod validate;
