//! Observability for rosterd.
//!
//! Structured JSON logging only: one line per event, synchronous, no
//! buffering, deterministic field ordering. Logging never affects request
//! outcomes.

mod logger;

pub use logger::{Logger, Severity};
