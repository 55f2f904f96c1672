//! Session log, CSV export, and the tick source.
//!
//! # Architecture
//!
//! - [`SessionLog`] — append-only event sequence + `to_csv()` exporter
//! - [`Ticker`] — cancellable 1 Hz tick source on the tokio runtime

pub mod log;
pub mod ticker;

pub use log::SessionLog;
pub use ticker::Ticker;
