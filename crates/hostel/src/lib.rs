//! Hostel room allocation: the roster store, the allocation engine, and the
//! read-only views the front desk renders from roster snapshots.

pub mod allocation;
pub mod config;
pub mod error;
pub mod telemetry;
