//! Hotelboard library.
//!
//! Exposes the validated board container, its XML and JSON snapshots, and
//! the command/session layer used by the driver binary.

pub mod board;
pub mod config;
pub mod protocol;
pub mod session;
