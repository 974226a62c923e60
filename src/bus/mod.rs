//! Bus kinds, routers, and assembled bus instances.
//!
//! A [`Bus`] is what assembly produces: a named instance of one
//! [`BusKind`] whose [`Router`] holds the finalized routing table.
//! Dispatch itself happens downstream; this module only carries the
//! wiring results.

mod bus;
mod kind;
mod router;

pub use bus::Bus;
pub use kind::{BusKind, UnknownBusKind};
pub use router::Router;
