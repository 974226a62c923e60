//! Error types for bus assembly.

use std::error::Error;
use std::fmt;

use crate::bus::BusKind;
use crate::routing::ServiceId;

/// Error type for assembly operations.
#[derive(Debug)]
pub enum AssemblyError {
    /// A handler was registered for a bus name that exists in no kind's
    /// configuration. Fatal: continuing would silently drop routes.
    UnknownBus { bus: String, service: ServiceId },
    /// The same bus name is configured under two kinds. Fatal: routing
    /// tables are scoped to one bus, and registrations target buses by
    /// name alone.
    DuplicateBus {
        bus: String,
        first: BusKind,
        second: BusKind,
    },
    /// Configuration failed to parse.
    Config(serde_json::Error),
}

impl fmt::Display for AssemblyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AssemblyError::UnknownBus { bus, service } => write!(
                f,
                "handler {} is registered for bus {}, but no such bus is configured",
                service, bus
            ),
            AssemblyError::DuplicateBus { bus, first, second } => write!(
                f,
                "bus name {} is configured as both a {} bus and a {} bus; bus names must be unique across kinds",
                bus, first, second
            ),
            AssemblyError::Config(e) => write!(f, "configuration error: {}", e),
        }
    }
}

impl Error for AssemblyError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            AssemblyError::Config(e) => Some(e),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for AssemblyError {
    fn from(err: serde_json::Error) -> Self {
        AssemblyError::Config(err)
    }
}
