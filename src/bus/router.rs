//! The router handed to each assembled bus.

use crate::message::MessageName;
use crate::routing::{RouteEntry, RoutingTable};

/// A bus's router: the finalized routing table plus the passthrough
/// values dispatch infrastructure consumes (router service type and
/// optional async switch).
///
/// The table is installed once, at assembly, and never mutated afterwards.
/// Actual dispatch is performed by downstream infrastructure resolving
/// `router_type` against its service registry.
#[derive(Debug, Clone)]
pub struct Router {
    table: RoutingTable,
    router_type: String,
    async_switch: Option<String>,
}

impl Router {
    /// Create a router around a finalized routing table.
    pub fn new(table: RoutingTable, router_type: String, async_switch: Option<String>) -> Self {
        Self {
            table,
            router_type,
            async_switch,
        }
    }

    /// The finalized routing table.
    pub fn table(&self) -> &RoutingTable {
        &self.table
    }

    /// Look up the route for a message.
    pub fn route(&self, name: &MessageName) -> Option<&RouteEntry> {
        self.table.route(name)
    }

    /// The router service type (e.g. `"command_bus_router"`).
    pub fn router_type(&self) -> &str {
        &self.router_type
    }

    /// The async-switch service, if configured. Passed through verbatim.
    pub fn async_switch(&self) -> Option<&str> {
        self.async_switch.as_deref()
    }
}
