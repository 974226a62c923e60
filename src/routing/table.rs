//! Routing tables and the per-kind merge policy.

use std::collections::HashMap;
use std::fmt;

use serde::Deserialize;

use crate::bus::BusKind;
use crate::message::MessageName;

/// An opaque handle to a registered handler or listener service.
///
/// Carries no behavior here — it is only a lookup key the runtime router
/// resolves against its service registry.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Deserialize)]
#[serde(transparent)]
pub struct ServiceId(String);

impl ServiceId {
    /// The handle as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ServiceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for ServiceId {
    fn from(id: String) -> Self {
        ServiceId(id)
    }
}

impl From<&str> for ServiceId {
    fn from(id: &str) -> Self {
        ServiceId(id.to_string())
    }
}

/// The payload of one routing-table slot.
///
/// Command and query buses route each message to exactly one handler;
/// event buses route to a deduplicated set of listeners.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RouteEntry {
    /// Single handler (command/query buses).
    Handler(ServiceId),
    /// Listener set (event buses).
    Listeners(Vec<ServiceId>),
}

impl RouteEntry {
    /// All services in this entry, in stored order.
    pub fn services(&self) -> &[ServiceId] {
        match self {
            RouteEntry::Handler(id) => std::slice::from_ref(id),
            RouteEntry::Listeners(ids) => ids,
        }
    }
}

/// The finalized message-to-handler mapping for one bus.
///
/// Built once during assembly and installed into the bus's router; never
/// mutated afterwards. The merge policy is kind-specific:
///
/// - command/query: inserting a message that already has a handler replaces
///   it — the last writer wins, silently. Deliberate: it lets a handler
///   registration override a route pre-seeded from configuration.
/// - event: inserting appends to the message's listener set; a listener
///   already present is not added again.
#[derive(Debug, Clone)]
pub struct RoutingTable {
    kind: BusKind,
    routes: HashMap<MessageName, RouteEntry>,
}

impl RoutingTable {
    /// Create an empty table for a bus of the given kind.
    pub fn new(kind: BusKind) -> Self {
        Self {
            kind,
            routes: HashMap::new(),
        }
    }

    /// The kind of bus this table routes for.
    pub fn kind(&self) -> BusKind {
        self.kind
    }

    /// Insert one (message, service) pair under the kind's merge policy.
    ///
    /// Empty message names are dropped without creating an entry.
    pub fn insert(&mut self, name: MessageName, service: ServiceId) {
        if name.is_empty() {
            return;
        }
        if self.kind.accumulates() {
            let entry = self
                .routes
                .entry(name)
                .or_insert_with(|| RouteEntry::Listeners(Vec::new()));
            if let RouteEntry::Listeners(listeners) = entry {
                if !listeners.contains(&service) {
                    listeners.push(service);
                }
            }
        } else {
            self.routes.insert(name, RouteEntry::Handler(service));
        }
    }

    /// Insert a sequence of pairs in order.
    pub fn extend<I>(&mut self, pairs: I)
    where
        I: IntoIterator<Item = (MessageName, ServiceId)>,
    {
        for (name, service) in pairs {
            self.insert(name, service);
        }
    }

    /// Look up the route for a message.
    pub fn route(&self, name: &MessageName) -> Option<&RouteEntry> {
        self.routes.get(name)
    }

    /// Iterate all (message, entry) pairs. Order is unspecified.
    pub fn iter(&self) -> impl Iterator<Item = (&MessageName, &RouteEntry)> {
        self.routes.iter()
    }

    /// Number of routed message names.
    pub fn len(&self) -> usize {
        self.routes.len()
    }

    /// Whether the table routes nothing.
    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }
}
