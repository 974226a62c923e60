//! buswire — assembly-time wiring for message buses.
//!
//! Wires command, query, and event buses together before a system starts
//! dispatching: a serde configuration schema describes the buses, typed
//! handler registrations declare which messages each handler accepts, and
//! a single assembly pass resolves everything into one immutable routing
//! table per bus.
//!
//! ## Overview
//!
//! ```text
//! ┌──────────────────┐   ┌────────────────────────────┐
//! │ ServiceBusConfig │   │ HandlerRegistration        │
//! │ (buses, plugins, │   │ (service id, explicit name │
//! │  seeded routes)  │   │  or accepted message types)│
//! └────────┬─────────┘   └─────────────┬──────────────┘
//!          │                           │
//!          └──────► ServiceBusBuilder ◄┘
//!                         │ assemble()
//!                         ▼
//!                    ServiceBus
//!             (one routed Bus per config
//!              entry, tables immutable)
//! ```
//!
//! Routing semantics: command and query buses map each message name to
//! exactly one handler (last registration wins); event buses accumulate a
//! deduplicated listener set per message name. Message names come from an
//! explicit declaration or from the message type's
//! [`HasMessageName::MESSAGE_NAME`] constant, usually derived:
//!
//! ```ignore
//! use buswire::Message;
//!
//! #[derive(Message)]
//! struct OrderPlaced {
//!     order_id: String,
//! }
//! ```
//!
//! Dispatch itself is out of scope — downstream infrastructure consumes
//! the finalized tables.

mod bus;
mod config;
mod message;
mod registry;
mod routing;

pub use bus::{Bus, BusKind, Router, UnknownBusKind};
pub use config::{BusConfig, OneOrMany, RouteTarget, RouterConfig, ServiceBusConfig};
pub use message::{HasMessageName, Message, MessageName};
pub use registry::{AssemblyError, ServiceBus, ServiceBusBuilder};
pub use routing::{AcceptedMessage, HandlerRegistration, RouteEntry, RoutingTable, ServiceId};

// Re-export the derive macro alongside the trait it implements.
#[cfg(feature = "derive")]
pub use buswire_macros::Message;
