//! Route collection and resolution.
//!
//! Two pieces make up the routing core:
//!
//! - the collector ([`HandlerRegistration::message_names`]): resolves one
//!   handler's declaration record into the message names it handles;
//! - the table ([`RoutingTable`]): folds (message, service) pairs into the
//!   final per-bus mapping under the bus kind's merge policy.
//!
//! Assembly in [`crate::registry`] drives both, once per configured bus.

mod collector;
mod table;

pub use collector::{AcceptedMessage, HandlerRegistration};
pub use table::{RouteEntry, RoutingTable, ServiceId};
