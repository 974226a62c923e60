//! Message capabilities and identifiers.
//!
//! A message type opts into dispatch by implementing the [`Message`] marker.
//! Types that can name themselves for routing additionally implement
//! [`HasMessageName`], carrying the name as a compile-time constant so no
//! instance is ever needed to learn it.
//!
//! Both impls are usually generated with `#[derive(Message)]`:
//!
//! ```ignore
//! use buswire::Message;
//!
//! #[derive(Message)]
//! #[message(name = "shop.order.placed")]
//! struct OrderPlaced {
//!     order_id: String,
//! }
//! ```

use std::fmt;

use serde::Deserialize;

/// Marker trait: this type is a dispatchable message.
///
/// Carrying the marker alone is enough to be accepted by a handler; routing
/// by inference additionally requires [`HasMessageName`].
pub trait Message {}

/// Capability: this message type names itself for routing.
pub trait HasMessageName: Message {
    /// The routing identifier for this message type.
    const MESSAGE_NAME: &'static str;
}

/// A message identifier — the string key a routing table is indexed by.
///
/// Produced either from explicit configuration or from a message type's
/// [`HasMessageName::MESSAGE_NAME`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Deserialize)]
#[serde(transparent)]
pub struct MessageName(String);

impl MessageName {
    /// The identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether the identifier is empty. Empty names never produce routes.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The identifier of a self-naming message type.
    pub fn of<M: HasMessageName>() -> Self {
        MessageName(M::MESSAGE_NAME.to_string())
    }
}

impl fmt::Display for MessageName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for MessageName {
    fn from(name: String) -> Self {
        MessageName(name)
    }
}

impl From<&str> for MessageName {
    fn from(name: &str) -> Self {
        MessageName(name.to_string())
    }
}
