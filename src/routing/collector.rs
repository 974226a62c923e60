//! Handler registration records and message-name collection.
//!
//! A `HandlerRegistration` declares, at registration time, which message
//! types a handler accepts — the compile-time replacement for inspecting
//! handler method signatures at runtime. Collection then resolves the
//! registration into the set of message names the handler is routed for.
//!
//! ## Example
//!
//! ```ignore
//! use buswire::HandlerRegistration;
//!
//! // Inferred from accepted message types:
//! let reg = HandlerRegistration::new("app.order_handler")
//!     .accepts::<PlaceOrder>()
//!     .accepts::<CancelOrder>();
//!
//! // Or declared explicitly, bypassing inference:
//! let reg = HandlerRegistration::new("app.order_handler")
//!     .with_message("shop.order.place");
//! ```

use crate::message::{HasMessageName, Message, MessageName};

use super::table::ServiceId;

/// Compile-time descriptor of one message type a handler accepts.
#[derive(Debug, Clone)]
pub struct AcceptedMessage {
    type_name: &'static str,
    message_name: Option<&'static str>,
}

impl AcceptedMessage {
    /// Descriptor for a self-naming message type.
    pub fn named<M: HasMessageName>() -> Self {
        Self {
            type_name: std::any::type_name::<M>(),
            message_name: Some(M::MESSAGE_NAME),
        }
    }

    /// Descriptor for a message type without the self-naming capability.
    ///
    /// Such a declaration derives no identifier — the handler is only
    /// routed for it if an explicit message name is configured.
    pub fn unnamed<M: Message>() -> Self {
        Self {
            type_name: std::any::type_name::<M>(),
            message_name: None,
        }
    }

    /// The Rust type name, for diagnostics.
    pub fn type_name(&self) -> &'static str {
        self.type_name
    }

    /// The derivable message name, if the type has one.
    pub fn message_name(&self) -> Option<&'static str> {
        self.message_name
    }
}

/// One handler's declaration record: its service handle, an optional
/// explicit message name, and the message types it accepts.
#[derive(Debug, Clone)]
pub struct HandlerRegistration {
    service: ServiceId,
    message: Option<MessageName>,
    accepts: Vec<AcceptedMessage>,
}

impl HandlerRegistration {
    /// Start a registration record for the given service handle.
    pub fn new(service: impl Into<ServiceId>) -> Self {
        Self {
            service: service.into(),
            message: None,
            accepts: Vec::new(),
        }
    }

    /// Declare an explicit message name.
    ///
    /// An explicit name bypasses inference entirely: the handler is routed
    /// for exactly this name, and accepted-type declarations are ignored.
    pub fn with_message(mut self, name: impl Into<MessageName>) -> Self {
        self.message = Some(name.into());
        self
    }

    /// Declare that the handler accepts a self-naming message type.
    pub fn accepts<M: HasMessageName>(mut self) -> Self {
        self.accepts.push(AcceptedMessage::named::<M>());
        self
    }

    /// Declare that the handler accepts a message type without the
    /// self-naming capability. Contributes no inferred name.
    pub fn accepts_unnamed<M: Message>(mut self) -> Self {
        self.accepts.push(AcceptedMessage::unnamed::<M>());
        self
    }

    /// The handler's service handle.
    pub fn service(&self) -> &ServiceId {
        &self.service
    }

    /// The accepted-message declarations, in declared order.
    pub fn accepted(&self) -> &[AcceptedMessage] {
        &self.accepts
    }

    /// Resolve the message names this handler is routed for.
    ///
    /// With an explicit name: exactly that name. Otherwise, every derivable
    /// name from the accepted-type declarations, in declared order,
    /// deduplicated, with empty names dropped. Declarations without a
    /// derivable name are skipped silently. An empty result is valid —
    /// the handler simply contributes no routes.
    pub fn message_names(&self) -> Vec<MessageName> {
        if let Some(explicit) = &self.message {
            return vec![explicit.clone()];
        }

        let mut names: Vec<MessageName> = Vec::new();
        for accepted in &self.accepts {
            let Some(raw) = accepted.message_name else {
                continue;
            };
            if raw.is_empty() {
                continue;
            }
            let name = MessageName::from(raw);
            if !names.contains(&name) {
                names.push(name);
            }
        }
        names
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct OrderPlaced;

    impl Message for OrderPlaced {}

    impl HasMessageName for OrderPlaced {
        const MESSAGE_NAME: &'static str = "OrderPlaced";
    }

    struct OrderShipped;

    impl Message for OrderShipped {}

    impl HasMessageName for OrderShipped {
        const MESSAGE_NAME: &'static str = "OrderShipped";
    }

    // A dispatchable message with no self-describing name.
    struct RawPayload;

    impl Message for RawPayload {}

    // A message type whose name constant is degenerate.
    struct Nameless;

    impl Message for Nameless {}

    impl HasMessageName for Nameless {
        const MESSAGE_NAME: &'static str = "";
    }

    #[test]
    fn explicit_name_bypasses_inference() {
        let reg = HandlerRegistration::new("app.handler")
            .with_message("shop.order.place")
            .accepts::<OrderPlaced>()
            .accepts::<OrderShipped>();

        assert_eq!(
            reg.message_names(),
            vec![MessageName::from("shop.order.place")]
        );
    }

    #[test]
    fn inference_collects_named_and_skips_unnamed() {
        let reg = HandlerRegistration::new("app.handler")
            .accepts::<OrderPlaced>()
            .accepts_unnamed::<RawPayload>();

        assert_eq!(reg.message_names(), vec![MessageName::from("OrderPlaced")]);
    }

    #[test]
    fn inference_dedups_and_keeps_declared_order() {
        let reg = HandlerRegistration::new("app.handler")
            .accepts::<OrderShipped>()
            .accepts::<OrderPlaced>()
            .accepts::<OrderShipped>();

        assert_eq!(
            reg.message_names(),
            vec![
                MessageName::from("OrderShipped"),
                MessageName::from("OrderPlaced"),
            ]
        );
    }

    #[test]
    fn empty_derived_name_is_dropped() {
        let reg = HandlerRegistration::new("app.handler").accepts::<Nameless>();
        assert!(reg.message_names().is_empty());
    }

    #[test]
    fn no_declarations_is_not_an_error() {
        let reg = HandlerRegistration::new("app.handler");
        assert!(reg.message_names().is_empty());
    }

    #[test]
    fn descriptor_exposes_type_name() {
        let reg = HandlerRegistration::new("app.handler").accepts_unnamed::<RawPayload>();
        assert!(reg.accepted()[0].type_name().contains("RawPayload"));
        assert_eq!(reg.accepted()[0].message_name(), None);
    }
}
