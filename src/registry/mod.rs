//! Bus assembly — folding registrations into routed buses.
//!
//! `ServiceBusBuilder` accumulates configuration plus handler
//! registrations, then `assemble()` runs the routing pass once: for every
//! configured bus, it seeds a routing table from configuration, folds in
//! every registration targeting that bus (in registration order), and
//! installs the finalized table into the bus's router. The result is an
//! immutable [`ServiceBus`].
//!
//! ## Example
//!
//! ```ignore
//! use buswire::{HandlerRegistration, ServiceBusBuilder, ServiceBusConfig};
//!
//! let config = ServiceBusConfig::from_json(r#"{
//!     "command_buses": { "main": {} },
//!     "event_buses": { "domain_events": {} }
//! }"#)?;
//!
//! let service_bus = ServiceBusBuilder::new(config)
//!     .route_target("main", HandlerRegistration::new("app.order_handler")
//!         .accepts::<PlaceOrder>())
//!     .route_target("domain_events", HandlerRegistration::new("app.mailer")
//!         .accepts::<OrderPlaced>())
//!     .assemble()?;
//!
//! let main = service_bus.bus("main").unwrap();
//! ```

mod error;

use std::collections::HashMap;

use crate::bus::{Bus, BusKind, Router};
use crate::config::ServiceBusConfig;
use crate::routing::{HandlerRegistration, RoutingTable};

pub use error::AssemblyError;

/// Builder that accumulates handler registrations against configured buses.
///
/// Registration order is preserved and is the order the routing pass
/// processes handlers in; for command/query buses the last registration
/// for a message wins.
pub struct ServiceBusBuilder {
    config: ServiceBusConfig,
    registrations: Vec<(String, HandlerRegistration)>,
}

impl ServiceBusBuilder {
    /// Start a builder from parsed configuration.
    pub fn new(config: ServiceBusConfig) -> Self {
        Self {
            config,
            registrations: Vec::new(),
        }
    }

    /// Start a builder from a JSON configuration document.
    pub fn from_json(json: &str) -> Result<Self, AssemblyError> {
        Ok(Self::new(ServiceBusConfig::from_json(json)?))
    }

    /// Register a handler or listener as a route target for the named bus.
    ///
    /// Uses builder pattern — returns `self` for chaining.
    pub fn route_target(mut self, bus: &str, registration: HandlerRegistration) -> Self {
        self.registrations.push((bus.to_string(), registration));
        self
    }

    /// Run the routing pass and produce the assembled service bus.
    ///
    /// Bus kinds with nothing configured are skipped. Two configurations
    /// are fatal: a registration targeting a bus name that exists in no
    /// kind's configuration (the error reports the service id and bus
    /// name), and the same bus name configured under two kinds.
    pub fn assemble(self) -> Result<ServiceBus, AssemblyError> {
        let mut buses: HashMap<String, Bus> = HashMap::new();
        let mut matched = vec![false; self.registrations.len()];

        for kind in BusKind::ALL {
            let configured = self.config.buses_of(kind);
            if configured.is_empty() {
                continue;
            }

            for (name, bus_config) in configured {
                // Registrations target buses by name alone, so a name
                // shared between two kinds cannot be routed unambiguously.
                if let Some(existing) = buses.get(name) {
                    return Err(AssemblyError::DuplicateBus {
                        bus: name.clone(),
                        first: existing.kind(),
                        second: kind,
                    });
                }

                let mut table = RoutingTable::new(kind);

                // Routes pre-seeded from configuration come first, so
                // registrations can override them on command/query buses.
                for (message, target) in &bus_config.router.routes {
                    for service in target.services() {
                        table.insert(message.clone(), service);
                    }
                }

                for (index, (target_bus, registration)) in self.registrations.iter().enumerate() {
                    if target_bus != name {
                        continue;
                    }
                    matched[index] = true;
                    for message in registration.message_names() {
                        table.insert(message, registration.service().clone());
                    }
                }

                let router = Router::new(
                    table,
                    bus_config.router.router_type(kind),
                    bus_config.router.async_switch(),
                );
                buses.insert(
                    name.clone(),
                    Bus::new(
                        name.clone(),
                        kind,
                        bus_config.message_factory(),
                        bus_config.plugins(),
                        router,
                    ),
                );
            }
        }

        for (index, (target_bus, registration)) in self.registrations.iter().enumerate() {
            if !matched[index] {
                return Err(AssemblyError::UnknownBus {
                    bus: target_bus.clone(),
                    service: registration.service().clone(),
                });
            }
        }

        Ok(ServiceBus { buses })
    }
}

/// The assembled service bus: every configured bus, routed and immutable.
#[derive(Debug, Clone)]
pub struct ServiceBus {
    buses: HashMap<String, Bus>,
}

impl ServiceBus {
    /// Look up a bus by name.
    pub fn bus(&self, name: &str) -> Option<&Bus> {
        self.buses.get(name)
    }

    /// Iterate all buses. Order is unspecified.
    pub fn iter(&self) -> impl Iterator<Item = &Bus> {
        self.buses.values()
    }

    /// Iterate the buses of one kind.
    pub fn of_kind(&self, kind: BusKind) -> impl Iterator<Item = &Bus> {
        self.buses.values().filter(move |bus| bus.kind() == kind)
    }

    /// Number of assembled buses.
    pub fn len(&self) -> usize {
        self.buses.len()
    }

    /// Whether nothing was configured.
    pub fn is_empty(&self) -> bool {
        self.buses.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::message::{HasMessageName, Message, MessageName};
    use crate::routing::{RouteEntry, ServiceId};

    struct PlaceOrder;

    impl Message for PlaceOrder {}

    impl HasMessageName for PlaceOrder {
        const MESSAGE_NAME: &'static str = "PlaceOrder";
    }

    fn config(json: &str) -> ServiceBusConfig {
        ServiceBusConfig::from_json(json).unwrap()
    }

    #[test]
    fn empty_config_assembles_to_nothing() {
        let service_bus = ServiceBusBuilder::new(ServiceBusConfig::default())
            .assemble()
            .unwrap();
        assert!(service_bus.is_empty());
    }

    #[test]
    fn registration_routes_into_configured_bus() {
        let service_bus = ServiceBusBuilder::new(config(r#"{ "command_buses": { "main": {} } }"#))
            .route_target("main", HandlerRegistration::new("app.handler").accepts::<PlaceOrder>())
            .assemble()
            .unwrap();

        let bus = service_bus.bus("main").unwrap();
        assert_eq!(bus.kind(), BusKind::Command);
        assert_eq!(
            bus.router().route(&MessageName::from("PlaceOrder")),
            Some(&RouteEntry::Handler(ServiceId::from("app.handler")))
        );
    }

    #[test]
    fn registration_overrides_seeded_route() {
        let service_bus = ServiceBusBuilder::new(config(
            r#"{
                "command_buses": {
                    "main": { "router": { "routes": { "PlaceOrder": "@app.default" } } }
                }
            }"#,
        ))
        .route_target("main", HandlerRegistration::new("app.override").accepts::<PlaceOrder>())
        .assemble()
        .unwrap();

        assert_eq!(
            service_bus.bus("main").unwrap().router().route(&MessageName::from("PlaceOrder")),
            Some(&RouteEntry::Handler(ServiceId::from("app.override")))
        );
    }

    #[test]
    fn unknown_bus_is_fatal_and_names_the_offender() {
        let err = ServiceBusBuilder::new(config(r#"{ "command_buses": { "main": {} } }"#))
            .route_target("missing", HandlerRegistration::new("app.handler"))
            .assemble()
            .unwrap_err();

        let message = err.to_string();
        assert!(message.contains("app.handler"));
        assert!(message.contains("missing"));
    }

    #[test]
    fn duplicate_bus_name_across_kinds_is_rejected() {
        let err = ServiceBusBuilder::new(config(
            r#"{
                "command_buses": { "main": {} },
                "event_buses": { "main": {} }
            }"#,
        ))
        .route_target("main", HandlerRegistration::new("app.handler").accepts::<PlaceOrder>())
        .assemble()
        .unwrap_err();

        match err {
            AssemblyError::DuplicateBus { bus, first, second } => {
                assert_eq!(bus, "main");
                assert_eq!(first, BusKind::Command);
                assert_eq!(second, BusKind::Event);
            }
            other => panic!("expected a duplicate-bus error, got {:?}", other),
        }
    }

    #[test]
    fn defaults_are_applied_per_kind() {
        let service_bus = ServiceBusBuilder::new(config(
            r#"{ "query_buses": { "queries": {} } }"#,
        ))
        .assemble()
        .unwrap();

        let bus = service_bus.bus("queries").unwrap();
        assert_eq!(bus.message_factory(), "message_factory");
        assert_eq!(bus.router().router_type(), "query_bus_router");
        assert_eq!(bus.router().async_switch(), None);
    }
}
