//! Configuration schema for buses.
//!
//! Format-agnostic serde types; [`ServiceBusConfig::from_json`] is the
//! built-in convenience, but any serde deserializer works. Service
//! references may be written with a leading `@` (configuration-file
//! convention); the prefix is stripped wherever the value is consumed.
//!
//! ## Example (JSON)
//!
//! ```ignore
//! {
//!   "command_buses": {
//!     "main": {
//!       "router": {
//!         "routes": { "PlaceOrder": "@app.place_order_handler" }
//!       }
//!     }
//!   },
//!   "event_buses": {
//!     "domain_events": {
//!       "plugins": "@app.audit_plugin",
//!       "router": {
//!         "routes": { "OrderPlaced": ["@app.mailer", "@app.projector"] }
//!       }
//!     }
//!   }
//! }
//! ```

use std::collections::BTreeMap;

use serde::Deserialize;

use crate::bus::BusKind;
use crate::message::MessageName;
use crate::routing::ServiceId;

/// Strip the `@service` reference prefix used in configuration files.
pub(crate) fn strip_service_ref(value: &str) -> &str {
    value.strip_prefix('@').unwrap_or(value)
}

/// Top-level configuration: one map of bus definitions per bus kind.
///
/// A kind with no buses configured is simply skipped during assembly.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ServiceBusConfig {
    pub command_buses: BTreeMap<String, BusConfig>,
    pub query_buses: BTreeMap<String, BusConfig>,
    pub event_buses: BTreeMap<String, BusConfig>,
}

impl ServiceBusConfig {
    /// Parse configuration from a JSON document.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// The bus definitions for one kind, in name order.
    pub fn buses_of(&self, kind: BusKind) -> &BTreeMap<String, BusConfig> {
        match kind {
            BusKind::Command => &self.command_buses,
            BusKind::Query => &self.query_buses,
            BusKind::Event => &self.event_buses,
        }
    }
}

/// Configuration for one bus instance.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct BusConfig {
    /// Message factory service; defaults to `"message_factory"`.
    pub message_factory: Option<String>,
    /// Bus plugins, passed through verbatim to bus construction.
    /// A single string is coerced to a one-element list.
    pub plugins: OneOrMany,
    /// Router configuration.
    pub router: RouterConfig,
}

impl BusConfig {
    /// The message factory service, with the `@` prefix stripped and the
    /// default applied.
    pub fn message_factory(&self) -> String {
        match &self.message_factory {
            Some(service) => strip_service_ref(service).to_string(),
            None => "message_factory".to_string(),
        }
    }

    /// The normalized plugin service list.
    pub fn plugins(&self) -> Vec<String> {
        self.plugins
            .iter()
            .map(|p| strip_service_ref(p).to_string())
            .collect()
    }
}

/// Router configuration for one bus.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RouterConfig {
    /// Router service type; defaults to `"<kind>_bus_router"`.
    #[serde(rename = "type")]
    pub router_type: Option<String>,
    /// Optional async-switch service, passed through verbatim.
    pub async_switch: Option<String>,
    /// Routes pre-seeded from configuration: message name to target(s).
    pub routes: BTreeMap<MessageName, RouteTarget>,
}

impl RouterConfig {
    /// The normalized router type, with the kind default applied.
    pub fn router_type(&self, kind: BusKind) -> String {
        match &self.router_type {
            Some(service) => strip_service_ref(service).to_string(),
            None => format!("{}_bus_router", kind),
        }
    }

    /// The normalized async-switch service, if configured.
    pub fn async_switch(&self) -> Option<String> {
        self.async_switch
            .as_deref()
            .map(|service| strip_service_ref(service).to_string())
    }
}

/// A route's target(s): one service for command/query buses, a listener
/// list for event buses. A single string is accepted for either.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum RouteTarget {
    One(ServiceId),
    Many(Vec<ServiceId>),
}

impl RouteTarget {
    /// The target services with `@` prefixes stripped, in declared order.
    pub fn services(&self) -> Vec<ServiceId> {
        let normalize = |id: &ServiceId| ServiceId::from(strip_service_ref(id.as_str()));
        match self {
            RouteTarget::One(service) => vec![normalize(service)],
            RouteTarget::Many(services) => services.iter().map(normalize).collect(),
        }
    }
}

/// A string-or-list configuration value (single-node coercion).
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum OneOrMany {
    One(String),
    Many(Vec<String>),
}

impl OneOrMany {
    /// Iterate the values in order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        match self {
            OneOrMany::One(value) => std::slice::from_ref(value).iter(),
            OneOrMany::Many(values) => values.iter(),
        }
        .map(|s| s.as_str())
    }
}

impl Default for OneOrMany {
    fn default() -> Self {
        OneOrMany::Many(Vec::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_minimal_config() {
        let config = ServiceBusConfig::from_json(r#"{ "command_buses": { "main": {} } }"#)
            .unwrap();

        let bus = &config.command_buses["main"];
        assert_eq!(bus.message_factory(), "message_factory");
        assert!(bus.plugins().is_empty());
        assert_eq!(bus.router.router_type(BusKind::Command), "command_bus_router");
        assert!(bus.router.routes.is_empty());
        assert!(config.query_buses.is_empty());
        assert!(config.event_buses.is_empty());
    }

    #[test]
    fn strips_service_references() {
        let config = ServiceBusConfig::from_json(
            r#"{
                "event_buses": {
                    "events": {
                        "message_factory": "@app.factory",
                        "plugins": ["@app.plugin_a", "app.plugin_b"],
                        "router": {
                            "type": "@app.router",
                            "async_switch": "@app.switch",
                            "routes": { "OrderPlaced": ["@app.mailer", "app.projector"] }
                        }
                    }
                }
            }"#,
        )
        .unwrap();

        let bus = &config.event_buses["events"];
        assert_eq!(bus.message_factory(), "app.factory");
        assert_eq!(bus.plugins(), vec!["app.plugin_a", "app.plugin_b"]);
        assert_eq!(bus.router.router_type(BusKind::Event), "app.router");
        assert_eq!(bus.router.async_switch().as_deref(), Some("app.switch"));
        assert_eq!(
            bus.router.routes[&MessageName::from("OrderPlaced")].services(),
            vec![ServiceId::from("app.mailer"), ServiceId::from("app.projector")]
        );
    }

    #[test]
    fn coerces_single_values_to_lists() {
        let config = ServiceBusConfig::from_json(
            r#"{
                "event_buses": {
                    "events": {
                        "plugins": "@app.only_plugin",
                        "router": { "routes": { "UserRegistered": "@app.mailer" } }
                    }
                }
            }"#,
        )
        .unwrap();

        let bus = &config.event_buses["events"];
        assert_eq!(bus.plugins(), vec!["app.only_plugin"]);
        assert_eq!(
            bus.router.routes[&MessageName::from("UserRegistered")].services(),
            vec![ServiceId::from("app.mailer")]
        );
    }

    #[test]
    fn command_route_is_a_single_service() {
        let config = ServiceBusConfig::from_json(
            r#"{
                "command_buses": {
                    "main": {
                        "router": { "routes": { "PlaceOrder": "@app.place_order_handler" } }
                    }
                }
            }"#,
        )
        .unwrap();

        let routes = &config.command_buses["main"].router.routes;
        assert_eq!(
            routes[&MessageName::from("PlaceOrder")].services(),
            vec![ServiceId::from("app.place_order_handler")]
        );
    }
}
