//! An assembled bus instance.

use super::kind::BusKind;
use super::router::Router;

/// One assembled bus: its identity plus the configuration values passed
/// through verbatim to dispatch infrastructure.
#[derive(Debug, Clone)]
pub struct Bus {
    name: String,
    kind: BusKind,
    message_factory: String,
    plugins: Vec<String>,
    router: Router,
}

impl Bus {
    pub(crate) fn new(
        name: String,
        kind: BusKind,
        message_factory: String,
        plugins: Vec<String>,
        router: Router,
    ) -> Self {
        Self {
            name,
            kind,
            message_factory,
            plugins,
            router,
        }
    }

    /// The bus's configured name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The bus's kind.
    pub fn kind(&self) -> BusKind {
        self.kind
    }

    /// The message factory service. Passed through verbatim.
    pub fn message_factory(&self) -> &str {
        &self.message_factory
    }

    /// The plugin services, in configured order. Passed through verbatim.
    pub fn plugins(&self) -> &[String] {
        &self.plugins
    }

    /// The bus's router, holding the finalized routing table.
    pub fn router(&self) -> &Router {
        &self.router
    }
}
