//! The closed set of bus kinds.

use std::fmt;
use std::str::FromStr;

/// The kind of a configured bus.
///
/// Kinds differ in how routes merge: command and query buses map each
/// message to exactly one handler, event buses to a set of listeners.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BusKind {
    /// One handler per message; dispatch may or may not return a result.
    Command,
    /// One handler per message; dispatch returns a result.
    Query,
    /// Zero or more listeners per message.
    Event,
}

impl BusKind {
    /// Every bus kind, in the order assembly processes them.
    pub const ALL: [BusKind; 3] = [BusKind::Command, BusKind::Query, BusKind::Event];

    /// The kind's configuration token ("command", "query", "event").
    pub fn as_str(&self) -> &'static str {
        match self {
            BusKind::Command => "command",
            BusKind::Query => "query",
            BusKind::Event => "event",
        }
    }

    /// Whether routes for this kind accumulate listener sets rather than
    /// replacing a single handler.
    pub fn accumulates(&self) -> bool {
        matches!(self, BusKind::Event)
    }
}

impl fmt::Display for BusKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BusKind {
    type Err = UnknownBusKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "command" => Ok(BusKind::Command),
            "query" => Ok(BusKind::Query),
            "event" => Ok(BusKind::Event),
            other => Err(UnknownBusKind(other.to_string())),
        }
    }
}

/// Error parsing a bus kind token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownBusKind(pub String);

impl fmt::Display for UnknownBusKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown bus kind: {}", self.0)
    }
}

impl std::error::Error for UnknownBusKind {}
