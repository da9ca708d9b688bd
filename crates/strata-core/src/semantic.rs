//! Semantic model of a parsed Strata diagram.
//!
//! A [`Diagram`] holds three ordered sequences built fresh from the input
//! text on every parse: [`Node`]s, [`Connection`]s and [`AnimationPair`]s.
//! Node labels are the join key used by layout and rendering; nothing in
//! this module validates that connection endpoints refer to declared
//! nodes, since dangling references are dropped later by the renderer.

use std::fmt;

use crate::connector::{Connector, ConnectorStyle};

/// Prefix of the type tags that place a node on a tier.
pub const TIER_TAG_PREFIX: &str = "LAYER";

/// The vertical band a node belongs to, taken from its `LAYER<n>` tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Tier(u32);

impl Tier {
    /// Creates a tier from its number.
    pub fn new(number: u32) -> Self {
        Self(number)
    }

    /// Returns the tier number.
    pub fn number(self) -> u32 {
        self.0
    }

    /// Extracts the tier from a node type tag.
    ///
    /// The tag must start with `LAYER`; every ASCII digit in the tag is
    /// then concatenated, so `LAYER12` is tier 12 rather than 1 or 2.
    /// Tags with no digits (or too many to fit) yield `None`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use strata_core::semantic::Tier;
    /// assert_eq!(Tier::from_type_tag("LAYER3"), Some(Tier::new(3)));
    /// assert_eq!(Tier::from_type_tag("LAYER12"), Some(Tier::new(12)));
    /// assert_eq!(Tier::from_type_tag("EC2"), None);
    /// ```
    pub fn from_type_tag(type_tag: &str) -> Option<Self> {
        if !type_tag.starts_with(TIER_TAG_PREFIX) {
            return None;
        }

        let digits: String = type_tag.chars().filter(char::is_ascii_digit).collect();
        digits.parse().ok().map(Self)
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", TIER_TAG_PREFIX, self.0)
    }
}

/// A declared node: a type tag and a unique label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    type_tag: String,
    label: String,
}

impl Node {
    pub fn new(type_tag: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            type_tag: type_tag.into(),
            label: label.into(),
        }
    }

    /// Returns the type tag, e.g. `LAYER2`.
    pub fn type_tag(&self) -> &str {
        &self.type_tag
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    /// Returns the tier encoded in the type tag, if any.
    pub fn tier(&self) -> Option<Tier> {
        Tier::from_type_tag(&self.type_tag)
    }
}

/// A directed connection between two node labels.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Connection {
    source: String,
    target: String,
    connector: Connector,
}

impl Connection {
    pub fn new(source: impl Into<String>, target: impl Into<String>, connector: Connector) -> Self {
        Self {
            source: source.into(),
            target: target.into(),
            connector,
        }
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn target(&self) -> &str {
        &self.target
    }

    /// Returns the connector symbol the connection was declared with.
    pub fn connector(&self) -> Connector {
        self.connector
    }

    /// Shorthand for `self.connector().style()`.
    pub fn style(&self) -> ConnectorStyle {
        self.connector.style()
    }
}

/// Marks the connection between two labels as highlighted.
///
/// The pair is unordered: `(a, b)` highlights a connection declared as
/// `a → b` as well as one declared as `b → a`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnimationPair {
    source: String,
    target: String,
}

impl AnimationPair {
    pub fn new(source: impl Into<String>, target: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            target: target.into(),
        }
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn target(&self) -> &str {
        &self.target
    }

    /// Returns `true` if this pair names the given endpoints in either order.
    pub fn matches(&self, source: &str, target: &str) -> bool {
        (self.source == source && self.target == target)
            || (self.source == target && self.target == source)
    }
}

/// A parsed diagram.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Diagram {
    nodes: Vec<Node>,
    connections: Vec<Connection>,
    animations: Vec<AnimationPair>,
}

impl Diagram {
    pub fn new(
        nodes: Vec<Node>,
        connections: Vec<Connection>,
        animations: Vec<AnimationPair>,
    ) -> Self {
        Self {
            nodes,
            connections,
            animations,
        }
    }

    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    pub fn connections(&self) -> &[Connection] {
        &self.connections
    }

    pub fn animations(&self) -> &[AnimationPair] {
        &self.animations
    }

    /// Returns `true` if no records of any kind were parsed.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty() && self.connections.is_empty() && self.animations.is_empty()
    }

    /// Returns `true` if any animation pair matches the connection's endpoints.
    pub fn is_highlighted(&self, connection: &Connection) -> bool {
        self.animations
            .iter()
            .any(|pair| pair.matches(connection.source(), connection.target()))
    }

    pub fn push_node(&mut self, node: Node) {
        self.nodes.push(node);
    }

    pub fn push_connection(&mut self, connection: Connection) {
        self.connections.push(connection);
    }

    pub fn push_animation(&mut self, pair: AnimationPair) {
        self.animations.push(pair);
    }
}
