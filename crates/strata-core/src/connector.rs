//! Connector symbols and the visual style each one selects.
//!
//! A connection line in the `[diagram connection]` section names its
//! style with a short symbol such as `~>` or `to>`. [`Connector`] is the
//! closed set of recognised symbols and [`ConnectorStyle`] the fixed style
//! table behind them:
//!
//! | symbol | family | arrowhead | dash | period |
//! |---|---|---|---|---|
//! | `~~` | curved | no | no | 8s |
//! | `~>` | curved | yes | no | 6s |
//! | `==` | straight | no | no | 6s |
//! | `=>` | straight | yes | no | 4s |
//! | `--` | dashed | no | yes | 2s |
//! | `->` | dashed | yes | yes | 2s |
//! | `" to "` | solid | no | no | - |
//! | `to>` | solid | yes | no | - |
//! | `>>` | flowing-dash | yes | yes | 1s |
//!
//! Anything else renders with the `>>` row.

use std::fmt;

/// A recognised connector symbol.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Connector {
    /// `~~`
    Wave,
    /// `~>`
    WaveArrow,
    /// `==`
    Double,
    /// `=>`
    DoubleArrow,
    /// `--`
    Dash,
    /// `->`
    DashArrow,
    /// `to>`
    ToArrow,
    /// `" to>"`, a spaced spelling of `to>` that has no row of its own in
    /// the style table
    SpacedToArrow,
    /// `" to "`
    To,
    /// `>>`, also the fallback for unrecognised symbols
    #[default]
    Flow,
}

impl Connector {
    /// Symbols in the order a line is tested against them.
    ///
    /// The first symbol contained in a line wins, even when another symbol
    /// occurs earlier in the text.
    pub const PRIORITY: [Connector; 10] = [
        Connector::Wave,
        Connector::WaveArrow,
        Connector::Double,
        Connector::DoubleArrow,
        Connector::Dash,
        Connector::DashArrow,
        Connector::ToArrow,
        Connector::SpacedToArrow,
        Connector::To,
        Connector::Flow,
    ];

    /// Returns the literal text of this connector.
    pub fn symbol(self) -> &'static str {
        match self {
            Self::Wave => "~~",
            Self::WaveArrow => "~>",
            Self::Double => "==",
            Self::DoubleArrow => "=>",
            Self::Dash => "--",
            Self::DashArrow => "->",
            Self::ToArrow => "to>",
            Self::SpacedToArrow => " to>",
            Self::To => " to ",
            Self::Flow => ">>",
        }
    }

    /// Looks up a connector by its exact symbol text.
    pub fn from_symbol(symbol: &str) -> Option<Self> {
        Self::PRIORITY.into_iter().find(|c| c.symbol() == symbol)
    }

    /// Looks up a connector by symbol, falling back to [`Connector::Flow`].
    pub fn from_symbol_or_default(symbol: &str) -> Self {
        Self::from_symbol(symbol).unwrap_or_default()
    }

    /// Returns the visual style selected by this connector.
    pub fn style(self) -> ConnectorStyle {
        use CurveFamily::*;

        match self {
            Self::Wave => ConnectorStyle::new(Curved, false, false, Some(8)),
            Self::WaveArrow => ConnectorStyle::new(Curved, true, false, Some(6)),
            Self::Double => ConnectorStyle::new(Straight, false, false, Some(6)),
            Self::DoubleArrow => ConnectorStyle::new(Straight, true, false, Some(4)),
            Self::Dash => ConnectorStyle::new(Dashed, false, true, Some(2)),
            Self::DashArrow => ConnectorStyle::new(Dashed, true, true, Some(2)),
            Self::To => ConnectorStyle::new(Solid, false, false, None),
            Self::ToArrow => ConnectorStyle::new(Solid, true, false, None),
            Self::SpacedToArrow | Self::Flow => ConnectorStyle::FLOW,
        }
    }
}

impl fmt::Display for Connector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// How a connection is drawn and animated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CurveFamily {
    /// Quadratic curve with a pulsing opacity animation.
    Curved,
    /// Straight line with a pulsing opacity animation.
    Straight,
    /// Dashed line whose dash offset is animated.
    Dashed,
    /// Plain static line.
    Solid,
    /// Dashed line driven by the `dash` CSS keyframes.
    FlowingDash,
}

impl CurveFamily {
    /// Returns a human-readable name for this family.
    pub fn name(self) -> &'static str {
        match self {
            Self::Curved => "curved",
            Self::Straight => "straight",
            Self::Dashed => "dashed",
            Self::Solid => "solid",
            Self::FlowingDash => "flowing-dash",
        }
    }

    /// Returns `true` for families drawn under the gradient-mask sweep.
    pub fn is_swept(self) -> bool {
        matches!(self, Self::Curved | Self::Straight)
    }
}

/// A row of the connector style table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ConnectorStyle {
    family: CurveFamily,
    arrow: bool,
    dashed: bool,
    period_secs: Option<u32>,
}

impl ConnectorStyle {
    /// The default row, used by `>>` and every unrecognised symbol.
    pub const FLOW: ConnectorStyle =
        ConnectorStyle::new(CurveFamily::FlowingDash, true, true, Some(1));

    const fn new(
        family: CurveFamily,
        arrow: bool,
        dashed: bool,
        period_secs: Option<u32>,
    ) -> Self {
        Self {
            family,
            arrow,
            dashed,
            period_secs,
        }
    }

    pub fn family(&self) -> CurveFamily {
        self.family
    }

    /// Returns `true` if the connection ends in an arrowhead.
    pub fn has_arrow(&self) -> bool {
        self.arrow
    }

    pub fn is_dashed(&self) -> bool {
        self.dashed
    }

    /// Animation cycle length in seconds, `None` for static connectors.
    pub fn period_secs(&self) -> Option<u32> {
        self.period_secs
    }
}
