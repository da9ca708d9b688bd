//! Section-driven parser turning lexed lines into a [`Diagram`].
//!
//! The parser is a single pass over [`lexer::tokenize`] output with a
//! [`Section`] state. Malformed lines never abort parsing: they are
//! skipped and described by a warning diagnostic instead.

use std::collections::HashMap;

use log::trace;
use winnow::{
    Parser as _,
    combinator::terminated,
    error::{ContextError, ErrMode},
    token::take_until,
};

use strata_core::{
    connector::Connector,
    semantic::{AnimationPair, Connection, Diagram, Node},
};

use crate::{
    Parsed,
    error::{Diagnostic, ErrorCode},
    lexer::{self, Token},
    span::Span,
};

type IResult<O> = std::result::Result<O, ErrMode<ContextError>>;

/// Separator between a node's type tag and its label.
pub(crate) const NODE_SEPARATOR: &str = " - ";

/// The section a data line belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Section {
    /// Before the first header
    None,
    /// `[diagram nodes]`
    Nodes,
    /// `[diagram connection]`
    Connections,
    /// `[animation]`
    Animations,
    /// Any other header
    Unknown,
}

impl Section {
    /// Resolve a header name, ignoring case and surrounding whitespace.
    pub(crate) fn from_header(name: &str) -> Self {
        match name.trim().to_lowercase().as_str() {
            "diagram nodes" => Self::Nodes,
            "diagram connection" => Self::Connections,
            "animation" => Self::Animations,
            _ => Self::Unknown,
        }
    }
}

/// Split `line` at the first occurrence of `literal`.
fn split_at_literal<'src>(
    line: &'src str,
    literal: &'static str,
) -> Option<(&'src str, &'src str)> {
    let mut input = line;
    let head: IResult<&str> = terminated(take_until(0.., literal), literal).parse_next(&mut input);
    head.ok().map(|head| (head, input))
}

/// Split a node line into trimmed `(type, label)`.
pub(crate) fn split_node(line: &str) -> Option<(&str, &str)> {
    split_at_literal(line, NODE_SEPARATOR).map(|(type_tag, label)| (type_tag.trim(), label.trim()))
}

/// Split a connection line at the highest-priority connector it contains.
///
/// Connectors are tried in [`Connector::PRIORITY`] order and the first one
/// present wins, regardless of where it occurs in the line. The line is
/// split at that connector's first occurrence.
pub(crate) fn split_connection(line: &str) -> Option<(&str, Connector, &str)> {
    Connector::PRIORITY.into_iter().find_map(|connector| {
        split_at_literal(line, connector.symbol())
            .map(|(source, target)| (source.trim(), connector, target.trim()))
    })
}

/// Accumulates records and diagnostics while walking the token stream.
pub(crate) struct Builder<'src> {
    section: Section,
    diagram: Diagram,
    diagnostics: Vec<Diagnostic>,
    declared: HashMap<&'src str, Span>,
}

impl<'src> Builder<'src> {
    pub(crate) fn new() -> Self {
        Self {
            section: Section::None,
            diagram: Diagram::default(),
            diagnostics: Vec::new(),
            declared: HashMap::new(),
        }
    }

    /// Parse the whole source.
    pub(crate) fn build(mut self, source: &'src str) -> Parsed {
        for positioned in lexer::tokenize(source) {
            match positioned.token {
                Token::Header(name) => self.enter_section(name, positioned.span),
                Token::Data(line) => self.data_line(line, positioned.span),
            }
        }

        Parsed::new(self.diagram, self.diagnostics)
    }

    fn enter_section(&mut self, name: &str, span: Span) {
        self.section = Section::from_header(name);
        trace!(section:? = self.section, name = name; "Entering section");

        if self.section == Section::Unknown {
            self.warn(
                Diagnostic::warning(format!("unknown section `[{}]`", name.trim()))
                    .with_code(ErrorCode::W002)
                    .with_label(span, "lines under this header are ignored")
                    .with_help(
                        "known sections are `[diagram nodes]`, `[diagram connection]` and `[animation]`",
                    ),
            );
        }
    }

    fn data_line(&mut self, line: &'src str, span: Span) {
        match self.section {
            Section::None | Section::Unknown => self.warn(
                Diagnostic::warning("line is outside any known section")
                    .with_code(ErrorCode::W001)
                    .with_label(span, "ignored")
                    .with_help(
                        "start the block with `[diagram nodes]`, `[diagram connection]` or `[animation]`",
                    ),
            ),
            Section::Nodes => self.node_line(line, span),
            Section::Connections => self.connection_line(line, span),
            Section::Animations => self.animation_line(line, span),
        }
    }

    fn node_line(&mut self, line: &'src str, span: Span) {
        let Some((type_tag, label)) = split_node(line) else {
            self.warn(
                Diagnostic::warning("node line has no ` - ` separator")
                    .with_code(ErrorCode::W003)
                    .with_label(span, "expected `TYPE - label`")
                    .with_help("write nodes as `LAYER1 - UserA`"),
            );
            return;
        };

        if let Some(first) = self.declared.get(label).copied() {
            self.warn(
                Diagnostic::warning(format!("duplicate node label `{label}`"))
                    .with_code(ErrorCode::W005)
                    .with_label(span, "duplicate declaration")
                    .with_secondary_label(first, "first declared here")
                    .with_help("labels identify nodes; only the first declaration is laid out"),
            );
        } else {
            self.declared.insert(label, span);
        }

        self.diagram.push_node(Node::new(type_tag, label));
    }

    fn connection_line(&mut self, line: &str, span: Span) {
        match split_connection(line) {
            Some((source, connector, target)) => {
                self.diagram
                    .push_connection(Connection::new(source, target, connector));
            }
            None => self.missing_connector(span),
        }
    }

    fn animation_line(&mut self, line: &str, span: Span) {
        match split_connection(line) {
            Some((source, _, target)) => {
                self.diagram.push_animation(AnimationPair::new(source, target));
            }
            None => self.missing_connector(span),
        }
    }

    fn missing_connector(&mut self, span: Span) {
        self.warn(
            Diagnostic::warning("line contains no connector symbol")
                .with_code(ErrorCode::W004)
                .with_label(span, "expected `source <connector> target`")
                .with_help("connectors are `~~ ~> == => -- -> to> \" to \" >>`"),
        );
    }

    fn warn(&mut self, diagnostic: Diagnostic) {
        trace!(diagnostic:% = diagnostic; "Skipping line");
        self.diagnostics.push(diagnostic);
    }
}
