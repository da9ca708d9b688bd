//! Line lexer for Strata diagram text.
//!
//! The format is line oriented: every non-blank line, once trimmed, is
//! either a section header such as `[diagram nodes]` or a data line whose
//! meaning depends on the section it appears in.

use winnow::{
    Parser as _,
    combinator::delimited,
    error::{ContextError, ErrMode},
    token::take_till,
};

use crate::span::Span;

type IResult<O> = std::result::Result<O, ErrMode<ContextError>>;

/// A classified, trimmed source line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Token<'src> {
    /// `[name]`, carrying the raw text between the brackets
    Header(&'src str),
    /// Any other non-blank line
    Data(&'src str),
}

/// A token with the span of its trimmed line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct PositionedToken<'src> {
    pub token: Token<'src>,
    pub span: Span,
}

/// Parse `[name]` at the start of the input
fn section_header<'src>(input: &mut &'src str) -> IResult<&'src str> {
    delimited('[', take_till(0.., ']'), ']').parse_next(input)
}

/// Split source text into positioned tokens, skipping blank lines.
pub(crate) fn tokenize(source: &str) -> Vec<PositionedToken<'_>> {
    let mut tokens = Vec::new();
    let mut line_start = 0;

    for raw_line in source.split('\n') {
        let line = raw_line.trim();

        if !line.is_empty() {
            let start = line_start + (raw_line.len() - raw_line.trim_start().len());
            let span = Span::new(start..start + line.len());

            let mut input = line;
            let token = match section_header(&mut input) {
                // The header has to span the whole line
                Ok(name) if input.is_empty() => Token::Header(name),
                _ => Token::Data(line),
            };

            tokens.push(PositionedToken { token, span });
        }

        line_start += raw_line.len() + 1;
    }

    tokens
}
