use crate::{Dialect, ParameterError, Quote};
use std::fmt::{self, Display};

/// Lexical class of a [`Span`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SpanKind {
    Plain,
    SingleQuoted,
    DoubleQuoted,
    Backtick,
    Bracket,
    LineComment,
    BlockComment,
}

impl SpanKind {
    pub fn is_comment(&self) -> bool {
        matches!(self, SpanKind::LineComment | SpanKind::BlockComment)
    }
    pub fn is_quoted(&self) -> bool {
        matches!(
            self,
            SpanKind::SingleQuoted | SpanKind::DoubleQuoted | SpanKind::Backtick | SpanKind::Bracket
        )
    }
}

impl Display for SpanKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            SpanKind::Plain => "plain sql",
            SpanKind::SingleQuoted => "single quoted string",
            SpanKind::DoubleQuoted => "double quoted identifier",
            SpanKind::Backtick => "backtick quoted identifier",
            SpanKind::Bracket => "bracket quoted identifier",
            SpanKind::LineComment => "line comment",
            SpanKind::BlockComment => "block comment",
        })
    }
}

/// Byte range `[start, end)` of the scanned text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span {
    pub kind: SpanKind,
    pub start: usize,
    pub end: usize,
    /// False when the span ran into the end of the input before its closing marker.
    pub closed: bool,
}

impl Span {
    pub fn as_str<'s>(&self, text: &'s str) -> &'s str {
        &text[self.start..self.end]
    }
    pub fn len(&self) -> usize {
        self.end - self.start
    }
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

enum Opener {
    Quote(Quote),
    Line(usize),
    Block(usize),
}

/// Splits SQL text into consecutive [`Span`]s.
///
/// The scanner is a forward-only iterator: spans come out in order, never
/// overlap and together cover the whole input. Every span boundary falls on a
/// character boundary because all markers are matched byte-wise against whole
/// UTF-8 sequences.
///
/// Malformed input never fails: an unterminated quote or block comment extends
/// to the end of the text and is reported with `closed == false`.
///
/// ```rust
/// use bindery_core::{Dialect, Scanner, SpanKind};
/// let dialect = Dialect::default();
/// let kinds: Vec<_> = Scanner::new(&dialect, "SELECT 'a' -- b")
///     .map(|span| span.kind)
///     .collect();
/// assert_eq!(
///     kinds,
///     [SpanKind::Plain, SpanKind::SingleQuoted, SpanKind::Plain, SpanKind::LineComment]
/// );
/// ```
#[derive(Debug, Clone)]
pub struct Scanner<'d, 's> {
    dialect: &'d Dialect,
    text: &'s str,
    position: usize,
}

impl<'d, 's> Scanner<'d, 's> {
    pub fn new(dialect: &'d Dialect, text: &'s str) -> Self {
        Self {
            dialect,
            text,
            position: 0,
        }
    }

    pub fn text(&self) -> &'s str {
        self.text
    }

    fn opener_at(&self, index: usize) -> Option<Opener> {
        let rest = &self.text.as_bytes()[index..];
        let first = *rest.first()?;
        if let Some(quote) = self.dialect.quotes.iter().find(|q| q.open() == first) {
            return Some(Opener::Quote(*quote));
        }
        if let Some((open, _)) = &self.dialect.block_comment {
            if rest.starts_with(open.as_bytes()) {
                let executable = self.dialect.executable_comments
                    && matches!(rest.get(open.len()), Some(b'!' | b'+'));
                if !executable {
                    return Some(Opener::Block(open.len()));
                }
            }
        }
        if let Some(marker) = &self.dialect.prefix_marker {
            if rest.starts_with(marker.as_bytes()) {
                return None;
            }
        }
        self.dialect
            .line_comments
            .iter()
            .find(|marker| rest.starts_with(marker.as_bytes()))
            .map(|marker| Opener::Line(marker.len()))
    }

    fn close_quote(&self, quote: Quote, from: usize) -> (usize, bool) {
        let bytes = self.text.as_bytes();
        let close = quote.close();
        let backslash =
            self.dialect.backslash_escapes && matches!(quote, Quote::Single | Quote::Double);
        let mut i = from;
        while i < bytes.len() {
            let c = bytes[i];
            if backslash && c == b'\\' {
                i += 2;
                continue;
            }
            if c == close {
                if quote.doubles_escape() && bytes.get(i + 1) == Some(&close) {
                    i += 2;
                    continue;
                }
                return (i + 1, true);
            }
            i += 1;
        }
        (bytes.len(), false)
    }

    fn close_line(&self, from: usize) -> usize {
        self.text.as_bytes()[from..]
            .iter()
            .position(|c| *c == b'\n')
            .map_or(self.text.len(), |offset| from + offset)
    }

    fn close_block(&self, from: usize) -> (usize, bool) {
        let Some((_, close)) = &self.dialect.block_comment else {
            return (self.text.len(), false);
        };
        match self.text[from..].find(close.as_str()) {
            Some(offset) => (from + offset + close.len(), true),
            None => (self.text.len(), false),
        }
    }
}

impl<'d, 's> Iterator for Scanner<'d, 's> {
    type Item = Span;

    fn next(&mut self) -> Option<Self::Item> {
        let start = self.position;
        let len = self.text.len();
        if start >= len {
            return None;
        }
        let (kind, end, closed) = match self.opener_at(start) {
            Some(Opener::Quote(quote)) => {
                let (end, closed) = self.close_quote(quote, start + 1);
                (quote.kind(), end, closed)
            }
            Some(Opener::Line(marker)) => {
                (SpanKind::LineComment, self.close_line(start + marker), true)
            }
            Some(Opener::Block(marker)) => {
                let (end, closed) = self.close_block(start + marker);
                (SpanKind::BlockComment, end, closed)
            }
            None => {
                let mut end = start + 1;
                while end < len && self.opener_at(end).is_none() {
                    end += 1;
                }
                (SpanKind::Plain, end, true)
            }
        };
        self.position = end;
        Some(Span {
            kind,
            start,
            end,
            closed,
        })
    }
}

/// Checks that every quote and block comment in `sql` is terminated.
///
/// The rest of the crate tolerates malformed text, this is for callers who
/// would rather reject it.
pub fn validate(dialect: &Dialect, sql: &str) -> Result<(), ParameterError> {
    match Scanner::new(dialect, sql).find(|span| !span.closed) {
        Some(span) => Err(ParameterError::MalformedInput {
            kind: span.kind,
            offset: span.start,
        }),
        None => Ok(()),
    }
}
