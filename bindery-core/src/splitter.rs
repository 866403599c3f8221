use crate::{Dialect, Scanner, Span, SpanKind};

/// Iterator over the statements of a SQL script, see [`split_script`].
///
/// Cloning the iterator before consuming it gives an independent pass over the
/// same script.
#[derive(Debug, Clone)]
pub struct Statements<'d, 's> {
    text: &'s str,
    delimiter: &'d str,
    spans: Scanner<'d, 's>,
    pending: Option<Span>,
    first: Option<usize>,
    last: usize,
    finished: bool,
}

impl<'d, 's> Statements<'d, 's> {
    fn mark(&mut self, start: usize, end: usize) {
        self.first.get_or_insert(start);
        self.last = end;
    }

    /// Marks the non whitespace part of plain text.
    fn mark_plain(&mut self, start: usize, end: usize) {
        let slice = &self.text[start..end];
        let trimmed = slice.trim_start();
        if trimmed.is_empty() {
            return;
        }
        let begin = start + slice.len() - trimmed.len();
        self.mark(begin, start + slice.trim_end().len());
    }

    fn take(&mut self) -> Option<&'s str> {
        let first = self.first.take()?;
        let statement = &self.text[first..self.last];
        log::trace!("Split statement: {}", crate::truncate_long!(statement));
        Some(statement)
    }
}

impl<'d, 's> Iterator for Statements<'d, 's> {
    type Item = &'s str;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }
        loop {
            let Some(span) = self.pending.take().or_else(|| self.spans.next()) else {
                self.finished = true;
                return self.take();
            };
            if !span.closed {
                log::warn!(
                    "Unterminated {} at byte {} runs until the end of the script",
                    span.kind,
                    span.start
                );
            }
            match span.kind {
                SpanKind::Plain => {
                    let found = match self.delimiter {
                        "" => None,
                        delimiter => span.as_str(self.text).find(delimiter),
                    };
                    let Some(offset) = found else {
                        self.mark_plain(span.start, span.end);
                        continue;
                    };
                    let at = span.start + offset;
                    self.mark_plain(span.start, at);
                    let rest = at + self.delimiter.len();
                    if rest < span.end {
                        self.pending = Some(Span {
                            start: rest,
                            ..span
                        });
                    }
                    if let Some(statement) = self.take() {
                        return Some(statement);
                    }
                }
                SpanKind::LineComment | SpanKind::BlockComment => {}
                _ => self.mark(span.start, span.end),
            }
        }
    }
}

/// Splits a script into its statements.
///
/// Statements end at the dialect delimiter found in plain SQL, the delimiter is
/// not part of the yielded text. Each statement is trimmed of the whitespace
/// and comments surrounding it, comments in between its tokens are kept.
/// Statements made only of whitespace and comments are skipped, a last
/// statement lacking the delimiter is still yielded.
///
/// ```rust
/// use bindery_core::{Dialect, split_script};
/// let dialect = Dialect::default();
/// let script = "INSERT INTO t VALUES (1); -- comment\nINSERT INTO t VALUES (2);\n";
/// let statements: Vec<_> = split_script(&dialect, script).collect();
/// assert_eq!(statements, ["INSERT INTO t VALUES (1)", "INSERT INTO t VALUES (2)"]);
/// ```
pub fn split_script<'d, 's>(dialect: &'d Dialect, script: &'s str) -> Statements<'d, 's> {
    Statements {
        text: script,
        delimiter: &dialect.delimiter,
        spans: Scanner::new(dialect, script),
        pending: None,
        first: None,
        last: 0,
        finished: false,
    }
}
