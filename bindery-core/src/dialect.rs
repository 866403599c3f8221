use crate::SpanKind;

/// Quote styles recognized by the scanner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Quote {
    /// `'string'`, doubled `''` escapes.
    Single,
    /// `"identifier"`, doubled `""` escapes.
    Double,
    /// `` `identifier` ``, doubled ``` `` ``` escapes.
    Backtick,
    /// `[identifier]`, no escaping.
    Bracket,
}

impl Quote {
    pub const fn open(&self) -> u8 {
        match self {
            Quote::Single => b'\'',
            Quote::Double => b'"',
            Quote::Backtick => b'`',
            Quote::Bracket => b'[',
        }
    }
    pub const fn close(&self) -> u8 {
        match self {
            Quote::Bracket => b']',
            _ => self.open(),
        }
    }
    pub const fn kind(&self) -> SpanKind {
        match self {
            Quote::Single => SpanKind::SingleQuoted,
            Quote::Double => SpanKind::DoubleQuoted,
            Quote::Backtick => SpanKind::Backtick,
            Quote::Bracket => SpanKind::Bracket,
        }
    }
    /// Whether a doubled closing character stands for a literal one.
    pub const fn doubles_escape(&self) -> bool {
        !matches!(self, Quote::Bracket)
    }
}

/// Lexical configuration of a backend.
///
/// Everything the scanner, mapper and splitter need to know about a SQL dialect
/// lives here, drivers expose one through [`crate::Driver::dialect`]. The
/// [`Default`] value accepts every quote and comment style:
///
/// ```rust
/// use bindery_core::{Dialect, Quote};
/// let dialect = Dialect::default();
/// assert_eq!(dialect.sigil, ':');
/// assert_eq!(dialect.placeholder, "?");
/// assert_eq!(dialect.delimiter, ";");
/// assert!(dialect.quotes.contains(&Quote::Bracket));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dialect {
    /// Character introducing a named parameter.
    pub sigil: char,
    /// Positional placeholder written in place of each named parameter.
    pub placeholder: String,
    pub quotes: Vec<Quote>,
    pub line_comments: Vec<String>,
    /// Opening and closing markers of block comments.
    pub block_comment: Option<(String, String)>,
    /// Statement delimiter, only recognized in plain SQL.
    pub delimiter: String,
    /// `\'` and `\"` do not close single and double quoted spans.
    pub backslash_escapes: bool,
    /// `/*!` and `/*+` open executable comments and hints, scanned as plain SQL.
    pub executable_comments: bool,
    /// Table prefix marker that must not be mistaken for a line comment.
    pub prefix_marker: Option<String>,
    /// Reject unterminated quotes and comments when preparing statements.
    pub strict: bool,
}

impl Default for Dialect {
    fn default() -> Self {
        Self {
            sigil: ':',
            placeholder: "?".into(),
            quotes: vec![Quote::Single, Quote::Double, Quote::Backtick, Quote::Bracket],
            line_comments: vec!["--".into(), "#".into()],
            block_comment: Some(("/*".into(), "*/".into())),
            delimiter: ";".into(),
            backslash_escapes: false,
            executable_comments: false,
            prefix_marker: Some("#__".into()),
            strict: false,
        }
    }
}

impl Dialect {
    pub fn with_sigil(mut self, sigil: char) -> Self {
        self.sigil = sigil;
        self
    }
    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = placeholder.into();
        self
    }
    pub fn with_quotes(mut self, quotes: impl IntoIterator<Item = Quote>) -> Self {
        self.quotes = quotes.into_iter().collect();
        self
    }
    pub fn with_line_comments<S: Into<String>>(
        mut self,
        markers: impl IntoIterator<Item = S>,
    ) -> Self {
        self.line_comments = markers
            .into_iter()
            .map(Into::into)
            .filter(|v: &String| !v.is_empty())
            .collect();
        self
    }
    pub fn with_block_comment(mut self, markers: Option<(&str, &str)>) -> Self {
        self.block_comment = markers
            .filter(|(open, close)| !open.is_empty() && !close.is_empty())
            .map(|(open, close)| (open.into(), close.into()));
        self
    }
    /// An empty delimiter is ignored, statements would never end.
    pub fn with_delimiter(mut self, delimiter: impl Into<String>) -> Self {
        let delimiter = delimiter.into();
        if !delimiter.is_empty() {
            self.delimiter = delimiter;
        }
        self
    }
    pub fn with_backslash_escapes(mut self, enabled: bool) -> Self {
        self.backslash_escapes = enabled;
        self
    }
    pub fn with_executable_comments(mut self, enabled: bool) -> Self {
        self.executable_comments = enabled;
        self
    }
    pub fn with_prefix_marker(mut self, marker: Option<&str>) -> Self {
        self.prefix_marker = marker.filter(|v| !v.is_empty()).map(Into::into);
        self
    }
    pub fn with_strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    /// Whether `c` may follow the sigil as part of a parameter name.
    pub fn is_identifier_byte(c: u8) -> bool {
        c.is_ascii_alphanumeric() || c == b'_'
    }
}
