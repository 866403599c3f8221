#[cfg(test)]
mod tests {
    use bindery_core::{Dialect, ParameterError, Quote, Scanner, SpanKind, validate};

    fn spans(dialect: &Dialect, sql: &str) -> Vec<(SpanKind, String)> {
        Scanner::new(dialect, sql)
            .map(|span| (span.kind, span.as_str(sql).to_owned()))
            .collect()
    }

    #[test]
    fn covers_the_whole_input() {
        let dialect = Dialect::default();
        let sql = "SELECT 'a', \"b\", `c`, [d] -- e\n/* f */ FROM t # g";
        let mut next = 0;
        for span in Scanner::new(&dialect, sql) {
            assert_eq!(span.start, next);
            assert!(span.end > span.start);
            assert!(span.closed);
            next = span.end;
        }
        assert_eq!(next, sql.len());
    }

    #[test]
    fn every_kind() {
        let dialect = Dialect::default();
        assert_eq!(
            spans(&dialect, "SELECT 'a', \"b\", `c`, [d] -- e\n/* f */ x # g"),
            [
                (SpanKind::Plain, "SELECT ".into()),
                (SpanKind::SingleQuoted, "'a'".into()),
                (SpanKind::Plain, ", ".into()),
                (SpanKind::DoubleQuoted, "\"b\"".into()),
                (SpanKind::Plain, ", ".into()),
                (SpanKind::Backtick, "`c`".into()),
                (SpanKind::Plain, ", ".into()),
                (SpanKind::Bracket, "[d]".into()),
                (SpanKind::Plain, " ".into()),
                (SpanKind::LineComment, "-- e".into()),
                (SpanKind::Plain, "\n".into()),
                (SpanKind::BlockComment, "/* f */".into()),
                (SpanKind::Plain, " x ".into()),
                (SpanKind::LineComment, "# g".into()),
            ]
        );
    }

    #[test]
    fn doubled_quotes() {
        let dialect = Dialect::default();
        assert_eq!(
            spans(&dialect, "'it''s' \"a\"\"b\" `c``d`"),
            [
                (SpanKind::SingleQuoted, "'it''s'".into()),
                (SpanKind::Plain, " ".into()),
                (SpanKind::DoubleQuoted, "\"a\"\"b\"".into()),
                (SpanKind::Plain, " ".into()),
                (SpanKind::Backtick, "`c``d`".into()),
            ]
        );
    }

    #[test]
    fn markers_inside_other_spans() {
        let dialect = Dialect::default();
        assert_eq!(
            spans(&dialect, "'-- /* #' /* ' -- */ -- '/*"),
            [
                (SpanKind::SingleQuoted, "'-- /* #'".into()),
                (SpanKind::Plain, " ".into()),
                (SpanKind::BlockComment, "/* ' -- */".into()),
                (SpanKind::Plain, " ".into()),
                (SpanKind::LineComment, "-- '/*".into()),
            ]
        );
    }

    #[test]
    fn unterminated() {
        let dialect = Dialect::default();
        let sql = "SELECT 'open";
        let last = Scanner::new(&dialect, sql).last().unwrap();
        assert_eq!(last.kind, SpanKind::SingleQuoted);
        assert_eq!(last.end, sql.len());
        assert!(!last.closed);

        let sql = "SELECT 1 /* open";
        let last = Scanner::new(&dialect, sql).last().unwrap();
        assert_eq!(last.kind, SpanKind::BlockComment);
        assert!(!last.closed);

        let last = Scanner::new(&dialect, "SELECT 1 -- no newline")
            .last()
            .unwrap();
        assert_eq!(last.kind, SpanKind::LineComment);
        assert!(last.closed);
    }

    #[test]
    fn validate_reports_the_first_unterminated_span() {
        let dialect = Dialect::default();
        assert_eq!(validate(&dialect, "SELECT 'a' /* b */"), Ok(()));
        assert_eq!(
            validate(&dialect, "SELECT \"a"),
            Err(ParameterError::MalformedInput {
                kind: SpanKind::DoubleQuoted,
                offset: 7,
            })
        );
        let error = validate(&dialect, "SELECT 1 /* a").unwrap_err();
        assert_eq!(
            error.to_string(),
            "unterminated block comment starting at byte 9"
        );
    }

    #[test]
    fn prefix_marker_is_not_a_comment() {
        let dialect = Dialect::default();
        assert_eq!(
            spans(&dialect, "SELECT * FROM #__users # comment"),
            [
                (SpanKind::Plain, "SELECT * FROM #__users ".into()),
                (SpanKind::LineComment, "# comment".into()),
            ]
        );
        let dialect = Dialect::default().with_prefix_marker(None);
        assert_eq!(
            spans(&dialect, "FROM #__users"),
            [
                (SpanKind::Plain, "FROM ".into()),
                (SpanKind::LineComment, "#__users".into()),
            ]
        );
    }

    #[test]
    fn backslash_escapes() {
        let sql = r"'a\'b' 'c'";
        let dialect = Dialect::default();
        assert_eq!(
            spans(&dialect, sql),
            [
                (SpanKind::SingleQuoted, r"'a\'".into()),
                (SpanKind::Plain, "b".into()),
                (SpanKind::SingleQuoted, "' '".into()),
                (SpanKind::Plain, "c".into()),
                (SpanKind::SingleQuoted, "'".into()),
            ]
        );
        let dialect = Dialect::default().with_backslash_escapes(true);
        assert_eq!(
            spans(&dialect, sql),
            [
                (SpanKind::SingleQuoted, r"'a\'b'".into()),
                (SpanKind::Plain, " ".into()),
                (SpanKind::SingleQuoted, "'c'".into()),
            ]
        );
        // Brackets never escape.
        assert_eq!(
            spans(&dialect, r"[a\]b"),
            [
                (SpanKind::Bracket, r"[a\]".into()),
                (SpanKind::Plain, "b".into()),
            ]
        );
    }

    #[test]
    fn executable_comments() {
        let sql = "/*!40101 SET x = 1 */ /*+ hint */ /* comment */";
        let dialect = Dialect::default();
        assert!(
            Scanner::new(&dialect, sql)
                .filter(|span| span.kind == SpanKind::BlockComment)
                .count()
                == 3
        );
        let dialect = Dialect::default().with_executable_comments(true);
        assert_eq!(
            spans(&dialect, sql),
            [
                (SpanKind::Plain, "/*!40101 SET x = 1 */ /*+ hint */ ".into()),
                (SpanKind::BlockComment, "/* comment */".into()),
            ]
        );
    }

    #[test]
    fn restricted_dialect() {
        let dialect = Dialect::default()
            .with_quotes([Quote::Single])
            .with_line_comments(["--"])
            .with_block_comment(None);
        assert_eq!(
            spans(&dialect, "\"a\" `b` [c] /* d */ # e"),
            [(SpanKind::Plain, "\"a\" `b` [c] /* d */ # e".into())]
        );
    }

    #[test]
    fn multibyte_text() {
        let dialect = Dialect::default();
        let sql = "SELECT 'héllo' -- ünïcode\n, `ß`";
        for span in Scanner::new(&dialect, sql) {
            assert!(sql.is_char_boundary(span.start));
            assert!(sql.is_char_boundary(span.end));
        }
        assert_eq!(
            spans(&dialect, sql),
            [
                (SpanKind::Plain, "SELECT ".into()),
                (SpanKind::SingleQuoted, "'héllo'".into()),
                (SpanKind::Plain, " ".into()),
                (SpanKind::LineComment, "-- ünïcode".into()),
                (SpanKind::Plain, "\n, ".into()),
                (SpanKind::Backtick, "`ß`".into()),
            ]
        );
    }

    #[test]
    fn empty_input() {
        let dialect = Dialect::default();
        assert_eq!(Scanner::new(&dialect, "").count(), 0);
    }
}
