/// Escape occurrences of `search` char with `replace` while copying into buffer.
pub fn write_escaped(out: &mut String, value: &str, search: char, replace: &str) {
    let mut position = 0;
    for (i, c) in value.char_indices() {
        if c == search {
            out.push_str(&value[position..i]);
            out.push_str(replace);
            position = i + c.len_utf8();
        }
    }
    out.push_str(&value[position..]);
}

/// Longest prefix of `value` not exceeding `max` bytes that ends on a character boundary.
pub fn truncated<S: AsRef<str> + ?Sized>(value: &S, max: usize) -> &str {
    let value = value.as_ref();
    if value.len() <= max {
        return value;
    }
    let mut end = max;
    while !value.is_char_boundary(end) {
        end -= 1;
    }
    &value[..end]
}

#[macro_export]
macro_rules! truncate_long {
    ($query:expr) => {
        format_args!(
            "{}{}\n",
            $crate::truncated(&$query, 497).trim_end(),
            if AsRef::<str>::as_ref(&$query).len() > 497 {
                "..."
            } else {
                ""
            },
        )
    };
}
