//! Identifier and literal quoting for MySQL output.

/// Quote identifier with backticks.
pub fn quote_backtick(ident: &str) -> String {
    format!("`{}`", ident.replace('`', "``"))
}

/// Quote string with single quotes.
pub fn quote_string_single(s: &str) -> String {
    format!("'{}'", s.replace('\'', "''"))
}

/// Render an `enum(...)` member list: `'a','b'`.
pub fn enum_members<I, S>(members: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    members
        .into_iter()
        .map(|m| quote_string_single(m.as_ref()))
        .collect::<Vec<_>>()
        .join(",")
}
