//! String helpers shared by the normalizers.

/// Collapse every run of whitespace to one space and trim the ends.
///
/// `"123   Main   St "` becomes `"123 Main St"`.
pub fn collapse_whitespace(value: &str) -> String {
    value.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Join trimmed, non-empty parts with `separator`.
pub fn join_non_empty<'a, I>(parts: I, separator: &str) -> String
where
    I: IntoIterator<Item = &'a str>,
{
    parts
        .into_iter()
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(separator)
}

/// Composite postal address: line 1, line 2, city, state, zip joined with
/// `", "`. Empty parts leave no separator behind.
pub fn compose_address<'a, I>(parts: I) -> String
where
    I: IntoIterator<Item = &'a str>,
{
    join_non_empty(parts, ", ")
}

/// How a two-column field renders an empty second value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ParentheticalStyle {
    /// `"A1234 ()"`. Matches load files already published.
    #[default]
    KeepEmpty,
    /// `"A1234"`.
    OmitEmpty,
}

/// Render `"<value> (<detail>)"`.
pub fn parenthetical(value: &str, detail: &str, style: ParentheticalStyle) -> String {
    let value = value.trim();
    let detail = detail.trim();
    match style {
        ParentheticalStyle::OmitEmpty if detail.is_empty() => value.to_string(),
        _ => format!("{value} ({detail})"),
    }
}
