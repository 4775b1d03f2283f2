/// URL slug for a dataset name.
///
/// Lowercases, drops everything except ASCII letters, digits, `_`, `-` and
/// whitespace, turns whitespace and hyphen runs into one `-`, then strips
/// `-` and `_` from both ends.
pub fn slugify(name: &str) -> String {
    let mut slug = String::with_capacity(name.len());
    let mut pending_dash = false;
    for c in name.chars() {
        if c.is_whitespace() || c == '-' {
            pending_dash = true;
        } else if c.is_ascii_alphanumeric() || c == '_' {
            if pending_dash {
                slug.push('-');
                pending_dash = false;
            }
            slug.push(c.to_ascii_lowercase());
        }
    }
    slug.trim_matches(|c| c == '-' || c == '_').to_string()
}
