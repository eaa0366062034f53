/// Convert a kebab-case component name to PascalCase.
///
/// Every `-` followed by an ASCII lowercase letter collapses into the
/// uppercase letter, then a leading ASCII lowercase letter is uppercased.
/// Other characters pass through unchanged, so `a--b` becomes `A-B`.
#[must_use]
pub fn to_pascal_case(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    let mut chars = name.chars().peekable();
    while let Some(c) = chars.next() {
        if c == '-'
            && let Some(&next) = chars.peek()
            && next.is_ascii_lowercase()
        {
            out.push(next.to_ascii_uppercase());
            chars.next();
        } else {
            out.push(c);
        }
    }
    if let Some(first) = out.chars().next()
        && first.is_ascii_lowercase()
    {
        out.replace_range(..1, &first.to_ascii_uppercase().to_string());
    }
    out
}
