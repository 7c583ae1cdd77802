//! Field checks shared by the input forms.
//!
//! These run at the presentation boundary. Nothing that fails here is ever
//! dispatched to a store.

/// Check the `local@domain.tld` shape: no whitespace, exactly one `@`,
/// and a dot inside the domain with text on both sides.
pub fn is_valid_email(value: &str) -> bool {
    if value.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    domain
        .char_indices()
        .any(|(i, c)| c == '.' && i > 0 && i + 1 < domain.len())
}

/// Parse an age the way a lenient form does: leading digits count,
/// trailing junk is ignored. Returns `None` when no digits lead.
pub fn parse_age(value: &str) -> Option<u32> {
    let trimmed = value.trim();
    let unsigned = trimmed.strip_prefix('+').unwrap_or(trimmed);
    let digits: String = unsigned.chars().take_while(char::is_ascii_digit).collect();
    digits.parse().ok()
}
