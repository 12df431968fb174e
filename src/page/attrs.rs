// Readers for loosely formatted `data-*` attribute values.

/// Leading decimal digits of `s`, the way `parseInt` reads `"120ms"` or `"5.5"`.
pub fn leading_int(s: &str) -> Option<u32> {
    let s = s.trim_start();
    let end = s
        .char_indices()
        .find(|(_, c)| !c.is_ascii_digit())
        .map_or(s.len(), |(i, _)| i);
    s[..end].parse().ok()
}

/// Lit dots for a `data-level` value; missing or unreadable is 0.
pub fn skill_level(attr: Option<&str>) -> u32 {
    attr.and_then(leading_int).unwrap_or(0)
}
