//! Escaping for hand-assembled HTML.
//!
//! The preview document is built with plain string formatting, not an
//! auto-escaping template engine, so every dynamic value interpolated into it
//! must pass through one of these functions first. Skipping the escape on any
//! field is a security defect, not a recoverable error.

/// Escape a string for interpolation into HTML text or attribute content.
///
/// Covers `&`, `<`, `>`, `"`, and `'`.
pub fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Escape a string for interpolation into a single-quoted JS string literal
/// inside an inline `<script>` block.
///
/// Besides quotes and backslashes, `/` is escaped so a value containing
/// `</script>` cannot terminate the surrounding block early.
pub fn escape_js_string(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '\'' => out.push_str("\\'"),
            '"' => out.push_str("\\\""),
            '/' => out.push_str("\\/"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '<' => out.push_str("\\u003c"),
            '>' => out.push_str("\\u003e"),
            _ => out.push(c),
        }
    }
    out
}
