//! Plain-text extraction for partner descriptions.
//!
//! Descriptions arrive as HTML fragments. Rendering them as markup would
//! require trusting backend-supplied HTML, so cards show a stripped
//! plain-text form instead: tags removed, common entities decoded,
//! non-breaking spaces collapsed to plain spaces, result trimmed.
//! Extraction is best-effort and never fails on malformed fragments.

#[cfg(test)]
#[path = "text_test.rs"]
mod text_test;

/// Placeholder shown when a partner has no usable description.
pub const NO_DESCRIPTION: &str = "No description available.";

/// Longest entity body we attempt to decode (`#x10FFFF` and friends).
const MAX_ENTITY_LEN: usize = 9;

/// Reduce an HTML fragment to trimmed plain text.
pub fn strip_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut chars = input.chars();

    while let Some(c) = chars.next() {
        match c {
            '<' => {
                let mut lookahead = chars.clone();
                match lookahead.next() {
                    // A real tag opener: skip through the closing '>'.
                    // An unterminated tag swallows the rest of the input.
                    Some(n) if n.is_ascii_alphabetic() || n == '/' || n == '!' => {
                        for t in chars.by_ref() {
                            if t == '>' {
                                break;
                            }
                        }
                    }
                    // A lone '<' (e.g. "1 < 2") is ordinary text.
                    _ => out.push('<'),
                }
            }
            '&' => {
                let mut lookahead = chars.clone();
                let mut name = String::new();
                let mut terminated = false;
                for _ in 0..=MAX_ENTITY_LEN {
                    match lookahead.next() {
                        Some(';') => {
                            terminated = true;
                            break;
                        }
                        Some(ch) if ch.is_ascii_alphanumeric() || ch == '#' => name.push(ch),
                        _ => break,
                    }
                }
                match decode_entity(&name) {
                    Some(decoded) if terminated => {
                        out.push(decoded);
                        chars = lookahead;
                    }
                    // Unknown or unterminated entity: emit literally.
                    _ => out.push('&'),
                }
            }
            _ => out.push(c),
        }
    }

    out.trim().to_owned()
}

/// Description text for a card: stripped plain text, or the fixed
/// placeholder when the input is absent or strips down to nothing.
pub fn clean_description(raw: Option<&str>) -> String {
    let cleaned = raw.map(strip_html).unwrap_or_default();
    if cleaned.is_empty() {
        NO_DESCRIPTION.to_owned()
    } else {
        cleaned
    }
}

/// Decode one entity body (the part between `&` and `;`).
fn decode_entity(name: &str) -> Option<char> {
    match name {
        "amp" => Some('&'),
        "lt" => Some('<'),
        "gt" => Some('>'),
        "quot" => Some('"'),
        "apos" => Some('\''),
        "nbsp" => Some(' '),
        _ => {
            let digits = name.strip_prefix('#')?;
            let code = if let Some(hex) = digits.strip_prefix(['x', 'X']) {
                u32::from_str_radix(hex, 16).ok()?
            } else {
                digits.parse::<u32>().ok()?
            };
            let decoded = char::from_u32(code)?;
            // Numeric form of a non-breaking space collapses like the named one.
            Some(if decoded == '\u{a0}' { ' ' } else { decoded })
        }
    }
}
