// src/core/sanitize.rs

use crate::config::consts::{IMAGES_DIR, IMAGE_EXT, MISSING_CARD};

/// Asset filename for a card label.
///
/// Lower-case, path separators become `_`, anything outside `[a-z0-9_\- ]`
/// is dropped, the result is trimmed and space runs collapse to one `_`.
/// An empty label maps to the missing-card sentinel. A label that strips to
/// nothing still gets the extension (`".png"`); existing asset folders rely
/// on this exact mapping, so do not "fix" it.
pub fn card_filename(label: &str) -> String {
    if label.is_empty() {
        return s!(MISSING_CARD);
    }

    let kept: String = label
        .to_lowercase()
        .chars()
        .map(|c| if c == '/' || c == '\\' { '_' } else { c })
        .filter(|c| matches!(c, 'a'..='z' | '0'..='9' | '_' | '-' | ' '))
        .collect();

    let mut stem = String::with_capacity(kept.len());
    let mut in_space = false;
    for ch in kept.trim().chars() {
        if ch.is_whitespace() {
            if !in_space {
                stem.push('_');
                in_space = true;
            }
        } else {
            stem.push(ch);
            in_space = false;
        }
    }
    join!(&stem, ".", IMAGE_EXT)
}

/// Relative asset path for a card label, e.g. `images/scales.png`.
pub fn card_image_path(label: &str) -> String {
    join!(IMAGES_DIR, "/", &card_filename(label))
}

/// Relative path of the fallback artwork.
pub fn missing_card_path() -> String {
    join!(IMAGES_DIR, "/", MISSING_CARD)
}

/// Escape text for use in HTML element content and quoted attributes.
pub fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for ch in s.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            c => out.push(c),
        }
    }
    out
}
