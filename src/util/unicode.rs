use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

/// Display width in terminal cells.
pub fn display_width(s: &str) -> usize {
    UnicodeWidthStr::width(s)
}

/// Truncate a string to fit within `max_cells` terminal cells, appending `…`
/// if anything was cut.
pub fn truncate_to_width(s: &str, max_cells: usize) -> String {
    if max_cells == 0 {
        return String::new();
    }
    if display_width(s) <= max_cells {
        return s.to_string();
    }
    if max_cells == 1 {
        return "\u{2026}".to_string();
    }
    let budget = max_cells - 1; // reserve 1 cell for '…'
    let mut width = 0;
    let mut result = String::new();
    for grapheme in s.graphemes(true) {
        let gw = UnicodeWidthStr::width(grapheme);
        if width + gw > budget {
            break;
        }
        width += gw;
        result.push_str(grapheme);
    }
    result.push('\u{2026}');
    result
}

/// Next grapheme boundary after `byte_offset`. Returns None if at end.
pub fn next_grapheme_boundary(s: &str, byte_offset: usize) -> Option<usize> {
    if byte_offset >= s.len() {
        return None;
    }
    match s[byte_offset..].grapheme_indices(true).nth(1) {
        Some((i, _)) => Some(byte_offset + i),
        None => Some(s.len()),
    }
}

/// Previous grapheme boundary before `byte_offset`. Returns None if at start.
pub fn prev_grapheme_boundary(s: &str, byte_offset: usize) -> Option<usize> {
    if byte_offset == 0 {
        return None;
    }
    let mut last_start = 0;
    for (i, _) in s[..byte_offset].grapheme_indices(true) {
        last_start = i;
    }
    Some(last_start)
}

/// Start of the word at or left of `byte_offset`, whitespace-delimited.
pub fn word_boundary_left(s: &str, byte_offset: usize) -> usize {
    let mut pos = byte_offset.min(s.len());
    // Back over whitespace, then over the word itself
    while let Some(prev) = prev_grapheme_boundary(s, pos) {
        if !grapheme_at(s, prev).chars().all(char::is_whitespace) {
            break;
        }
        pos = prev;
    }
    while let Some(prev) = prev_grapheme_boundary(s, pos) {
        if grapheme_at(s, prev).chars().all(char::is_whitespace) {
            break;
        }
        pos = prev;
    }
    pos
}

/// Start of the next word right of `byte_offset`, or the end of the string.
pub fn word_boundary_right(s: &str, byte_offset: usize) -> usize {
    let mut pos = byte_offset.min(s.len());
    // Over the rest of the current word, then over the whitespace run
    while pos < s.len() && !grapheme_at(s, pos).chars().all(char::is_whitespace) {
        pos = next_grapheme_boundary(s, pos).unwrap_or(s.len());
    }
    while pos < s.len() && grapheme_at(s, pos).chars().all(char::is_whitespace) {
        pos = next_grapheme_boundary(s, pos).unwrap_or(s.len());
    }
    pos
}

/// The grapheme cluster starting at `byte_offset`, or "" past the end.
pub fn grapheme_at(s: &str, byte_offset: usize) -> &str {
    if byte_offset >= s.len() {
        return "";
    }
    s[byte_offset..].graphemes(true).next().unwrap_or("")
}
