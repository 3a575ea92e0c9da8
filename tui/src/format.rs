//! Plain-text measurement and wrapping.

use unicode_width::UnicodeWidthStr;

/// Greedy word wrap to `width` columns. Honors embedded newlines and
/// hard-breaks words wider than a full line.
#[must_use]
pub fn wrap_plain(text: &str, width: u16) -> Vec<String> {
    let width = usize::from(width.max(1));
    let mut lines = Vec::new();

    for raw_line in text.split('\n') {
        let mut current = String::new();
        let mut current_width = 0usize;

        for word in raw_line.split_whitespace() {
            let word_width = word.width();

            if word_width > width {
                // Flush, then hard-break the oversized word.
                if !current.is_empty() {
                    lines.push(std::mem::take(&mut current));
                    current_width = 0;
                }
                let mut chunk = String::new();
                let mut chunk_width = 0usize;
                for c in word.chars() {
                    let c_width = c.to_string().width();
                    if chunk_width + c_width > width && !chunk.is_empty() {
                        lines.push(std::mem::take(&mut chunk));
                        chunk_width = 0;
                    }
                    chunk.push(c);
                    chunk_width += c_width;
                }
                current = chunk;
                current_width = chunk_width;
                continue;
            }

            let space = usize::from(!current.is_empty());
            if current_width + space + word_width > width {
                lines.push(std::mem::take(&mut current));
                current_width = 0;
            }
            if !current.is_empty() {
                current.push(' ');
                current_width += 1;
            }
            current.push_str(word);
            current_width += word_width;
        }

        lines.push(current);
    }

    lines
}
