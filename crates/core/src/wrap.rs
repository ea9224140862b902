//! Legend label wrapping.
//!
//! Canonical categories can be long ("Part des mises sur smartphones et
//! tablettes T4 …"); legends render them over several lines, separated by
//! the marker the chart renderer understands.

/// Line-break marker understood by the chart renderer.
pub const LINE_BREAK: &str = "<br>";

/// Display width used for chart legends, in characters.
pub const WRAP_WIDTH: usize = 30;

/// Greedily pack whitespace-delimited words into lines of at most
/// `max_width` characters, joined with [`LINE_BREAK`].
///
/// A single word longer than `max_width` sits alone on its own line and
/// is never split mid-word. Text already within `max_width` comes back
/// unchanged on a single line.
pub fn wrap(text: &str, max_width: usize) -> String {
    let mut lines: Vec<String> = Vec::new();
    let mut current = String::new();
    let mut current_width = 0usize;

    for word in text.split_whitespace() {
        let word_width = word.chars().count();
        if current.is_empty() {
            current.push_str(word);
            current_width = word_width;
        } else if current_width + 1 + word_width <= max_width {
            current.push(' ');
            current.push_str(word);
            current_width += 1 + word_width;
        } else {
            lines.push(std::mem::take(&mut current));
            current.push_str(word);
            current_width = word_width;
        }
    }
    if !current.is_empty() {
        lines.push(current);
    }

    lines.join(LINE_BREAK)
}
