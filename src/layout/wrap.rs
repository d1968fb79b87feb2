//! Greedy word wrapping against font metrics.

use crate::style::TextStyle;

/// Split `text` into lines no wider than `max_width`.
///
/// Explicit newlines always break. Words wider than a whole line are split
/// between characters. An empty input yields a single empty line.
pub fn wrap_text(text: &str, style: &TextStyle, max_width: f32) -> Vec<String> {
    let mut lines = Vec::new();

    for source_line in text.split('\n') {
        let mut current = String::new();

        for word in source_line.split_whitespace() {
            let candidate = if current.is_empty() {
                word.to_string()
            } else {
                format!("{} {}", current, word)
            };

            if style.text_width(&candidate) <= max_width {
                current = candidate;
                continue;
            }

            if !current.is_empty() {
                lines.push(std::mem::take(&mut current));
            }

            if style.text_width(word) <= max_width {
                current = word.to_string();
            } else {
                let mut pieces = split_long_word(word, style, max_width);
                current = pieces.pop().unwrap_or_default();
                lines.extend(pieces);
            }
        }

        lines.push(current);
    }

    lines
}

/// Break a single word into chunks that each fit `max_width`. Every chunk
/// holds at least one character.
fn split_long_word(word: &str, style: &TextStyle, max_width: f32) -> Vec<String> {
    let mut pieces = Vec::new();
    let mut current = String::new();

    for ch in word.chars() {
        current.push(ch);
        if style.text_width(&current) > max_width && current.chars().count() > 1 {
            current.pop();
            pieces.push(std::mem::take(&mut current));
            current.push(ch);
        }
    }

    if !current.is_empty() {
        pieces.push(current);
    }
    pieces
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_text_single_line() {
        let style = TextStyle::regular(12.0);
        assert_eq!(wrap_text("Hello world", &style, 190.0), vec!["Hello world"]);
    }

    #[test]
    fn test_wraps_on_word_boundaries() {
        let style = TextStyle::regular(12.0);
        let text = "This report summarizes key performance metrics, predictive insights, \
                    and supply chain optimization data for the observed period.";
        let lines = wrap_text(text, &style, 100.0);
        assert!(lines.len() > 1);
        for line in &lines {
            assert!(style.text_width(line) <= 100.0, "line too wide: {line}");
        }
        assert_eq!(lines.join(" "), text.split_whitespace().collect::<Vec<_>>().join(" "));
    }

    #[test]
    fn test_explicit_newlines() {
        let style = TextStyle::regular(12.0);
        assert_eq!(wrap_text("a\nb", &style, 190.0), vec!["a", "b"]);
    }

    #[test]
    fn test_empty_text_is_one_line() {
        let style = TextStyle::regular(12.0);
        assert_eq!(wrap_text("", &style, 190.0), vec![String::new()]);
    }

    #[test]
    fn test_long_word_is_split() {
        let style = TextStyle::regular(12.0);
        let word = "x".repeat(200);
        let lines = wrap_text(&word, &style, 20.0);
        assert!(lines.len() > 1);
        assert_eq!(lines.concat(), word);
        for line in &lines {
            assert!(style.text_width(line) <= 20.0);
        }
    }
}
