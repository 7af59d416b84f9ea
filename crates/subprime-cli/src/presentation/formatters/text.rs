pub fn truncate(text: &str, max_len: usize) -> String {
    let char_count = text.chars().count();

    if char_count <= max_len {
        text.to_string()
    } else if max_len <= 3 {
        // For very small max_len, just take first chars without "..."
        text.chars().take(max_len).collect()
    } else {
        let truncated: String = text.chars().take(max_len - 3).collect();
        format!("{}...", truncated)
    }
}

/// Greedy word wrap; words longer than `width` are split
pub fn wrap(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut lines = Vec::new();

    for paragraph in text.split('\n') {
        let mut line = String::new();
        let mut line_len = 0;

        for word in paragraph.split_whitespace() {
            let mut word: Vec<char> = word.chars().collect();

            while word.len() > width {
                if line_len > 0 {
                    lines.push(std::mem::take(&mut line));
                    line_len = 0;
                }
                let rest = word.split_off(width);
                lines.push(word.into_iter().collect());
                word = rest;
            }

            let needed = if line_len == 0 { word.len() } else { line_len + 1 + word.len() };
            if needed > width && line_len > 0 {
                lines.push(std::mem::take(&mut line));
                line_len = 0;
            }
            if line_len > 0 {
                line.push(' ');
                line_len += 1;
            }
            line.extend(word.iter());
            line_len += word.len();
        }

        lines.push(line);
    }

    lines
}

/// Left-align `text` in a column of `width` characters, truncating if needed
pub fn pad(text: &str, width: usize) -> String {
    let cut = truncate(text, width);
    let len = cut.chars().count();
    format!("{}{}", cut, " ".repeat(width.saturating_sub(len)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("Lehman Brothers", 20), "Lehman Brothers");
        assert_eq!(truncate("Lehman Brothers", 9), "Lehman...");
        assert_eq!(truncate("Lehman", 2), "Le");
    }

    #[test]
    fn test_wrap_breaks_on_words() {
        let lines = wrap("The US government took control of Fannie Mae", 16);
        assert_eq!(
            lines,
            vec!["The US", "government took", "control of", "Fannie Mae"]
        );
        assert!(lines.iter().all(|l| l.chars().count() <= 16));
    }

    #[test]
    fn test_wrap_keeps_paragraph_breaks_and_splits_long_words() {
        assert_eq!(wrap("a\n\nb", 10), vec!["a", "", "b"]);
        assert_eq!(wrap("securitization", 6), vec!["securi", "tizati", "on"]);
    }

    #[test]
    fn test_pad_counts_characters() {
        assert_eq!(pad("Crédito", 9), "Crédito  ");
        assert_eq!(pad("Collateralized", 8), "Colla...");
    }
}
