const ELLIPSIS: char = '…';

/// Cuts `text` to at most `width` characters, marking cut text with an ellipsis.
pub(crate) fn truncate(text: &str, width: usize) -> String {
    if text.chars().count() <= width {
        return text.to_owned();
    }

    if width == 0 {
        return String::new();
    }

    text.chars()
        .take(width - 1)
        .chain(std::iter::once(ELLIPSIS))
        .collect()
}

pub(crate) fn center(text: &str, width: usize) -> String {
    let len = text.chars().count();
    if len >= width {
        return text.to_owned();
    }

    let left = (width - len) / 2;
    let right = width - len - left;
    format!("{}{}{}", " ".repeat(left), text, " ".repeat(right))
}
