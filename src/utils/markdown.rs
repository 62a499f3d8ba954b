/// Utility functions for handling Telegram MarkdownV2 formatting
///
/// MarkdownV2 requires escaping of special characters to prevent formatting issues.
/// This module provides centralized functions for proper text escaping.
/// Escapes markdown special characters for MarkdownV2 parsing mode
///
/// This function escapes all characters that have special meaning in Telegram's
/// MarkdownV2 format to ensure they are displayed as literal text.
///
/// # Arguments
/// * `text` - The text to escape
///
/// # Returns
/// A string with all markdown special characters escaped with backslashes
///
/// # Example
/// ```
/// use birthday_reminder_bot::utils::markdown::escape_markdown;
///
/// let text = "Ann-Marie (15-03)";
/// let escaped = escape_markdown(text);
/// assert_eq!(escaped, "Ann\\-Marie \\(15\\-03\\)");
/// ```
pub fn escape_markdown(text: &str) -> String {
    text.replace('_', "\\_")
        .replace('*', "\\*")
        .replace('[', "\\[")
        .replace(']', "\\]")
        .replace('(', "\\(")
        .replace(')', "\\)")
        .replace('~', "\\~")
        .replace('`', "\\`")
        .replace('>', "\\>")
        .replace('#', "\\#")
        .replace('+', "\\+")
        .replace('-', "\\-")
        .replace('=', "\\=")
        .replace('|', "\\|")
        .replace('{', "\\{")
        .replace('}', "\\}")
        .replace('.', "\\.")
        .replace('!', "\\!")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_basic_markdown() {
        assert_eq!(escape_markdown("Hello *world*"), "Hello \\*world\\*");
        assert_eq!(escape_markdown("_italic_"), "\\_italic\\_");
        assert_eq!(escape_markdown("`code`"), "\\`code\\`");
    }

    #[test]
    fn test_escape_names_and_dates() {
        assert_eq!(escape_markdown("Ann-Marie"), "Ann\\-Marie");
        assert_eq!(escape_markdown("15-03"), "15\\-03");
        assert_eq!(escape_markdown("J. R. R. Tolkien"), "J\\. R\\. R\\. Tolkien");
    }

    #[test]
    fn test_escape_empty_and_plain_text() {
        assert_eq!(escape_markdown(""), "");
        assert_eq!(escape_markdown("plain text"), "plain text");
        assert_eq!(escape_markdown("123 ABC"), "123 ABC");
    }

    #[test]
    fn test_escape_complex_text() {
        let input = "Birthday: *Ann* [15-03] (in 3 days) - don't forget!";
        let expected = "Birthday: \\*Ann\\* \\[15\\-03\\] \\(in 3 days\\) \\- don't forget\\!";
        assert_eq!(escape_markdown(input), expected);
    }
}
