/// Splits a multi-line text field into bullet strings.
///
/// Every non-blank line is one bullet; a leading `"- "` marker is stripped.
pub fn split_bullets(text: &str) -> Vec<&str> {
    text.lines()
        .map(str::trim_start)
        .map(|line| line.strip_prefix("- ").unwrap_or(line).trim())
        .filter(|line| !line.is_empty())
        .collect()
}
