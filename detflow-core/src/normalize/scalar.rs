/// Cleans a scalar cell such as `severity` or `status`.
///
/// Absent cells, and cells that are empty once trimmed and unquoted, produce
/// `None`, which tells the caller to drop the record.
pub fn clean_scalar(raw: Option<&str>) -> Option<String> {
    let value = strip_wrapping_quotes(raw?.trim());
    (!value.is_empty()).then(|| value.to_string())
}

/// Removes exactly one pair of double quotes wrapping the whole value.
pub(crate) fn strip_wrapping_quotes(value: &str) -> &str {
    match value.len() {
        // A lone quote both opens and closes.
        1 if value == "\"" => "",
        n if n >= 2 && value.starts_with('"') && value.ends_with('"') => &value[1..n - 1],
        _ => value,
    }
}
