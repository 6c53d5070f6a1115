//! Escape processing for string literals.
//!
//! Valid escapes: `\"` `\\` `\n` `\t` `\r`.

/// Unescape a string literal's content (between the `"`s).
///
/// Returns the first invalid escape character on failure. A trailing lone
/// backslash cannot reach here: the scanner treats `\"` as an escaped quote
/// and reports the string as unterminated instead.
pub(crate) fn cook_string(content: &str) -> Result<String, char> {
    if !content.contains('\\') {
        return Ok(content.to_string());
    }

    let mut result = String::with_capacity(content.len());
    let mut chars = content.chars();

    while let Some(c) = chars.next() {
        if c != '\\' {
            result.push(c);
            continue;
        }
        match chars.next() {
            Some('"') => result.push('"'),
            Some('\\') => result.push('\\'),
            Some('n') => result.push('\n'),
            Some('t') => result.push('\t'),
            Some('r') => result.push('\r'),
            Some(other) => return Err(other),
            None => return Err('\\'),
        }
    }

    Ok(result)
}
