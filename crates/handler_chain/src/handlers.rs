//! Individual payload transforms

/// Character appended by `padToMultiple`
pub const PAD_CHAR: char = '#';

/// Length multiple enforced by `padToMultiple`
pub const PAD_MULTIPLE: usize = 5;

/// Remove leading and trailing whitespace
///
/// The ASCII information separators U+001C..=U+001F count as whitespace too.
pub fn trim(payload: &mut String) {
    let trimmed = payload.trim_matches(is_space);
    if trimmed.len() != payload.len() {
        *payload = trimmed.to_string();
    }
}

fn is_space(c: char) -> bool {
    c.is_whitespace() || ('\u{1c}'..='\u{1f}').contains(&c)
}

/// Append `pad` until the character count is a multiple of `n`
///
/// Length is counted in characters, not bytes. `n == 0` leaves the payload
/// unchanged.
pub fn pad_to_multiple(payload: &mut String, pad: char, n: usize) {
    if n == 0 {
        return;
    }
    let missing = (n - payload.chars().count() % n) % n;
    payload.extend(std::iter::repeat_n(pad, missing));
}

/// Append `_<unix_seconds>`
pub fn add_timestamp(payload: &mut String, unix_seconds: i64) {
    payload.push('_');
    payload.push_str(&unix_seconds.to_string());
}
