//! String normalization applied to road names.

/// Strips leading and trailing space characters.
///
/// Only `' '` is removed; tabs and other whitespace are kept, as the source
/// data is padded with plain spaces.
pub fn trim_spaces(s: &str) -> &str {
    s.trim_matches(' ')
}

/// Title-cases `s`.
///
/// A letter that starts the string or follows a non-letter is upper-cased,
/// every other letter is lower-cased. Non-letters, including runs of
/// whitespace, are copied unchanged.
pub fn title_case(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    let mut prev_is_letter = false;
    for c in s.chars() {
        if c.is_alphabetic() {
            if prev_is_letter {
                result.extend(c.to_lowercase());
            } else {
                result.extend(c.to_uppercase());
            }
            prev_is_letter = true;
        } else {
            result.push(c);
            prev_is_letter = false;
        }
    }
    result
}
