/// Characters belonging to the Arabic script blocks, including vowel marks.
/// These pass through normalization untouched so Arabic-text queries stay meaningful.
fn is_arabic_char(c: char) -> bool {
    matches!(c,
        '\u{0600}'..='\u{06FF}'
            | '\u{0750}'..='\u{077F}'
            | '\u{08A0}'..='\u{08FF}'
            | '\u{FB50}'..='\u{FDFF}'
            | '\u{FE70}'..='\u{FEFF}')
}

/// Normalizes raw text into the canonical token sequence used for matching.
///
/// Lowercases, turns every character that is not alphanumeric, whitespace, or
/// Arabic script into a space, then splits on whitespace (which also collapses
/// runs and trims the ends). All-punctuation or empty input yields no tokens;
/// callers treat that as "no match", never as an error.
pub fn normalize(text: &str) -> Vec<String> {
    let lowered = text.to_lowercase();
    let cleaned: String = lowered
        .chars()
        .map(|c| {
            if c.is_alphanumeric() || c.is_whitespace() || is_arabic_char(c) {
                c
            } else {
                ' '
            }
        })
        .collect();

    cleaned.split_whitespace().map(str::to_string).collect()
}
