use lazy_static::lazy_static;
use regex::Regex;

/// Collapse multiple spaces or tabs into one space character.
/// Newlines and carriage returns are left alone.
pub fn inline_whitespace(text: &str) -> String {
    INLINE_WHITE_SPACE_REGEX.replace_all(text, " ").into_owned()
}

/// Collapse any run of whitespace, newlines included, into one space character.
pub fn all_whitespace(text: &str) -> String {
    ALL_WHITE_SPACE_REGEX.replace_all(text, " ").into_owned()
}

lazy_static! {
    //
    // Inline
    //
    static ref INLINE_WHITE_SPACE_SEQUENCES: Vec<&'static str> = vec![
        r" ",
        r"\t",
        ];
    static ref INLINE_WHITE_SPACE_REGEX: Regex =
        Regex::new(&format!("(?:{})+", INLINE_WHITE_SPACE_SEQUENCES.join("|"))).unwrap();
    //
    // Everything
    //
    static ref ALL_WHITE_SPACE_SEQUENCES: Vec<&'static str> = vec![
        // Unicode White_Space, covers \r \n \v \f and U+0085 through U+3000
        r"\s",
        // Ascii file, group, record and unit separators
        r"[\x1C-\x1F]",
        ];
    static ref ALL_WHITE_SPACE_REGEX: Regex =
        Regex::new(&format!("(?:{})+", ALL_WHITE_SPACE_SEQUENCES.join("|"))).unwrap();
}
