use super::{all_whitespace, html, inline_whitespace, underscores};
use crate::error::CleanError;

/// A built-in cleaning step. Total cleaners are wrapped so they never return `Err`.
pub type Transform = fn(&str) -> Result<String, CleanError>;

/// Built-in steps, in the order they are listed to callers.
pub static CLEANERS: [(&str, Transform); 4] = [
    ("html", html),
    ("inline_whitespace", |text| Ok(inline_whitespace(text))),
    ("all_whitespace", |text| Ok(all_whitespace(text))),
    ("underscores", |text| Ok(underscores(text))),
];

pub fn lookup(name: &str) -> Option<Transform> {
    CLEANERS
        .iter()
        .find(|(key, _)| *key == name)
        .map(|(_, transform)| *transform)
}

pub fn names() -> Vec<&'static str> {
    CLEANERS.iter().map(|(key, _)| *key).collect()
}
