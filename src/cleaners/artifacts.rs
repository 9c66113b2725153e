use lazy_static::lazy_static;
use regex::Regex;

/// Remove strings of two or more underscores, which are common in text
/// extracted from PDFs (signature lines, form blanks). A single underscore is kept.
pub fn underscores(text: &str) -> String {
    UNDERSCORE_RUN_REGEX.replace_all(text, "").into_owned()
}

lazy_static! {
    static ref UNDERSCORE_RUN_REGEX: Regex = Regex::new(r"_{2,}").unwrap();
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_underscores() {
        assert_eq!(underscores("a____b___c"), "abc");
        assert_eq!(underscores("snake_case stays"), "snake_case stays");
        assert_eq!(underscores("Signed: ________ Date: __"), "Signed:  Date: ");
        assert_eq!(underscores(""), "");
    }

    proptest! {
        #[test]
        fn underscores_is_idempotent(s in "[a-z_ ]*") {
            let once = underscores(&s);
            prop_assert_eq!(underscores(&once), once.clone());
            prop_assert!(!once.contains("__"));
        }
    }
}
