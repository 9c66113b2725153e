use lazy_static::lazy_static;
use std::{fs, path::PathBuf};

macro_rules! generate_fixtures {
    ($($file:ident),+) => {
        $(
            #[allow(non_camel_case_types)]
            pub struct $file {
                pub steps: Vec<String>,
                pub test_content: String,
                pub cleaned: String,
            }
            impl $file {
                pub fn load() -> Self {
                    let file_name = format!("{}.toml", stringify!($file).to_lowercase());
                    let cargo_manifest_dir = env!("CARGO_MANIFEST_DIR");
                    let file_path = PathBuf::from(cargo_manifest_dir)
                        .join("src")
                        .join("cleaners")
                        .join("test_text")
                        .join("files")
                        .join(file_name);

                    let content = fs::read_to_string(&file_path).expect("Failed to read file");
                    let data: toml::Value = toml::from_str(&content).expect("Failed to parse TOML");

                    Self {
                        steps: data.get("steps")
                            .and_then(|value| value.as_array())
                            .map(|array| {
                                array.iter()
                                    .map(|s| s.as_str().unwrap().to_string())
                                    .collect()
                            })
                            .unwrap_or_default(),
                        test_content: data["test_content"].as_str().unwrap().to_string(),
                        cleaned: data["cleaned"].as_str().unwrap().to_string(),
                    }
                }
            }
        )+
    };
}

generate_fixtures!(Opinion);
generate_fixtures!(Pdf_Form);
generate_fixtures!(Malformed);

lazy_static! {
    pub static ref OPINION: Opinion = Opinion::load();
    pub static ref PDF_FORM: Pdf_Form = Pdf_Form::load();
    pub static ref MALFORMED: Malformed = Malformed::load();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Pipeline;

    #[test]
    fn test_opinion() {
        let cleaned = Pipeline::from_names(OPINION.steps.iter().cloned())
            .run(&OPINION.test_content)
            .unwrap();
        assert_eq!(cleaned, OPINION.cleaned);
    }

    #[test]
    fn test_pdf_form() {
        let cleaned = Pipeline::from_names(PDF_FORM.steps.iter().cloned())
            .run(&PDF_FORM.test_content)
            .unwrap();
        assert_eq!(cleaned, PDF_FORM.cleaned);
    }

    #[test]
    fn test_malformed() {
        let cleaned = Pipeline::from_names(MALFORMED.steps.iter().cloned())
            .run(&MALFORMED.test_content)
            .unwrap();
        assert_eq!(cleaned, MALFORMED.cleaned);
    }
}
