use crate::{cleaners::registry, config::CleanerConfig, error::CleanError};
use std::fmt;
use tracing::debug;

type CustomFn = Box<dyn Fn(&str) -> String + Send + Sync>;

/// One step of a cleaning pipeline: either the name of a built-in cleaner or a
/// caller-supplied transform.
pub enum Step {
    Named(String),
    Custom(CustomFn),
}

impl Step {
    pub fn custom<F>(f: F) -> Self
    where
        F: Fn(&str) -> String + Send + Sync + 'static,
    {
        Step::Custom(Box::new(f))
    }

    fn label(&self) -> &str {
        match self {
            Step::Named(name) => name.as_str(),
            Step::Custom(_) => "custom",
        }
    }
}

impl fmt::Debug for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Step::Named(name) => f.debug_tuple("Named").field(name).finish(),
            Step::Custom(_) => f.write_str("Custom(<fn>)"),
        }
    }
}

impl From<&str> for Step {
    fn from(name: &str) -> Self {
        Step::Named(name.to_string())
    }
}

impl From<String> for Step {
    fn from(name: String) -> Self {
        Step::Named(name)
    }
}

enum Resolved<'a> {
    Builtin(registry::Transform),
    Custom(&'a CustomFn),
}

impl Resolved<'_> {
    fn apply(&self, text: &str) -> Result<String, CleanError> {
        match self {
            Resolved::Builtin(transform) => transform(text),
            Resolved::Custom(f) => Ok(f(text)),
        }
    }
}

fn resolve(steps: &[Step]) -> Result<Vec<Resolved<'_>>, CleanError> {
    steps
        .iter()
        .map(|step| match step {
            Step::Named(name) => registry::lookup(name)
                .map(Resolved::Builtin)
                .ok_or_else(|| CleanError::invalid_step(name)),
            Step::Custom(f) => Ok(Resolved::Custom(f)),
        })
        .collect()
}

/// Applies each step in order to `text`, returning the result.
///
/// Every step is resolved before any of them runs, so an unknown step name fails
/// the call without doing any work. An empty `steps` returns `text` unchanged.
pub fn clean_text(text: &str, steps: &[Step]) -> Result<String, CleanError> {
    let resolved = resolve(steps)?;
    let mut text = text.to_string();
    for (step, transform) in steps.iter().zip(resolved.iter()) {
        let cleaned = transform.apply(&text)?;
        debug!(
            "clean_text: {} ({} -> {} bytes)",
            step.label(),
            text.len(),
            cleaned.len()
        );
        text = cleaned;
    }
    Ok(text)
}

#[derive(Debug, Default)]
pub struct Pipeline {
    steps: Vec<Step>,
}

impl Pipeline {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_names<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            steps: names.into_iter().map(|name| Step::Named(name.into())).collect(),
        }
    }

    pub fn from_config(config: &CleanerConfig) -> Self {
        Self::from_names(config.steps.iter().cloned())
    }

    pub fn step(mut self, step: impl Into<Step>) -> Self {
        self.steps.push(step.into());
        self
    }

    pub fn custom<F>(mut self, f: F) -> Self
    where
        F: Fn(&str) -> String + Send + Sync + 'static,
    {
        self.steps.push(Step::custom(f));
        self
    }

    /// Checks that every named step exists without cleaning anything.
    pub fn validate(&self) -> Result<(), CleanError> {
        resolve(&self.steps).map(|_| ())
    }

    pub fn run(&self, text: &str) -> Result<String, CleanError> {
        clean_text(text, &self.steps)
    }
}
