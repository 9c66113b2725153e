pub mod artifacts;
pub mod html;
pub mod registry;
pub mod whitespace;

#[cfg(test)]
pub mod test_text;

pub use artifacts::underscores;
pub use html::html;
pub use registry::{lookup, names, Transform};
pub use whitespace::{all_whitespace, inline_whitespace};
