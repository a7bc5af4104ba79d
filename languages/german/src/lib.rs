pub mod assembler;
pub mod classifier;
pub mod definitions;
pub mod grammar;
pub mod inflections;
pub mod locator;
pub mod parser;

#[cfg(test)]
mod tests;

pub use assembler::assemble;
pub use classifier::{PageKind, classify};
pub use definitions::extract_definitions;
pub use grammar::extract_fields;
pub use inflections::extract_inflections;
pub use locator::locate_description;
pub use parser::VerbformenParser;
