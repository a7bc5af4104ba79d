pub mod error;
pub mod field_map;
pub mod page;
pub mod parser;
pub mod preprocess;
pub mod tables;
pub mod template;

pub use error::{ExtractError, TemplateError};
pub use field_map::FieldMap;
pub use page::{Page, element_text, normalize_whitespace};
pub use parser::PageParser;
pub use preprocess::{DefaultPreprocessor, Preprocessor};
pub use tables::{extract_tables, require_rows};
pub use template::{Clause, HEADWORD, Template};
