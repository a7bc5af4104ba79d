pub mod level;
pub mod record;
pub mod table;

pub use level::Level;
pub use record::{Adjective, Entry, NotFound, Noun, PartOfSpeech, Record, Verb};
pub use table::{CASE_ROWS, InflectionTable, PERSON_ROWS};
