use wort_types::Record;

use crate::error::ExtractError;

/// Turns one downloaded page into a record.
pub trait PageParser: Send + Sync {
    /// Short identifier of the site the parser understands
    fn site(&self) -> &'static str;

    fn parse_page(&self, html: &str) -> Result<Record, ExtractError>;
}
