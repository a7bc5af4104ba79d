use std::path::PathBuf;

use clap::Parser;
use wort_types::PartOfSpeech;

/// Look up a German word on verbformen.com
#[derive(Parser, Debug)]
#[command(name = "wort", version, about)]
pub struct Cli {
    /// Word to look up
    pub word: String,

    /// Search the noun dictionary
    #[arg(long, conflicts_with = "verb")]
    pub noun: bool,

    /// Search the verb dictionary
    #[arg(long)]
    pub verb: bool,

    /// Print declension or conjugation tables
    #[arg(long)]
    pub tables: bool,

    /// Print the record as JSON
    #[arg(long)]
    pub json: bool,

    /// Always download, bypassing the page cache
    #[arg(long)]
    pub no_cache: bool,

    /// JSON config file; `WORT_*` environment variables are used otherwise
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Debug logging
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    pub fn hint(&self) -> Option<PartOfSpeech> {
        match (self.noun, self.verb) {
            (true, _) => Some(PartOfSpeech::Noun),
            (_, true) => Some(PartOfSpeech::Verb),
            _ => None,
        }
    }
}
