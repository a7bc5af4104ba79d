use wort_config::Config;
use wort_core::{DefaultPreprocessor, ExtractError, PageParser, Preprocessor};
use wort_fetch::{CachedDownloader, Downloader, FetchError, HttpDownloader, search_url};
use wort_lang_german::VerbformenParser;
use wort_types::{PartOfSpeech, Record};

#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error("Nothing to look up")]
    EmptyWord,

    #[error(transparent)]
    Fetch(#[from] FetchError),

    #[error("Failed to read page {url}")]
    Extract {
        url: String,
        #[source]
        source: ExtractError,
    },
}

/// Downloads a word's page and turns it into a record.
pub struct Client {
    downloader: Box<dyn Downloader>,
    parser: Box<dyn PageParser>,
    preprocessor: DefaultPreprocessor,
    base_url: String,
}

impl Client {
    pub fn new(
        downloader: Box<dyn Downloader>,
        parser: Box<dyn PageParser>,
        base_url: impl Into<String>,
    ) -> Self {
        Self {
            downloader,
            parser,
            preprocessor: DefaultPreprocessor,
            base_url: base_url.into(),
        }
    }

    /// HTTP downloader behind the page cache unless caching is off.
    pub fn from_config(config: &Config, use_cache: bool) -> Result<Self, FetchError> {
        let http = HttpDownloader::new(&config.network)?;

        let downloader: Box<dyn Downloader> = if use_cache && config.cache.enabled {
            tracing::debug!("Page cache at {}", config.cache.dir.display());
            Box::new(CachedDownloader::new(config.cache.dir.clone(), http)?)
        } else {
            Box::new(http)
        };

        Ok(Self::new(
            downloader,
            Box::new(VerbformenParser::new()),
            config.network.base_url.clone(),
        ))
    }

    pub async fn search(&self, word: &str, hint: Option<PartOfSpeech>) -> Result<Record, ClientError> {
        let word = self.preprocessor.process(word);
        if word.is_empty() {
            return Err(ClientError::EmptyWord);
        }

        let url = search_url(&self.base_url, &word, hint);
        tracing::info!("Looking up {} at {}", word, url);

        let html = self.downloader.download(&url).await?;
        let record = self
            .parser
            .parse_page(&html)
            .map_err(|source| ClientError::Extract {
                url: url.clone(),
                source,
            })?;

        match record.part_of_speech() {
            Some(pos) => tracing::debug!("{} parsed {} as {}", self.parser.site(), word, pos),
            None => tracing::debug!("{} has no entry for {}", self.parser.site(), word),
        }

        Ok(record)
    }
}
