use std::path::PathBuf;

pub mod cache;
pub mod http;
pub mod url;

pub use cache::CachedDownloader;
pub use http::HttpDownloader;
pub use url::search_url;

/// Page source
#[async_trait::async_trait]
pub trait Downloader: Send + Sync {
    /// Body of the page at `url`
    async fn download(&self, url: &str) -> Result<String, FetchError>;
}

#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("HTTP {status} for {url}")]
    Status { url: String, status: u16 },

    #[error("Cache error at {}: {source}", .path.display())]
    Cache {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
