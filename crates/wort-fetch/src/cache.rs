use std::path::{Path, PathBuf};

use async_trait::async_trait;

use crate::{Downloader, FetchError};

/// Keeps every downloaded page on disk, one file per URL, forever.
pub struct CachedDownloader<D> {
    delegate: D,
    dir: PathBuf,
}

impl<D: Downloader> CachedDownloader<D> {
    /// Creates `dir` if needed.
    pub fn new(dir: impl Into<PathBuf>, delegate: D) -> Result<Self, FetchError> {
        let dir = dir.into();
        std::fs::create_dir_all(&dir).map_err(|source| FetchError::Cache {
            path: dir.clone(),
            source,
        })?;
        Ok(Self { delegate, dir })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Cache file for `url`
    pub fn path_for(&self, url: &str) -> PathBuf {
        self.dir.join(&*urlencoding::encode(url))
    }
}

/// Sibling of `path` a page is written to before it is renamed into place
fn partial_path(path: &Path) -> PathBuf {
    let mut name = path.as_os_str().to_owned();
    name.push(".part");
    PathBuf::from(name)
}

/// Write `page` so that `path` either holds all of it or does not exist.
async fn write_whole(path: &Path, page: &str) -> std::io::Result<()> {
    let partial = partial_path(path);
    let written = match tokio::fs::write(&partial, page).await {
        Ok(()) => tokio::fs::rename(&partial, path).await,
        Err(err) => Err(err),
    };
    if written.is_err() {
        let _ = tokio::fs::remove_file(&partial).await;
    }
    written
}

#[async_trait]
impl<D: Downloader> Downloader for CachedDownloader<D> {
    async fn download(&self, url: &str) -> Result<String, FetchError> {
        let path = self.path_for(url);
        let cache_error = |source| FetchError::Cache {
            path: path.clone(),
            source,
        };

        if tokio::fs::try_exists(&path).await.map_err(cache_error)? {
            tracing::debug!("Cache hit for {}", url);
            return tokio::fs::read_to_string(&path).await.map_err(cache_error);
        }

        tracing::debug!("Cache miss for {}", url);
        let page = self.delegate.download(url).await?;
        write_whole(&path, &page).await.map_err(cache_error)?;
        Ok(page)
    }
}
