use std::path::{Path, PathBuf};

use tracing::debug;

use crate::{
    config::Config,
    entity::{DirectoryListing, INDEX_FILE_NAME},
    error::IndexError,
    progress::ProgressBarManager,
};

#[derive(Debug)]
pub struct Context {
    /// The configuration.
    pub config: Config,
    /// The progress bar.
    pub bar: ProgressBarManager,
}

impl Context {
    /// Create a new context.
    pub fn new(config: Config) -> Self {
        let bar = ProgressBarManager::new(&config);
        Self { config, bar }
    }

    pub fn build_index_path<P>(&self, dir: P) -> PathBuf
    where
        P: AsRef<Path>,
    {
        dir.as_ref().join(INDEX_FILE_NAME)
    }

    /// Write `listing` to `dir/index.json`, replacing whatever is there.
    pub async fn write_listing<P>(
        &self,
        dir: P,
        listing: &DirectoryListing,
    ) -> Result<PathBuf, IndexError>
    where
        P: AsRef<Path>,
    {
        let index_path = self.build_index_path(dir);
        let value = serde_json::to_string_pretty(listing)
            .map_err(|e| IndexError::serialize(&index_path, e))?;
        tokio::fs::write(&index_path, value)
            .await
            .map_err(|e| IndexError::write(&index_path, e))?;
        if listing.is_empty() {
            debug!("Wrote empty listing to {}", index_path.display());
        } else {
            debug!("Wrote {} entries to {}", listing.len(), index_path.display());
        }
        Ok(index_path)
    }

    /// Print a console line on stdout.
    pub fn announce(&self, line: impl AsRef<str>) {
        self.bar.println(line);
    }
}
