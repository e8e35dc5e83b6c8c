use std::path::{Path, PathBuf};

use clap::Parser;
use serde::{Deserialize, Serialize};
use tracing::warn;

const DEFAULT_ROOT: &str = "extensions";

/// Write an `index.json` listing into every directory of a tree.
#[derive(Debug, Serialize, Deserialize, Default, Parser)]
#[command(version, about)]
pub struct Config {
    /// The directory to index. Defaults to `extensions`.
    root: Option<PathBuf>,
    /// Whether to show a progress spinner.
    #[arg(short, long)]
    progress: Option<bool>,
    /// Descend into symlinked directories. Cycles are not detected.
    #[arg(short = 'L', long)]
    follow_symlinks: Option<bool>,
    /// Log debug output to stderr.
    #[serde(skip)]
    #[arg(short, long)]
    verbose: bool,
}

impl Config {
    pub fn root(&self) -> &Path {
        self.root.as_deref().unwrap_or(Path::new(DEFAULT_ROOT))
    }

    pub fn progress(&self) -> bool {
        self.progress.unwrap_or(true)
    }

    pub fn follow_symlinks(&self) -> bool {
        self.follow_symlinks.unwrap_or(false)
    }

    pub fn verbose(&self) -> bool {
        self.verbose
    }

    pub fn extends(self, other: Config) -> Self {
        Self {
            root: other.root.or(self.root),
            progress: other.progress.or(self.progress),
            follow_symlinks: other.follow_symlinks.or(self.follow_symlinks),
            verbose: other.verbose || self.verbose,
        }
    }

    /// Settings from the config file, or the defaults if it is missing or
    /// unreadable.
    pub fn new_from_file() -> Self {
        match Self::load_from_file() {
            Ok(config) => config,
            Err(e) => {
                warn!("Ignoring config file: {}", e);
                Self::default()
            }
        }
    }

    fn load_from_file() -> anyhow::Result<Self> {
        let base_dir = xdg::BaseDirectories::with_prefix("extindex")?;
        let config_file = base_dir.get_config_file("config.toml");
        if config_file.exists() {
            let config = std::fs::read_to_string(config_file)?;
            Self::from_toml(&config)
        } else {
            Ok(Self::default())
        }
    }

    fn from_toml(raw: &str) -> anyhow::Result<Self> {
        Ok(toml::from_str(raw)?)
    }

    #[cfg(test)]
    pub fn for_root(root: impl Into<PathBuf>) -> Self {
        Self {
            root: Some(root.into()),
            progress: Some(false),
            ..Default::default()
        }
    }

    #[cfg(test)]
    pub fn with_follow_symlinks(mut self, follow: bool) -> Self {
        self.follow_symlinks = Some(follow);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn defaults() {
        let config = Config::default();
        assert_eq!(config.root(), Path::new("extensions"));
        assert!(config.progress());
        assert!(!config.follow_symlinks());
        assert!(!config.verbose());
    }

    #[test]
    fn args_override_file() {
        let file = Config::from_toml("root = \"gallery\"\nprogress = false\n").unwrap();
        let args = Config::try_parse_from(["extindex", "public/extensions"]).unwrap();
        let merged = file.extends(args);
        assert_eq!(merged.root(), Path::new("public/extensions"));
        assert!(!merged.progress());
    }

    #[test]
    fn file_values_survive_when_args_are_absent() {
        let file = Config::from_toml("follow_symlinks = true\n").unwrap();
        let args = Config::try_parse_from(["extindex", "--verbose"]).unwrap();
        let merged = file.extends(args);
        assert_eq!(merged.root(), Path::new("extensions"));
        assert!(merged.follow_symlinks());
        assert!(merged.verbose());
    }

    #[test]
    fn invalid_toml_is_an_error() {
        assert!(Config::from_toml("progress = \"maybe\"").is_err());
    }
}
