//! Directory listing generation.
//!
//! Walks a tree depth-first and writes an `index.json` into every directory
//! it visits, describing that directory's direct children.

use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};
use walkdir::WalkDir;

use crate::{context::Context, entity::DirectoryListing, error::IndexError};

/// Totals for one run.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct IndexSummary {
    /// Number of `index.json` files written.
    pub directories: usize,
    /// Number of entries across all of them.
    pub entries: usize,
}

/// The direct children of one directory.
#[derive(Debug)]
struct ScannedDirectory {
    listing: DirectoryListing,
    /// Sub-directories to visit next, in read order.
    descend: Vec<PathBuf>,
}

/// Write an `index.json` into `root` and every directory below it.
///
/// Parents are written before their children. The first I/O failure aborts
/// the walk; listings written up to that point are left in place. A root that
/// is a plain file has no directories to list, so nothing is written.
pub async fn generate_index_files(
    context: &Context,
    root: &Path,
) -> Result<IndexSummary, IndexError> {
    match tokio::fs::metadata(root).await {
        Ok(meta) if meta.is_dir() => {}
        Ok(_) => {
            warn!("{} is not a directory, nothing to index", root.display());
            return Ok(IndexSummary::default());
        }
        Err(e) => {
            debug!("Cannot stat {}: {}", root.display(), e);
            return Err(IndexError::RootNotFound(root.to_path_buf()));
        }
    }

    info!("Indexing {}", root.display());
    let follow_symlinks = context.config.follow_symlinks();
    let pb = context.bar.add_root();
    let mut summary = IndexSummary::default();
    let mut pending = vec![root.to_path_buf()];

    while let Some(dir) = pending.pop() {
        pb.set_message(dir.display().to_string());

        let scanned = scan_directory(&dir, follow_symlinks)?;
        let index_path = context.write_listing(&dir, &scanned.listing).await?;
        context.announce(generated_line(&index_path));

        summary.directories += 1;
        summary.entries += scanned.listing.len();
        pb.inc(1);

        // Reversed so the first sub-directory read is the next one popped.
        pending.extend(scanned.descend.into_iter().rev());
    }

    pb.finish();
    info!(
        "Wrote {} listings with {} entries",
        summary.directories, summary.entries
    );
    Ok(summary)
}

/// Console line announcing a written listing.
pub fn generated_line(index_path: &Path) -> String {
    format!("Generated {}", index_path.display())
}

/// Console line closing a run. A missing root is reported, not fatal; any
/// other failure is passed back to the caller.
pub fn outcome_line(outcome: Result<IndexSummary, IndexError>) -> Result<String, IndexError> {
    match outcome {
        Ok(_) => Ok("All index.json files generated successfully.".to_owned()),
        Err(IndexError::RootNotFound(path)) => {
            Ok(format!("Directory '{}' not found!", path.display()))
        }
        Err(e) => Err(e),
    }
}

/// Read the direct children of `dir` without descending.
///
/// A child whose type cannot be determined, such as a dangling link, is
/// listed as a file. Failing to read `dir` itself is fatal.
fn scan_directory(dir: &Path, follow_symlinks: bool) -> Result<ScannedDirectory, IndexError> {
    let walker = WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .follow_links(follow_symlinks);

    let mut dirs = Vec::new();
    let mut files = Vec::new();
    let mut descend = Vec::new();

    for child in walker {
        let child = match child {
            Ok(child) => child,
            Err(err) => {
                let Some(path) = err.path().filter(|p| *p != dir).map(Path::to_path_buf) else {
                    return Err(IndexError::read_dir(dir, err.into()));
                };
                let name = file_name_of(&path);
                if err.loop_ancestor().is_some() {
                    warn!("Not descending into {}: filesystem loop", path.display());
                    dirs.push(name);
                } else {
                    debug!("Listing {} as a file: {}", path.display(), err);
                    files.push(name);
                }
                continue;
            }
        };

        let name = file_name_of(child.path());
        let is_dir = if child.file_type().is_symlink() {
            // Only reached when links are not followed. Broken links count as files.
            std::fs::metadata(child.path())
                .map(|m| m.is_dir())
                .unwrap_or(false)
        } else {
            child.file_type().is_dir()
        };

        if is_dir {
            if child.file_type().is_dir() {
                descend.push(child.into_path());
            } else {
                debug!("Not following symlinked directory {}", child.path().display());
            }
            dirs.push(name);
        } else {
            files.push(name);
        }
    }

    let listing = DirectoryListing::from_children(dir, dirs, files);
    debug!(
        "{}: {} directories, {} files",
        dir.display(),
        listing.dir_count(),
        listing.len() - listing.dir_count()
    );
    Ok(ScannedDirectory { listing, descend })
}

fn file_name_of(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default()
}
