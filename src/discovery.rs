//! Source file discovery.
//!
//! Yields candidate source files lazily: a single matching file, or every
//! matching file under a directory in a stable, name-sorted walk.

use std::ffi::OsStr;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use tracing::debug;
use walkdir::WalkDir;

use crate::error::{Error, Result};

/// Extension of Kotlin source files
pub const DEFAULT_EXTENSION: &str = "kt";

/// Lazy sequence of discovered source files.
pub struct SourceFiles {
    inner: Source,
    extension: String,
}

enum Source {
    Single(Option<PathBuf>),
    Walk(walkdir::IntoIter),
}

/// Discover source files under `path` whose extension equals `extension`.
///
/// Symbolic links are followed, so a link to a matching file is yielded under
/// the link's path. A missing or unreadable root fails immediately with
/// [`Error::ResourceNotFound`]; link loops met during the walk are yielded as
/// the same error.
pub fn discover(path: &Path, extension: &str) -> Result<SourceFiles> {
    let metadata = fs::metadata(path).map_err(|source| Error::ResourceNotFound {
        path: path.to_path_buf(),
        source,
    })?;

    let inner = if metadata.is_dir() {
        // surface an unreadable root here rather than on the first pull
        fs::read_dir(path).map_err(|source| Error::ResourceNotFound {
            path: path.to_path_buf(),
            source,
        })?;
        debug!(root = %path.display(), extension, "walking source directory");
        Source::Walk(
            WalkDir::new(path)
                .follow_links(true)
                .sort_by_file_name()
                .into_iter(),
        )
    } else {
        Source::Single(Some(path.to_path_buf()))
    };

    Ok(SourceFiles {
        inner,
        extension: extension.to_string(),
    })
}

fn has_extension(path: &Path, extension: &str) -> bool {
    path.extension().and_then(OsStr::to_str) == Some(extension)
}

impl Iterator for SourceFiles {
    type Item = Result<PathBuf>;

    fn next(&mut self) -> Option<Self::Item> {
        let extension = &self.extension;
        match &mut self.inner {
            Source::Single(path) => path.take().filter(|p| has_extension(p, extension)).map(Ok),
            Source::Walk(walk) => loop {
                match walk.next()? {
                    Ok(entry) => {
                        if entry.file_type().is_file() && has_extension(entry.path(), extension) {
                            return Some(Ok(entry.into_path()));
                        }
                    }
                    Err(err) => {
                        let path = err
                            .path()
                            .map(Path::to_path_buf)
                            .unwrap_or_default();
                        return Some(Err(Error::ResourceNotFound {
                            path,
                            source: io::Error::from(err),
                        }));
                    }
                }
            },
        }
    }
}
