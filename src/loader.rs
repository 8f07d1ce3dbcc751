//! Declaration loading: discovery, reading and parsing chained into a single
//! lazy stream.

use std::fs;
use std::path::{Path, PathBuf};
use std::vec;

use tracing::debug;

use crate::config::ScanConfig;
use crate::discovery::{discover, SourceFiles};
use crate::error::{Error, Result};
use crate::parser::{Declaration, FrontEnd};

/// Lazy stream of top-level declarations across every discovered file.
///
/// A file is read and parsed only once the previous file's declarations
/// have been consumed. After yielding an error the stream ends.
pub struct DeclarationStream<'p, P: FrontEnd + ?Sized, F = SourceFiles> {
    files: F,
    parser: &'p P,
    current: vec::IntoIter<Declaration>,
    finished: bool,
}

/// Load the top-level declarations of every source file under `path`.
pub fn load_declarations<'p, P: FrontEnd + ?Sized>(
    path: &Path,
    parser: &'p P,
    config: &ScanConfig,
) -> Result<DeclarationStream<'p, P>> {
    let files = discover(path, &config.extension)?;
    Ok(DeclarationStream::new(files, parser))
}

impl<'p, P, F> DeclarationStream<'p, P, F>
where
    P: FrontEnd + ?Sized,
    F: Iterator<Item = Result<PathBuf>>,
{
    /// Chain an arbitrary file sequence with `parser`.
    pub fn new(files: F, parser: &'p P) -> Self {
        Self {
            files,
            parser,
            current: Vec::new().into_iter(),
            finished: false,
        }
    }

    fn load_file(&self, path: PathBuf) -> Result<Vec<Declaration>> {
        let text = fs::read_to_string(&path).map_err(|source| Error::Read {
            path: path.clone(),
            source,
        })?;
        let declarations = self
            .parser
            .parse(&text)
            .map_err(|source| Error::ParseFailure {
                path: path.clone(),
                source,
            })?;
        debug!(
            file = %path.display(),
            declarations = declarations.len(),
            "parsed source file"
        );
        Ok(declarations)
    }
}

impl<P, F> Iterator for DeclarationStream<'_, P, F>
where
    P: FrontEnd + ?Sized,
    F: Iterator<Item = Result<PathBuf>>,
{
    type Item = Result<Declaration>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(declaration) = self.current.next() {
                return Some(Ok(declaration));
            }
            if self.finished {
                return None;
            }

            let loaded = match self.files.next() {
                None => {
                    self.finished = true;
                    return None;
                }
                Some(file) => file.and_then(|path| self.load_file(path)),
            };
            match loaded {
                Ok(declarations) => self.current = declarations.into_iter(),
                Err(err) => {
                    self.finished = true;
                    return Some(Err(err));
                }
            }
        }
    }
}
