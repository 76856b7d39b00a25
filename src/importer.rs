// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! Import resolution against a fixed search path, with per-evaluation
//! caching.

use crate::locate::{canonicalize, file_exists};
use crate::{Error, Result};

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::rc::Rc;

use log::debug;

/// A resolved import: the canonical file that satisfied the request and
/// its contents.
#[derive(Clone, Debug)]
pub struct Import {
    pub path: PathBuf,
    pub contents: Rc<str>,
}

/// Resolves `import`/`importstr` requests on behalf of the engine.
///
/// Contents are cached by canonical path for the lifetime of the
/// importer: repeated imports of one file, from any importing file, hit
/// the filesystem once and return the identical buffer. One importer
/// serves exactly one evaluation and is never shared.
pub struct Importer {
    search_path: Vec<PathBuf>,
    // canonical path -> contents
    cache: HashMap<PathBuf, Rc<str>>,
    // absolute candidate -> canonical path, so repeated requests skip the
    // stat probes as well
    resolved: HashMap<PathBuf, PathBuf>,
}

impl Importer {
    pub fn new(search_path: Vec<PathBuf>) -> Self {
        Self {
            search_path,
            cache: HashMap::new(),
            resolved: HashMap::new(),
        }
    }

    pub fn search_path(&self) -> &[PathBuf] {
        &self.search_path
    }

    /// Resolve `requested` on behalf of `importing_file`.
    ///
    /// Absolute requests and requests beginning with `./` or `../`
    /// resolve against the importing file's directory only; anything else
    /// probes the search path in order, first match winning.
    pub fn import(&mut self, importing_file: &Path, requested: &str) -> Result<Import> {
        let (candidates, probed) = self.candidates(importing_file, requested);

        for candidate in &candidates {
            if let Some(canonical) = self.resolved.get(candidate.as_path()) {
                debug!("import cache hit: {requested} -> {}", canonical.display());
                let contents = self.cache[canonical].clone();
                return Ok(Import {
                    path: canonical.clone(),
                    contents,
                });
            }
            if file_exists(candidate)? {
                return self.load(candidate.clone());
            }
        }

        Err(Error::ImportNotFound {
            requested: requested.to_string(),
            searched: probed,
        })
    }

    // Candidate files to probe, in precedence order, plus the directories
    // the probe covers (reported on failure).
    fn candidates(
        &self,
        importing_file: &Path,
        requested: &str,
    ) -> (Vec<PathBuf>, Vec<PathBuf>) {
        let requested_path = Path::new(requested);
        if requested_path.is_absolute() {
            let probed = requested_path
                .parent()
                .map(Path::to_path_buf)
                .into_iter()
                .collect();
            return (vec![requested_path.to_path_buf()], probed);
        }
        if requested.starts_with("./") || requested.starts_with("../") {
            return match importing_file.parent() {
                Some(dir) => (vec![dir.join(requested_path)], vec![dir.to_path_buf()]),
                None => (vec![], vec![]),
            };
        }
        (
            self.search_path
                .iter()
                .map(|dir| dir.join(requested_path))
                .collect(),
            self.search_path.clone(),
        )
    }

    fn load(&mut self, candidate: PathBuf) -> Result<Import> {
        let canonical = canonicalize(&candidate)?;

        if let Some(contents) = self.cache.get(&canonical) {
            // Another candidate path already led here (e.g. via symlink).
            let contents = contents.clone();
            self.resolved.insert(candidate, canonical.clone());
            return Ok(Import {
                path: canonical,
                contents,
            });
        }

        let text = std::fs::read_to_string(&canonical).map_err(|e| match e.kind() {
            std::io::ErrorKind::NotFound => Error::NotFound(canonical.clone()),
            _ => Error::Io {
                path: canonical.clone(),
                source: e,
            },
        })?;
        debug!("imported {}", canonical.display());

        let contents: Rc<str> = Rc::from(text);
        self.cache.insert(canonical.clone(), contents.clone());
        self.resolved.insert(candidate, canonical.clone());
        Ok(Import {
            path: canonical,
            contents,
        })
    }
}
