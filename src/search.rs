// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! Import search path construction.

use crate::locate::{canonicalize, parent_dir, LIB_DIR, VENDOR_DIR};
use crate::{Error, Result};

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use log::debug;

/// Build the ordered list of directories the importer probes for bare
/// import requests. Earlier entries win on conflicting names.
///
/// The order is: the entrypoint's own directory, `<root>/lib`,
/// `<root>/vendor`, then any caller-supplied `extra` directories. Entries
/// that do not exist are skipped rather than failing; surviving entries
/// are canonicalized and de-duplicated, keeping their first position.
pub fn build_search_path(
    entrypoint: &Path,
    root: &Path,
    extra: &[PathBuf],
) -> Result<Vec<PathBuf>> {
    let base = parent_dir(entrypoint)?;

    let mut candidates = vec![base, root.join(LIB_DIR), root.join(VENDOR_DIR)];
    candidates.extend(extra.iter().cloned());

    let mut search_path = Vec::new();
    let mut seen = HashSet::new();
    for dir in candidates {
        if !dir_exists(&dir)? {
            continue;
        }
        let canonical = canonicalize(&dir)?;
        if seen.insert(canonical.clone()) {
            search_path.push(canonical);
        }
    }

    debug!(
        "search path for {}: {:?}",
        entrypoint.display(),
        search_path
    );
    Ok(search_path)
}

fn dir_exists(path: &Path) -> Result<bool> {
    match std::fs::metadata(path) {
        Ok(m) => Ok(m.is_dir()),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(false),
        Err(e) => Err(Error::Io {
            path: path.to_path_buf(),
            source: e,
        }),
    }
}
