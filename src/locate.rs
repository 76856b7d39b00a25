// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! Entrypoint and project root discovery.
//!
//! A project root is the nearest ancestor of the entrypoint carrying a
//! `tplfile.json` manifest or a `vendor` directory. Without one, the
//! entrypoint's own directory anchors import resolution.

use crate::{Error, Result};

use std::path::{Path, PathBuf};

use log::debug;

/// Filename evaluated when the input path is a directory.
pub const DEFAULT_ENTRYPOINT: &str = "main.tpl";

/// Dependency manifest whose presence marks a project root.
pub const MANIFEST_FILE: &str = "tplfile.json";

/// Vendored dependencies, directly under the project root.
pub const VENDOR_DIR: &str = "vendor";

/// First-party library templates, directly under the project root.
pub const LIB_DIR: &str = "lib";

// Upper bound on the root-discovery walk.
const MAX_ANCESTOR_DEPTH: usize = 128;

/// Resolve `path` to the absolute, canonical entrypoint file.
///
/// Directory inputs resolve to their `main.tpl`. The result always
/// references an existing regular file.
pub fn resolve_entrypoint<P: AsRef<Path>>(path: P) -> Result<PathBuf> {
    let abs = absolutize(path.as_ref())?;
    let metadata = match std::fs::metadata(&abs) {
        Ok(m) => m,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Err(Error::NotFound(abs)),
        Err(e) => return Err(Error::Io { path: abs, source: e }),
    };

    let entrypoint = if metadata.is_dir() {
        let candidate = abs.join(DEFAULT_ENTRYPOINT);
        if !file_exists(&candidate)? {
            return Err(Error::NotFound(candidate));
        }
        candidate
    } else {
        abs
    };

    canonicalize(&entrypoint)
}

/// Find the project root anchoring `entrypoint` by walking upward until a
/// marker is found. Falls back to the entrypoint's own directory when no
/// ancestor carries one.
pub fn find_root(entrypoint: &Path) -> Result<PathBuf> {
    let base = parent_dir(entrypoint)?;

    let mut dir = base.clone();
    for _ in 0..MAX_ANCESTOR_DEPTH {
        if has_marker(&dir) {
            debug!("project root {} for {}", dir.display(), entrypoint.display());
            return Ok(dir);
        }
        match dir.parent() {
            Some(parent) => dir = parent.to_path_buf(),
            None => break,
        }
    }

    debug!(
        "no project marker above {}, using its own directory",
        entrypoint.display()
    );
    Ok(base)
}

fn has_marker(dir: &Path) -> bool {
    dir.join(MANIFEST_FILE).is_file() || dir.join(VENDOR_DIR).is_dir()
}

pub(crate) fn parent_dir(file: &Path) -> Result<PathBuf> {
    match file.parent() {
        Some(p) if !p.as_os_str().is_empty() => Ok(p.to_path_buf()),
        _ => Err(Error::NotFound(file.to_path_buf())),
    }
}

pub(crate) fn absolutize(path: &Path) -> Result<PathBuf> {
    if path.is_absolute() {
        return Ok(path.to_path_buf());
    }
    let cwd = std::env::current_dir().map_err(|e| Error::Io {
        path: path.to_path_buf(),
        source: e,
    })?;
    Ok(cwd.join(path))
}

pub(crate) fn canonicalize(path: &Path) -> Result<PathBuf> {
    std::fs::canonicalize(path).map_err(|e| match e.kind() {
        std::io::ErrorKind::NotFound => Error::NotFound(path.to_path_buf()),
        _ => Error::Io {
            path: path.to_path_buf(),
            source: e,
        },
    })
}

pub(crate) fn file_exists(path: &Path) -> Result<bool> {
    match std::fs::metadata(path) {
        Ok(m) => Ok(m.is_file()),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(false),
        Err(e) => Err(Error::Io {
            path: path.to_path_buf(),
            source: e,
        }),
    }
}
