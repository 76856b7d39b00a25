// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! Evaluation orchestration.

use crate::context::{Context, Modifier};
use crate::engine::Engine;
use crate::importer::Importer;
use crate::{locate, search};
use crate::{Error, Result};

use std::path::{Path, PathBuf};

/// Evaluate the template at `path`.
///
/// Resolves the entrypoint (directories resolve to their `main.tpl`),
/// discovers the project root and builds the search path, then defers to
/// [`evaluate`]. `extra` directories are appended to the search path with
/// lowest precedence.
pub fn evaluate_file<E: Engine>(
    engine: &E,
    path: impl AsRef<Path>,
    extra: &[PathBuf],
    mods: &[Modifier],
) -> Result<String> {
    let entrypoint = locate::resolve_entrypoint(path)?;
    let source = std::fs::read_to_string(&entrypoint).map_err(|e| Error::Io {
        path: entrypoint.clone(),
        source: e,
    })?;

    let root = locate::find_root(&entrypoint)?;
    let search_path = search::build_search_path(&entrypoint, &root, extra)?;

    evaluate(
        engine,
        &entrypoint.to_string_lossy(),
        &source,
        &search_path,
        mods,
    )
}

/// Evaluate `source` as if read from `filename`, importing against an
/// already-resolved `search_path`.
///
/// The construction order is fixed: importer, fresh context, modifiers in
/// the order given, extension registration, engine. A failing modifier
/// aborts before the engine sees the template or any import is resolved.
pub fn evaluate<E: Engine>(
    engine: &E,
    filename: &str,
    source: &str,
    search_path: &[PathBuf],
    mods: &[Modifier],
) -> Result<String> {
    let importer = Importer::new(search_path.to_vec());
    let mut ctx = Context::new(filename, source, importer);

    for m in mods {
        m.apply(&mut ctx).map_err(Error::Modifier)?;
    }

    ctx.register_extensions();

    engine.evaluate(&mut ctx)
}
