// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

use std::path::PathBuf;

use thiserror::Error;

/// Errors produced by entrypoint discovery, import resolution and
/// evaluation. Every failure is terminal for the evaluation that hit it;
/// nothing is retried or downgraded.
#[derive(Debug, Error)]
pub enum Error {
    /// The entrypoint, or the default entrypoint of a directory input,
    /// does not exist.
    #[error("not found: {}", .0.display())]
    NotFound(PathBuf),

    /// No search path entry satisfied an import request.
    #[error("import not found: {requested} (searched {})", join_dirs(.searched))]
    ImportNotFound {
        requested: String,
        searched: Vec<PathBuf>,
    },

    /// A filesystem failure other than "not found".
    #[error("reading {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    /// A caller-supplied modifier failed before evaluation began.
    #[error("applying modifier: {0}")]
    Modifier(anyhow::Error),

    /// The engine rejected the template. Carries the engine's diagnostic
    /// verbatim.
    #[error("{0}")]
    Evaluation(String),
}

pub type Result<T> = core::result::Result<T, Error>;

fn join_dirs(dirs: &[PathBuf]) -> String {
    dirs.iter()
        .map(|d| d.display().to_string())
        .collect::<Vec<String>>()
        .join(", ")
}
