// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

// Use README.md as crate documentation.
#![doc = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/README.md"))]

mod context;
mod engine;
mod error;
mod eval;
mod extensions;
mod importer;
mod locate;
mod search;

pub use context::{with_ext_code, with_tla_code, Context, Modifier};
pub use engine::Engine;
pub use error::{Error, Result};
pub use eval::{evaluate, evaluate_file};
pub use extensions::{ExtensionFcn, ExtensionsMap, Value, EXTENSIONS};
pub use importer::{Import, Importer};
pub use locate::{
    find_root, resolve_entrypoint, DEFAULT_ENTRYPOINT, LIB_DIR, MANIFEST_FILE, VENDOR_DIR,
};
pub use search::build_search_path;
