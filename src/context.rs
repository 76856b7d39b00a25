// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! The per-evaluation context and caller-supplied modifiers.

use crate::extensions::{ExtensionsMap, EXTENSIONS};
use crate::importer::{Import, Importer};
use crate::Result;

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// Everything one evaluation needs: the template, its importer, the
/// caller-supplied bindings and the extension table. A fresh context is
/// built for every evaluation; nothing leaks across calls.
pub struct Context {
    filename: String,
    source: String,
    importer: Importer,
    ext_code: BTreeMap<String, String>,
    tla_code: BTreeMap<String, String>,
    extensions: ExtensionsMap,
}

impl Context {
    pub(crate) fn new(
        filename: impl Into<String>,
        source: impl Into<String>,
        importer: Importer,
    ) -> Self {
        Self {
            filename: filename.into(),
            source: source.into(),
            importer,
            ext_code: BTreeMap::new(),
            tla_code: BTreeMap::new(),
            extensions: ExtensionsMap::new(),
        }
    }

    pub fn filename(&self) -> &str {
        &self.filename
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    /// External-variable bindings, keyed by variable name. Values are
    /// code fragments in the template language.
    pub fn ext_code(&self) -> &BTreeMap<String, String> {
        &self.ext_code
    }

    /// Top-level-argument bindings, keyed by parameter name.
    pub fn tla_code(&self) -> &BTreeMap<String, String> {
        &self.tla_code
    }

    pub fn set_ext_code(&mut self, key: impl Into<String>, code: impl Into<String>) {
        self.ext_code.insert(key.into(), code.into());
    }

    pub fn set_tla_code(&mut self, key: impl Into<String>, code: impl Into<String>) {
        self.tla_code.insert(key.into(), code.into());
    }

    /// The registered extension functions, name -> (callable, arity).
    pub fn extensions(&self) -> &ExtensionsMap {
        &self.extensions
    }

    pub(crate) fn register_extensions(&mut self) {
        self.extensions = EXTENSIONS.clone();
    }

    /// Resolve an import on behalf of `importing_file`. Engines call this
    /// for every `import`/`importstr` statement they encounter.
    pub fn import(&mut self, importing_file: &Path, requested: &str) -> Result<Import> {
        self.importer.import(importing_file, requested)
    }

    pub fn search_path(&self) -> &[PathBuf] {
        self.importer.search_path()
    }
}

/// A deferred configuration step applied to the context before the engine
/// runs. Steps apply in the order supplied; the first failure aborts the
/// evaluation before the engine sees the template.
pub struct Modifier(Box<dyn Fn(&mut Context) -> anyhow::Result<()>>);

impl Modifier {
    /// Wrap an arbitrary configuration closure.
    pub fn new(f: impl Fn(&mut Context) -> anyhow::Result<()> + 'static) -> Self {
        Self(Box::new(f))
    }

    pub(crate) fn apply(&self, ctx: &mut Context) -> anyhow::Result<()> {
        (self.0)(ctx)
    }
}

/// Bind `code` to the external variable `key`.
pub fn with_ext_code(key: impl Into<String>, code: impl Into<String>) -> Modifier {
    let (key, code) = (key.into(), code.into());
    Modifier::new(move |ctx| {
        ctx.set_ext_code(key.clone(), code.clone());
        Ok(())
    })
}

/// Bind `code` as the top-level argument `key`.
pub fn with_tla_code(key: impl Into<String>, code: impl Into<String>) -> Modifier {
    let (key, code) = (key.into(), code.into());
    Modifier::new(move |ctx| {
        ctx.set_tla_code(key.clone(), code.clone());
        Ok(())
    })
}
