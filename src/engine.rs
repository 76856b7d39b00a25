// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

use crate::context::Context;
use crate::Result;

/// The external template engine driven by [`evaluate`](crate::evaluate).
///
/// The engine receives a fully configured [`Context`] — template source,
/// importer, bindings and extension functions — and renders the output
/// string. Template diagnostics are reported as
/// [`Error::Evaluation`](crate::Error::Evaluation) with the engine's
/// message kept verbatim; errors returned by [`Context::import`] must
/// propagate unchanged so the caller-visible error taxonomy survives the
/// engine boundary.
pub trait Engine {
    fn evaluate(&self, ctx: &mut Context) -> Result<String>;
}
