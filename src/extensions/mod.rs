// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! Builtin extension functions registered into every evaluation context.

pub mod manifest;
pub mod strings;

use std::collections::HashMap;

use anyhow::{bail, Result};
use lazy_static::lazy_static;

/// Values exchanged with extension functions.
pub type Value = serde_json::Value;

/// An extension function: named, fixed arity, identical across all
/// evaluations in a process.
pub type ExtensionFcn = fn(&[Value]) -> Result<Value>;

pub type ExtensionsMap = HashMap<&'static str, (ExtensionFcn, u8)>;

lazy_static! {
    /// The fixed extension set. Contexts receive a copy of this table
    /// rather than mutating shared state.
    pub static ref EXTENSIONS: ExtensionsMap = {
        let mut m = ExtensionsMap::new();

        strings::register(&mut m);
        manifest::register(&mut m);

        m
    };
}

pub(crate) fn ensure_args_count(fcn: &'static str, args: &[Value], expected: usize) -> Result<()> {
    if args.len() != expected {
        if expected == 1 {
            bail!("`{fcn}` expects 1 argument");
        }
        bail!("`{fcn}` expects {expected} arguments");
    }
    Ok(())
}

pub(crate) fn ensure_string(fcn: &str, v: &Value) -> Result<String> {
    match v {
        Value::String(s) => Ok(s.clone()),
        _ => bail!("`{fcn}` expects string argument. Got `{v}` instead"),
    }
}

pub(crate) fn ensure_integer(fcn: &str, v: &Value) -> Result<u64> {
    match v.as_u64() {
        Some(n) => Ok(n),
        None => bail!("`{fcn}` expects non-negative integer argument. Got `{v}` instead"),
    }
}
