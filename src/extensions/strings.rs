// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

use crate::extensions::{ensure_args_count, ensure_string, ExtensionsMap, Value};

use anyhow::{bail, Result};
use regex::Regex;

pub fn register(m: &mut ExtensionsMap) {
    m.insert("escapeStringRegex", (escape_string_regex, 1));
    m.insert("regexMatch", (regex_match, 2));
    m.insert("regexSubst", (regex_subst, 3));
}

fn escape_string_regex(args: &[Value]) -> Result<Value> {
    let name = "escapeStringRegex";
    ensure_args_count(name, args, 1)?;

    let s = ensure_string(name, &args[0])?;
    Ok(Value::String(regex::escape(&s)))
}

fn regex_match(args: &[Value]) -> Result<Value> {
    let name = "regexMatch";
    ensure_args_count(name, args, 2)?;

    let pattern = ensure_string(name, &args[0])?;
    let s = ensure_string(name, &args[1])?;

    let pattern = Regex::new(&pattern).or_else(|_| bail!("`{name}`: invalid regex"))?;
    Ok(Value::Bool(pattern.is_match(&s)))
}

fn regex_subst(args: &[Value]) -> Result<Value> {
    let name = "regexSubst";
    ensure_args_count(name, args, 3)?;

    let pattern = ensure_string(name, &args[0])?;
    let src = ensure_string(name, &args[1])?;
    let repl = ensure_string(name, &args[2])?;

    let pattern = Regex::new(&pattern).or_else(|_| bail!("`{name}`: invalid regex"))?;
    Ok(Value::String(
        pattern.replace_all(&src, repl.as_str()).to_string(),
    ))
}
