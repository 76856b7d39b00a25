// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

use crate::extensions::{
    ensure_args_count, ensure_integer, ensure_string, ExtensionsMap, Value,
};

use anyhow::{anyhow, Result};

pub fn register(m: &mut ExtensionsMap) {
    m.insert("parseJson", (parse_json, 1));
    m.insert("parseYaml", (parse_yaml, 1));
    m.insert("manifestJsonFromJson", (manifest_json_from_json, 2));
    m.insert("manifestYamlFromJson", (manifest_yaml_from_json, 1));
}

fn parse_json(args: &[Value]) -> Result<Value> {
    let name = "parseJson";
    ensure_args_count(name, args, 1)?;

    let text = ensure_string(name, &args[0])?;
    serde_json::from_str(&text).map_err(|e| anyhow!("`{name}`: {e}"))
}

// A single document yields its value; a multi-document stream yields the
// array of documents.
fn parse_yaml(args: &[Value]) -> Result<Value> {
    let name = "parseYaml";
    ensure_args_count(name, args, 1)?;

    let text = ensure_string(name, &args[0])?;
    let mut docs = Vec::new();
    for doc in serde_yaml::Deserializer::from_str(&text) {
        let value: Value =
            serde::Deserialize::deserialize(doc).map_err(|e| anyhow!("`{name}`: {e}"))?;
        docs.push(value);
    }

    if docs.len() == 1 {
        return Ok(docs.swap_remove(0));
    }
    Ok(Value::Array(docs))
}

fn manifest_json_from_json(args: &[Value]) -> Result<Value> {
    let name = "manifestJsonFromJson";
    ensure_args_count(name, args, 2)?;

    let text = ensure_string(name, &args[0])?;
    let indent = ensure_integer(name, &args[1])? as usize;
    let value: Value = serde_json::from_str(&text).map_err(|e| anyhow!("`{name}`: {e}"))?;

    let indent_str = " ".repeat(indent);
    let mut out = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(indent_str.as_bytes());
    let mut ser = serde_json::Serializer::with_formatter(&mut out, formatter);
    serde::Serialize::serialize(&value, &mut ser).map_err(|e| anyhow!("`{name}`: {e}"))?;

    let mut rendered = String::from_utf8(out).map_err(|e| anyhow!("`{name}`: {e}"))?;
    rendered.push('\n');
    Ok(Value::String(rendered))
}

fn manifest_yaml_from_json(args: &[Value]) -> Result<Value> {
    let name = "manifestYamlFromJson";
    ensure_args_count(name, args, 1)?;

    let text = ensure_string(name, &args[0])?;
    let value: Value = serde_json::from_str(&text).map_err(|e| anyhow!("`{name}`: {e}"))?;
    let rendered = serde_yaml::to_string(&value).map_err(|e| anyhow!("`{name}`: {e}"))?;
    Ok(Value::String(rendered))
}
