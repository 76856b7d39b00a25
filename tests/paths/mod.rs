// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

use templar::*;

use std::fs;
use std::path::{Path, PathBuf};

fn write(path: &Path, contents: &str) {
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, contents).unwrap();
}

// Discovery through the public API: entrypoint, root, then search path.
fn discover(input: &Path, extra: &[PathBuf]) -> Result<(PathBuf, PathBuf, Vec<PathBuf>)> {
    let entrypoint = resolve_entrypoint(input)?;
    let root = find_root(&entrypoint)?;
    let search_path = build_search_path(&entrypoint, &root, extra)?;
    Ok((entrypoint, root, search_path))
}

#[test]
fn root_found_regardless_of_nesting_depth() -> anyhow::Result<()> {
    let tmp = tempfile::tempdir()?;
    let root = tmp.path().join("proj");
    write(&root.join(MANIFEST_FILE), "{}\n");
    fs::create_dir_all(root.join(VENDOR_DIR))?;

    for depth in ["a", "a/b", "a/b/c/d"] {
        let main = root.join(depth).join("main.tpl");
        write(&main, "{}\n");

        let (entrypoint, found, search_path) = discover(&main, &[])?;
        assert_eq!(found, root.canonicalize()?);
        assert_eq!(
            search_path,
            vec![entrypoint.parent().unwrap().to_path_buf(), found.join(VENDOR_DIR)]
        );
    }
    Ok(())
}

#[test]
fn directory_input_resolves_default_entrypoint() -> anyhow::Result<()> {
    let tmp = tempfile::tempdir()?;
    let root = tmp.path().join("proj");
    write(&root.join(MANIFEST_FILE), "{}\n");
    write(&root.join("env").join(DEFAULT_ENTRYPOINT), "{}\n");

    let (entrypoint, found, _) = discover(&root.join("env"), &[])?;
    assert!(entrypoint.ends_with(DEFAULT_ENTRYPOINT));
    assert_eq!(found, root.canonicalize()?);
    Ok(())
}

#[test]
fn rootless_mode_searches_only_the_entry_directory() -> anyhow::Result<()> {
    let tmp = tempfile::tempdir()?;
    let main = tmp.path().join("standalone").join("main.tpl");
    write(&main, "{}\n");

    let (entrypoint, root, search_path) = discover(&main, &[])?;
    let base = entrypoint.parent().unwrap().to_path_buf();
    assert_eq!(root, base);
    assert_eq!(search_path, vec![base]);
    Ok(())
}

#[test]
fn rootless_mode_keeps_explicit_overrides() -> anyhow::Result<()> {
    let tmp = tempfile::tempdir()?;
    let main = tmp.path().join("standalone").join("main.tpl");
    write(&main, "{}\n");
    let shared = tmp.path().join("shared");
    fs::create_dir_all(&shared)?;

    let (entrypoint, _, search_path) = discover(&main, &[shared.clone()])?;
    assert_eq!(
        search_path,
        vec![
            entrypoint.parent().unwrap().to_path_buf(),
            shared.canonicalize()?
        ]
    );
    Ok(())
}

#[test]
fn missing_input_is_not_found() {
    let tmp = tempfile::tempdir().unwrap();
    match discover(&tmp.path().join("absent.tpl"), &[]) {
        Err(Error::NotFound(_)) => (),
        other => panic!("expected NotFound, got {other:?}"),
    }
}
