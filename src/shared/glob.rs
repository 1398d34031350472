//! Glob pattern utilities
//!
//! Expands the paths and patterns given for a drop event into concrete files,
//! and compiles the MIME globs used by accept patterns.

use anyhow::{Context, Result};
use globset::{GlobBuilder, GlobMatcher};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Expand a list of drop arguments (literal paths, directories or glob
/// patterns) into the files they name, in argument order.
///
/// Directories contribute their files one level deep, sorted by name, the way
/// a file picker selection of a folder's contents would arrive. Literal paths
/// that do not exist are an error; a glob that matches nothing is not.
pub fn expand_file_patterns<P: AsRef<Path>>(patterns: &[String], base_dir: P) -> Result<Vec<PathBuf>> {
    let mut valid_paths = Vec::new();
    let base_dir = base_dir.as_ref();

    for pattern in patterns {
        if is_glob_pattern(pattern) {
            let glob_paths = expand_glob_pattern(pattern, base_dir)?;
            if glob_paths.is_empty() {
                tracing::warn!("Pattern '{}' matched no files", pattern);
            }
            valid_paths.extend(glob_paths);
            continue;
        }

        let path = if Path::new(pattern).is_absolute() {
            PathBuf::from(pattern)
        } else {
            base_dir.join(pattern)
        };

        if path.is_file() {
            valid_paths.push(path);
        } else if path.is_dir() {
            valid_paths.extend(list_directory(&path)?);
        } else {
            anyhow::bail!("No such file: {}", path.display());
        }
    }

    Ok(valid_paths)
}

/// Check if a string contains glob pattern characters
pub fn is_glob_pattern(pattern: &str) -> bool {
    pattern.contains('*') || pattern.contains('?') || pattern.contains('[')
}

/// Expand a single glob pattern to matching file paths, sorted.
///
/// The walk starts at the pattern's literal prefix (`shots/` in
/// `shots/*.png`), resolved against `base_dir` unless absolute. `*` never
/// crosses a path separator, and without `**` the walk goes no deeper than the
/// pattern has components.
pub fn expand_glob_pattern<P: AsRef<Path>>(pattern: &str, base_dir: P) -> Result<Vec<PathBuf>> {
    let (prefix, rest) = split_literal_prefix(pattern);
    let root = base_dir.as_ref().join(&prefix);

    let matcher = GlobBuilder::new(&rest)
        .literal_separator(true)
        .build()
        .with_context(|| format!("Invalid glob pattern: {pattern}"))?
        .compile_matcher();

    let mut walker = WalkDir::new(&root).min_depth(1).sort_by_file_name();
    if !rest.contains("**") {
        walker = walker.max_depth(Path::new(&rest).components().count());
    }

    let mut matching_paths = Vec::new();
    for entry in walker {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                tracing::debug!("Skipping unreadable entry while expanding '{}': {}", pattern, e);
                continue;
            }
        };
        if !entry.file_type().is_file() {
            continue;
        }
        let matches = entry
            .path()
            .strip_prefix(&root)
            .map(|rel_path| matcher.is_match(rel_path))
            .unwrap_or(false);
        if matches {
            matching_paths.push(entry.into_path());
        }
    }

    Ok(matching_paths)
}

/// Split a pattern into the leading components without glob characters and
/// the remainder, e.g. `shots/2024/*.png` into `shots/2024` and `*.png`.
fn split_literal_prefix(pattern: &str) -> (PathBuf, String) {
    let mut prefix = PathBuf::new();
    let mut rest = Vec::new();
    for component in Path::new(pattern).components() {
        let text = component.as_os_str().to_string_lossy();
        if rest.is_empty() && !is_glob_pattern(&text) {
            prefix.push(component);
        } else {
            rest.push(text.into_owned());
        }
    }
    (prefix, rest.join("/"))
}

fn list_directory(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for entry in WalkDir::new(dir).min_depth(1).max_depth(1).sort_by_file_name() {
        let entry = entry.with_context(|| format!("Failed to read directory {}", dir.display()))?;
        if entry.file_type().is_file() {
            files.push(entry.into_path());
        }
    }
    Ok(files)
}

/// Compile a MIME type pattern such as `image/*` into a case-insensitive
/// matcher where `*` stays within one segment.
pub fn mime_matcher(pattern: &str) -> Result<GlobMatcher> {
    let glob = GlobBuilder::new(pattern)
        .case_insensitive(true)
        .literal_separator(true)
        .build()
        .with_context(|| format!("Invalid MIME pattern: {pattern}"))?;
    Ok(glob.compile_matcher())
}
