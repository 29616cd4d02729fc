use anyhow::{Context, Result};
use glob::Pattern;
use std::path::{Path, PathBuf};
use tokio::fs;
use walkdir::WalkDir;

/// Directories never descended into when collecting sources
const SKIPPED_DIRS: &[&str] = &["node_modules", ".git", "dist", "build", "coverage", "target"];

/// Extensions collected when no include globs are given
const DEFAULT_EXTENSIONS: &[&str] = &["js", "jsx", "mjs", "cjs", "ts", "tsx"];

/// Common file operation utilities with standardized error handling
pub struct FileUtils;

impl FileUtils {
    /// Read file with context information for better error messages
    pub async fn read_with_context(path: &Path, context: &str) -> Result<String> {
        fs::read_to_string(path)
            .await
            .with_context(|| format!("Failed to read {}: {}", context, path.display()))
    }

    /// Recursively collect source files under `roots`, sorted and deduplicated.
    ///
    /// A file matches when any `include` glob matches its name or its full
    /// path. With no globs, the JS/TS extension set applies. Roots that are
    /// files are taken as-is.
    pub fn collect_sources(roots: &[PathBuf], include: &[String]) -> Result<Vec<PathBuf>> {
        let patterns = include
            .iter()
            .map(|glob| Pattern::new(glob).with_context(|| format!("Invalid include glob: {glob}")))
            .collect::<Result<Vec<_>>>()?;

        let mut files = Vec::new();
        for root in roots {
            if root.is_file() {
                files.push(root.clone());
                continue;
            }
            if !root.exists() {
                anyhow::bail!("Path does not exist: {}", root.display());
            }

            let walker = WalkDir::new(root)
                .follow_links(true)
                .into_iter()
                .filter_entry(|entry| {
                    entry.depth() == 0
                        || !entry.file_type().is_dir()
                        || !SKIPPED_DIRS.iter().any(|dir| entry.file_name() == *dir)
                })
                .filter_map(|e| e.ok())
                .filter(|e| e.file_type().is_file());

            for entry in walker {
                if is_included(entry.path(), &patterns) {
                    files.push(entry.into_path());
                }
            }
        }

        files.sort();
        files.dedup();
        Ok(files)
    }
}

fn is_included(path: &Path, patterns: &[Pattern]) -> bool {
    if patterns.is_empty() {
        return path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| DEFAULT_EXTENSIONS.contains(&ext));
    }

    let name = path.file_name().and_then(|n| n.to_str()).unwrap_or_default();
    patterns
        .iter()
        .any(|pattern| pattern.matches(name) || pattern.matches_path(path))
}
