use crate::core::config::HasFixConfig;
use crate::core::errors::FixError;
use crate::core::types::CodeFix;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tokio::fs;

/// Result of applying a fix
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FixResult {
    /// Files that were modified
    pub modified_files: Vec<PathBuf>,
    /// Original content for rollback
    pub backup: Option<FileBackup>,
}

/// Backup of original file content
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileBackup {
    pub file_path: PathBuf,
    pub original_content: String,
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

/// Applies single-line [`CodeFix`] substitutions to files on disk.
///
/// A fix is only written when the target line still holds the code the
/// analysis saw; anything else is rejected without touching the file.
pub struct FixApplicationEngine {
    /// Whether to create backups before applying fixes
    create_backups: bool,
    /// Maximum file size to process (in bytes)
    max_file_size: u64,
}

impl FixApplicationEngine {
    pub fn new() -> Self {
        Self {
            create_backups: true,
            max_file_size: 10 * 1024 * 1024, // 10MB
        }
    }

    pub fn from_config(config: &impl HasFixConfig) -> Self {
        let fixes = config.fix_config();
        Self {
            create_backups: fixes.create_backups,
            max_file_size: fixes.max_file_size_bytes,
        }
    }

    pub fn with_backups(mut self, enabled: bool) -> Self {
        self.create_backups = enabled;
        self
    }

    pub fn with_max_file_size(mut self, bytes: u64) -> Self {
        self.max_file_size = bytes;
        self
    }

    /// Apply a single code fix
    pub async fn apply_code_fix(&self, fix: &CodeFix) -> Result<FixResult, FixError> {
        let path = PathBuf::from(&fix.file);

        // Validate file exists and is not too large
        let metadata = fs::metadata(&path)
            .await
            .map_err(|source| FixError::ReadFailed {
                path: path.clone(),
                source,
            })?;
        if metadata.len() > self.max_file_size {
            return Err(FixError::FileTooLarge {
                path,
                size: metadata.len(),
                limit: self.max_file_size,
            });
        }

        let original_content =
            fs::read_to_string(&path)
                .await
                .map_err(|source| FixError::ReadFailed {
                    path: path.clone(),
                    source,
                })?;

        let new_content = Self::apply_fix_to_content(&path, &original_content, fix)?;

        let backup = self.create_backups.then(|| FileBackup {
            file_path: path.clone(),
            original_content,
            timestamp: chrono::Utc::now(),
        });

        fs::write(&path, new_content)
            .await
            .map_err(|source| FixError::WriteFailed {
                path: path.clone(),
                source,
            })?;

        tracing::info!(file = %path.display(), line = fix.line, "applied code fix");
        Ok(FixResult {
            modified_files: vec![path],
            backup,
        })
    }

    /// Write a backup's original content back to its file
    pub async fn restore(&self, backup: &FileBackup) -> Result<(), FixError> {
        fs::write(&backup.file_path, &backup.original_content)
            .await
            .map_err(|source| FixError::WriteFailed {
                path: backup.file_path.clone(),
                source,
            })?;
        tracing::info!(file = %backup.file_path.display(), "restored file from backup");
        Ok(())
    }

    /// Replace line `fix.line` of `content`, keeping its line ending.
    fn apply_fix_to_content(path: &Path, content: &str, fix: &CodeFix) -> Result<String, FixError> {
        let lines: Vec<&str> = content.split_inclusive('\n').collect();
        let index = (fix.line as usize).checked_sub(1).filter(|i| *i < lines.len());
        let Some(index) = index else {
            return Err(FixError::LineOutOfRange {
                path: path.to_path_buf(),
                line: fix.line,
                total: lines.len(),
            });
        };

        let current = lines[index];
        let (body, ending) = split_line_ending(current);
        if body.trim_end() != fix.old_code.trim_end() {
            return Err(FixError::StaleLine {
                path: path.to_path_buf(),
                line: fix.line,
            });
        }

        let mut result = String::with_capacity(content.len() + fix.new_code.len());
        for (i, line) in lines.iter().enumerate() {
            if i == index {
                result.push_str(&fix.new_code);
                result.push_str(ending);
            } else {
                result.push_str(line);
            }
        }
        Ok(result)
    }
}

impl Default for FixApplicationEngine {
    fn default() -> Self {
        Self::new()
    }
}

fn split_line_ending(line: &str) -> (&str, &str) {
    if let Some(body) = line.strip_suffix("\r\n") {
        (body, "\r\n")
    } else if let Some(body) = line.strip_suffix('\n') {
        (body, "\n")
    } else {
        (line, "")
    }
}
