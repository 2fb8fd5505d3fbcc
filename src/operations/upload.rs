//! Collection upload from JSON files
//!
//! A file is the wire body itself; the only local requirement is a `name`
//! field. Files that fail locally are reported and never reach the network.

use crate::api::ApiClient;
use crate::operations::join_or_none;
use crate::operations::upsert::{UpsertOutcome, upsert_collection};
use anyhow::{Context as _, Result};
use serde_json::Value;
use std::fs;
use std::io;
use std::path::Path;
use tracing::{info, warn};

/// Accumulated result of a directory bulk upload
#[derive(Debug, Default)]
pub struct UploadSummary {
    pub succeeded: Vec<String>,
    pub failed: Vec<String>,
}

impl UploadSummary {
    /// Whether every file was uploaded
    #[must_use]
    #[inline]
    pub fn all_succeeded(&self) -> bool {
        self.failed.is_empty()
    }

    /// Print the succeeded / failed report lines
    pub fn report(&self) {
        info!("Succeeded files: {}", join_or_none(&self.succeeded));
        info!("Failed files: {}", join_or_none(&self.failed));
    }
}

/// Upload one collection record from a JSON file
///
/// The parsed document is forwarded to the collections endpoint untouched.
/// An unreadable or unparseable file, or one without a string `name`, fails
/// locally with no network call made.
///
/// # Errors
///
/// Returns an error on transport failure.
pub fn upload_file(client: &ApiClient, path: &Path, overwrite: bool) -> Result<UpsertOutcome> {
    let record = match read_record(path) {
        Ok(record) => record,
        Err(err) => {
            warn!("{:#}", err);
            return Ok(UpsertOutcome::Failed);
        }
    };

    let Some(name) = record.get("name").and_then(Value::as_str).map(str::to_owned) else {
        warn!("{} requires name parameter.", path.display());
        return Ok(UpsertOutcome::Failed);
    };

    upsert_collection(client, &name, &record, overwrite)
}

/// Upload every entry of a directory in sequence, non-recursively
///
/// Entries are processed in file-name order; one file's failure never
/// aborts the remaining files.
///
/// # Errors
///
/// Returns an error when the directory itself cannot be listed, or on
/// transport failure, which aborts the batch.
pub fn upload_directory(client: &ApiClient, dir: &Path, overwrite: bool) -> Result<UploadSummary> {
    let mut entries = fs::read_dir(dir)
        .with_context(|| format!("Failed to read directory {}", dir.display()))?
        .collect::<io::Result<Vec<_>>>()
        .with_context(|| format!("Failed to read directory {}", dir.display()))?;
    entries.sort_by_key(|entry| entry.file_name());

    let mut summary = UploadSummary::default();

    for entry in entries {
        let file_name = entry.file_name().to_string_lossy().into_owned();

        if upload_file(client, &entry.path(), overwrite)?.succeeded() {
            summary.succeeded.push(file_name);
        } else {
            summary.failed.push(file_name);
        }
    }

    Ok(summary)
}

fn read_record(path: &Path) -> Result<Value> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;

    serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse JSON in {}", path.display()))
}
