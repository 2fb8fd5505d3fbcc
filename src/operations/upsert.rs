//! Create-or-overwrite protocol
//!
//! Optimistic create: POST without checking for existence and let the
//! server's uniqueness constraint decide, falling back to a PUT by name
//! only when the caller opted in via overwrite.

use crate::api::ApiClient;
use anyhow::Result;
use serde_json::Value;
use tracing::{info, warn};

/// Result of one create-or-overwrite attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum UpsertOutcome {
    /// The POST succeeded; the collection is new
    Created,
    /// The POST was rejected and the fallback PUT succeeded
    Updated,
    /// The POST was rejected without overwrite, or the fallback PUT was
    /// rejected too
    Failed,
}

impl UpsertOutcome {
    /// Whether the record ended up on the server
    #[must_use]
    #[inline]
    pub const fn succeeded(self) -> bool {
        matches!(self, Self::Created | Self::Updated)
    }
}

/// Create a collection, updating in place on conflict when `overwrite` is
/// set
///
/// Non-200 responses are reported and folded into the outcome so batch
/// callers can keep going.
///
/// # Errors
///
/// Returns an error on transport failure; the caller treats that as fatal.
pub fn upsert_collection(
    client: &ApiClient,
    name: &str,
    record: &Value,
    overwrite: bool,
) -> Result<UpsertOutcome> {
    info!("Trying to create collection {}...", name);
    let response = client.create_collection(record)?;

    if response.is_ok() {
        info!("Collection {} successfully created.", name);
        return Ok(UpsertOutcome::Created);
    }

    warn!(
        "Error while creating collection {}. Error: {}",
        name,
        response.err_message()
    );

    if !overwrite {
        return Ok(UpsertOutcome::Failed);
    }

    info!("Trying to update collection {}...", name);
    let response = client.update_collection(name, record)?;

    if response.is_ok() {
        info!("Collection {} successfully updated.", name);
        return Ok(UpsertOutcome::Updated);
    }

    warn!("Error while updating collection {}.", name);
    warn!("{}", response.body);

    Ok(UpsertOutcome::Failed)
}
