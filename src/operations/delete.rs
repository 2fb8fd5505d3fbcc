//! Collection deletion

use crate::api::ApiClient;
use crate::operations::join_or_none;
use anyhow::Result;
use tracing::{info, warn};

/// Accumulated result of a batch delete
///
/// Every name is attempted; a failure never stops the remaining names.
#[derive(Debug, Default)]
pub struct DeleteSummary {
    pub deleted: Vec<String>,
    pub not_deleted: Vec<String>,
}

impl DeleteSummary {
    /// Whether every requested name was deleted
    #[must_use]
    #[inline]
    pub fn all_deleted(&self) -> bool {
        self.not_deleted.is_empty()
    }

    /// Print the deleted / not-deleted report lines
    pub fn report(&self) {
        info!("Collections deleted: {}", join_or_none(&self.deleted));
        info!("Collections not deleted: {}", join_or_none(&self.not_deleted));
    }
}

/// Delete one collection by name
///
/// A non-200 response is reported and returned as `false`; the caller
/// decides whether that aborts the invocation.
///
/// # Errors
///
/// Returns an error on transport failure.
pub fn delete_collection(client: &ApiClient, name: &str) -> Result<bool> {
    let response = client.delete_collection(name)?;

    if response.is_ok() {
        info!("Collection {} successfully deleted.", name);
        return Ok(true);
    }

    warn!(
        "Collection {} failed to be deleted. Error: {}",
        name,
        response.err_message()
    );

    Ok(false)
}

/// Delete every name in the list in sequence, accumulating a summary
///
/// # Errors
///
/// Returns an error on transport failure, which aborts the batch.
pub fn delete_collections(client: &ApiClient, names: &[String]) -> Result<DeleteSummary> {
    let mut summary = DeleteSummary::default();

    for name in names {
        if delete_collection(client, name)? {
            summary.deleted.push(name.clone());
        } else {
            summary.not_deleted.push(name.clone());
        }
    }

    Ok(summary)
}
