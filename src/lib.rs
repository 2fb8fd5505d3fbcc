//! # cwp-collections
//!
//! CLI tools for managing collections in Prisma Cloud Compute. A collection
//! is a named filter scope (images, hosts, labels, containers, functions,
//! namespaces, appIDs, accountIDs, codeRepos, clusters) that limits which
//! workloads a policy or scan applies to.
//!
//! ## Binaries
//! - `create-collection` builds one collection from flags and creates it,
//!   optionally overwriting an existing one of the same name.
//! - `manage-collection` additionally deletes single collections or lists of
//!   them, and uploads collections from a JSON file or a whole directory.
//!
//! ## Usage
//!
//! **Create a catch-all collection:**
//! ```sh
//! create-collection -n my-collection -u access-key -p secret-key \
//!     -e https://us-east1.cloud.twistlock.com/us-1-23456789
//! ```
//!
//! **Overwrite, delete, bulk upload:**
//! ```sh
//! manage-collection -n my-collection --overwrite -i "nginx:*"
//! manage-collection -d -n my-collection
//! manage-collection -P ./collections --overwrite
//! ```
//!
//! Credentials and the endpoint may also come from `PRISMA_USERNAME`,
//! `PRISMA_PASSWORD`, `COMPUTE_API_ENDPOINT` and `SKIP_VERIFY`, loaded from
//! a local `.env` file when one exists.

pub mod api;
pub mod cli;
pub mod collection;
pub mod config;
pub mod error;
pub mod operations;

use anyhow::{Context as _, Result};
use api::ApiClient;
use cli::{CreateArgs, ManageArgs};
use error::CollectionsError;
use operations::{
    delete_collection, delete_collections, upload_directory, upload_file, upsert_collection,
};
use tracing::info;

/// Entry point for the `create-collection` binary
///
/// # Errors
///
/// Returns an error when authentication fails, the network is unreachable,
/// or the collection was neither created nor updated.
pub fn run_create(args: &CreateArgs) -> Result<()> {
    let config = args.connection.to_config();
    let mut client = ApiClient::new(&config)?;
    client.authenticate(&config.username, &config.password)?;

    let collection = args.scope.to_collection(&args.collection_name);
    let record =
        serde_json::to_value(&collection).context("Failed to encode collection record")?;

    if !upsert_collection(&client, &args.collection_name, &record, args.overwrite)?.succeeded() {
        return Err(CollectionsError::api(format!(
            "collection {} was not created",
            args.collection_name
        ))
        .into());
    }

    Ok(())
}

/// Entry point for the `manage-collection` binary
///
/// Dispatches to exactly one mode: delete, bulk delete, file upload,
/// directory upload, or create-from-flags. Batch modes report a summary and
/// never fail the invocation over individual items; the single-item modes
/// do.
///
/// # Errors
///
/// Returns an error when authentication fails, the network is unreachable,
/// or a single-item create or delete did not go through.
pub fn run_manage(args: &ManageArgs) -> Result<()> {
    let config = args.connection.to_config();
    let mut client = ApiClient::new(&config)?;
    client.authenticate(&config.username, &config.password)?;

    if args.delete {
        let Some(name) = args.collection_name.as_deref() else {
            return Err(
                CollectionsError::input("--collection-name is required with --delete").into(),
            );
        };

        if !delete_collection(&client, name)? {
            return Err(
                CollectionsError::api(format!("collection {name} was not deleted")).into(),
            );
        }

        return Ok(());
    }

    if !args.delete_list.is_empty() {
        let summary = delete_collections(&client, &args.delete_list)?;
        summary.report();
        return Ok(());
    }

    if let Some(file) = args.file.as_deref() {
        if upload_file(&client, file, args.overwrite)?.succeeded() {
            info!("{} successfully uploaded", file.display());
        }

        return Ok(());
    }

    if let Some(dir) = args.path.as_deref() {
        let summary = upload_directory(&client, dir, args.overwrite)?;
        summary.report();
        return Ok(());
    }

    let Some(name) = args.collection_name.as_deref() else {
        return Err(CollectionsError::input("--collection-name is required").into());
    };

    let collection = args.scope.to_collection(name);
    let record =
        serde_json::to_value(&collection).context("Failed to encode collection record")?;

    if !upsert_collection(&client, name, &record, args.overwrite)?.succeeded() {
        return Err(CollectionsError::api(format!("collection {name} was not created")).into());
    }

    Ok(())
}
