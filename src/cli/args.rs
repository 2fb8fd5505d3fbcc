//! Command-line arguments for both binaries
//!
//! The connection and scope flag groups are shared; `manage-collection`
//! adds the delete and upload modes on top.

use crate::collection::{Collection, DEFAULT_COLOR};
use crate::config::{self, ApiConfig, DEFAULT_API_ENDPOINT};
use clap::Parser;
use std::path::PathBuf;

/// Connection flags, with environment-variable defaults
#[derive(Parser, Debug, Clone)]
pub struct ConnectionArgs {
    /// Prisma Cloud Access Key Id or username
    #[arg(
        short = 'u',
        long,
        env = "PRISMA_USERNAME",
        default_value = "",
        hide_env_values = true
    )]
    pub username: String,

    /// Prisma Cloud Secret Key or password
    #[arg(
        short = 'p',
        long,
        env = "PRISMA_PASSWORD",
        default_value = "",
        hide_env_values = true
    )]
    pub password: String,

    /// Prisma Cloud Compute Api Endpoint
    #[arg(
        short = 'e',
        long = "compute-api-endpoint",
        value_name = "URL",
        env = "COMPUTE_API_ENDPOINT",
        default_value = DEFAULT_API_ENDPOINT
    )]
    pub compute_api_endpoint: String,

    /// Skip TLS verification
    #[arg(long = "skip-tls-verify")]
    pub skip_tls_verify: bool,
}

impl ConnectionArgs {
    /// Resolve flags and environment into the runtime configuration
    ///
    /// `SKIP_VERIFY=1` in the environment turns verification off even
    /// without the flag.
    #[must_use]
    pub fn to_config(&self) -> ApiConfig {
        ApiConfig::new(
            &self.compute_api_endpoint,
            &self.username,
            &self.password,
            self.skip_tls_verify || config::skip_verify_from_env(),
        )
    }
}

/// Scope-filter flags shared by the create paths of both binaries
///
/// Every list takes one or more patterns and defaults to the catch-all
/// wildcard.
#[derive(Parser, Debug, Clone, Default)]
pub struct ScopeArgs {
    /// Images for the collection. If empty will catch all
    #[arg(short = 'i', long, value_name = "PATTERN", num_args = 1.., default_value = "*")]
    pub images: Vec<String>,

    /// Hosts for the collection. If empty will catch all
    #[arg(short = 'H', long, value_name = "PATTERN", num_args = 1.., default_value = "*")]
    pub hosts: Vec<String>,

    /// Labels for the collection. If empty will catch all
    #[arg(short = 'l', long, value_name = "PATTERN", num_args = 1.., default_value = "*")]
    pub labels: Vec<String>,

    /// Containers for the collection. If empty will catch all
    #[arg(short = 'c', long, value_name = "PATTERN", num_args = 1.., default_value = "*")]
    pub containers: Vec<String>,

    /// Functions for the collection. If empty will catch all
    #[arg(short = 'f', long, value_name = "PATTERN", num_args = 1.., default_value = "*")]
    pub functions: Vec<String>,

    /// Namespaces for the collection. If empty will catch all
    #[arg(short = 'N', long, value_name = "PATTERN", num_args = 1.., default_value = "*")]
    pub namespaces: Vec<String>,

    /// appIDs for the collection. If empty will catch all
    #[arg(short = 'a', long = "app-ids", value_name = "PATTERN", num_args = 1.., default_value = "*")]
    pub app_ids: Vec<String>,

    /// accountIDs for the collection. If empty will catch all
    #[arg(short = 'A', long = "account-ids", value_name = "PATTERN", num_args = 1.., default_value = "*")]
    pub account_ids: Vec<String>,

    /// codeRepos for the collection. If empty will catch all
    #[arg(short = 'r', long = "code-repos", value_name = "PATTERN", num_args = 1.., default_value = "*")]
    pub code_repos: Vec<String>,

    /// Clusters for the collection. If empty will catch all
    #[arg(short = 'C', long, value_name = "PATTERN", num_args = 1.., default_value = "*")]
    pub clusters: Vec<String>,

    /// Color of the collection
    #[arg(short = 'o', long, value_name = "HEX", default_value = DEFAULT_COLOR)]
    pub color: String,
}

impl ScopeArgs {
    /// Build the collection record these flags describe
    #[must_use]
    pub fn to_collection(&self, name: &str) -> Collection {
        Collection {
            name: name.to_owned(),
            images: self.images.clone(),
            hosts: self.hosts.clone(),
            labels: self.labels.clone(),
            containers: self.containers.clone(),
            functions: self.functions.clone(),
            namespaces: self.namespaces.clone(),
            app_ids: self.app_ids.clone(),
            account_ids: self.account_ids.clone(),
            code_repos: self.code_repos.clone(),
            clusters: self.clusters.clone(),
            color: self.color.clone(),
        }
    }
}

/// Command-line arguments for `create-collection`
#[derive(Parser, Debug, Clone)]
#[command(name = "create-collection")]
#[command(about = "Create or overwrite a single collection in Prisma Cloud Compute")]
#[command(long_about = None)]
#[command(version)]
pub struct CreateArgs {
    /// Name of the collection
    #[arg(short = 'n', long = "collection-name", value_name = "NAME")]
    pub collection_name: String,

    #[command(flatten)]
    pub connection: ConnectionArgs,

    #[command(flatten)]
    pub scope: ScopeArgs,

    /// Overwrite any existing collection with the same name
    #[arg(short = 'O', long)]
    pub overwrite: bool,

    /// Enable verbose logging output
    #[arg(short, long)]
    pub verbose: bool,
}

/// Command-line arguments for `manage-collection`
#[derive(Parser, Debug, Clone)]
#[command(name = "manage-collection")]
#[command(about = "Create, update and delete collections in Prisma Cloud Compute")]
#[command(long_about = None)]
#[command(version)]
pub struct ManageArgs {
    /// Name of the collection
    #[arg(
        short = 'n',
        long = "collection-name",
        value_name = "NAME",
        required_unless_present_any = ["delete_list", "file", "path"]
    )]
    pub collection_name: Option<String>,

    #[command(flatten)]
    pub connection: ConnectionArgs,

    #[command(flatten)]
    pub scope: ScopeArgs,

    /// Overwrite any existing collection with the same name
    #[arg(short = 'O', long, conflicts_with = "delete")]
    pub overwrite: bool,

    /// Delete an existing collection
    #[arg(short = 'd', long)]
    pub delete: bool,

    /// List of collections to be deleted
    #[arg(
        short = 'D',
        long = "delete-list",
        value_name = "NAME",
        num_args = 1..,
        conflicts_with = "delete"
    )]
    pub delete_list: Vec<String>,

    /// Upload a collection from file in json format
    #[arg(short = 'F', long, value_name = "PATH")]
    pub file: Option<PathBuf>,

    /// Bulk upload collections from directory
    #[arg(short = 'P', long, value_name = "DIR", conflicts_with = "file")]
    pub path: Option<PathBuf>,

    /// Enable verbose logging output
    #[arg(short, long)]
    pub verbose: bool,
}
