//! Collection domain model
//!
//! A collection is a named filter scope the console uses to limit which
//! workloads a policy or scan applies to. The struct below mirrors the
//! collections endpoint wire format field for field.

use serde::{Deserialize, Serialize};

/// Wildcard pattern matching every resource in a scope
pub const MATCH_ALL: &str = "*";

/// Default collection color (black)
pub const DEFAULT_COLOR: &str = "#000000";

/// A collection record as the compute API exchanges it
///
/// Scope lists left out of a JSON document default to the catch-all
/// wildcard; `name` is the only required field. Rust-cased fields rename to
/// the exact wire spelling (`appIDs`, `accountIDs`, `codeRepos`).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Collection {
    pub name: String,

    #[serde(default = "match_all")]
    pub images: Vec<String>,

    #[serde(default = "match_all")]
    pub hosts: Vec<String>,

    #[serde(default = "match_all")]
    pub labels: Vec<String>,

    #[serde(default = "match_all")]
    pub containers: Vec<String>,

    #[serde(default = "match_all")]
    pub functions: Vec<String>,

    #[serde(default = "match_all")]
    pub namespaces: Vec<String>,

    #[serde(rename = "appIDs", default = "match_all")]
    pub app_ids: Vec<String>,

    #[serde(rename = "accountIDs", default = "match_all")]
    pub account_ids: Vec<String>,

    #[serde(rename = "codeRepos", default = "match_all")]
    pub code_repos: Vec<String>,

    #[serde(default = "match_all")]
    pub clusters: Vec<String>,

    #[serde(default = "default_color")]
    pub color: String,
}

fn match_all() -> Vec<String> {
    vec![MATCH_ALL.to_owned()]
}

fn default_color() -> String {
    DEFAULT_COLOR.to_owned()
}

impl Collection {
    /// Create a collection matching everything, in the given name
    #[must_use]
    pub fn catch_all(name: &str) -> Self {
        Self {
            name: name.to_owned(),
            images: match_all(),
            hosts: match_all(),
            labels: match_all(),
            containers: match_all(),
            functions: match_all(),
            namespaces: match_all(),
            app_ids: match_all(),
            account_ids: match_all(),
            code_repos: match_all(),
            clusters: match_all(),
            color: default_color(),
        }
    }
}
